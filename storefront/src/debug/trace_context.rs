//! Trace ID system for correlating operations across async boundaries
//!
//! Each user action (a form submit, a profile refresh) gets a fresh trace id.
//! The id is carried on a `tracing` span that instruments the spawned task,
//! so every log line the task emits, including those from the API client,
//! carries the same `trace_id` field regardless of which worker thread runs
//! it.

use std::future::Future;

use tracing::Instrument;
use uuid::Uuid;

/// Generate a new trace ID
pub fn new_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span for one user action
pub fn action_span(action: &'static str, trace_id: &str) -> tracing::Span {
    tracing::info_span!("action", action, trace_id = %trace_id)
}

/// Run `f` inside a span carrying a new trace ID
pub async fn with_trace_id_async<F, Fut, R>(action: &'static str, f: F) -> R
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = R>,
{
    let trace_id = new_trace_id();
    let span = action_span(action, &trace_id);
    let result = f(trace_id.clone()).instrument(span).await;
    tracing::debug!(trace_id = %trace_id, action, "Trace context completed");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_ids_are_unique_uuids() {
        let a = new_trace_id();
        let b = new_trace_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[tokio::test]
    async fn test_with_trace_id_async_passes_id() {
        let (seen, result) = with_trace_id_async("test", |id| async move { (id, 42) }).await;
        assert!(Uuid::parse_str(&seen).is_ok());
        assert_eq!(result, 42);
    }
}
