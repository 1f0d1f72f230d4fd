//! # Logging and Tracing Infrastructure
//!
//! File-based structured logging for the storefront client.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/storefront.log` (daily rotation)
//! - **Stderr mirror**: Optional, for the command-line front end
//! - **Trace IDs**: One id per user action, attached to every log line of
//!   the task that serves it
//! - **Panic logging**: Panics are recorded with their location
//!
//! ## Usage
//!
//! ```rust,no_run
//! use storefront::debug::{self, LogConfig};
//!
//! let _guard = debug::init(&LogConfig::from_env());
//!
//! tracing::info!(endpoint = "auth/login/", duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `storefront=info,warn`)
//! - `STOREFRONT_LOG_DIR`: Log directory (default `logs`)
//! - `STOREFRONT_LOG_STDERR`: Also log to stderr (1=on)

pub mod config;
pub mod logger;
pub mod trace_context;

pub use config::LogConfig;
pub use logger::init;
pub use trace_context::{action_span, new_trace_id, with_trace_id_async};
