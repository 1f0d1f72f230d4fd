//! # Error Payload Decoding
//!
//! The backend reports failures in several JSON shapes:
//!
//! ```text
//! {"error": "Invalid credentials"}                 general error
//! {"detail": "Given token not valid"}              framework error
//! {"email": ["user with this email already exists."]}  per-field errors
//! {"non_field_errors": ["..."]}                    form-level list
//! ```
//!
//! [`decode_error`] turns a non-2xx response body into an [`ApiError`] once,
//! at the HTTP boundary. [`normalize_error_payload`] builds the user-facing
//! message.

use serde_json::{Map, Value};

use crate::core::error::{ApiError, FieldMessages};

/// Keys that carry form-level messages rather than field errors.
const GENERAL_KEYS: [&str; 4] = ["error", "message", "detail", "non_field_errors"];

/// A normalized error payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedError {
    /// User-facing message, one line per flagged field.
    pub message: String,
    /// Messages per field, in payload order.
    pub fields: FieldMessages,
}

impl NormalizedError {
    /// Messages reported for `field`.
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }
}

/// Normalize any JSON error payload into a readable message.
///
/// Field entries render as `field: message` lines (lists joined with `, `).
/// Without field entries the general keys are used in order `error`,
/// `message`, `detail`, `non_field_errors`; failing that, the pretty-printed
/// payload.
pub fn normalize_error_payload(payload: &Value) -> NormalizedError {
    match payload {
        Value::Object(object) => normalize_object(object),
        Value::String(message) => NormalizedError {
            message: message.clone(),
            fields: Vec::new(),
        },
        other => NormalizedError {
            message: other.to_string(),
            fields: Vec::new(),
        },
    }
}

fn normalize_object(object: &Map<String, Value>) -> NormalizedError {
    let mut lines = Vec::new();
    let mut fields = Vec::new();

    for (field, value) in object {
        if GENERAL_KEYS.contains(&field.as_str()) {
            continue;
        }

        let messages: Vec<String> = match value {
            Value::Array(items) => items.iter().map(render_item).collect(),
            Value::String(message) => vec![message.clone()],
            Value::Object(_) => vec![value.to_string()],
            // numbers, booleans and null carry no message
            _ => continue,
        };

        lines.push(format!("{}: {}", field, messages.join(", ")));
        fields.push((field.clone(), messages));
    }

    let message = if lines.is_empty() {
        general_message(object)
    } else {
        lines.join("\n")
    };

    NormalizedError { message, fields }
}

fn general_message(object: &Map<String, Value>) -> String {
    match object.get("error") {
        Some(Value::String(error)) => return error.clone(),
        Some(error @ Value::Object(_)) => return pretty(error),
        _ => {}
    }

    for key in ["message", "detail"] {
        if let Some(Value::String(message)) = object.get(key) {
            return message.clone();
        }
    }

    match object.get("non_field_errors") {
        Some(Value::Array(items)) => items.iter().map(render_item).collect::<Vec<_>>().join(", "),
        Some(Value::String(message)) => message.clone(),
        _ => pretty(&Value::Object(object.clone())),
    }
}

fn render_item(item: &Value) -> String {
    match item {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Decode a non-2xx response body into an [`ApiError`].
///
/// JSON bodies become [`ApiError::FieldErrors`] when any field was flagged,
/// otherwise [`ApiError::General`]. Non-JSON bodies become a transport error
/// carrying the raw text.
pub fn decode_error(status: u16, body: &str) -> ApiError {
    let payload: Value = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(_) => {
            return ApiError::Transport {
                message: format!("Server error ({}): {}", status, body.trim()),
                status: Some(status),
            }
        }
    };

    let NormalizedError { message, fields } = normalize_error_payload(&payload);

    if fields.is_empty() {
        ApiError::General {
            message,
            status,
            payload,
        }
    } else {
        ApiError::FieldErrors {
            message,
            fields,
            status,
            payload,
        }
    }
}
