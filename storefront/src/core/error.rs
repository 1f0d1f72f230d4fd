//! # Common Error Types
//!
//! Consolidated error handling for the storefront client.
//!
//! Two layers of errors exist:
//!
//! - [`ApiError`]: the backend's error shapes decoded once at the HTTP
//!   boundary into a tagged variant. Callers branch on the variant instead of
//!   sniffing JSON.
//! - [`AppError`]: application-wide error covering API, session storage,
//!   configuration, validation and state failures.
//!
//! ## Error Categories
//!
//! | Variant | Meaning | Recovery |
//! |---|---|---|
//! | `ApiError::FieldErrors` | backend rejected named inputs | fix the field, resubmit |
//! | `ApiError::General` | backend reported a form-level error | resubmit |
//! | `ApiError::NotFound` | resource does not exist | none |
//! | `ApiError::SessionExpired` | 401 or failed refresh, session already cleared | sign in again |
//! | `ApiError::Transport` | network failure or non-JSON response | retry by hand |
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use storefront::core::error::ApiError;
//!
//! fn describe(err: &ApiError) -> String {
//!     match err {
//!         ApiError::NotFound(_) => "That product no longer exists".to_string(),
//!         ApiError::SessionExpired { .. } => "Please sign in again".to_string(),
//!         other => other.to_string(),
//!     }
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::config::ConfigError;
use crate::session::StorageError;

/// Messages per flagged field, in the order the backend sent the fields.
pub type FieldMessages = Vec<(String, Vec<String>)>;

/// Backend failure decoded into one of the storefront's error shapes.
///
/// `Display` renders the normalized, user-facing message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The backend rejected one or more named fields.
    ///
    /// `fields` lists each field with its messages, both in payload order;
    /// `message` is the normalized multi-line summary.
    #[error("{message}")]
    FieldErrors {
        message: String,
        fields: FieldMessages,
        status: u16,
        payload: Value,
    },

    /// A form-level error (`error`, `message`, `detail`, `non_field_errors`
    /// or an unrecognised body).
    #[error("{message}")]
    General {
        message: String,
        status: u16,
        payload: Value,
    },

    /// The requested resource does not exist (HTTP 404 on single-resource
    /// endpoints).
    #[error("{0}")]
    NotFound(String),

    /// The session is no longer valid. After a 401 or a rejected refresh the
    /// stored session has already been cleared; if clearing fails the caller
    /// gets [`ApiError::Transport`] instead.
    #[error("{message}")]
    SessionExpired { message: String },

    /// Network failure, or a response that could not be parsed.
    #[error("{message}")]
    Transport { message: String, status: Option<u16> },
}

impl ApiError {
    /// Build a transport error without a status (network failures).
    pub fn transport(message: impl Into<String>) -> Self {
        ApiError::Transport {
            message: message.into(),
            status: None,
        }
    }

    /// Build a session-expired error.
    pub fn session_expired(message: impl Into<String>) -> Self {
        ApiError::SessionExpired {
            message: message.into(),
        }
    }

    /// HTTP status that produced the error, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::FieldErrors { status, .. } | ApiError::General { status, .. } => Some(*status),
            ApiError::NotFound(_) => Some(404),
            ApiError::SessionExpired { .. } => None,
            ApiError::Transport { status, .. } => *status,
        }
    }

    /// Original JSON payload returned by the backend, if any.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ApiError::FieldErrors { payload, .. } | ApiError::General { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// First message reported for `field`, if the backend flagged it.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self {
            ApiError::FieldErrors { fields, .. } => fields
                .iter()
                .find(|(name, _)| name == field)
                .and_then(|(_, messages)| messages.first())
                .map(String::as_str),
            _ => None,
        }
    }

    /// The payload's top-level `error` string, if present.
    pub fn general_error(&self) -> Option<&str> {
        self.payload()
            .and_then(|payload| payload.get("error"))
            .and_then(Value::as_str)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired { .. })
    }
}

/// Application-wide error type covering all error scenarios in the client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Session storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Application state management error.
    ///
    /// Used for invalid transitions, e.g. submitting a form that is already
    /// in flight.
    #[error("State error: {0}")]
    State(String),

    /// Input validation error.
    ///
    /// Carries the first validation message when a caller needs a single
    /// line (the command-line front end); forms keep the full per-field map.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// ```rust
/// use storefront::core::error::Result;
///
/// fn operation() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport {
            message: format!("Network error: {}", err),
            status: err.status().map(|status| status.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_uses_normalized_message() {
        let err = ApiError::General {
            message: "Invalid credentials".to_string(),
            status: 401,
            payload: json!({ "error": "Invalid credentials" }),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.general_error(), Some("Invalid credentials"));
    }

    #[test]
    fn test_field_error_returns_first_message() {
        let fields = vec![(
            "email".to_string(),
            vec!["Already taken".to_string(), "Blocked domain".to_string()],
        )];
        let err = ApiError::FieldErrors {
            message: "email: Already taken, Blocked domain".to_string(),
            fields,
            status: 400,
            payload: json!({ "email": ["Already taken", "Blocked domain"] }),
        };

        assert_eq!(err.field_error("email"), Some("Already taken"));
        assert_eq!(err.field_error("password"), None);
        assert_eq!(err.general_error(), None);
    }

    #[test]
    fn test_variant_predicates() {
        assert!(ApiError::NotFound("Product not found".to_string()).is_not_found());
        assert!(ApiError::session_expired("gone").is_session_expired());
        assert_eq!(ApiError::transport("boom").status(), None);
        assert_eq!(ApiError::NotFound("x".to_string()).status(), Some(404));
    }

    #[test]
    fn test_app_error_wraps_api_error_transparently() {
        let err: AppError = ApiError::NotFound("Product not found".to_string()).into();
        assert_eq!(err.to_string(), "Product not found");

        let err = AppError::Validation("Email is required".to_string());
        assert_eq!(err.to_string(), "Validation error: Email is required");
    }
}
