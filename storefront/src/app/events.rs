//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use shared::{AuthResponse, UserInfo};

use crate::core::error::ApiError;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed
    LoginResult(Result<AuthResponse, ApiError>),
    /// Signup completed
    SignupResult(Result<AuthResponse, ApiError>),
    /// Profile refresh completed
    ProfileResult(Result<UserInfo, ApiError>),
    /// Loading state
    Loading(String),
}
