//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Error types (`ApiError`, `AppError`, `Result<T>`)
//! - **[`service`]**: Service trait for dependency injection (`ApiService`)
//!
//! ## Dependency Injection
//!
//! The application state holds the API as a trait object:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storefront::core::service::ApiService;
//! use storefront::services::api::ApiClient;
//! use storefront::session::Session;
//!
//! let session = Session::in_memory();
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::with_base_url("http://localhost:8000/api", session));
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, AppError, Result};
pub use service::ApiService;
