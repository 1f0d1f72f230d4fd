//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the storefront client and the backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Signup, login, token refresh and user DTOs
//!   - **[`dto::product`]**: Product catalogue DTOs
//!   - **[`dto::upload`]**: Image upload DTOs
//! - **[`utils`]**: Shared serde helpers and display utilities
//!   - **[`utils::compose_full_name`]**: Build a display name from first/last name
//!   - **[`utils::decimal`]**: Accept decimals sent as JSON numbers or strings
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case**, matching the backend serializers
//! - The few camelCase fields the backend emits (`inStock`, `userName`) are renamed explicitly
//! - Optional fields are omitted from JSON when `None`
//!
//! ## Usage in the Client
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, AuthResponse};
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let request = LoginRequest {
//!     email: "alice@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: AuthResponse = reqwest::Client::new()
//!     .post("http://localhost:8000/api/auth/login/")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//!
//! println!("Signed in as {}", response.user.email);
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
