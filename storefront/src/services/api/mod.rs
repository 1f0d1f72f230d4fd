//! # Backend API Client Module
//!
//! HTTP client for the storefront REST backend. Handles authentication,
//! the product catalogue and image upload.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - ApiClient struct, shared request/response helpers
//! ├── auth.rs      - signup, login, profile, token refresh, logout
//! ├── products.rs  - product list, get, create, update, delete
//! ├── images.rs    - image upload (multipart or base64 JSON)
//! └── errors.rs    - error payload normalization and decoding
//! ```
//!
//! ## Endpoints
//!
//! All paths are relative to the configured base URL
//! (default `http://localhost:8000/api`):
//!
//! | Operation | Request | Auth |
//! |---|---|---|
//! | signup | `POST auth/signup/` | none |
//! | login | `POST auth/login/` | none |
//! | profile | `GET auth/profile/` | bearer required |
//! | refresh | `POST auth/token/refresh/` | refresh token in body |
//! | products | `GET products/`, `GET products/{id}/` | none |
//! | product writes | `POST products/`, `PUT/DELETE products/{id}/` | bearer if signed in |
//! | upload | `POST upload-image/` | none |
//!
//! ## Error Handling
//!
//! Every function returns `Result<T, ApiError>`. Non-2xx bodies are decoded
//! once by [`errors::decode_error`]; see [`crate::core::error`] for the
//! variants.

pub mod auth;
pub mod client;
pub mod errors;
pub mod images;
pub mod products;

pub use client::ApiClient;
pub use errors::{decode_error, normalize_error_payload, NormalizedError};
pub use images::{data_url, ImageUpload};
