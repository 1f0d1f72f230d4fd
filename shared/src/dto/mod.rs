//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the storefront client and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Signup, login, profile and token refresh DTOs
//! - [`product`] - Products, reviews, sub-descriptions and partial updates
//! - [`upload`] - Image upload request/response
//!
//! ## Example JSON Communication
//!
//! ### Request/Response Pair
//!
//! ```text
//! POST /api/auth/login/
//! Content-Type: application/json
//!
//! {
//!   "email": "alice@example.com",
//!   "password": "secret1"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "message": "Login successful",
//!   "user": {
//!     "id": 1,
//!     "email": "alice@example.com",
//!     "first_name": "Alice",
//!     "last_name": "Smith",
//!     "date_joined": "2024-01-01T00:00:00Z"
//!   },
//!   "tokens": {
//!     "access": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!     "refresh": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//!   }
//! }
//! ```

pub mod auth;
pub mod product;
pub mod upload;

pub use auth::*;
pub use product::*;
pub use upload::*;
