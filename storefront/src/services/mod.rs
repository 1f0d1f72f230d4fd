//! # Services Module
//!
//! External service integrations for the storefront client.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! └── api/   - Backend HTTP API client
//!              (authentication, products, image upload)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │              Storefront App              │
//! │                                          │
//! │   ┌──────────────┐     ┌─────────────┐   │
//! │   │  ApiClient   │────▶│   Session   │   │
//! │   │  (api/)      │     │  (storage)  │   │
//! │   └──────┬───────┘     └─────────────┘   │
//! └──────────┼───────────────────────────────┘
//!            │ HTTP/JSON
//!            ▼
//! ┌──────────────────────────┐
//! │  Storefront REST backend │
//! │                          │
//! │  /api/auth/*             │
//! │  /api/products/*         │
//! │  /api/upload-image/      │
//! └──────────────────────────┘
//! ```
//!
//! ## Thread Safety
//!
//! `ApiClient` wraps a `reqwest::Client` (internally pooled and thread-safe)
//! and a cloneable `Session`; it can be shared behind an `Arc` across tasks.

pub mod api;
