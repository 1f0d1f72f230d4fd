//! # Storefront Client - Library Root
//!
//! Client-side account and catalogue logic for the storefront REST backend.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Sign-in / sign-up forms**: field state, synchronous validation,
//!   advisory password strength and a per-form submission state machine
//! - **Session store**: access/refresh tokens and cached user fields in a
//!   local-storage style key/value store (memory or JSON file)
//! - **REST client**: auth, products and image upload, with backend error
//!   payloads decoded once into a typed error
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              storefront (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  async-channel - Task to main loop events              │
//! │  parking_lot   - State and storage locks               │
//! │  tracing       - Structured logging                    │
//! │  clap          - Command-line front end                │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP/JSON
//!          ▼
//! ┌─────────────────────────┐
//! │  Storefront backend     │
//! │  /api/auth/*            │
//! │  /api/products/*        │
//! │  /api/upload-image/     │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application state, form state machines, events and handlers
//! - **config**: Client configuration from the environment
//! - **core**: Error types and the `ApiService` trait
//! - **debug**: Logging initialization and trace ids
//! - **services**: Backend HTTP client (`services::api`)
//! - **session**: Session object and its storage backends
//! - **utils**: Field validators
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   └── app (state, forms, events, handlers)
//!       ├── core::service::ApiService ◀── services::api::ApiClient
//!       ├── session::Session ◀────────────┘
//!       └── utils::validation
//! ```
//!
//! ## Core Concepts
//!
//! ### Session Injection
//!
//! One [`session::Session`] is created at start-up and shared by the API
//! client (which writes it on login and clears it on a 401) and the
//! application state (which reads the cached user). There is no global
//! session state.
//!
//! ### Event-Driven Architecture
//!
//! Submit handlers validate synchronously, spawn the network call on Tokio
//! and return. Results arrive on an `async_channel` and are applied by
//! [`app::App::on_tick`] or [`app::App::process_next_event`].
//!
//! ### Error Handling
//!
//! All fallible operations return `Result`. Backend failures are
//! [`core::ApiError`] variants; everything else rolls up into
//! [`core::AppError`].

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod session;
pub mod utils;
