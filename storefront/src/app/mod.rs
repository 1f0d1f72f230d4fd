//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates user actions, async network calls and
//! application state.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Driver (CLI / UI loop)                  │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drains pending events                 │   │
//! │  │  - handle_event() - applies async results            │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - forms, session, API, current user                 │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Spawned Tokio tasks                            │
//! │  - login / signup / profile requests via ApiService         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - **[`App`]**: Orchestrator with event handling
//! - **[`AppState`]**: Shared application state (see [`state`] module)
//! - **[`AppEvent`]**: Async task results (see [`events`] module)
//! - **[`forms`]**: Sign-in and sign-up state machines
//!
//! ## Concurrency
//!
//! A superseded request is never cancelled; the last response to arrive
//! wins. Session writes are idempotent so this is safe.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storefront::app::{App, Screen};
//! use storefront::services::api::ApiClient;
//! use storefront::session::Session;
//!
//! # async fn run() {
//! let session = Session::in_memory();
//! let api = Arc::new(ApiClient::with_base_url("http://localhost:8000/api", session.clone()));
//! let mut app = App::new(session, api);
//!
//! {
//!     let mut state = app.state.write();
//!     state.login.set_email("user@test.com");
//!     state.login.set_password("secret");
//! }
//! app.handle_login_submit();
//!
//! while app.state.read().login.is_submitting() {
//!     app.process_next_event().await;
//! }
//! assert_eq!(app.state.read().current_screen, Screen::Home);
//! # }
//! ```

pub mod forms;
mod event_handler;
mod events;
mod handlers;
mod state;

pub use events::AppEvent;
pub use forms::{FormErrors, FormField, FormPhase, LoginField, LoginForm, SignupField, SignupForm};
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::config::ClientConfig;
use crate::core::service::ApiService;
use crate::services::api::ApiClient;
use crate::session::Session;

/// Main application orchestrator.
///
/// Holds the shared state and the event channel that spawned tasks report
/// back on.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for the duration of a read or update only.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    ///
    /// Polled in `on_tick()` using `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into each spawned task.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create an application around an injected session and API.
    ///
    /// Starts on [`Screen::Home`] when the session already holds a user,
    /// otherwise on [`Screen::Login`].
    pub fn new(session: Session, api_client: Arc<dyn ApiService>) -> Self {
        let state = AppState::new(session, api_client);
        let (event_tx, event_rx) = unbounded();

        tracing::info!(
            screen = ?state.current_screen,
            "App state initialized"
        );

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        }
    }

    /// Build the production stack: file-backed session and HTTP client.
    pub fn from_config(config: &ClientConfig) -> Self {
        let session = Session::from_file(&config.session_file);
        let api_client = Arc::new(ApiClient::new(config, session.clone()));
        Self::new(session, api_client)
    }

    /// Apply every event already delivered. Never blocks.
    ///
    /// Returns the number of events processed.
    pub fn on_tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }

        if processed > 0 {
            tracing::debug!(events_processed = processed, "on_tick: processed events");
        }
        processed
    }

    /// Wait for the next event and apply it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn process_next_event(&mut self) -> bool {
        match self.event_rx.recv().await {
            Ok(event) => {
                self.handle_event(event);
                true
            }
            Err(_) => false,
        }
    }

    /// Apply one event. Delegates to the event_handler module.
    pub fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // ========== Action Methods - Delegating to Handlers ==========

    /// Submit the sign-in form
    pub fn handle_login_submit(&mut self) {
        handlers::auth::handle_login_submit(self.state.clone(), self.event_tx.clone());
    }

    /// Submit the sign-up form
    pub fn handle_signup_submit(&mut self) {
        handlers::auth::handle_signup_submit(self.state.clone(), self.event_tx.clone());
    }

    /// Re-fetch the signed-in user's profile
    pub fn handle_profile_refresh(&mut self) {
        handlers::auth::handle_profile_refresh(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_logout(&mut self) {
        handlers::auth::handle_logout(self.state.clone());
    }

    /// Switch to login form
    pub fn handle_switch_to_login(&mut self) {
        handlers::auth::handle_switch_to_login(self.state.clone());
    }

    /// Switch to signup form
    pub fn handle_switch_to_signup(&mut self) {
        handlers::auth::handle_switch_to_signup(self.state.clone());
    }
}
