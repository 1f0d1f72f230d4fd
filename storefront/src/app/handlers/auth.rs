//! # Authentication Handlers
//!
//! Handlers for login, signup, logout and profile refresh.
//!
//! Submit handlers validate synchronously under the state lock, release it,
//! then spawn the network call. Results come back as [`AppEvent`]s.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::forms::{LoginForm, SignupForm};
use crate::app::state::{AppState, Screen};
use crate::debug::trace_context::with_trace_id_async;

/// Handle login form submit
///
/// Internal handler function - use [`crate::app::App::handle_login_submit`] instead.
pub(crate) fn handle_login_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (request, api_client) = {
        let mut state = state.write();
        match state.login.begin_submit() {
            Ok(request) => (request, state.api_client.clone()),
            Err(e) => {
                tracing::debug!(error = %e, "Login not submitted");
                return;
            }
        }
    };

    tokio::spawn(with_trace_id_async("login", move |_trace_id| async move {
        let _ = event_tx.send(AppEvent::Loading("Signing in...".to_string())).await;
        let result = api_client.login(request).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    }));
}

/// Handle signup form submit
///
/// Internal handler function - use [`crate::app::App::handle_signup_submit`] instead.
pub(crate) fn handle_signup_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (request, api_client) = {
        let mut state = state.write();
        match state.signup.begin_submit() {
            Ok(request) => (request, state.api_client.clone()),
            Err(e) => {
                tracing::debug!(error = %e, "Signup not submitted");
                return;
            }
        }
    };

    tokio::spawn(with_trace_id_async("signup", move |_trace_id| async move {
        let _ = event_tx
            .send(AppEvent::Loading("Creating account...".to_string()))
            .await;
        let result = api_client.signup(request).await;
        let _ = event_tx.send(AppEvent::SignupResult(result)).await;
    }));
}

/// Re-fetch the signed-in user's profile
pub(crate) fn handle_profile_refresh(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = state.read().api_client.clone();

    tokio::spawn(with_trace_id_async("profile", move |_trace_id| async move {
        let result = api_client.get_user_profile().await;
        let _ = event_tx.send(AppEvent::ProfileResult(result)).await;
    }));
}

/// Clear the session and return to the sign-in form
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.api_client.logout();
    // The injected API may not own this session; clearing twice is harmless
    if let Err(e) = state.session.clear() {
        tracing::error!(error = %e, "Failed to clear session");
    }
    state.current_user = None;
    state.loading = None;
    let remembered = state.session.remembered_email();
    state.login = LoginForm::with_remembered_email(remembered);
    state.current_screen = Screen::Login;
    tracing::info!("User logged out");
}

/// Switch to login form
///
/// Internal handler function - use [`crate::app::App::handle_switch_to_login`] instead.
pub(crate) fn handle_switch_to_login(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let remembered = state.session.remembered_email();
    state.login = LoginForm::with_remembered_email(remembered);
    state.current_screen = Screen::Login;
}

/// Switch to signup form
///
/// Internal handler function - use [`crate::app::App::handle_switch_to_signup`] instead.
pub(crate) fn handle_switch_to_signup(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.signup = SignupForm::new();
    state.current_screen = Screen::Signup;
}
