//! # Event Handler
//!
//! Handles async event results from background tasks, updating application state accordingly.
//!
//! This module processes `AppEvent` messages received from spawned network
//! calls and applies them to the application state. The write lock is held
//! per event, for the duration of a state update only.

use shared::{AuthResponse, UserInfo};

use crate::app::state::{NotificationLevel, Screen};
use crate::app::{App, AppEvent};
use crate::core::error::ApiError;
use crate::session::UserView;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginResult(result) => {
                self.handle_login_result(result);
            }
            AppEvent::SignupResult(result) => {
                self.handle_signup_result(result);
            }
            AppEvent::ProfileResult(result) => {
                self.handle_profile_result(result);
            }
            AppEvent::Loading(msg) => {
                self.handle_loading(msg);
            }
        }
    }
}

impl App {
    fn handle_login_result(&mut self, result: Result<AuthResponse, ApiError>) {
        tracing::info!(event = "LoginResult", success = result.is_ok(), "Processing login result");

        let mut state = self.state.write();
        state.loading = None;

        match result {
            Ok(auth_response) => {
                state.login.succeed();

                let remembered = state.login.remember_me.then(|| state.login.email.clone());
                if let Err(e) = state.session.remember_email(remembered.as_deref()) {
                    tracing::warn!(error = %e, "Failed to update remembered email");
                }

                let user = UserView::from(&auth_response.user);
                let greeting = format!("Welcome back, {}", display_name(&user));
                state.current_user = Some(user);
                state.current_screen = Screen::Home;
                state.notify(NotificationLevel::Success, greeting);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Login rejected");
                state.login.fail(&err);
            }
        }
    }

    fn handle_signup_result(&mut self, result: Result<AuthResponse, ApiError>) {
        tracing::info!(event = "SignupResult", success = result.is_ok(), "Processing signup result");

        let mut state = self.state.write();
        state.loading = None;

        match result {
            Ok(auth_response) => {
                state.signup.succeed();

                let user = UserView::from(&auth_response.user);
                let greeting = format!("Welcome, {}", display_name(&user));
                state.current_user = Some(user);
                state.current_screen = Screen::Home;
                state.notify(NotificationLevel::Success, greeting);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Signup rejected");
                state.signup.fail(&err);
            }
        }
    }

    fn handle_profile_result(&mut self, result: Result<UserInfo, ApiError>) {
        tracing::debug!(event = "ProfileResult", success = result.is_ok(), "Processing profile result");

        let mut state = self.state.write();
        match result {
            Ok(user) => {
                // The fetch may resolve after a logout or a sign-in as someone else
                let current = state.session.user_data().and_then(|cached| cached.user_id);
                if !state.session.is_logged_in() || current != Some(user.id) {
                    tracing::debug!(user_id = user.id, "Dropping profile for a session that has ended");
                    return;
                }
                if let Err(e) = state.session.set_user_data(&user) {
                    tracing::warn!(error = %e, "Failed to cache profile");
                }
                state.current_user = Some(UserView::from(&user));
            }
            Err(err) if err.is_session_expired() => {
                // The API client has already cleared the stored session
                state.current_user = None;
                state.current_screen = Screen::Login;
                state.notify(NotificationLevel::Warning, err.to_string());
            }
            Err(err) => {
                state.notify(NotificationLevel::Error, err.to_string());
            }
        }
    }

    fn handle_loading(&mut self, msg: String) {
        tracing::debug!(event = "Loading", message = %msg, "Processing loading status");
        self.state.write().loading = Some(msg);
    }
}

fn display_name(user: &UserView) -> &str {
    if user.full_name.is_empty() {
        &user.email
    } else {
        &user.full_name
    }
}
