//! # Application State Types
//!
//! All state-related types for the application: screens, the two auth forms,
//! the injected session and API, and pending notifications.

use std::sync::Arc;

use super::forms::{LoginForm, SignupForm};
use crate::core::service::ApiService;
use crate::session::{Session, UserView};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Sign-in form
    Login,
    /// Sign-up form
    Signup,
    /// Signed-in landing screen
    Home,
}

impl Screen {
    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Sign In",
            Screen::Signup => "Create Account",
            Screen::Home => "Home",
        }
    }

    /// Screens that require a session
    pub fn requires_auth(&self) -> bool {
        matches!(self, Screen::Home)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A message waiting to be shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Main application state
pub struct AppState {
    pub current_screen: Screen,
    pub login: LoginForm,
    pub signup: SignupForm,
    /// Persisted session, shared with the API client
    pub session: Session,
    pub api_client: Arc<dyn ApiService>,
    /// Signed-in user, `None` when signed out
    pub current_user: Option<UserView>,
    /// Status line for in-flight work
    pub loading: Option<String>,
    pub pending_notifications: Vec<Notification>,
}

impl AppState {
    /// Initial state: `Home` when a session exists, otherwise `Login` with
    /// the remembered email pre-filled.
    pub fn new(session: Session, api_client: Arc<dyn ApiService>) -> Self {
        let current_user = session.user_data();
        let current_screen = if current_user.is_some() {
            Screen::Home
        } else {
            Screen::Login
        };

        Self {
            current_screen,
            login: LoginForm::with_remembered_email(session.remembered_email()),
            signup: SignupForm::new(),
            session,
            api_client,
            current_user,
            loading: None,
            pending_notifications: Vec::new(),
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.pending_notifications.push(Notification::new(level, message));
    }

    /// Take all pending notifications, oldest first
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending_notifications)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}
