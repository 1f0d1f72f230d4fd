//! # Session & Token Store
//!
//! The authenticated session lives in a string key/value [`Storage`]
//! (local-storage style). [`Session`] is the single interface for creating,
//! refreshing and clearing it; the API client and the application state hold
//! clones of the same handle.
//!
//! ## Modules
//!
//! - **[`storage`]**: [`Storage`] trait, [`MemoryStorage`], [`StorageError`]
//! - **[`file`]**: [`FileStorage`], a JSON file on disk
//!
//! ## Storage Keys
//!
//! | Key | Value |
//! |---|---|
//! | `accessToken` / `refreshToken` | JWT pair |
//! | `isLoggedIn` | `"true"` while a session exists |
//! | `userEmail`, `userName`, `userFirstName`, `userLastName` | cached profile |
//! | `userId`, `userDateJoined` | cached profile (optional) |
//! | `rememberedEmail` | remember-me convenience, survives [`Session::clear`] |
//!
//! Session fields are written together by [`Session::establish`] and removed
//! together by [`Session::clear`], so they are either all present or all
//! absent.

pub mod file;
pub mod storage;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use shared::{compose_full_name, AuthResponse, UserInfo};

pub use file::FileStorage;
pub use storage::{MemoryStorage, Storage, StorageError};

pub mod keys {
    pub const ACCESS_TOKEN: &str = "accessToken";
    pub const REFRESH_TOKEN: &str = "refreshToken";
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    pub const USER_EMAIL: &str = "userEmail";
    pub const USER_NAME: &str = "userName";
    pub const USER_FIRST_NAME: &str = "userFirstName";
    pub const USER_LAST_NAME: &str = "userLastName";
    pub const USER_ID: &str = "userId";
    pub const USER_DATE_JOINED: &str = "userDateJoined";
    pub const REMEMBERED_EMAIL: &str = "rememberedEmail";

    /// Every key that belongs to the session proper.
    pub const SESSION_KEYS: [&str; 9] = [
        ACCESS_TOKEN,
        REFRESH_TOKEN,
        IS_LOGGED_IN,
        USER_EMAIL,
        USER_NAME,
        USER_FIRST_NAME,
        USER_LAST_NAME,
        USER_ID,
        USER_DATE_JOINED,
    ];
}

/// Cached user profile reconstructed from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub user_id: Option<i64>,
    pub date_joined: Option<String>,
}

impl UserView {
    /// `date_joined` parsed as RFC 3339, when present and well-formed.
    pub fn joined_at(&self) -> Option<DateTime<FixedOffset>> {
        self.date_joined
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
    }
}

impl From<&UserInfo> for UserView {
    fn from(user: &UserInfo) -> Self {
        Self {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            full_name: compose_full_name(&user.first_name, &user.last_name),
            user_id: Some(user.id),
            date_joined: user.date_joined.clone(),
        }
    }
}

/// Handle to the persisted session. Clones share the same storage.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn Storage>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

impl Session {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Session over fresh process-local storage.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Session persisted to a JSON file.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileStorage::open(path)))
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub fn set_auth_tokens(&self, access: &str, refresh: &str) -> Result<(), StorageError> {
        self.storage.set_many(&[
            (keys::ACCESS_TOKEN, access.to_string()),
            (keys::REFRESH_TOKEN, refresh.to_string()),
        ])
    }

    /// Cache the user's profile fields, including the composed full name.
    ///
    /// A missing `date_joined` removes any previously stored one.
    pub fn set_user_data(&self, user: &UserInfo) -> Result<(), StorageError> {
        let stale: &[&str] = if user.date_joined.is_none() {
            &[keys::USER_DATE_JOINED]
        } else {
            &[]
        };
        self.storage.update(stale, &user_entries(user))
    }

    /// Replace the whole session with tokens, login flag and user fields in
    /// one batch. Nothing from a previous session survives.
    pub fn establish(&self, auth: &AuthResponse) -> Result<(), StorageError> {
        let mut entries = vec![
            (keys::ACCESS_TOKEN, auth.tokens.access.clone()),
            (keys::REFRESH_TOKEN, auth.tokens.refresh.clone()),
            (keys::IS_LOGGED_IN, "true".to_string()),
        ];
        entries.extend(user_entries(&auth.user));
        self.storage.update(&keys::SESSION_KEYS, &entries)?;

        tracing::info!(user_id = auth.user.id, "Session established");
        Ok(())
    }

    pub fn access_token(&self) -> Option<String> {
        non_empty(self.storage.get(keys::ACCESS_TOKEN))
    }

    pub fn refresh_token(&self) -> Option<String> {
        non_empty(self.storage.get(keys::REFRESH_TOKEN))
    }

    pub fn set_access_token(&self, access: &str) -> Result<(), StorageError> {
        self.storage.set(keys::ACCESS_TOKEN, access)
    }

    /// Remove every session key. Safe to call when no session exists.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_many(&keys::SESSION_KEYS)?;
        tracing::info!("Session cleared");
        Ok(())
    }

    /// The cached user, when an email and a full name are both stored.
    ///
    /// The full name may be empty for users without first or last name.
    pub fn user_data(&self) -> Option<UserView> {
        let email = non_empty(self.storage.get(keys::USER_EMAIL))?;
        let full_name = self.storage.get(keys::USER_NAME)?;

        Some(UserView {
            email,
            first_name: self.storage.get(keys::USER_FIRST_NAME).unwrap_or_default(),
            last_name: self.storage.get(keys::USER_LAST_NAME).unwrap_or_default(),
            full_name,
            user_id: self
                .storage
                .get(keys::USER_ID)
                .and_then(|id| id.parse().ok()),
            date_joined: non_empty(self.storage.get(keys::USER_DATE_JOINED)),
        })
    }

    pub fn is_logged_in(&self) -> bool {
        self.storage.get(keys::IS_LOGGED_IN).as_deref() == Some("true")
            && self.access_token().is_some()
    }

    pub fn remembered_email(&self) -> Option<String> {
        non_empty(self.storage.get(keys::REMEMBERED_EMAIL))
    }

    /// Store the email for the next sign-in, or forget it with `None`.
    pub fn remember_email(&self, email: Option<&str>) -> Result<(), StorageError> {
        match email {
            Some(email) => self.storage.set(keys::REMEMBERED_EMAIL, email),
            None => self.storage.remove(keys::REMEMBERED_EMAIL),
        }
    }
}

fn user_entries(user: &UserInfo) -> Vec<(&'static str, String)> {
    let mut entries = vec![
        (keys::USER_EMAIL, user.email.clone()),
        (keys::USER_NAME, compose_full_name(&user.first_name, &user.last_name)),
        (keys::USER_FIRST_NAME, user.first_name.clone()),
        (keys::USER_LAST_NAME, user.last_name.clone()),
        (keys::USER_ID, user.id.to_string()),
    ];
    if let Some(date_joined) = &user.date_joined {
        entries.push((keys::USER_DATE_JOINED, date_joined.clone()));
    }
    entries
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::AuthTokens;

    fn user() -> UserInfo {
        UserInfo {
            id: 7,
            email: "jane@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            date_joined: Some("2024-05-01T10:00:00Z".to_string()),
        }
    }

    fn auth() -> AuthResponse {
        AuthResponse {
            message: "Login successful".to_string(),
            user: user(),
            tokens: AuthTokens {
                access: "access-1".to_string(),
                refresh: "refresh-1".to_string(),
            },
        }
    }

    #[test]
    fn test_tokens_and_user_round_trip_through_storage() {
        let session = Session::in_memory();
        session.set_auth_tokens("a", "r").unwrap();
        session.set_user_data(&user()).unwrap();

        assert_eq!(session.access_token().as_deref(), Some("a"));
        assert_eq!(session.refresh_token().as_deref(), Some("r"));

        let view = session.user_data().unwrap();
        assert_eq!(view.email, "jane@example.com");
        assert_eq!(view.full_name, "Jane Doe");
        assert_eq!(view.user_id, Some(7));
    }

    #[test]
    fn test_establish_marks_logged_in() {
        let session = Session::in_memory();
        assert!(!session.is_logged_in());

        session.establish(&auth()).unwrap();
        assert!(session.is_logged_in());
        assert_eq!(session.access_token().as_deref(), Some("access-1"));
        assert_eq!(session.user_data().unwrap(), UserView::from(&user()));
    }

    #[test]
    fn test_clear_removes_everything_and_is_idempotent() {
        let session = Session::in_memory();
        session.establish(&auth()).unwrap();

        session.clear().unwrap();
        assert!(session.user_data().is_none());
        assert!(session.access_token().is_none());
        assert!(session.refresh_token().is_none());
        assert!(!session.is_logged_in());

        session.clear().unwrap();
        assert!(session.user_data().is_none());
    }

    #[test]
    fn test_clear_keeps_remembered_email() {
        let session = Session::in_memory();
        session.remember_email(Some("jane@example.com")).unwrap();
        session.establish(&auth()).unwrap();
        session.clear().unwrap();

        assert_eq!(session.remembered_email().as_deref(), Some("jane@example.com"));

        session.remember_email(None).unwrap();
        assert!(session.remembered_email().is_none());
    }

    #[test]
    fn test_user_data_requires_email_and_name() {
        let storage = Arc::new(MemoryStorage::new());
        let session = Session::new(storage.clone());
        storage.set(keys::USER_EMAIL, "jane@example.com").unwrap();
        assert!(session.user_data().is_none());

        storage.set(keys::USER_NAME, "Jane Doe").unwrap();
        let view = session.user_data().unwrap();
        assert_eq!(view.user_id, None);
        assert_eq!(view.date_joined, None);
    }

    #[test]
    fn test_set_access_token_keeps_refresh_token() {
        let session = Session::in_memory();
        session.establish(&auth()).unwrap();
        session.set_access_token("access-2").unwrap();

        assert_eq!(session.access_token().as_deref(), Some("access-2"));
        assert_eq!(session.refresh_token().as_deref(), Some("refresh-1"));
    }

    #[test]
    fn test_joined_at_parses_rfc3339() {
        let view = UserView::from(&user());
        let joined = view.joined_at().unwrap();
        assert_eq!(joined.to_rfc3339(), "2024-05-01T10:00:00+00:00");

        let view = UserView {
            date_joined: Some("yesterday".to_string()),
            ..view
        };
        assert!(view.joined_at().is_none());
    }

    #[test]
    fn test_user_without_names_is_still_signed_in() {
        let mut response = auth();
        response.user.first_name = String::new();
        response.user.last_name = String::new();

        let session = Session::in_memory();
        session.establish(&response).unwrap();

        assert!(session.is_logged_in());
        let view = session.user_data().unwrap();
        assert_eq!(view.email, "jane@example.com");
        assert_eq!(view.full_name, "");
    }

    #[test]
    fn test_establish_replaces_previous_user() {
        let session = Session::in_memory();
        session.establish(&auth()).unwrap();

        let mut next = auth();
        next.user = UserInfo {
            id: 8,
            email: "sam@example.com".to_string(),
            first_name: "Sam".to_string(),
            last_name: "Lee".to_string(),
            date_joined: None,
        };
        session.establish(&next).unwrap();

        let view = session.user_data().unwrap();
        assert_eq!(view.email, "sam@example.com");
        assert_eq!(view.user_id, Some(8));
        assert_eq!(view.date_joined, None);
        assert_eq!(session.storage().get(keys::USER_DATE_JOINED), None);
    }

    #[test]
    fn test_set_user_data_drops_stale_date_joined() {
        let session = Session::in_memory();
        session.set_user_data(&user()).unwrap();

        let undated = UserInfo {
            date_joined: None,
            ..user()
        };
        session.set_user_data(&undated).unwrap();
        assert_eq!(session.user_data().unwrap().date_joined, None);
    }

    #[test]
    fn test_login_flag_without_token_is_not_logged_in() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(keys::IS_LOGGED_IN, "true").unwrap();
        assert!(!Session::new(storage).is_logged_in());
    }
}
