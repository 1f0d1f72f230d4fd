//! Session persistence across process restarts, using the file backend.

use pretty_assertions::assert_eq;
use shared::{AuthResponse, AuthTokens, UserInfo};
use tempfile::TempDir;

use storefront::session::{keys, FileStorage, Session, Storage};

fn auth_response() -> AuthResponse {
    AuthResponse {
        message: "Signup successful".to_string(),
        user: UserInfo {
            id: 12,
            email: "ravi@example.com".to_string(),
            first_name: "Ravi".to_string(),
            last_name: "Kumar".to_string(),
            date_joined: Some("2024-03-15T09:30:00+05:30".to_string()),
        },
        tokens: AuthTokens {
            access: "access-token".to_string(),
            refresh: "refresh-token".to_string(),
        },
    }
}

#[test]
fn test_session_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("session.json");

    Session::from_file(&path).establish(&auth_response()).unwrap();
    assert!(path.exists());

    let reopened = Session::from_file(&path);
    assert!(reopened.is_logged_in());
    assert_eq!(reopened.access_token().as_deref(), Some("access-token"));
    assert_eq!(reopened.refresh_token().as_deref(), Some("refresh-token"));

    let user = reopened.user_data().unwrap();
    assert_eq!(user.full_name, "Ravi Kumar");
    assert_eq!(user.user_id, Some(12));
    assert_eq!(
        user.joined_at().map(|joined| joined.format("%Y-%m-%d").to_string()),
        Some("2024-03-15".to_string())
    );
}

#[test]
fn test_clear_persists_and_keeps_remembered_email() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let session = Session::from_file(&path);
    session.establish(&auth_response()).unwrap();
    session.remember_email(Some("ravi@example.com")).unwrap();
    session.clear().unwrap();

    let reopened = FileStorage::open(&path);
    for key in keys::SESSION_KEYS {
        assert_eq!(reopened.get(key), None, "{} should be cleared", key);
    }
    assert_eq!(
        reopened.get(keys::REMEMBERED_EMAIL).as_deref(),
        Some("ravi@example.com")
    );
}

#[test]
fn test_corrupt_file_starts_empty_and_is_rewritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ not json").unwrap();

    let session = Session::from_file(&path);
    assert!(!session.is_logged_in());
    assert_eq!(session.user_data(), None);

    session.set_auth_tokens("a", "r").unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(stored[keys::ACCESS_TOKEN], "a");
    assert_eq!(stored[keys::REFRESH_TOKEN], "r");
}

#[test]
fn test_file_uses_local_storage_key_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    Session::from_file(&path).establish(&auth_response()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(stored["isLoggedIn"], "true");
    assert_eq!(stored["userEmail"], "ravi@example.com");
    assert_eq!(stored["userName"], "Ravi Kumar");
    assert_eq!(stored["userId"], "12");
}
