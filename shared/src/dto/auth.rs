use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Access/refresh token pair issued on login and signup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
}

/// Authentication response (login/signup success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: String,
    pub user: UserInfo,
    pub tokens: AuthTokens,
}

/// User information as returned by the backend (also the profile payload)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_joined: Option<String>,
}

/// Body of `POST /auth/token/refresh/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRefreshRequest {
    pub refresh: String,
}

/// Successful token refresh; only a new access token is issued
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRefreshResponse {
    pub access: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_from_backend_json() {
        let json = r#"{
            "message": "Login successful",
            "user": {
                "id": 7,
                "email": "alice@example.com",
                "first_name": "Alice",
                "last_name": "Smith",
                "date_joined": "2024-01-01T00:00:00Z"
            },
            "tokens": { "access": "a-token", "refresh": "r-token" }
        }"#;

        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user.id, 7);
        assert_eq!(response.user.first_name, "Alice");
        assert_eq!(response.tokens.access, "a-token");
        assert_eq!(response.tokens.refresh, "r-token");
    }

    #[test]
    fn test_auth_response_without_message() {
        let json = r#"{
            "user": { "id": 1, "email": "bob@example.com" },
            "tokens": { "access": "a", "refresh": "r" }
        }"#;

        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert!(response.message.is_empty());
        assert!(response.user.first_name.is_empty());
        assert!(response.user.date_joined.is_none());
    }

    #[test]
    fn test_signup_request_field_names() {
        let request = SignupRequest {
            email: "a@b.co".to_string(),
            password: "password1".to_string(),
            confirm_password: "password1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["confirm_password"], "password1");
        assert_eq!(value["first_name"], "Ada");
        assert_eq!(value["last_name"], "Lovelace");
    }
}
