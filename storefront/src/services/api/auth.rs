//! # Authentication Endpoints
//!
//! Signup, login, profile and token refresh. Successful login and signup
//! establish the [`crate::session::Session`]; a 401 on the profile or a
//! rejected refresh clears it.

use std::time::Instant;

use shared::{
    AuthResponse, LoginRequest, SignupRequest, TokenRefreshRequest, TokenRefreshResponse,
    UserInfo,
};

use super::client::{parse_json, read_error, send, ApiClient};
use crate::core::error::ApiError;

/// Sign in with email and password.
///
/// On failure the stored session is left untouched.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: LoginRequest) -> Result<AuthResponse, ApiError> {
    tracing::info!("Attempting login");
    let start = Instant::now();

    let response = send(
        client.client.post(client.url("auth/login/")).json(&request),
        "login",
    )
    .await?;

    let status = response.status();
    if !status.is_success() {
        let error = read_error(response).await;
        tracing::warn!(
            status = status.as_u16(),
            error = %error,
            duration_ms = start.elapsed().as_millis(),
            "Login failed"
        );
        return Err(error);
    }

    let auth: AuthResponse = parse_json(response).await?;
    establish(client, &auth)?;

    tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
    Ok(auth)
}

/// Register a new account.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn signup(client: &ApiClient, request: SignupRequest) -> Result<AuthResponse, ApiError> {
    tracing::info!("Attempting signup");
    let start = Instant::now();

    let response = send(
        client.client.post(client.url("auth/signup/")).json(&request),
        "signup",
    )
    .await?;

    let status = response.status();
    if !status.is_success() {
        let error = read_error(response).await;
        tracing::warn!(
            status = status.as_u16(),
            error = %error,
            duration_ms = start.elapsed().as_millis(),
            "Signup failed"
        );
        return Err(error);
    }

    let auth: AuthResponse = parse_json(response).await?;
    establish(client, &auth)?;

    tracing::info!(duration_ms = start.elapsed().as_millis(), "Signup successful");
    Ok(auth)
}

fn establish(client: &ApiClient, auth: &AuthResponse) -> Result<(), ApiError> {
    client.session().establish(auth).map_err(|e| {
        tracing::error!(error = %e, "Failed to persist session");
        ApiError::transport(format!("Failed to save session: {}", e))
    })
}

/// Fetch the signed-in user's profile.
#[tracing::instrument(skip(client))]
pub async fn get_user_profile(client: &ApiClient) -> Result<UserInfo, ApiError> {
    let Some(token) = client.session().access_token() else {
        return Err(ApiError::session_expired("No access token found"));
    };

    let response = send(
        client.client.get(client.url("auth/profile/")).bearer_auth(token),
        "get_user_profile",
    )
    .await?;

    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        tracing::warn!("Profile request unauthorized, clearing session");
        client.clear_session()?;
        return Err(ApiError::session_expired(
            "Authentication failed. Please login again.",
        ));
    }

    if !status.is_success() {
        let error = read_error(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "Profile fetch failed");
        return Err(error);
    }

    parse_json(response).await
}

/// Exchange the stored refresh token for a new access token.
///
/// Only the access token is replaced. Any failure clears the session.
#[tracing::instrument(skip(client))]
pub async fn refresh_access_token(client: &ApiClient) -> Result<String, ApiError> {
    let Some(refresh) = client.session().refresh_token() else {
        client.clear_session()?;
        return Err(ApiError::session_expired("No refresh token found"));
    };

    let request = TokenRefreshRequest { refresh };
    let response = send(
        client
            .client
            .post(client.url("auth/token/refresh/"))
            .json(&request),
        "refresh_access_token",
    )
    .await?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Token refresh rejected, clearing session");
        client.clear_session()?;
        return Err(ApiError::session_expired("Token refresh failed"));
    }

    let refreshed: TokenRefreshResponse = parse_json(response).await?;
    client
        .session()
        .set_access_token(&refreshed.access)
        .map_err(|e| ApiError::transport(format!("Failed to save session: {}", e)))?;

    tracing::debug!("Access token refreshed");
    Ok(refreshed.access)
}

/// Sign out locally. The backend keeps no server-side session.
pub fn logout(client: &ApiClient) {
    if client.clear_session().is_ok() {
        tracing::info!("Logged out");
    }
}
