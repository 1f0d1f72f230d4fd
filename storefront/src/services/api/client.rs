//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    AuthResponse, LoginRequest, ProductData, ProductPatch, ProductResponse, SignupRequest,
    UploadResponse, UserInfo,
};

use super::errors::decode_error;
use super::images::ImageUpload;
use crate::config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use crate::core::error::ApiError;
use crate::core::service::ApiService;
use crate::session::Session;

/// HTTP client for the storefront backend.
///
/// Holds a pooled `reqwest::Client`, the API base URL and the [`Session`]
/// whose tokens authorize requests. Login and signup write the session;
/// a rejected profile fetch or token refresh clears it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig, session: Session) -> Self {
        Self::build(&config.api_url, config.timeout(), session)
    }

    /// Create a client for `base_url` with the default 10 second timeout.
    pub fn with_base_url(base_url: impl Into<String>, session: Session) -> Self {
        Self::build(
            &base_url.into(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session,
        )
    }

    fn build(base_url: &str, timeout: Duration, session: Session) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    timeout_secs = timeout.as_secs(),
                    "Failed to build HTTP client, using defaults without the configured timeout"
                );
                Client::new()
            });

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Absolute URL for an endpoint path such as `auth/login/`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the stored access token, if any.
    pub(crate) fn with_bearer(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Drop the stored session.
    ///
    /// A storage failure leaves the session in place and is reported as a
    /// transport error, so callers never claim a session was cleared when it
    /// was not.
    pub(crate) fn clear_session(&self) -> Result<(), ApiError> {
        self.session.clear().map_err(|e| {
            tracing::error!(error = %e, "Failed to clear session");
            ApiError::transport(format!("Failed to clear session: {}", e))
        })
    }
}

/// Send a request, mapping network failures to [`ApiError::Transport`].
pub(crate) async fn send(request: RequestBuilder, operation: &str) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| {
        tracing::error!(error = %e, operation, "Network error");
        ApiError::from(e)
    })
}

/// Parse a successful response body.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    response.json::<T>().await.map_err(|e| {
        tracing::error!(error = %e, status, "Response parse error");
        ApiError::Transport {
            message: format!("Failed to parse response: {}", e),
            status: Some(status),
        }
    })
}

/// Read a non-2xx response body and decode it.
pub(crate) async fn read_error(response: Response) -> ApiError {
    let status = response.status().as_u16();
    match response.text().await {
        Ok(body) => decode_error(status, &body),
        Err(e) => ApiError::Transport {
            message: format!("Network error: {}", e),
            status: Some(status),
        },
    }
}

#[async_trait]
impl ApiService for ApiClient {
    async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, ApiError> {
        super::auth::signup(self, request).await
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        super::auth::login(self, request).await
    }

    async fn get_user_profile(&self) -> Result<UserInfo, ApiError> {
        super::auth::get_user_profile(self).await
    }

    async fn refresh_access_token(&self) -> Result<String, ApiError> {
        super::auth::refresh_access_token(self).await
    }

    async fn get_products(&self) -> Result<Vec<ProductResponse>, ApiError> {
        super::products::get_products(self).await
    }

    async fn get_product_by_id(&self, id: i64) -> Result<ProductResponse, ApiError> {
        super::products::get_product_by_id(self, id).await
    }

    async fn create_product(&self, product: ProductData) -> Result<ProductResponse, ApiError> {
        super::products::create_product(self, product).await
    }

    async fn update_product(&self, id: i64, patch: ProductPatch) -> Result<ProductResponse, ApiError> {
        super::products::update_product(self, id, patch).await
    }

    async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        super::products::delete_product(self, id).await
    }

    async fn upload_image(&self, image: ImageUpload) -> Result<UploadResponse, ApiError> {
        super::images::upload_image(self, image).await
    }

    fn logout(&self) {
        super::auth::logout(self)
    }
}
