//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{
    AuthResponse, LoginRequest, ProductData, ProductPatch, ProductResponse, SignupRequest,
    UploadResponse, UserInfo,
};

use crate::core::error::ApiError;
use crate::services::api::ImageUpload;

/// Trait for API service operations
///
/// [`crate::services::api::ApiClient`] is the production implementation; the
/// application state holds an `Arc<dyn ApiService>` so tests can substitute
/// a scripted implementation.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Register a new account and establish a session
    async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, ApiError>;

    /// Sign in and establish a session
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError>;

    /// Fetch the signed-in user's profile
    async fn get_user_profile(&self) -> Result<UserInfo, ApiError>;

    /// Exchange the stored refresh token for a new access token
    async fn refresh_access_token(&self) -> Result<String, ApiError>;

    /// List all products (empty when the endpoint is missing)
    async fn get_products(&self) -> Result<Vec<ProductResponse>, ApiError>;

    /// Fetch one product
    async fn get_product_by_id(&self, id: i64) -> Result<ProductResponse, ApiError>;

    /// Create a product
    async fn create_product(&self, product: ProductData) -> Result<ProductResponse, ApiError>;

    /// Update some fields of a product
    async fn update_product(&self, id: i64, patch: ProductPatch) -> Result<ProductResponse, ApiError>;

    /// Delete a product
    async fn delete_product(&self, id: i64) -> Result<(), ApiError>;

    /// Upload an image and return its public URL
    async fn upload_image(&self, image: ImageUpload) -> Result<UploadResponse, ApiError>;

    /// Drop the local session
    fn logout(&self);
}
