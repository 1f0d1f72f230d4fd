//! # Product Endpoints
//!
//! Catalogue reads are public. Writes carry the bearer token when a session
//! exists and leave authorization to the backend.

use std::time::Instant;

use reqwest::StatusCode;
use shared::{ProductData, ProductPatch, ProductResponse};

use super::client::{parse_json, read_error, send, ApiClient};
use crate::core::error::ApiError;

const PRODUCT_NOT_FOUND: &str = "Product not found";

/// List all products. A missing endpoint (404) yields an empty catalogue.
#[tracing::instrument(skip(client))]
pub async fn get_products(client: &ApiClient) -> Result<Vec<ProductResponse>, ApiError> {
    let start = Instant::now();

    let response = send(client.client.get(client.url("products/")), "get_products").await?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        tracing::warn!("Products endpoint not found, returning empty list");
        return Ok(Vec::new());
    }
    if !status.is_success() {
        let error = read_error(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "Product list failed");
        return Err(error);
    }

    let products: Vec<ProductResponse> = parse_json(response).await?;
    tracing::debug!(
        count = products.len(),
        duration_ms = start.elapsed().as_millis(),
        "Products fetched"
    );
    Ok(products)
}

/// Fetch one product.
#[tracing::instrument(skip(client))]
pub async fn get_product_by_id(client: &ApiClient, id: i64) -> Result<ProductResponse, ApiError> {
    let response = send(
        client.client.get(client.url(&format!("products/{}/", id))),
        "get_product_by_id",
    )
    .await?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(PRODUCT_NOT_FOUND.to_string()));
    }
    if !status.is_success() {
        let error = read_error(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "Product fetch failed");
        return Err(error);
    }

    parse_json(response).await
}

#[tracing::instrument(skip(client, product), fields(name = %product.name))]
pub async fn create_product(
    client: &ApiClient,
    product: ProductData,
) -> Result<ProductResponse, ApiError> {
    let request = client.with_bearer(client.client.post(client.url("products/")).json(&product));
    let response = send(request, "create_product").await?;

    let status = response.status();
    if !status.is_success() {
        let error = read_error(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "Product create failed");
        return Err(error);
    }

    let created: ProductResponse = parse_json(response).await?;
    tracing::info!(id = created.id, "Product created");
    Ok(created)
}

/// Update the fields set in `patch`; the rest are not sent.
#[tracing::instrument(skip(client, patch))]
pub async fn update_product(
    client: &ApiClient,
    id: i64,
    patch: ProductPatch,
) -> Result<ProductResponse, ApiError> {
    let request = client.with_bearer(
        client
            .client
            .put(client.url(&format!("products/{}/", id)))
            .json(&patch),
    );
    let response = send(request, "update_product").await?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(PRODUCT_NOT_FOUND.to_string()));
    }
    if !status.is_success() {
        let error = read_error(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "Product update failed");
        return Err(error);
    }

    parse_json(response).await
}

#[tracing::instrument(skip(client))]
pub async fn delete_product(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    let request = client.with_bearer(client.client.delete(client.url(&format!("products/{}/", id))));
    let response = send(request, "delete_product").await?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(PRODUCT_NOT_FOUND.to_string()));
    }
    if !status.is_success() {
        let error = read_error(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "Product delete failed");
        return Err(error);
    }

    tracing::info!("Product deleted");
    Ok(())
}
