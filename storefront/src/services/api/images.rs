//! # Image Upload
//!
//! `POST /upload-image/` accepts either a multipart form with an `image`
//! file part, or a JSON body `{"image": "<data URL>"}`. The response carries
//! the public URL of the stored image.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::multipart::{Form, Part};
use shared::{Base64ImageRequest, UploadResponse};

use super::client::{parse_json, read_error, send, ApiClient};
use crate::core::error::ApiError;

/// An image to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageUpload {
    /// Raw file contents, sent as a multipart `image` part.
    File {
        file_name: String,
        bytes: Vec<u8>,
        mime: String,
    },
    /// Base64 or data-URL string, sent as JSON.
    Base64(String),
}

impl ImageUpload {
    /// Read a file from disk, guessing its MIME type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        Ok(ImageUpload::File {
            mime: mime_for(path).to_string(),
            file_name,
            bytes,
        })
    }

    /// Convert to the JSON form, encoding file contents as a data URL.
    pub fn into_data_url(self) -> Self {
        match self {
            ImageUpload::File { bytes, mime, .. } => ImageUpload::Base64(data_url(&bytes, &mime)),
            base64 => base64,
        }
    }
}

/// `data:<mime>;base64,<payload>`
pub fn data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[tracing::instrument(skip(client, image))]
pub async fn upload_image(client: &ApiClient, image: ImageUpload) -> Result<UploadResponse, ApiError> {
    let request = client.client.post(client.url("upload-image/"));

    let request = match image {
        ImageUpload::File {
            file_name,
            bytes,
            mime,
        } => {
            tracing::debug!(file_name = %file_name, size = bytes.len(), "Uploading image file");
            let part = Part::bytes(bytes)
                .file_name(file_name)
                .mime_str(&mime)
                .map_err(ApiError::from)?;
            request.multipart(Form::new().part("image", part))
        }
        ImageUpload::Base64(image) => {
            tracing::debug!(size = image.len(), "Uploading base64 image");
            request.json(&Base64ImageRequest { image })
        }
    };

    let response = send(request, "upload_image").await?;

    let status = response.status();
    if !status.is_success() {
        let error = read_error(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "Image upload failed");
        return Err(error);
    }

    let uploaded: UploadResponse = parse_json(response).await?;
    tracing::info!(url = %uploaded.url, "Image uploaded");
    Ok(uploaded)
}
