use serde::{Deserialize, Serialize};

/// JSON body for uploading an image given as base64 or a data URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Base64ImageRequest {
    pub image: String,
}

/// Location of an uploaded image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    pub url: String,
}
