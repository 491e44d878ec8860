//! Image hosting client.
//!
//! Uploads one image per call to Cloudinary's unsigned upload endpoint and
//! returns the public HTTPS URL of the stored asset. No size or type checks
//! and no retries; the caller decides what a failure means.

use std::time::Duration;

use serde::Deserialize;

use crate::config::{HttpTimeouts, MediaConfig};

/// Message used when the host rejects an upload without explaining why.
pub const DEFAULT_UPLOAD_ERROR: &str = "Cloudinary upload failed";

/// An image received from a form, ready to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),

    #[error("upload request failed: {0}")]
    Request(String),

    /// The host answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("upload response missing secure_url")]
    MissingUrl,

    #[error("upload response decode failed: {0}")]
    Decode(String),
}

/// A managed image host.
#[async_trait::async_trait]
pub trait MediaHost: Send + Sync {
    /// Transmit one image and return its public URL.
    async fn upload(&self, image: ImageFile) -> Result<String, UploadError>;
}

pub struct CloudinaryUploader {
    http: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl CloudinaryUploader {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: MediaConfig, timeouts: HttpTimeouts) -> Result<Self, UploadError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| UploadError::HttpClientBuild(e.to_string()))?;
        let upload_url = format!(
            "{}/v1_1/{}/image/upload",
            config.base_url.trim_end_matches('/'),
            config.cloud_name
        );
        Ok(Self { http, upload_url, upload_preset: config.upload_preset })
    }
}

#[async_trait::async_trait]
impl MediaHost for CloudinaryUploader {
    async fn upload(&self, image: ImageFile) -> Result<String, UploadError> {
        let size = image.bytes.len();
        let mut part = reqwest::multipart::Part::bytes(image.bytes).file_name(image.file_name);
        if let Some(content_type) = image.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|e| UploadError::Request(e.to_string()))?;
        }
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Request(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| UploadError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(UploadError::Rejected { status: status.as_u16(), message: error_message(&text) });
        }
        let body: UploadResponse = serde_json::from_str(&text).map_err(|e| UploadError::Decode(e.to_string()))?;
        let url = body.secure_url.ok_or(UploadError::MissingUrl)?;
        tracing::info!(bytes = size, %url, "image uploaded");
        Ok(url)
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_UPLOAD_ERROR.to_owned())
}

#[cfg(test)]
#[path = "media_test.rs"]
mod tests;
