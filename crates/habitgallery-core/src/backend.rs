//! HTTP backend: `GET /works`, `POST /upload` and the liveness ping.
//!
//! The [`Backend`] trait is the seam between the client flows and the
//! network. [`HttpBackend`] talks to the real server with reqwest; tests use
//! the in-memory `MockBackend` behind the `testing` feature.

use std::future::Future;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::config::{GalleryConfig, PING_TIMEOUT, REQUEST_TIMEOUT};
use crate::error::{GalleryError, GalleryResult};
use crate::messages;
use crate::upload::UploadPayload;

/// JSON body returned by `POST /upload`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub work_id: Option<String>,
}

/// Outcome of an upload request that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResponse {
    pub status: u16,
    /// `None` when the body was not the expected JSON
    pub reply: Option<UploadReply>,
}

impl UploadResponse {
    /// Only a 2xx status with `success: true` counts as success
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status) && self.reply.as_ref().is_some_and(|r| r.success)
    }

    /// Server-provided error string, if any
    pub fn error_message(&self) -> Option<&str> {
        self.reply
            .as_ref()
            .and_then(|r| r.error.as_deref())
            .filter(|e| !e.is_empty())
    }
}

/// Operations the client needs from the server.
///
/// Futures are `Send` so flows can run on spawned tasks.
pub trait Backend: Send + Sync + 'static {
    /// Fetch the raw work list. Entries are returned unparsed so invalid
    /// ones can be skipped one by one.
    ///
    /// Errors: transport failure, non-2xx status, or a body that is not a
    /// JSON array.
    fn fetch_works(&self) -> impl Future<Output = GalleryResult<Vec<Value>>> + Send;

    /// Send one multipart upload. `Err` only when no response was received.
    fn upload(
        &self,
        payload: UploadPayload,
    ) -> impl Future<Output = GalleryResult<UploadResponse>> + Send;

    /// Hit the liveness endpoint; returns the HTTP status.
    fn ping(&self) -> impl Future<Output = GalleryResult<u16>> + Send;
}

/// reqwest-backed implementation of [`Backend`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: GalleryConfig,
}

impl HttpBackend {
    pub fn new(config: GalleryConfig) -> GalleryResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GalleryError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }
}

/// Parse a `/works` body. Anything but a JSON array is malformed.
pub fn parse_works_body(body: &[u8]) -> GalleryResult<Vec<Value>> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => Ok(items),
        _ => Err(GalleryError::Malformed(messages::MALFORMED_WORKS.to_string())),
    }
}

/// Pull `error` out of a JSON error body, if there is one
fn server_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl Backend for HttpBackend {
    async fn fetch_works(&self) -> GalleryResult<Vec<Value>> {
        let url = self.config.works_url();
        tracing::info!("Fetching works from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GalleryError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| GalleryError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(GalleryError::Http {
                status: status.as_u16(),
                server_message: server_error_message(&body),
            });
        }

        parse_works_body(&body)
    }

    async fn upload(&self, payload: UploadPayload) -> GalleryResult<UploadResponse> {
        let url = self.config.upload_url();
        tracing::info!("Uploading work by '{}' to {}", payload.author, url);

        let UploadPayload {
            author,
            scorecard,
            comic,
            current_habits,
            reflection,
        } = payload;

        let scorecard_part = Part::bytes(scorecard.bytes)
            .file_name(scorecard.file_name)
            .mime_str(&scorecard.mime)
            .map_err(|e| GalleryError::Transport(e.to_string()))?;
        let comic_part = Part::bytes(comic.bytes)
            .file_name(comic.file_name)
            .mime_str(&comic.mime)
            .map_err(|e| GalleryError::Transport(e.to_string()))?;

        let form = Form::new()
            .text("author-name", author)
            .part("scorecard-image", scorecard_part)
            .part("comic-image", comic_part)
            .text("current-habits", current_habits)
            .text("reflection", reflection);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| GalleryError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| GalleryError::Transport(e.to_string()))?;

        let reply = match serde_json::from_slice::<UploadReply>(&body) {
            Ok(reply) => Some(reply),
            Err(e) => {
                tracing::warn!("Upload response (status {}) is not JSON: {}", status, e);
                None
            }
        };

        Ok(UploadResponse { status, reply })
    }

    async fn ping(&self) -> GalleryResult<u16> {
        let response = self
            .client
            .get(self.config.ping_url())
            .timeout(PING_TIMEOUT)
            .send()
            .await
            .map_err(|e| GalleryError::Transport(e.to_string()))?;
        Ok(response.status().as_u16())
    }
}
