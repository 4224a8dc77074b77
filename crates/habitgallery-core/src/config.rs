//! Client configuration: server location and timing constants.

use std::time::Duration;

use reqwest::Url;

use crate::error::{GalleryError, GalleryResult};

/// Default keep-alive interval (10 minutes)
pub const DEFAULT_PING_INTERVAL: Duration = Duration::from_secs(10 * 60);
/// Keep-alive intervals below this are clamped up (5 minutes)
pub const MIN_PING_INTERVAL: Duration = Duration::from_secs(5 * 60);
/// Time between slideshow advances
pub const SLIDE_INTERVAL: Duration = Duration::from_millis(5000);
/// Delay before retrying slideshow setup when no works have loaded yet
pub const SLIDESHOW_RETRY_DELAY: Duration = Duration::from_millis(1500);
/// How long the upload success message stays up
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(5);
/// Upper bound on one keep-alive request
pub const PING_TIMEOUT: Duration = Duration::from_secs(30);
/// Upper bound on any HTTP request, uploads included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
/// Maximum number of slides taken from the work list
pub const MAX_SLIDES: usize = 5;

/// Runtime configuration shared by every component.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Server base URL; relative image URLs resolve against it
    pub base_url: Url,
    /// Keep-alive interval as requested (clamped when the ping starts)
    pub ping_interval: Duration,
    /// Whether the keep-alive ping runs at all
    pub keep_alive: bool,
    pub slide_interval: Duration,
    pub slideshow_retry_delay: Duration,
    pub status_clear_delay: Duration,
}

impl GalleryConfig {
    /// Create a configuration pointing at `base_url` with default timings.
    pub fn new(base_url: &str) -> GalleryResult<Self> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| GalleryError::Config(format!("{}: {}", base_url, e)))?;
        // Url::join drops the last path segment unless the base ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            ping_interval: DEFAULT_PING_INTERVAL,
            keep_alive: true,
            slide_interval: SLIDE_INTERVAL,
            slideshow_retry_delay: SLIDESHOW_RETRY_DELAY,
            status_clear_delay: STATUS_CLEAR_DELAY,
        })
    }

    pub fn with_ping_interval(mut self, interval: Duration) -> Self {
        self.ping_interval = interval;
        self
    }

    pub fn with_keep_alive(mut self, enabled: bool) -> Self {
        self.keep_alive = enabled;
        self
    }

    /// `GET` endpoint returning the work list
    pub fn works_url(&self) -> Url {
        self.endpoint("works")
    }

    /// `POST` endpoint for multipart uploads
    pub fn upload_url(&self) -> Url {
        self.endpoint("upload")
    }

    /// Liveness endpoint hit by the keep-alive ping
    pub fn ping_url(&self) -> Url {
        self.base_url.clone()
    }

    fn endpoint(&self, name: &str) -> Url {
        self.base_url
            .join(name)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    /// Resolve an image URL from the server. Absolute URLs and `data:` URIs
    /// pass through; relative ones (`/uploads/...`) join the base URL.
    pub fn resolve(&self, url: &str) -> String {
        match self.base_url.join(url) {
            Ok(resolved) => resolved.to_string(),
            Err(e) => {
                tracing::warn!("Could not resolve image URL '{}': {}", url, e);
                url.to_string()
            }
        }
    }
}
