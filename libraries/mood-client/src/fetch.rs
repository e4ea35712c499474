//! HTTP byte fetcher for the blob fallback

use async_trait::async_trait;
use mood_playback::{ByteFetcher, FetchError};
use reqwest::Client;
use tracing::{debug, warn};

/// `ByteFetcher` over reqwest
///
/// Used by the player when direct streaming of a candidate URL fails and
/// the bytes must be fetched for in-memory playback. Candidate URLs are
/// site-relative in production, so a base URL is prepended to anything
/// that is not already absolute.
pub struct HttpFetcher {
    http: Client,
    base_url: String,
}

impl HttpFetcher {
    /// Create a fetcher resolving relative candidates against `base_url`
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn absolute(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}/{}", self.base_url, url.trim_start_matches('/'))
        }
    }
}

#[async_trait]
impl ByteFetcher for HttpFetcher {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let target = self.absolute(url);
        debug!(url = %target, "Fetching candidate bytes");

        let response = self
            .http
            .get(&target)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %target, status = status.as_u16(), "Byte fetch rejected");
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        debug!(url = %target, size = bytes.len(), "Candidate bytes fetched");
        Ok(bytes.to_vec())
    }
}
