//! Music list loader
//!
//! Fetches the group-to-track-list manifest with degrading fallback tiers:
//! a primary endpoint (live API), a secondary endpoint (static JSON placed
//! outside the API proxy), and finally the built-in manifest. Each network
//! attempt is bounded by a short per-attempt timeout so a dead endpoint
//! cannot stall the listening phase.

use crate::error::{ClientError, Result};
use async_trait::async_trait;
use mood_core::MusicManifest;
use mood_playback::ManifestSource;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default bound on one manifest fetch attempt
const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(2);

/// Endpoints and bounds for manifest loading
#[derive(Debug, Clone)]
pub struct ManifestConfig {
    /// Primary manifest endpoint (live API)
    pub primary_url: String,
    /// Secondary endpoint serving a static manifest
    pub secondary_url: String,
    /// Bound on each individual attempt
    pub attempt_timeout: Duration,
}

impl ManifestConfig {
    /// Configure both endpoints with the default per-attempt timeout
    pub fn new(primary_url: impl Into<String>, secondary_url: impl Into<String>) -> Self {
        Self {
            primary_url: primary_url.into(),
            secondary_url: secondary_url.into(),
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    /// Override the per-attempt timeout
    #[must_use]
    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }
}

/// Raw manifest payload as served over the wire
///
/// Both keys are optional: a payload is accepted when at least one group
/// key is present, and the missing group degrades to an empty list.
#[derive(Debug, Deserialize)]
struct ManifestPayload {
    nostalgia: Option<Vec<String>>,
    neutral: Option<Vec<String>>,
}

impl ManifestPayload {
    fn into_manifest(self) -> Result<MusicManifest> {
        if self.nostalgia.is_none() && self.neutral.is_none() {
            return Err(ClientError::MissingGroups);
        }
        Ok(MusicManifest::new(
            self.nostalgia.unwrap_or_default(),
            self.neutral.unwrap_or_default(),
        ))
    }
}

/// Loads the music manifest with fallback tiers
///
/// `load` never fails: when every tier is exhausted the built-in manifest
/// keeps the listening phase runnable.
pub struct ManifestClient {
    http: Client,
    config: ManifestConfig,
}

impl ManifestClient {
    /// Create a loader over its own HTTP client
    pub fn new(config: ManifestConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.attempt_timeout)
            .user_agent(format!("MoodPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, config })
    }

    /// Load the manifest, degrading through the fallback tiers
    pub async fn load(&self) -> MusicManifest {
        match self.try_fetch(&self.config.primary_url).await {
            Ok(manifest) => {
                info!(url = %self.config.primary_url, "Manifest loaded from primary endpoint");
                return manifest;
            }
            Err(err) => {
                warn!(url = %self.config.primary_url, error = %err, "Primary manifest fetch failed");
            }
        }

        match self.try_fetch(&self.config.secondary_url).await {
            Ok(manifest) => {
                info!(url = %self.config.secondary_url, "Manifest loaded from secondary endpoint");
                return manifest;
            }
            Err(err) => {
                warn!(url = %self.config.secondary_url, error = %err, "Secondary manifest fetch failed");
            }
        }

        info!("Falling back to built-in manifest");
        MusicManifest::builtin()
    }

    /// One bounded attempt against one endpoint
    async fn try_fetch(&self, url: &str) -> Result<MusicManifest> {
        debug!(url = %url, "Fetching manifest");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::ServerError {
                status: status.as_u16(),
            });
        }

        let payload: ManifestPayload = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(e.to_string()))?;

        payload.into_manifest()
    }
}

#[async_trait]
impl ManifestSource for ManifestClient {
    async fn load(&self) -> MusicManifest {
        ManifestClient::load(self).await
    }
}
