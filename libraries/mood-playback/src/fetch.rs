//! Byte-fetch seam for the blob fallback
//!
//! When direct streaming of a candidate URL fails, the player fetches the
//! raw bytes and hands them to the engine as an in-memory source. The
//! fetch itself lives behind this trait; `mood-client` provides the
//! reqwest implementation.

use async_trait::async_trait;
use thiserror::Error;

/// A failed byte fetch
///
/// Never surfaced past the player - it only advances the candidate ladder.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-2xx status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The request could not complete
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Fetches the raw bytes of a resource
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ByteFetcher: Send + Sync {
    /// Fetch the full body of `url`
    ///
    /// Any non-2xx status is an error.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
