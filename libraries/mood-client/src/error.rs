//! Error types for the manifest and byte-fetch clients
//!
//! Manifest loading itself never fails - these errors describe individual
//! attempts, which the loader absorbs by falling through its tiers.

use thiserror::Error;

/// A failed attempt against one manifest endpoint
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed or timed out
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server error ({status})")]
    ServerError {
        /// The HTTP status code
        status: u16,
    },

    /// Response body was not a usable manifest payload
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Payload parsed but carried neither expected group key
    #[error("Manifest payload has no group keys")]
    MissingGroups,
}

/// Result type for individual client attempts
pub type Result<T> = std::result::Result<T, ClientError>;
