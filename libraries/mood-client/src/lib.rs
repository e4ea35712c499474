//! Mood Player HTTP Client
//!
//! Network implementations of the `mood-playback` seams:
//!
//! - **Manifest loading**: primary endpoint -> secondary static endpoint ->
//!   built-in manifest, each attempt bounded by a short timeout
//! - **Byte fetching**: raw track bytes for the player's in-memory fallback
//!
//! # Example
//!
//! ```ignore
//! use mood_client::{HttpFetcher, ManifestClient, ManifestConfig};
//!
//! let config = ManifestConfig::new(
//!     "https://experiment.example.com/api/music-list",
//!     "https://experiment.example.com/api-json/music-list.json",
//! );
//! let loader = ManifestClient::new(config)?;
//!
//! // Never fails: degrades to the built-in manifest
//! let manifest = loader.load().await;
//! ```

#![forbid(unsafe_code)]

mod error;
mod fetch;
mod manifest;

// Re-export main types
pub use error::{ClientError, Result};
pub use fetch::HttpFetcher;
pub use manifest::{ManifestClient, ManifestConfig};
