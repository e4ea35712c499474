//! Mood Player Core
//!
//! Platform-agnostic domain types for the Mood Player background-music
//! subsystem.
//!
//! This crate defines the vocabulary shared by the playback and client
//! crates:
//! - **`Group`**: the experimental condition selecting which music set plays
//! - **`MusicManifest`**: the mapping from group to its ordered track list
//!
//! # Example
//!
//! ```rust
//! use mood_core::{Group, MusicManifest};
//!
//! let manifest = MusicManifest::builtin();
//! assert!(!manifest.tracks(Group::Neutral).is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod types;

// Re-export commonly used types
pub use types::{Group, MusicManifest};
