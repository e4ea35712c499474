//! Error types for background-music playback

use mood_core::Group;
use thiserror::Error;

/// Playback errors
///
/// Only two failures ever surface to callers: an empty track list for the
/// requested group, and exhaustion of every candidate URL for one track.
/// Per-candidate load failures are absorbed by advancing the ladder, and
/// nothing here is fatal to the surrounding task - the caller degrades to
/// silence rather than blocking.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The manifest holds no tracks for the requested group
    #[error("No track available for group '{0}'")]
    NoTrackAvailable(Group),

    /// Every candidate URL for a track failed to play
    #[error("All {tried} candidate URLs failed for track '{track}'")]
    CandidatesExhausted {
        /// The original track identifier
        track: String,
        /// How many candidate URLs were attempted
        tried: usize,
    },
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
