//! Per-track playback session state
//!
//! One session exists per playback request and is superseded by the next.
//! The interruption fields capture whether the track ran out before the
//! listening phase did, which the host persists with its response data.

use chrono::{DateTime, Utc};
use mood_core::Group;
use serde::{Deserialize, Serialize};

/// State of one active playback attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackSession {
    /// The group this playback belongs to
    pub group: Group,

    /// The original track identifier the candidates were derived from
    pub track: String,

    /// The candidate URL that actually played, once one succeeded
    pub resolved: Option<String>,

    /// Wall-clock time the playback request was made
    pub started_at: DateTime<Utc>,

    /// How many candidate URLs have been attempted so far
    pub attempts: usize,

    /// Whether the track ended naturally while the session was live
    pub interrupted: bool,

    /// When the natural end happened
    pub interrupted_at: Option<DateTime<Utc>>,
}

impl PlaybackSession {
    /// Create a fresh session for a playback request
    pub fn new(group: Group, track: impl Into<String>) -> Self {
        Self {
            group,
            track: track.into(),
            resolved: None,
            started_at: Utc::now(),
            attempts: 0,
            interrupted: false,
            interrupted_at: None,
        }
    }

    /// Record that a candidate URL started playing
    pub fn note_started(&mut self, resolved: impl Into<String>) {
        self.resolved = Some(resolved.into());
        self.interrupted = false;
        self.interrupted_at = None;
    }

    /// Record a genuine end-of-track (not a caller-initiated stop)
    pub fn note_natural_end(&mut self) {
        self.interrupted = true;
        self.interrupted_at = Some(Utc::now());
    }
}
