//! Playback events
//!
//! Event-based notification for the surrounding experiment page.
//! Events are emitted at key points:
//! - A track actually started sounding (data capture records the timestamp)
//! - A track finished naturally (sequence advances after a short delay)
//! - A track could not be played at all (sequence advances past it)
//! - The duration budget elapsed (phase transition in the host page)

use chrono::{DateTime, Utc};
use mood_core::Group;
use serde::{Deserialize, Serialize};

/// Events emitted by the music sequencer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MusicEvent {
    /// Playback of a track started
    ///
    /// `track` is the candidate URL that actually played, which the host
    /// persists alongside the start time.
    Started {
        /// The group whose music set is playing
        group: Group,
        /// The resolved candidate URL
        track: String,
        /// Wall-clock start time
        started_at: DateTime<Utc>,
    },

    /// A track finished playing naturally (reached its end)
    TrackFinished {
        /// The candidate URL that finished
        track: String,
    },

    /// Every candidate URL for one track pick failed; the pick was skipped
    TrackUnplayable {
        /// The original track identifier
        track: String,
    },

    /// The duration budget elapsed and the sequence completed naturally
    ///
    /// Signals the host to advance to the next phase. Not emitted when a
    /// sequence is superseded or stopped.
    SequenceEnded {
        /// The group the sequence was playing
        group: Group,
    },
}
