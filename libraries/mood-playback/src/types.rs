//! Configuration types for the music sequencer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a sequence treats the group's track list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopMode {
    /// Play each pick once and chain through the group list cyclically
    #[default]
    Sequence,

    /// Loop the first track at the engine level for the whole duration
    Single,
}

/// Configuration for the music sequencer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequencerConfig {
    /// Loop mode (default: Sequence)
    pub loop_mode: LoopMode,

    /// How long one pick may go without reporting "started" before it is
    /// abandoned and the sequence advances (default: 10s)
    pub start_timeout: Duration,

    /// Fixed delay between one pick ending (or failing) and the next pick
    /// starting, debouncing against overlapping playback (default: 500ms)
    pub advance_delay: Duration,

    /// Playback volume in [0.0, 1.0] (default: 0.3)
    pub volume: f32,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            loop_mode: LoopMode::default(),
            start_timeout: Duration::from_secs(10),
            advance_delay: Duration::from_millis(500),
            volume: 0.3,
        }
    }
}
