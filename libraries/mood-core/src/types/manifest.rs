//! Group-to-track-list manifest

use crate::types::Group;
use serde::{Deserialize, Serialize};

/// Built-in fallback track when every manifest source is unreachable
const BUILTIN_NOSTALGIA: &str = "https://psychology-experiment-music.oss-cn-hongkong.aliyuncs.com/green-shopping-experiment/public/music/nostalgia/glorious-years-Beyond.mp3";
const BUILTIN_NEUTRAL: &str = "https://psychology-experiment-music.oss-cn-hongkong.aliyuncs.com/green-shopping-experiment/public/music/neutral/june-lang-lang.mp3";

/// Mapping from group to its ordered track list
///
/// Both groups are always addressable; a group with no tracks holds an empty
/// list rather than being absent. Track identifiers are either absolute URLs
/// or site-relative paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicManifest {
    /// Tracks for the nostalgia condition
    #[serde(default)]
    pub nostalgia: Vec<String>,

    /// Tracks for the neutral condition
    #[serde(default)]
    pub neutral: Vec<String>,
}

impl MusicManifest {
    /// Create a manifest with the given track lists
    pub fn new(nostalgia: Vec<String>, neutral: Vec<String>) -> Self {
        Self { nostalgia, neutral }
    }

    /// The hardcoded last-resort manifest: one remote track per group
    ///
    /// Used when neither manifest endpoint yields a usable payload, so the
    /// listening phase can still run against object storage directly.
    pub fn builtin() -> Self {
        Self {
            nostalgia: vec![BUILTIN_NOSTALGIA.to_string()],
            neutral: vec![BUILTIN_NEUTRAL.to_string()],
        }
    }

    /// Ordered track list for a group
    pub fn tracks(&self, group: Group) -> &[String] {
        match group {
            Group::Nostalgia => &self.nostalgia,
            Group::Neutral => &self.neutral,
        }
    }

    /// Whether a group has no tracks at all
    pub fn is_empty(&self, group: Group) -> bool {
        self.tracks(group).is_empty()
    }
}
