/// Experimental condition groups
use serde::{Deserialize, Serialize};

/// Which music set plays during the listening phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Familiar tracks intended to evoke nostalgia
    Nostalgia,
    /// Affectively neutral tracks
    Neutral,
}

impl Group {
    /// All groups, in manifest key order
    pub const ALL: [Group; 2] = [Group::Nostalgia, Group::Neutral];

    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nostalgia => "nostalgia",
            Self::Neutral => "neutral",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "nostalgia" => Some(Self::Nostalgia),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
