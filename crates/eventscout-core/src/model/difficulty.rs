use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Skill level an event is aimed at. Stored with its capitalized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Canonical label, exactly as stored on records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Match a whole input string against a level name, ignoring case and
    /// surrounding whitespace. `"beginner workshop"` is not a match.
    pub fn from_exact(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().to_lowercase() == normalized)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_exact(s).ok_or_else(|| CoreError::Parse(format!("unknown difficulty: {s}")))
    }
}
