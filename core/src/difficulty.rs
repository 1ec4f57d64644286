use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// The fixed board presets offered to players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn config(self) -> BoardConfig {
        use Difficulty::*;
        match self {
            Easy => BoardConfig::new_unchecked((9, 9), 10),
            Medium => BoardConfig::new_unchecked((16, 16), 40),
            Hard => BoardConfig::new_unchecked((16, 30), 99),
        }
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
        }
    }

    /// Cycles easy, medium, hard and back to easy.
    pub const fn next(self) -> Self {
        use Difficulty::*;
        match self {
            Easy => Medium,
            Medium => Hard,
            Hard => Easy,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::UnknownDifficulty)
    }
}
