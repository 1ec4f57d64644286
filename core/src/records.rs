use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Shown and compared against when a difficulty has no record yet.
pub const NO_RECORD_SECS: u32 = 999;

/// Best winning time per difficulty, in whole seconds.
///
/// The table is plain data, storing it somewhere is up to the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BestTimes {
    times: BTreeMap<Difficulty, u32>,
}

impl BestTimes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, difficulty: Difficulty) -> Option<u32> {
        self.times.get(&difficulty).copied()
    }

    pub fn display_secs(&self, difficulty: Difficulty) -> u32 {
        self.get(difficulty).unwrap_or(NO_RECORD_SECS)
    }

    /// Keeps `result` if it is a win faster than the current record, returns whether it was kept.
    pub fn record(&mut self, result: &GameResult) -> bool {
        if !result.won || result.elapsed_secs >= self.display_secs(result.difficulty) {
            return false;
        }

        log::debug!(
            "New best time for {}: {}s",
            result.difficulty,
            result.elapsed_secs
        );
        self.times.insert(result.difficulty, result.elapsed_secs);
        true
    }

    pub fn storage_key(difficulty: Difficulty) -> String {
        format!("minesweeper_best_{}", difficulty.name())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|_| GameError::MalformedRecords)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| {
            log::warn!("Discarding best times: {}", err);
            GameError::MalformedRecords
        })
    }
}
