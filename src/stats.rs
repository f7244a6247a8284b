//! Player preferences and delivery statistics
//!
//! One small JSON record holds the chosen control scheme, per-level
//! completion times for the training levels, and lifetime outcome counters.
//! Field names stay camelCase on disk so records written by earlier builds
//! keep loading.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TRAINING_LEVEL_COUNT;

/// Default on-disk location of the player data record
pub const DATA_FILE: &str = "data.json";

/// Persisted player record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerData {
    /// Selected control scheme; read once at session creation
    pub easy_controls: bool,
    /// Completion times per training level, append-only, easy scheme
    pub easy_level_records: Vec<Vec<f32>>,
    /// Completion times per training level, append-only, hard scheme
    pub hard_level_records: Vec<Vec<f32>>,
    /// Total attempts started (includes replays and level advances)
    pub num_attempts: u32,
    pub num_crashes: u32,
    pub num_lost: u32,
    pub num_early: u32,
    pub num_complete: u32,
}

impl Default for PlayerData {
    fn default() -> Self {
        let blank = vec![Vec::new(); TRAINING_LEVEL_COUNT as usize];
        Self {
            easy_controls: true,
            easy_level_records: blank.clone(),
            hard_level_records: blank,
            num_attempts: 0,
            num_crashes: 0,
            num_lost: 0,
            num_early: 0,
            num_complete: 0,
        }
    }
}

impl PlayerData {
    /// Load the record from `path`, falling back to the default record if
    /// the file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    log::info!("Loaded player data from {}", path.display());
                    data
                }
                Err(err) => {
                    log::warn!(
                        "Player data in {} unreadable ({err}), using defaults",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No player data at {}, starting fresh", path.display());
                Self::default()
            }
        }
    }

    /// Write the record to `path` as JSON.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Player data saved to {}", path.display());
        Ok(())
    }

    /// Append a completion time to the record list for a training level.
    /// `level_number` is 1-based.
    pub fn record_time(&mut self, level_number: u32, easy_controls: bool, seconds: f32) {
        let records = if easy_controls {
            &mut self.easy_level_records
        } else {
            &mut self.hard_level_records
        };
        if let Some(times) = records.get_mut(level_number as usize - 1) {
            times.push(seconds);
        }
    }

    /// Best recorded time for a training level under the given scheme.
    pub fn best_time(&self, level_number: u32, easy_controls: bool) -> Option<f32> {
        let records = if easy_controls {
            &self.easy_level_records
        } else {
            &self.hard_level_records
        };
        records
            .get(level_number as usize - 1)?
            .iter()
            .copied()
            .min_by(|a, b| a.total_cmp(b))
    }
}
