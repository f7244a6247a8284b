//! Level provider
//!
//! Each level is a fixed board with a ship start, a warp out, the mailboxes
//! to deliver to, and the asteroids to avoid. Levels come from a handcrafted
//! training table or from the seeded random generator; the standard and race
//! tables exist but have no entries yet.

pub mod random;
pub mod training;

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Which level table a session draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelMode {
    Random,
    Training,
    Standard,
    Race,
}

impl LevelMode {
    /// Number of authored levels in this mode's table
    pub fn level_count(&self) -> u32 {
        match self {
            // The random generator accepts any index
            LevelMode::Random => u32::MAX,
            LevelMode::Training => TRAINING_LEVEL_COUNT,
            // Defined but not yet authored
            LevelMode::Standard | LevelMode::Race => 0,
        }
    }
}

/// Requesting a level that does not exist is a fatal precondition
/// violation - a session must refuse to start, never substitute.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{mode:?} level {number} does not exist (available: 1..={available})")]
pub struct LevelError {
    pub mode: LevelMode,
    pub number: u32,
    pub available: u32,
}

/// Immutable geometry for one play session
///
/// All points lie within `[0, width] x [0, height]` for a well-formed level;
/// that is assumed by callers, not enforced here.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Board extent, origin at (0, 0), y down
    pub width: f32,
    pub height: f32,
    pub ship_start: Vec2,
    pub warp_out: Vec2,
    pub mailboxes: Vec<Vec2>,
    pub asteroids: Vec<Vec2>,
    /// Instruction text shown on the board (empty for most levels)
    pub caption: String,
    pub caption_pos: Vec2,
}

/// Fetch the level for `mode` and 1-based `number`.
///
/// `easy_controls` only affects instruction captions. The RNG is consumed
/// by random mode and untouched otherwise.
pub fn get_level(
    mode: LevelMode,
    number: u32,
    easy_controls: bool,
    rng: &mut Pcg32,
) -> Result<Level, LevelError> {
    match mode {
        LevelMode::Random => Ok(random::random_level(
            RANDOM_BOARD_WIDTH,
            RANDOM_BOARD_HEIGHT,
            RANDOM_MAILBOX_COUNT,
            RANDOM_ASTEROID_COUNT,
            rng,
        )),
        LevelMode::Training => training::training_level(number, easy_controls),
        LevelMode::Standard | LevelMode::Race => Err(LevelError {
            mode,
            number,
            available: 0,
        }),
    }
}
