//! Space Post - an arcade space delivery game
//!
//! A small post ship flies across a bounded star field, delivers parcels to
//! every mailbox, and warps out - without drifting off the board or clipping
//! an asteroid.
//!
//! Core modules:
//! - `sim`: Deterministic fixed-timestep simulation (ship physics,
//!   proximity entities, session state machine)
//! - `levels`: Level provider (handcrafted training table + seeded random
//!   generator)
//! - `stats`: Player preferences and delivery statistics record
//! - `viewport`: Model-to-view transform for pointer input and rendering

pub mod levels;
pub mod sim;
pub mod stats;
pub mod viewport;

pub use levels::{Level, LevelError, LevelMode};
pub use sim::{Outcome, Session, SessionConfig};
pub use stats::PlayerData;
pub use viewport::Viewport;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 0.05;
    /// Frame-rate cap for the driver loop (upper bound only, no catch-up)
    pub const FRAME_RATE_CAP: u32 = 40;

    /// Thrust magnitude in board units per second squared
    pub const ACCELERATION: f32 = 1.5;

    /// Collision radii, in board units
    pub const SHIP_RADIUS: f32 = 0.5;
    pub const MAILBOX_RADIUS: f32 = 0.25;
    /// Delivery trigger radius around a mailbox
    pub const MAILBOX_APPROACH_RADIUS: f32 = 1.25;
    pub const ASTEROID_RADIUS: f32 = 1.5;
    pub const WARP_OUT_RADIUS: f32 = 0.15;
    /// Visual halo of the warp out (presentation only)
    pub const WARP_OUT_APPROACH_RADIUS: f32 = 1.35;

    /// Random level defaults
    pub const RANDOM_BOARD_WIDTH: f32 = 18.0;
    pub const RANDOM_BOARD_HEIGHT: f32 = 15.0;
    pub const RANDOM_MAILBOX_COUNT: usize = 3;
    pub const RANDOM_ASTEROID_COUNT: usize = 3;
    /// Minimum pairwise spacing between generated points
    pub const MIN_OBJECT_SPACING: f32 = 2.0;
    /// Margin kept between generated points and the board edge
    pub const EDGE_MARGIN: f32 = 0.5;

    /// Number of handcrafted training levels
    pub const TRAINING_LEVEL_COUNT: u32 = 30;
}
