//! Read-only presentation snapshots
//!
//! The simulation never calls into rendering; instead the driver pulls a
//! snapshot after each tick and draws from that. Everything here is a
//! plain copy of simulation state - mutating a snapshot changes nothing.

use glam::Vec2;

use super::entities::SpaceObject;
use super::session::Outcome;
use super::ship::Controls;

/// Ship state as the renderer needs it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipView {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Control flags drive the engine-fire sprites; hard mode's heading
    /// drives the hull rotation
    pub controls: Controls,
}

/// One frame's worth of drawable session state
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub board_width: f32,
    pub board_height: f32,
    /// Instruction text for the level, empty when there is none
    pub caption: String,
    pub caption_pos: Vec2,
    pub ship: ShipView,
    pub warp_out: SpaceObject,
    /// Mailboxes then asteroids, in level order
    pub objects: Vec<SpaceObject>,
    /// Seconds since the player first applied thrust this attempt
    pub elapsed_seconds: f32,
    /// True before the first thrust; shows the "Ready" indicator
    pub waiting: bool,
    pub status: Outcome,
}

impl Snapshot {
    /// Mailboxes still awaiting delivery
    pub fn undelivered_count(&self) -> usize {
        self.objects.iter().filter(|o| !o.delivered).count()
    }
}
