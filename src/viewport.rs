//! Model-to-view transform
//!
//! The board lives in its own unit space; the renderer and the pointer both
//! speak screen pixels. The transform is an integer scale plus a centering
//! offset, computed once per session and passed around explicitly - the
//! simulation never touches screen state behind the scenes.

use glam::Vec2;

/// Uniform scale and offset mapping board units to screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Pixels per board unit
    pub scale: f32,
    /// Screen position of the board origin
    pub offset: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::identity()
    }
}

impl Viewport {
    /// One pixel per board unit, no offset. Used by headless drivers and
    /// tests, where pointer coordinates are already board coordinates.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// Fit a board onto a screen: largest whole-pixel scale that fits both
    /// axes, board centered with the slack split evenly.
    pub fn fit(board_width: f32, board_height: f32, screen_width: f32, screen_height: f32) -> Self {
        let scale = (screen_width / board_width)
            .min(screen_height / board_height)
            .floor();
        let offset = Vec2::new(
            ((screen_width - scale * board_width) / 2.0).floor(),
            ((screen_height - scale * board_height) / 2.0).floor(),
        );
        Self { scale, offset }
    }

    /// Map a board-space point to screen space.
    #[inline]
    pub fn model_to_view(&self, p: Vec2) -> Vec2 {
        p * self.scale + self.offset
    }
}
