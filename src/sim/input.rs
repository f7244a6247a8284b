//! Per-tick input model
//!
//! The session drains a queue of discrete events once per tick. The pointer
//! position is not an event: hard-mode heading tracking reads it every tick
//! whether or not the mouse moved.

use glam::Vec2;

/// Keys the simulation cares about. Everything else is dropped at the
/// windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// A discrete input event drained from the host's event queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close / host quit request
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    MouseDown(MouseButton),
    MouseUp(MouseButton),
}

/// Everything the session consumes in one tick
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// All events since the previous tick, in arrival order
    pub events: Vec<InputEvent>,
    /// Current pointer position in screen coordinates
    pub pointer: Vec2,
}

impl FrameInput {
    /// A frame with no events and the pointer at the origin
    pub fn empty() -> Self {
        Self::default()
    }

    /// Convenience for scripted drivers and tests
    pub fn with_events(events: Vec<InputEvent>) -> Self {
        Self {
            events,
            pointer: Vec2::ZERO,
        }
    }
}
