//! The post ship - kinematic body and control schemes
//!
//! Pure explicit Euler with no damping: thrust is the only force, so
//! velocity persists until the player counter-thrusts. Coordinates are
//! board units, y down (screen convention).

use glam::Vec2;

use super::input::Key;
use crate::consts::{ACCELERATION, SHIP_RADIUS};
use crate::levels::Level;
use crate::viewport::Viewport;

/// Control scheme, chosen once per session from the player record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Controls {
    /// Four independent thrusters on arrows/WASD. Opposing keys cancel.
    Easy {
        up: bool,
        down: bool,
        left: bool,
        right: bool,
    },
    /// One engine pointed away from the mouse cursor, fired while the left
    /// button is held. `heading` is retracked every tick.
    Hard { thrusting: bool, heading: f32 },
}

/// The player's delivery ship
#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub radius: f32,
    controls: Controls,
    /// True until the first nonzero acceleration; gates the session clock
    /// and the "Ready" indicator. Never reverts.
    waiting: bool,
}

impl Ship {
    pub fn new(pos: Vec2, easy_controls: bool) -> Self {
        let controls = if easy_controls {
            Controls::Easy {
                up: false,
                down: false,
                left: false,
                right: false,
            }
        } else {
            Controls::Hard {
                thrusting: false,
                heading: 0.0,
            }
        };
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            radius: SHIP_RADIUS,
            controls,
            waiting: true,
        }
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn waiting(&self) -> bool {
        self.waiting
    }

    /// Advance one fixed timestep: acceleration from control state, then
    /// velocity, then position. Position integrates the *updated* velocity.
    pub fn time_step(&mut self, dt: f32) {
        self.update_acceleration();
        self.vel += self.acc * dt;
        self.pos += self.vel * dt;
    }

    fn update_acceleration(&mut self) {
        let acc = match self.controls {
            Controls::Easy {
                up,
                down,
                left,
                right,
            } => {
                let x = if left && !right {
                    -ACCELERATION
                } else if right && !left {
                    ACCELERATION
                } else {
                    0.0
                };
                let y = if up && !down {
                    -ACCELERATION
                } else if down && !up {
                    ACCELERATION
                } else {
                    0.0
                };
                Vec2::new(x, y)
            }
            Controls::Hard {
                thrusting: true,
                heading,
            } => Vec2::new(-heading.sin(), -heading.cos()) * ACCELERATION,
            Controls::Hard { .. } => Vec2::ZERO,
        };

        if self.waiting && acc != Vec2::ZERO {
            self.waiting = false;
        }
        self.acc = acc;
    }

    /// Easy scheme: latch a directional thruster on key-down.
    pub fn key_down(&mut self, key: Key) {
        if let Controls::Easy {
            ref mut up,
            ref mut down,
            ref mut left,
            ref mut right,
        } = self.controls
        {
            match key {
                Key::Up | Key::W => *up = true,
                Key::Left | Key::A => *left = true,
                Key::Down | Key::S => *down = true,
                Key::Right | Key::D => *right = true,
                _ => {}
            }
        }
    }

    /// Easy scheme: release a directional thruster on key-up.
    pub fn key_up(&mut self, key: Key) {
        if let Controls::Easy {
            ref mut up,
            ref mut down,
            ref mut left,
            ref mut right,
        } = self.controls
        {
            match key {
                Key::Up | Key::W => *up = false,
                Key::Left | Key::A => *left = false,
                Key::Down | Key::S => *down = false,
                Key::Right | Key::D => *right = false,
                _ => {}
            }
        }
    }

    /// Hard scheme: engine follows the left mouse button.
    pub fn set_thrusting(&mut self, on: bool) {
        if let Controls::Hard {
            ref mut thrusting, ..
        } = self.controls
        {
            *thrusting = on;
        }
    }

    /// Hard scheme: retrack the heading toward the pointer, in view space.
    /// Note the argument order - x delta first - so heading 0 means the
    /// pointer sits directly below the ship on screen and thrust points up.
    pub fn track_pointer(&mut self, pointer: Vec2, view: &Viewport) {
        if let Controls::Hard {
            ref mut heading, ..
        } = self.controls
        {
            let ship_view = view.model_to_view(self.pos);
            *heading = (ship_view.x - pointer.x).atan2(ship_view.y - pointer.y);
        }
    }

    /// Terminal out-of-bounds check: the ship may overshoot the board edge
    /// by up to its radius before it counts as lost. No clamping.
    pub fn lost_in_space(&self, level: &Level) -> bool {
        self.pos.x > level.width + self.radius
            || self.pos.x < -self.radius
            || self.pos.y > level.height + self.radius
            || self.pos.y < -self.radius
    }
}
