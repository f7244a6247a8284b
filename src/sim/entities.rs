//! Proximity entities - mailboxes, asteroids, the warp out
//!
//! One tagged type covers all three kinds so the per-tick pass iterates a
//! single collection. Each entity answers two questions against the ship:
//! did anything change this tick (`update`), and are we touching
//! (`collision`). All distance math is squared, no sqrt.

use glam::Vec2;

use super::ship::Ship;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Delivery target; flips `delivered` on approach
    Mailbox,
    /// Static hazard; contact is always a crash
    Asteroid,
    /// Session exit; outcome depends on delivery completeness
    WarpOut,
}

/// A static object on the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceObject {
    pub kind: ObjectKind,
    pub pos: Vec2,
    /// Collision radius
    pub radius: f32,
    /// Proximity radius: delivery trigger for mailboxes, visual halo for
    /// the warp out
    pub approach_radius: f32,
    /// Mailboxes start undelivered. Asteroids and the warp out carry the
    /// flag pre-set so the all-delivered check passes over them; it gates
    /// nothing else.
    pub delivered: bool,
}

impl SpaceObject {
    pub fn mailbox(pos: Vec2) -> Self {
        Self {
            kind: ObjectKind::Mailbox,
            pos,
            radius: MAILBOX_RADIUS,
            approach_radius: MAILBOX_APPROACH_RADIUS,
            delivered: false,
        }
    }

    pub fn asteroid(pos: Vec2) -> Self {
        Self {
            kind: ObjectKind::Asteroid,
            pos,
            radius: ASTEROID_RADIUS,
            approach_radius: ASTEROID_RADIUS,
            delivered: true,
        }
    }

    pub fn warp_out(pos: Vec2) -> Self {
        Self {
            kind: ObjectKind::WarpOut,
            pos,
            radius: WARP_OUT_RADIUS,
            approach_radius: WARP_OUT_APPROACH_RADIUS,
            delivered: true,
        }
    }

    /// Per-tick state update against the new ship position. Only mailboxes
    /// have any: a one-way flip to delivered inside the approach radius.
    pub fn update(&mut self, ship: &Ship) {
        if self.kind == ObjectKind::Mailbox && !self.delivered {
            let dist_sq = ship.pos.distance_squared(self.pos);
            if dist_sq < self.approach_radius * self.approach_radius {
                self.delivered = true;
            }
        }
    }

    /// Collision predicate against the ship.
    ///
    /// Mailbox contact only counts as a collision under precision delivery
    /// (off by default); asteroids and the warp out are always live,
    /// delivered flag or not.
    pub fn collision(&self, ship: &Ship, precision_delivery: bool) -> bool {
        let dist_sq = ship.pos.distance_squared(self.pos);
        let limit = self.radius + ship.radius;
        let hit = dist_sq < limit * limit;
        match self.kind {
            ObjectKind::Mailbox => hit && precision_delivery,
            ObjectKind::Asteroid | ObjectKind::WarpOut => hit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship_at(x: f32, y: f32) -> Ship {
        Ship::new(Vec2::new(x, y), true)
    }

    #[test]
    fn test_mailbox_delivery_is_one_way() {
        let mut mailbox = SpaceObject::mailbox(Vec2::new(4.0, 4.0));
        assert!(!mailbox.delivered);

        // Outside the approach radius: nothing happens
        mailbox.update(&ship_at(4.0, 6.0));
        assert!(!mailbox.delivered);

        // Enter the approach radius
        mailbox.update(&ship_at(4.0, 5.0));
        assert!(mailbox.delivered);

        // Leave and come back: still delivered
        mailbox.update(&ship_at(9.0, 9.0));
        mailbox.update(&ship_at(4.0, 4.2));
        assert!(mailbox.delivered);
    }

    #[test]
    fn test_mailbox_collision_gated_by_precision_delivery() {
        let mailbox = SpaceObject::mailbox(Vec2::new(4.0, 4.0));
        let ship = ship_at(4.1, 4.0);

        // Well inside the inner radius, but the feature is off by default
        assert!(!mailbox.collision(&ship, false));
        assert!(mailbox.collision(&ship, true));
    }

    #[test]
    fn test_asteroid_collision_threshold() {
        let asteroid = SpaceObject::asteroid(Vec2::new(5.0, 4.0));
        // Combined radius 1.5 + 0.5 = 2.0
        assert!(asteroid.collision(&ship_at(6.9, 4.0), false));
        assert!(!asteroid.collision(&ship_at(7.1, 4.0), false));
    }

    #[test]
    fn test_asteroid_delivered_flag_does_not_gate_collision() {
        let mut asteroid = SpaceObject::asteroid(Vec2::new(5.0, 4.0));
        assert!(asteroid.delivered);
        asteroid.update(&ship_at(5.1, 4.0));
        assert!(asteroid.collision(&ship_at(5.1, 4.0), false));
    }

    #[test]
    fn test_warp_out_collision_threshold() {
        let warp = SpaceObject::warp_out(Vec2::new(9.0, 4.0));
        // Combined radius 0.15 + 0.5 = 0.65
        assert!(warp.collision(&ship_at(9.5, 4.0), false));
        assert!(!warp.collision(&ship_at(9.7, 4.0), false));
        // Approach radius is presentation only
        assert!(!warp.collision(&ship_at(10.0, 4.0), false));
    }
}
