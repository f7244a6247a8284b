//! Random level generation
//!
//! Rejection sampling: scatter every object uniformly over the board, throw
//! the whole set away and redraw until all points are mutually at least
//! [`MIN_OBJECT_SPACING`] apart. The ship start and warp out take part in
//! the spacing check like everything else.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::Level;
use crate::consts::{EDGE_MARGIN, MIN_OBJECT_SPACING};

/// Generate a random level with the given board size and object counts.
///
/// The retry loop is unbounded; with the default eight objects on an 18x15
/// board roughly one draw in four passes the spacing check, so it converges
/// after a handful of iterations.
pub fn random_level(
    width: f32,
    height: f32,
    mailbox_count: usize,
    asteroid_count: usize,
    rng: &mut Pcg32,
) -> Level {
    // ship start + warp out + deliveries + hazards
    let total = 2 + mailbox_count + asteroid_count;
    let points = scatter_points(width, height, total, rng);

    Level {
        width,
        height,
        ship_start: points[0],
        warp_out: points[1],
        mailboxes: points[2..2 + mailbox_count].to_vec(),
        asteroids: points[2 + mailbox_count..].to_vec(),
        caption: String::new(),
        caption_pos: Vec2::ZERO,
    }
}

/// Draw `count` points uniformly in `[EDGE_MARGIN, dim - EDGE_MARGIN]`,
/// redrawing the entire set until the minimum pairwise distance is at
/// least [`MIN_OBJECT_SPACING`].
fn scatter_points(width: f32, height: f32, count: usize, rng: &mut Pcg32) -> Vec<Vec2> {
    loop {
        let points: Vec<Vec2> = (0..count)
            .map(|_| {
                Vec2::new(
                    EDGE_MARGIN + (width - 2.0 * EDGE_MARGIN) * rng.random::<f32>(),
                    EDGE_MARGIN + (height - 2.0 * EDGE_MARGIN) * rng.random::<f32>(),
                )
            })
            .collect();

        if well_spaced(&points) {
            return points;
        }
    }
}

/// True when every pair of points keeps the minimum spacing.
/// Squared distances, no sqrt.
fn well_spaced(points: &[Vec2]) -> bool {
    let limit = MIN_OBJECT_SPACING * MIN_OBJECT_SPACING;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            if a.distance_squared(*b) < limit {
                return false;
            }
        }
    }
    true
}
