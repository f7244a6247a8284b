//! Handcrafted training levels
//!
//! Thirty levels, tuned by hand. The early ones teach one rule each; later
//! ones are layouts with names like "slalem" and "bowl" that stuck from the
//! design notebook.

use glam::Vec2;

use super::{Level, LevelError, LevelMode};
use crate::consts::TRAINING_LEVEL_COUNT;

fn pt(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Build training level `number` (1-based).
///
/// `easy_controls` selects the wording of the first level's instructions.
pub fn training_level(number: u32, easy_controls: bool) -> Result<Level, LevelError> {
    if number < 1 || number > TRAINING_LEVEL_COUNT {
        return Err(LevelError {
            mode: LevelMode::Training,
            number,
            available: TRAINING_LEVEL_COUNT,
        });
    }

    // (width, height, ship start, warp out, mailboxes, asteroids, caption)
    let (width, height, ship, warp, mailboxes, asteroids, caption): (
        f32,
        f32,
        Vec2,
        Vec2,
        Vec<Vec2>,
        Vec<Vec2>,
        &str,
    ) = match number {
        // trial level
        1 => (
            10.0,
            8.0,
            pt(1.0, 4.0),
            pt(9.0, 4.0),
            vec![],
            vec![],
            if easy_controls {
                "use arrow keys or WASD to fly to worm hole"
            } else {
                "fly to worm hole by clicking mouse to fire engines"
            },
        ),
        // learn to deliver
        2 => (
            10.0,
            8.0,
            pt(1.0, 4.0),
            pt(9.0, 4.0),
            vec![pt(4.0, 3.1)],
            vec![],
            "fly past mailbox to deliver parcel",
        ),
        // avoid crashing into asteroids
        3 => (
            10.0,
            8.0,
            pt(6.0, 4.0),
            pt(9.0, 4.0),
            vec![pt(3.0, 4.0)],
            vec![pt(1.0, 4.0)],
            "it takes time to slow down, avoid crashing into the asteroid",
        ),
        // don't leave screen
        4 => (
            10.0,
            8.0,
            pt(2.0, 4.0),
            pt(9.5, 7.5),
            vec![pt(0.5, 0.5), pt(0.5, 7.5), pt(9.5, 0.5)],
            vec![pt(7.0, 4.0)],
            "remain within the delivery area",
        ),
        // don't warp early
        5 => (
            10.0,
            8.0,
            pt(1.0, 4.0),
            pt(5.0, 4.0),
            vec![pt(3.0, 4.0), pt(7.0, 4.0)],
            vec![pt(5.0, 1.0)],
            "deliver all parcels before warping out",
        ),
        // doubles
        6 => (
            14.0,
            12.0,
            pt(1.0, 6.0),
            pt(13.0, 6.0),
            vec![pt(5.0, 5.0), pt(5.0, 7.0), pt(9.0, 5.0), pt(9.0, 7.0)],
            vec![pt(12.0, 3.0), pt(12.0, 9.0)],
            "",
        ),
        // centered doubles
        7 => (
            14.0,
            12.0,
            pt(1.0, 4.0),
            pt(7.0, 6.0),
            vec![pt(5.0, 4.0), pt(5.0, 8.0), pt(9.0, 4.0), pt(9.0, 8.0)],
            vec![pt(11.0, 11.0)],
            "",
        ),
        // orbit 1
        8 => (
            14.0,
            12.0,
            pt(12.0, 4.0),
            pt(9.0, 9.0),
            vec![pt(7.0, 4.0), pt(7.0, 8.0), pt(2.0, 6.0)],
            vec![pt(7.0, 6.0)],
            "",
        ),
        // orbit 2
        9 => (
            14.0,
            12.0,
            pt(12.0, 4.0),
            pt(9.0, 9.0),
            vec![pt(7.0, 4.0), pt(7.0, 8.0), pt(5.0, 6.0)],
            vec![pt(7.0, 6.0)],
            "",
        ),
        // slalem
        10 => (
            14.0,
            12.0,
            pt(1.0, 0.85),
            pt(13.0, 11.11),
            vec![pt(5.0, 4.27), pt(9.0, 7.69)],
            vec![pt(3.0, 2.56), pt(7.0, 5.98), pt(11.0, 9.4)],
            "",
        ),
        // box 1
        11 => (
            14.0,
            12.0,
            pt(7.0, 6.0),
            pt(7.0, 1.0),
            vec![pt(7.0, 11.0), pt(1.0, 6.0), pt(13.0, 6.0)],
            vec![pt(4.0, 3.0), pt(4.0, 9.0), pt(10.0, 3.0), pt(10.0, 9.0)],
            "",
        ),
        // box 2
        12 => (
            14.0,
            12.0,
            pt(1.0, 6.0),
            pt(11.0, 6.0),
            vec![pt(3.0, 6.0), pt(7.0, 2.0), pt(7.0, 10.0)],
            vec![pt(4.0, 3.0), pt(4.0, 9.0), pt(10.0, 3.0), pt(10.0, 9.0)],
            "",
        ),
        // skimmer
        13 => (
            14.0,
            12.0,
            pt(12.0, 5.0),
            pt(2.0, 5.0),
            vec![pt(5.0, 8.4), pt(7.0, 8.4), pt(9.0, 8.4)],
            vec![pt(4.0, 10.0), pt(6.0, 10.0), pt(8.0, 10.0), pt(10.0, 10.0)],
            "",
        ),
        // scatter 1
        14 => (
            16.0,
            12.0,
            pt(9.0, 9.0),
            pt(15.0, 4.0),
            vec![pt(8.0, 1.0), pt(12.0, 9.0), pt(2.5, 10.2)],
            vec![pt(12.0, 4.0), pt(5.0, 9.5), pt(3.0, 8.0)],
            "",
        ),
        // scatter 2
        15 => (
            16.0,
            12.0,
            pt(14.0, 7.0),
            pt(8.0, 6.0),
            vec![pt(8.5, 11.0), pt(13.0, 2.0), pt(2.0, 1.0)],
            vec![pt(7.0, 9.0), pt(9.0, 9.0), pt(6.0, 4.0)],
            "",
        ),
        // scatter 3
        16 => (
            16.0,
            12.0,
            pt(3.0, 2.0),
            pt(2.0, 11.0),
            vec![pt(15.0, 11.5), pt(12.0, 2.7), pt(4.0, 8.0)],
            vec![pt(8.5, 1.0), pt(9.3, 5.4), pt(13.3, 9.3)],
            "",
        ),
        // scatter 4
        17 => (
            16.0,
            12.0,
            pt(9.0, 2.0),
            pt(15.0, 5.0),
            vec![pt(3.0, 11.0), pt(6.2, 6.0), pt(10.5, 7.4)],
            vec![pt(3.8, 2.0), pt(4.5, 4.2), pt(8.5, 7.5), pt(10.0, 5.7)],
            "",
        ),
        // scatter 5
        18 => (
            16.0,
            12.0,
            pt(2.0, 2.0),
            pt(15.0, 1.0),
            vec![pt(6.5, 5.0), pt(6.0, 7.0), pt(12.0, 10.5)],
            vec![pt(5.0, 2.0), pt(4.0, 7.0), pt(10.0, 6.0)],
            "",
        ),
        // scatter 6
        19 => (
            16.0,
            12.0,
            pt(8.0, 6.0),
            pt(8.0, 11.0),
            vec![pt(8.0, 1.0), pt(3.0, 4.0), pt(13.0, 8.0)],
            vec![pt(1.0, 4.0), pt(3.0, 6.0), pt(13.0, 6.0), pt(15.0, 8.0)],
            "",
        ),
        // gaps 1
        20 => (
            16.0,
            12.0,
            pt(15.0, 1.0),
            pt(4.0, 9.0),
            vec![pt(3.0, 4.0), pt(7.0, 6.5), pt(12.0, 10.0)],
            vec![pt(15.5, 6.0), pt(10.0, 0.5), pt(11.0, 5.0)],
            "",
        ),
        // gaps 2
        21 => (
            16.0,
            12.0,
            pt(12.0, 3.5),
            pt(13.0, 8.5),
            vec![pt(6.0, 3.5), pt(6.0, 8.5), pt(3.5, 6.0)],
            vec![pt(6.0, 6.0), pt(2.5, 2.5), pt(2.5, 9.5)],
            "",
        ),
        // gaps 3
        22 => (
            16.0,
            12.0,
            pt(15.0, 6.0),
            pt(1.0, 6.0),
            vec![pt(4.0, 6.0), pt(11.0, 4.0), pt(11.0, 9.0)],
            vec![pt(8.0, 1.1), pt(8.0, 3.6), pt(8.0, 10.9), pt(8.0, 8.4)],
            "",
        ),
        // zoom 1
        23 => (
            24.0,
            18.0,
            pt(22.0, 16.0),
            pt(2.0, 2.0),
            vec![
                pt(2.4, 16.0),
                pt(7.2, 16.0),
                pt(12.0, 16.0),
                pt(16.8, 16.0),
                pt(7.2, 2.0),
                pt(12.0, 2.0),
                pt(16.8, 2.0),
                pt(21.6, 2.0),
                pt(7.2, 12.6),
                pt(12.0, 9.0),
                pt(16.8, 5.4),
            ],
            vec![],
            "",
        ),
        // zoom 2
        24 => (
            24.0,
            18.0,
            pt(2.0, 16.0),
            pt(22.0, 2.0),
            vec![pt(2.0, 2.0), pt(22.0, 16.0), pt(12.0, 9.0)],
            vec![pt(12.0, 12.0), pt(9.0, 9.75), pt(12.0, 6.0), pt(15.0, 8.25)],
            "",
        ),
        // gaps 2b
        25 => (
            16.0,
            12.0,
            pt(3.0, 3.5),
            pt(13.0, 3.5),
            vec![pt(10.5, 6.0), pt(8.0, 8.5), pt(5.5, 6.0)],
            vec![pt(8.0, 6.0), pt(10.5, 8.5), pt(5.5, 8.5)],
            "",
        ),
        // layers 1
        26 => (
            16.0,
            12.0,
            pt(13.0, 1.0),
            pt(2.0, 6.0),
            vec![pt(8.0, 6.0), pt(6.0, 6.0), pt(10.0, 6.0)],
            vec![
                pt(8.0, 2.7),
                pt(6.0, 2.7),
                pt(10.0, 2.7),
                pt(8.0, 9.3),
                pt(6.0, 9.3),
                pt(10.0, 9.3),
            ],
            "",
        ),
        // layers 2
        27 => (
            16.0,
            12.0,
            pt(13.0, 1.0),
            pt(2.0, 6.0),
            vec![pt(8.0, 6.0), pt(6.0, 6.0), pt(10.0, 6.0)],
            vec![
                pt(8.0, 3.5),
                pt(6.0, 3.5),
                pt(10.0, 3.5),
                pt(8.0, 8.5),
                pt(6.0, 8.5),
                pt(10.0, 8.5),
            ],
            "",
        ),
        // layers 3
        28 => (
            16.0,
            12.0,
            pt(14.0, 6.0),
            pt(2.0, 6.0),
            vec![
                pt(8.0, 3.7),
                pt(6.0, 3.7),
                pt(10.0, 3.7),
                pt(8.0, 8.3),
                pt(6.0, 8.3),
                pt(10.0, 8.3),
            ],
            vec![pt(8.0, 6.0), pt(6.0, 6.0), pt(10.0, 6.0)],
            "",
        ),
        // bowl
        29 => (
            16.0,
            12.0,
            pt(2.0, 2.0),
            pt(14.0, 2.0),
            vec![pt(8.0, 5.5), pt(7.5, 6.0), pt(8.5, 6.0)],
            vec![
                pt(7.0, 2.0),
                pt(5.0, 3.0),
                pt(4.0, 5.0),
                pt(4.0, 7.0),
                pt(5.5, 8.5),
                pt(9.0, 2.0),
                pt(11.0, 3.0),
                pt(12.0, 5.0),
                pt(12.0, 7.0),
                pt(10.5, 8.5),
            ],
            "",
        ),
        // on asteroids
        30 => (
            16.0,
            12.0,
            pt(14.5, 1.5),
            pt(1.5, 10.5),
            vec![
                pt(3.42444, 1.32993),
                pt(4.10728, 8.55708),
                pt(9.38505, 6.00344),
                pt(12.15835, 9.32917),
            ],
            vec![pt(2.0, 1.8), pt(5.5, 8.0), pt(10.5, 5.0), pt(13.5, 10.0)],
            "",
        ),
        _ => unreachable!("range checked above"),
    };

    Ok(Level {
        width,
        height,
        ship_start: ship,
        warp_out: warp,
        mailboxes,
        asteroids,
        caption: caption.to_string(),
        caption_pos: pt(0.5, 0.5),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_1_geometry() {
        let level = training_level(1, true).unwrap();
        assert_eq!(level.width, 10.0);
        assert_eq!(level.height, 8.0);
        assert_eq!(level.ship_start, pt(1.0, 4.0));
        assert_eq!(level.warp_out, pt(9.0, 4.0));
        assert!(level.mailboxes.is_empty());
        assert!(level.asteroids.is_empty());
    }

    #[test]
    fn test_level_1_caption_tracks_control_scheme() {
        let easy = training_level(1, true).unwrap();
        let hard = training_level(1, false).unwrap();
        assert!(easy.caption.contains("arrow keys"));
        assert!(hard.caption.contains("mouse"));
        assert_ne!(easy.caption, hard.caption);
    }

    #[test]
    fn test_out_of_range_numbers_error() {
        assert!(training_level(0, true).is_err());
        let err = training_level(31, true).unwrap_err();
        assert_eq!(err.number, 31);
        assert_eq!(err.available, TRAINING_LEVEL_COUNT);
    }

    #[test]
    fn test_all_levels_are_well_formed() {
        for number in 1..=TRAINING_LEVEL_COUNT {
            let level = training_level(number, true).unwrap();
            let mut points = vec![level.ship_start, level.warp_out];
            points.extend(&level.mailboxes);
            points.extend(&level.asteroids);
            for p in points {
                assert!(
                    p.x >= 0.0 && p.x <= level.width && p.y >= 0.0 && p.y <= level.height,
                    "level {number}: point {p} outside {}x{} board",
                    level.width,
                    level.height
                );
            }
        }
    }
}
