//! Space Post headless demo driver
//!
//! Runs one scripted delivery on training level 1 with the simulation
//! loop a real frontend would use: drain input, tick at the fixed step,
//! snapshot for "rendering", cap the frame rate. No window, no assets.

use std::path::Path;
use std::time::{Duration, Instant};

use space_post::consts::{FRAME_RATE_CAP, SIM_DT};
use space_post::sim::{Disposition, FrameInput, InputEvent, Key};
use space_post::{LevelMode, Outcome, PlayerData, Session, SessionConfig};

fn main() {
    env_logger::init();

    let data_path = Path::new(space_post::stats::DATA_FILE);
    let data = PlayerData::load(data_path);

    let mut session = match Session::new(LevelMode::Training, 1, data, SessionConfig::default()) {
        Ok(session) => session,
        Err(err) => {
            log::error!("failed to start session: {err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "starting training level {} ({}x{} board)",
        session.level_number(),
        session.level().width,
        session.level().height
    );

    // Scripted pilot: hold right and fly straight at the worm hole
    let mut input = FrameInput::with_events(vec![InputEvent::KeyDown(Key::Right)]);
    let frame_budget = Duration::from_secs_f32(1.0 / FRAME_RATE_CAP as f32);

    let outcome = loop {
        let frame_start = Instant::now();

        let outcome = session.tick(&input);
        input = FrameInput::empty();

        if outcome != Outcome::Continue {
            break outcome;
        }

        let snapshot = session.snapshot();
        log::debug!(
            "t={:.2}s ship=({:.2}, {:.2}) undelivered={}",
            snapshot.elapsed_seconds,
            snapshot.ship.pos.x,
            snapshot.ship.pos.y,
            snapshot.undelivered_count()
        );

        // Upper bound only: a slow frame is not caught up, the simulation
        // step stays fixed at SIM_DT regardless
        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    };

    match outcome.disposition() {
        Disposition::Prompt { success: true } => {
            log::info!(
                "all mail delivered in {:.1}s ({} sim ticks)",
                session.elapsed_seconds(),
                (session.elapsed_seconds() / SIM_DT).round()
            );
        }
        Disposition::Prompt { success: false } => {
            log::info!("delivery failed: {outcome:?}");
        }
        Disposition::KeepPlaying | Disposition::End => {
            log::info!("session ended: {outcome:?}");
        }
    }

    let stats = session.into_stats();
    log::info!(
        "lifetime: {} attempts, {} complete, {} crashed, {} lost, {} early",
        stats.num_attempts,
        stats.num_complete,
        stats.num_crashes,
        stats.num_lost,
        stats.num_early
    );
    if let Err(err) = stats.save(data_path) {
        log::warn!("could not save player data: {err}");
    }
}
