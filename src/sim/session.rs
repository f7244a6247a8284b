//! Session state machine
//!
//! One `Session` owns everything a single play-through needs: the level
//! geometry, the ship, the proximity entities, the clock, and the player
//! record it updates. The driver calls `tick` once per fixed timestep and
//! reads the returned [`Outcome`]; terminal outcomes stop the attempt and
//! map (via [`Disposition`]) to an end-of-attempt prompt whose answer comes
//! back as a [`LifecycleCommand`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entities::SpaceObject;
use super::input::{FrameInput, InputEvent, Key, MouseButton};
use super::ship::{Controls, Ship};
use super::snapshot::{ShipView, Snapshot};
use crate::consts::{SIM_DT, TRAINING_LEVEL_COUNT};
use crate::levels::{self, Level, LevelError, LevelMode};
use crate::stats::PlayerData;
use crate::viewport::Viewport;

/// Per-tick gameplay outcome. `Continue` keeps the attempt running; all
/// other values are terminal for the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Drifted off the board
    Lost,
    /// Hit an asteroid
    Crashed,
    /// Warped out with undelivered mail
    Early,
    /// Warped out with all mail delivered
    Complete,
    /// Player backed out to the menu (Escape or Menu command)
    Abort,
    /// Host asked to shut down
    Quit,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Continue
    }

    /// Translate a gameplay outcome into what the driver does next.
    pub fn disposition(self) -> Disposition {
        match self {
            Outcome::Continue => Disposition::KeepPlaying,
            Outcome::Lost | Outcome::Crashed | Outcome::Early => {
                Disposition::Prompt { success: false }
            }
            Outcome::Complete => Disposition::Prompt { success: true },
            Outcome::Abort | Outcome::Quit => Disposition::End,
        }
    }
}

/// Driver-facing mapping from outcomes to control flow. Gameplay outcomes
/// and menu navigation are deliberately separate vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Keep ticking the session
    KeepPlaying,
    /// Attempt over: offer Menu / Replay / New
    Prompt { success: bool },
    /// Session over: hand control back to the caller
    End,
}

/// The player's answer to the end-of-attempt prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleCommand {
    /// Back to the main menu; ends the session
    Menu,
    /// Same level again from scratch
    Replay,
    /// Advance to the next level (wrapping past the last one)
    New,
}

/// Session construction parameters. Everything the original build kept in
/// process globals travels here instead.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Seed for random level generation (random mode only)
    pub seed: u64,
    /// Screen transform for pointer-heading math and snapshots
    pub viewport: Viewport,
    /// Make mailbox contact crash-capable (dormant feature, off by default)
    pub precision_delivery: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            viewport: Viewport::identity(),
            precision_delivery: false,
        }
    }
}

/// A running play session over one level
#[derive(Debug)]
pub struct Session {
    mode: LevelMode,
    level_number: u32,
    level: Level,
    ship: Ship,
    warp_out: SpaceObject,
    /// Mailboxes then asteroids, in level order
    objects: Vec<SpaceObject>,
    rng: Pcg32,
    viewport: Viewport,
    precision_delivery: bool,
    elapsed_ticks: u64,
    status: Outcome,
    data: PlayerData,
}

impl Session {
    /// Start a session on the given level. Counts as an attempt.
    ///
    /// Errors when the level does not exist; a session never starts on a
    /// substitute level.
    pub fn new(
        mode: LevelMode,
        level_number: u32,
        data: PlayerData,
        config: SessionConfig,
    ) -> Result<Self, LevelError> {
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let level = levels::get_level(mode, level_number, data.easy_controls, &mut rng)?;
        Ok(Self::assemble(mode, level_number, level, rng, data, config))
    }

    fn assemble(
        mode: LevelMode,
        level_number: u32,
        level: Level,
        rng: Pcg32,
        mut data: PlayerData,
        config: SessionConfig,
    ) -> Self {
        data.num_attempts += 1;
        let mut session = Self {
            mode,
            level_number,
            level,
            // Placeholders; build_model fills these from the level
            ship: Ship::new(Vec2::ZERO, data.easy_controls),
            warp_out: SpaceObject::warp_out(Vec2::ZERO),
            objects: Vec::new(),
            rng,
            viewport: config.viewport,
            precision_delivery: config.precision_delivery,
            elapsed_ticks: 0,
            status: Outcome::Continue,
            data,
        };
        session.build_model();
        session
    }

    /// Rebuild ship and entities from the current level geometry.
    fn build_model(&mut self) {
        self.ship = Ship::new(self.level.ship_start, self.data.easy_controls);
        self.warp_out = SpaceObject::warp_out(self.level.warp_out);
        self.objects = self
            .level
            .mailboxes
            .iter()
            .map(|&p| SpaceObject::mailbox(p))
            .chain(self.level.asteroids.iter().map(|&p| SpaceObject::asteroid(p)))
            .collect();
    }

    /// Advance the session by one fixed timestep.
    ///
    /// Order per tick: input resolution (quit/abort short-circuit), clock
    /// gate, physics, proximity updates, end conditions. Returns the
    /// session status after this tick; terminal statuses latch.
    pub fn tick(&mut self, input: &FrameInput) -> Outcome {
        if self.status.is_terminal() {
            return self.status;
        }

        if let Some(outcome) = self.resolve_events(input) {
            self.status = outcome;
            return outcome;
        }

        // The clock only starts once the player first applies thrust
        if self.ship.waiting() {
            self.elapsed_ticks = 0;
        }

        self.ship.time_step(SIM_DT);
        if !self.ship.waiting() {
            self.elapsed_ticks += 1;
        }

        for obj in &mut self.objects {
            obj.update(&self.ship);
        }

        self.check_end_conditions();
        self.status
    }

    /// Drain the tick's input events. Quit and Escape end the tick
    /// immediately; everything else updates ship control state.
    fn resolve_events(&mut self, input: &FrameInput) -> Option<Outcome> {
        for event in &input.events {
            match *event {
                InputEvent::Quit => return Some(Outcome::Quit),
                InputEvent::KeyDown(Key::Escape) => return Some(Outcome::Abort),
                InputEvent::KeyDown(key) => self.ship.key_down(key),
                InputEvent::KeyUp(key) => self.ship.key_up(key),
                InputEvent::MouseDown(MouseButton::Left) => self.ship.set_thrusting(true),
                InputEvent::MouseUp(MouseButton::Left) => self.ship.set_thrusting(false),
                InputEvent::MouseDown(_) | InputEvent::MouseUp(_) => {}
            }
        }
        // Hard mode reads the pointer every tick, events or not
        self.ship.track_pointer(input.pointer, &self.viewport);
        None
    }

    /// Evaluate end conditions in fixed source order. The checks are
    /// deliberately independent rather than chained: a crash observed on
    /// the same tick as going out of bounds overwrites `Lost`, and both
    /// counters increment. Kept exactly as the original behaves.
    fn check_end_conditions(&mut self) {
        let mut status = self.status;

        if self.ship.lost_in_space(&self.level) {
            status = Outcome::Lost;
            self.data.num_lost += 1;
        }

        if self
            .objects
            .iter()
            .any(|obj| obj.collision(&self.ship, self.precision_delivery))
        {
            status = Outcome::Crashed;
            self.data.num_crashes += 1;
        }

        // Zero mailboxes: vacuously all delivered
        let all_delivered = self.objects.iter().all(|obj| obj.delivered);
        let at_warp_out = self.warp_out.collision(&self.ship, self.precision_delivery);
        if at_warp_out && !all_delivered {
            status = Outcome::Early;
            self.data.num_early += 1;
        } else if at_warp_out && all_delivered {
            status = Outcome::Complete;
            self.data.num_complete += 1;
            self.record_completion();
        }

        self.status = status;
    }

    /// Store the completion time: training mode only, into the record list
    /// matching this session's control scheme.
    fn record_completion(&mut self) {
        if self.mode != LevelMode::Training {
            return;
        }
        let seconds = (self.elapsed_seconds() * 10.0).round() / 10.0;
        let easy = matches!(self.ship.controls(), Controls::Easy { .. });
        self.data.record_time(self.level_number, easy, seconds);
    }

    /// Apply the player's answer to the end-of-attempt prompt.
    ///
    /// `Replay` and `New` resume the session with `Continue`; `Menu` ends
    /// it with `Abort`. The only fallible path is `New` reaching an
    /// unauthored level table.
    pub fn apply(&mut self, command: LifecycleCommand) -> Result<Outcome, LevelError> {
        match command {
            LifecycleCommand::Menu => {
                self.status = Outcome::Abort;
            }
            LifecycleCommand::Replay => {
                self.build_model();
                self.restart_attempt();
            }
            LifecycleCommand::New => {
                self.level_number += 1;
                if self.level_number > TRAINING_LEVEL_COUNT {
                    self.level_number = 1;
                }
                self.level = levels::get_level(
                    self.mode,
                    self.level_number,
                    self.data.easy_controls,
                    &mut self.rng,
                )?;
                self.build_model();
                self.restart_attempt();
            }
        }
        Ok(self.status)
    }

    fn restart_attempt(&mut self) {
        self.elapsed_ticks = 0;
        self.status = Outcome::Continue;
        self.data.num_attempts += 1;
    }

    /// Read-only view of the session for presentation.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board_width: self.level.width,
            board_height: self.level.height,
            caption: self.level.caption.clone(),
            caption_pos: self.level.caption_pos,
            ship: ShipView {
                pos: self.ship.pos,
                vel: self.ship.vel,
                controls: self.ship.controls(),
            },
            warp_out: self.warp_out,
            objects: self.objects.clone(),
            elapsed_seconds: self.elapsed_seconds(),
            waiting: self.ship.waiting(),
            status: self.status,
        }
    }

    /// Seconds since the player first applied thrust this attempt.
    /// Simulation time, not wall time: ticks times the fixed step.
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_ticks as f32 * SIM_DT
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn mode(&self) -> LevelMode {
        self.mode
    }

    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn stats(&self) -> &PlayerData {
        &self.data
    }

    /// Hand the (updated) player record back for saving.
    pub fn into_stats(self) -> PlayerData {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entities::ObjectKind;

    /// Tick with right thrust held until the session leaves `Continue`.
    fn fly_right(session: &mut Session) -> Outcome {
        let first = FrameInput::with_events(vec![InputEvent::KeyDown(Key::Right)]);
        let mut outcome = session.tick(&first);
        let empty = FrameInput::empty();
        let mut ticks = 0;
        while outcome == Outcome::Continue {
            outcome = session.tick(&empty);
            ticks += 1;
            assert!(ticks < 10_000, "session never terminated");
        }
        outcome
    }

    fn training_session(level_number: u32) -> Session {
        Session::new(
            LevelMode::Training,
            level_number,
            PlayerData::default(),
            SessionConfig::default(),
        )
        .unwrap()
    }

    fn custom_session(level: Level) -> Session {
        Session::assemble(
            LevelMode::Training,
            1,
            level,
            Pcg32::seed_from_u64(0),
            PlayerData::default(),
            SessionConfig::default(),
        )
    }

    fn open_board() -> Level {
        Level {
            width: 10.0,
            height: 8.0,
            ship_start: Vec2::new(1.0, 4.0),
            warp_out: Vec2::new(9.0, 4.0),
            mailboxes: vec![],
            asteroids: vec![],
            caption: String::new(),
            caption_pos: Vec2::ZERO,
        }
    }

    #[test]
    fn test_straight_run_completes() {
        // No mailboxes: all-delivered holds vacuously
        let mut session = training_session(1);
        assert_eq!(session.stats().num_attempts, 1);

        let outcome = fly_right(&mut session);
        assert_eq!(outcome, Outcome::Complete);
        assert!(session.elapsed_seconds() > 0.0);
        assert_eq!(session.stats().num_complete, 1);
        // Completion time lands in the easy records for level 1
        assert_eq!(session.stats().easy_level_records[0].len(), 1);
        assert!(session.stats().easy_level_records[0][0] > 0.0);
    }

    #[test]
    fn test_asteroid_on_the_path_crashes() {
        let mut level = open_board();
        level.asteroids.push(Vec2::new(5.0, 4.0));
        let mut session = custom_session(level);

        let outcome = fly_right(&mut session);
        assert_eq!(outcome, Outcome::Crashed);
        assert_eq!(session.stats().num_crashes, 1);
        assert_eq!(session.stats().num_complete, 0);
        // Crashed well before the warp out
        assert!(session.snapshot().ship.pos.x < 9.0);
    }

    #[test]
    fn test_undelivered_mailbox_means_early() {
        let mut level = open_board();
        // Off the flight path: the ship cruises y=4, the box sits at (4,1)
        level.mailboxes.push(Vec2::new(4.0, 1.0));
        let mut session = custom_session(level);

        let outcome = fly_right(&mut session);
        assert_eq!(outcome, Outcome::Early);
        assert_eq!(session.stats().num_early, 1);
        assert_eq!(session.stats().num_attempts, 1);
        let snapshot = session.snapshot();
        let mailbox = snapshot
            .objects
            .iter()
            .find(|o| o.kind == ObjectKind::Mailbox)
            .unwrap();
        assert!(!mailbox.delivered);
    }

    #[test]
    fn test_mailbox_on_the_path_delivers_then_completes() {
        let mut level = open_board();
        level.mailboxes.push(Vec2::new(4.0, 3.5));
        let mut session = custom_session(level);

        let outcome = fly_right(&mut session);
        assert_eq!(outcome, Outcome::Complete);
        assert_eq!(session.stats().num_complete, 1);
        assert!(session.snapshot().objects[0].delivered);
    }

    #[test]
    fn test_drifting_off_board_is_lost() {
        let mut level = open_board();
        // Move the warp out of the flight path so the ship sails off the edge
        level.warp_out = Vec2::new(9.0, 1.0);
        let mut session = custom_session(level);

        let outcome = fly_right(&mut session);
        assert_eq!(outcome, Outcome::Lost);
        assert_eq!(session.stats().num_lost, 1);
    }

    #[test]
    fn test_same_tick_crash_overwrites_lost() {
        // The end checks are independent ifs in source order; when both fire
        // on one tick the later write wins and both counters move.
        let mut level = open_board();
        level.asteroids.push(Vec2::new(11.5, 4.0));
        let mut session = custom_session(level);

        // Out of bounds (x > 10.5) and within 2.0 of the asteroid
        session.ship.pos = Vec2::new(11.0, 4.0);
        let outcome = session.tick(&FrameInput::empty());

        assert_eq!(outcome, Outcome::Crashed);
        assert_eq!(session.stats().num_lost, 1);
        assert_eq!(session.stats().num_crashes, 1);
    }

    #[test]
    fn test_escape_aborts_without_stepping_physics() {
        let mut session = training_session(1);
        let before = session.snapshot().ship.pos;

        let input = FrameInput::with_events(vec![InputEvent::KeyDown(Key::Escape)]);
        assert_eq!(session.tick(&input), Outcome::Abort);
        assert_eq!(session.snapshot().ship.pos, before);
        // No gameplay counter moved
        assert_eq!(session.stats().num_lost, 0);
        assert_eq!(session.stats().num_crashes, 0);
    }

    #[test]
    fn test_quit_event_wins_immediately() {
        let mut session = training_session(1);
        let input = FrameInput::with_events(vec![InputEvent::Quit]);
        assert_eq!(session.tick(&input), Outcome::Quit);
        // Latched: further ticks stay terminal
        assert_eq!(session.tick(&FrameInput::empty()), Outcome::Quit);
    }

    #[test]
    fn test_replay_rebuilds_the_same_level() {
        let mut level = open_board();
        level.asteroids.push(Vec2::new(5.0, 4.0));
        level.mailboxes.push(Vec2::new(3.0, 3.5));
        let mut session = custom_session(level.clone());

        let outcome = fly_right(&mut session);
        assert_eq!(outcome, Outcome::Crashed);

        session.apply(LifecycleCommand::Replay).unwrap();
        assert_eq!(session.status(), Outcome::Continue);
        assert_eq!(session.stats().num_attempts, 2);
        assert_eq!(session.elapsed_seconds(), 0.0);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.ship.pos, level.ship_start);
        // Delivered flags reset with the model
        assert!(
            snapshot
                .objects
                .iter()
                .all(|o| o.kind != ObjectKind::Mailbox || !o.delivered)
        );
    }

    #[test]
    fn test_new_advances_and_wraps_to_one() {
        let mut session = training_session(30);
        session.apply(LifecycleCommand::New).unwrap();
        assert_eq!(session.level_number(), 1);
        assert_eq!(session.status(), Outcome::Continue);
        assert_eq!(session.stats().num_attempts, 2);

        let mut session = training_session(1);
        session.apply(LifecycleCommand::New).unwrap();
        assert_eq!(session.level_number(), 2);
    }

    #[test]
    fn test_menu_command_aborts() {
        let mut session = training_session(1);
        let outcome = session.apply(LifecycleCommand::Menu).unwrap();
        assert_eq!(outcome, Outcome::Abort);
        assert_eq!(outcome.disposition(), Disposition::End);
    }

    #[test]
    fn test_invalid_level_refuses_construction() {
        let err = Session::new(
            LevelMode::Training,
            31,
            PlayerData::default(),
            SessionConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.number, 31);

        assert!(
            Session::new(
                LevelMode::Standard,
                1,
                PlayerData::default(),
                SessionConfig::default(),
            )
            .is_err()
        );
    }

    #[test]
    fn test_session_is_debug_formattable() {
        // Result combinators on Result<Session, _> need Session: Debug
        let session = training_session(1);
        let rendered = format!("{session:?}");
        assert!(rendered.contains("Training"));
    }

    #[test]
    fn test_clock_held_while_waiting() {
        let mut session = training_session(1);
        for _ in 0..20 {
            session.tick(&FrameInput::empty());
        }
        assert_eq!(session.elapsed_seconds(), 0.0);
        assert!(session.snapshot().waiting);

        session.tick(&FrameInput::with_events(vec![InputEvent::KeyDown(Key::Right)]));
        session.tick(&FrameInput::empty());
        assert!(session.elapsed_seconds() > 0.0);
        assert!(!session.snapshot().waiting);
    }

    #[test]
    fn test_precision_delivery_makes_mailboxes_crash() {
        let mut level = open_board();
        level.mailboxes.push(Vec2::new(5.0, 4.0));
        let mut session = Session::assemble(
            LevelMode::Training,
            1,
            level,
            Pcg32::seed_from_u64(0),
            PlayerData::default(),
            SessionConfig {
                precision_delivery: true,
                ..SessionConfig::default()
            },
        );

        let outcome = fly_right(&mut session);
        assert_eq!(outcome, Outcome::Crashed);
    }

    #[test]
    fn test_hard_scheme_session_thrusts_toward_pointer() {
        let mut data = PlayerData::default();
        data.easy_controls = false;
        let mut session = Session::assemble(
            LevelMode::Training,
            1,
            open_board(),
            Pcg32::seed_from_u64(0),
            data,
            SessionConfig::default(),
        );

        // Identity viewport: aim the pointer at the warp out and hold the
        // left button
        let mut input = FrameInput::with_events(vec![InputEvent::MouseDown(MouseButton::Left)]);
        input.pointer = Vec2::new(9.0, 4.0);

        let mut outcome = session.tick(&input);
        let mut steady = FrameInput::empty();
        steady.pointer = Vec2::new(9.0, 4.0);
        let mut ticks = 0;
        while outcome == Outcome::Continue {
            outcome = session.tick(&steady);
            ticks += 1;
            assert!(ticks < 10_000, "session never terminated");
        }
        assert_eq!(outcome, Outcome::Complete);
        // Hard completions land in the hard records
        assert_eq!(session.stats().hard_level_records[0].len(), 1);
        assert!(session.stats().easy_level_records[0].is_empty());
    }
}
