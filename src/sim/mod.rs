//! Deterministic fixed-timestep simulation
//!
//! All gameplay logic lives here and must stay pure and deterministic:
//! - Fixed timestep only; simulation speed never follows wall time
//! - Seeded RNG only (random level regeneration)
//! - No rendering or platform dependencies; presentation reads snapshots

pub mod entities;
pub mod input;
pub mod session;
pub mod ship;
pub mod snapshot;

pub use entities::{ObjectKind, SpaceObject};
pub use input::{FrameInput, InputEvent, Key, MouseButton};
pub use session::{Disposition, LifecycleCommand, Outcome, Session, SessionConfig};
pub use ship::{Controls, Ship};
pub use snapshot::{ShipView, Snapshot};
