//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering,
//! audio and platform code:
//! - Time enters only as frame timestamps passed to `tick`
//! - Seeded RNG only
//! - Obstacles keep spawn order

pub mod clock;
pub mod collision;
pub mod input;
pub mod obstacle;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod timer;
pub mod vehicle;

pub use clock::FrameClock;
pub use collision::{Rect, aabb_overlap, first_overlap};
pub use input::{Command, Control, InputState, TickInput};
pub use obstacle::{Lane, Obstacle, ObstacleField, ObstacleVisual, spawn_interval_ms};
pub use snapshot::{ObstacleView, Snapshot, VehiclePose};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{apply_command, tick};
pub use timer::Timer;
pub use vehicle::{Direction, Vehicle};
