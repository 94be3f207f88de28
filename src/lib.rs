//! Time Drift - A two-lane arcade driving game
//!
//! Core modules:
//! - `sim`: Simulation core (clock, vehicle, obstacles, collisions, phases)
//! - `tuning`: Data-driven game balance
//! - `web`: Browser host binding (wasm32 only)

pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use sim::{Command, Control, GameEvent, GamePhase, GameState, InputState, Snapshot, TickInput, tick};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    use std::f32::consts::PI;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Gray shoulder on both sides of the road; the car can't enter it
    pub const LANE_BORDER: f32 = 40.0;
    /// Obstacles never spawn closer than this to the right edge of their lane
    pub const LANE_SPAWN_MARGIN: f32 = 60.0;

    /// Player car defaults (obstacles share the same footprint)
    pub const VEHICLE_WIDTH: f32 = 20.0;
    pub const VEHICLE_HEIGHT: f32 = 29.0;
    /// Pixels moved per update call (not scaled by dt)
    pub const VEHICLE_SPEED: f32 = 2.0;
    /// Start position is this far above the bottom edge
    pub const VEHICLE_START_OFFSET: f32 = 50.0;

    /// Drift tilt limit (45 degrees)
    pub const MAX_DRIFT_ROTATION: f32 = PI / 4.0;
    /// Tilt applied or relaxed per update call (1 degree)
    pub const ROTATION_STEP: f32 = PI / 180.0;

    /// Road speed at the start of a run (pixels/s)
    pub const BASE_ROAD_SPEED: f32 = 100.0;
    /// Road speed gained per second of play
    pub const ROAD_ACCELERATION: f32 = 1.0;

    /// Spawn interval curve: BASE / (elapsed + TIME_CONSTANT)
    pub const SPAWN_BASE_INTERVAL_MS: f32 = 20_000.0;
    pub const SPAWN_TIME_CONSTANT: f32 = 5.0;

    /// Obstacles move at speed / DRIFT_SLOWDOWN while drifting
    pub const DRIFT_SLOWDOWN: f32 = 3.0;
}
