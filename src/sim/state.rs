//! Game state and core simulation types
//!
//! A single `GameState` owns everything a run mutates. Only [`super::tick`]
//! and the phase transitions in the same module write to it.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::FrameClock;
use super::obstacle::{Lane, ObstacleField};
use super::snapshot::Snapshot;
use super::timer::Timer;
use super::vehicle::Vehicle;
use crate::tuning::Tuning;

/// Top-level screen/phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen with Play / Instructions buttons
    #[default]
    NotStarted,
    /// Instructions screen with a Back button
    Instructions,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Crashed; waiting for restart
    GameOver,
}

/// Notifications for hosts (audio, HUD effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    ObstacleSpawned { id: u32, lane: Lane },
    /// The run ended; `time` is the final score
    Crashed { obstacle_id: u32, time: f32 },
}

impl GameEvent {
    /// Playing was entered (start, resume or restart)
    pub fn entered_playing(&self) -> bool {
        matches!(self, GameEvent::PhaseChanged { from, to: GamePhase::Playing } if *from != GamePhase::Playing)
    }

    /// Playing was left (pause or crash)
    pub fn exited_playing(&self) -> bool {
        matches!(self, GameEvent::PhaseChanged { from: GamePhase::Playing, to } if *to != GamePhase::Playing)
    }

    pub fn entered_paused(&self) -> bool {
        matches!(self, GameEvent::PhaseChanged { to: GamePhase::Paused, .. })
    }

    pub fn exited_paused(&self) -> bool {
        matches!(self, GameEvent::PhaseChanged { from: GamePhase::Paused, .. })
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Player car
    pub vehicle: Vehicle,
    /// Live obstacles and spawn schedule
    pub obstacles: ObstacleField,
    /// Current road speed (pixels/s); new obstacles capture it
    pub road_speed: f32,
    /// Elapsed play time (the score)
    pub timer: Timer,
    pub clock: FrameClock,
    /// Simulated (dt > 0) ticks this run
    pub time_ticks: u64,
    /// Pending notifications, oldest first
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            vehicle: Vehicle::new(&tuning),
            obstacles: ObstacleField::new(),
            road_speed: tuning.base_road_speed,
            timer: Timer::default(),
            clock: FrameClock::new(),
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        }
    }

    /// Change phase, queueing a notification if it actually changed
    pub fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::info!("Phase {:?} -> {:?}", from, to);
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    /// Put every run-scoped value back to its starting point
    pub fn reset_run(&mut self) {
        self.vehicle.reset(&self.tuning);
        self.obstacles.clear();
        self.road_speed = self.tuning.base_road_speed;
        self.timer.reset();
        self.clock.reset();
        self.time_ticks = 0;
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events queued since the last drain
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
