//! Oncoming traffic
//!
//! The left lane runs top to bottom, the right lane bottom to top. Each
//! obstacle keeps the road speed it was spawned with, so later traffic is
//! faster than earlier traffic still on screen.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::Tuning;

/// Which lane an obstacle travels in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lane {
    /// Enters at the top, moves down
    Left,
    /// Enters at the bottom, moves up
    Right,
}

impl Lane {
    /// +1 for downward travel, -1 for upward
    pub fn direction(self) -> f32 {
        match self {
            Lane::Left => 1.0,
            Lane::Right => -1.0,
        }
    }

    pub fn visual(self) -> ObstacleVisual {
        match self {
            Lane::Left => ObstacleVisual::GreenVan,
            Lane::Right => ObstacleVisual::BlueCar,
        }
    }
}

/// Sprite hint for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleVisual {
    GreenVan,
    BlueCar,
}

/// An obstacle car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub lane: Lane,
    /// Top-left corner (canvas space)
    pub pos: Vec2,
    pub size: Vec2,
    /// Road speed captured at spawn (pixels/s)
    pub speed: f32,
    pub visual: ObstacleVisual,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Advance along the lane
    pub fn advance(&mut self, dt: f32, drifting: bool, drift_slowdown: f32) {
        let speed = if drifting {
            self.speed / drift_slowdown
        } else {
            self.speed
        };
        self.pos.y += self.lane.direction() * speed * dt;
    }

    /// True once the obstacle has fully left through the far edge
    pub fn is_off_canvas(&self, canvas_height: f32) -> bool {
        self.pos.y > canvas_height || self.pos.y < -self.size.y
    }
}

/// Milliseconds between spawns after `elapsed_secs` of play.
/// Strictly decreasing in `elapsed_secs`.
#[inline]
pub fn spawn_interval_ms(elapsed_secs: f32, base_ms: f32, time_constant: f32) -> f32 {
    base_ms / (elapsed_secs + time_constant)
}

/// The set of live obstacles and the spawn schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Frame timestamp of the last spawn (None = a spawn is due)
    last_spawn_ms: Option<f64>,
    next_id: u32,
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            last_spawn_ms: None,
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn last_spawn_ms(&self) -> Option<f64> {
        self.last_spawn_ms
    }

    /// Whether enough time has passed since the last spawn
    pub fn spawn_due(&self, now_ms: f64, elapsed_secs: f32, tuning: &Tuning) -> bool {
        match self.last_spawn_ms {
            None => true,
            Some(last) => now_ms - last > f64::from(tuning.spawn_interval_ms(elapsed_secs)),
        }
    }

    /// Spawn an obstacle if one is due. Returns the new obstacle.
    pub fn try_spawn<R: Rng>(
        &mut self,
        now_ms: f64,
        elapsed_secs: f32,
        road_speed: f32,
        rng: &mut R,
        tuning: &Tuning,
    ) -> Option<&Obstacle> {
        if !self.spawn_due(now_ms, elapsed_secs, tuning) {
            return None;
        }
        let lane = if rng.random_bool(0.5) {
            Lane::Left
        } else {
            Lane::Right
        };
        self.last_spawn_ms = Some(now_ms);
        Some(self.spawn(lane, rng.random::<f32>(), road_speed, tuning))
    }

    /// Place an obstacle in `lane`. `roll` in [0, 1) picks the x position
    /// within the lane's spawn range.
    pub fn spawn(&mut self, lane: Lane, roll: f32, road_speed: f32, tuning: &Tuning) -> &Obstacle {
        let half = tuning.canvas_width / 2.0;
        let size = Vec2::new(tuning.vehicle_width, tuning.vehicle_height);
        let (min_x, max_x, y) = match lane {
            Lane::Left => (tuning.lane_border, half - tuning.lane_spawn_margin, -size.y),
            Lane::Right => (
                half,
                tuning.canvas_width - tuning.lane_spawn_margin,
                tuning.canvas_height,
            ),
        };
        let x = min_x + roll.clamp(0.0, 1.0) * (max_x - min_x);

        let id = self.next_id;
        self.next_id += 1;
        log::debug!("Spawn #{} {:?} lane x={:.1} speed={:.1}", id, lane, x, road_speed);

        self.obstacles.push(Obstacle {
            id,
            lane,
            pos: Vec2::new(x, y),
            size,
            speed: road_speed,
            visual: lane.visual(),
        });
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Move every obstacle and drop the ones that left the canvas.
    /// Survivors keep their order.
    pub fn update(&mut self, dt: f32, drifting: bool, tuning: &Tuning) {
        if dt <= 0.0 {
            return;
        }
        let canvas_height = tuning.canvas_height;
        let slowdown = tuning.drift_slowdown;
        self.obstacles.retain_mut(|obstacle| {
            obstacle.advance(dt, drifting, slowdown);
            !obstacle.is_off_canvas(canvas_height)
        });
    }

    /// Move the spawn reference forward (paused time doesn't count)
    pub fn shift_spawn_reference(&mut self, ms: f64) {
        if let Some(last) = self.last_spawn_ms.as_mut() {
            *last += ms;
        }
    }

    /// Drop all obstacles and make the next spawn due immediately
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.last_spawn_ms = None;
    }
}
