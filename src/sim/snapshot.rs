//! Per-frame view handed to the renderer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacle::{Lane, ObstacleVisual};
use super::state::{GamePhase, GameState};
use super::timer::Timer;

/// Car pose
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehiclePose {
    pub pos: Vec2,
    pub size: Vec2,
    pub rotation: f32,
}

/// One obstacle as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub lane: Lane,
    pub visual: ObstacleVisual,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub vehicle: VehiclePose,
    pub obstacles: Vec<ObstacleView>,
    pub time: f32,
    pub road_speed: f32,
    pub canvas: Vec2,
    pub lane_border: f32,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let vehicle = &state.vehicle;
        Self {
            phase: state.phase,
            vehicle: VehiclePose {
                pos: vehicle.pos,
                size: vehicle.size,
                rotation: vehicle.rotation,
            },
            obstacles: state
                .obstacles
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    pos: o.pos,
                    size: o.size,
                    lane: o.lane,
                    visual: o.visual,
                })
                .collect(),
            time: state.timer.time,
            road_speed: state.road_speed,
            canvas: Vec2::new(state.tuning.canvas_width, state.tuning.canvas_height),
            lane_border: state.tuning.lane_border,
        }
    }

    /// HUD / game-over text, e.g. "Time: 12.34"
    pub fn time_label(&self) -> String {
        Timer { time: self.time }.label()
    }

    /// Y of the first dashed centre line, in `[-spacing, 0)`. Lines repeat
    /// every `spacing` pixels and scroll with the road.
    pub fn road_line_offset(&self, spacing: f32) -> f32 {
        if spacing <= 0.0 {
            return 0.0;
        }
        -spacing + (self.road_speed * self.time).rem_euclid(spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_fresh_state() {
        let state = GameState::new(1);
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::NotStarted);
        assert_eq!(snap.vehicle.pos, Vec2::new(200.0, 550.0));
        assert!(snap.obstacles.is_empty());
        assert_eq!(snap.time_label(), "Time: 0.00");
        assert_eq!(snap.canvas, Vec2::new(400.0, 600.0));
    }

    #[test]
    fn test_road_line_offset() {
        let mut state = GameState::new(1);
        state.road_speed = 100.0;
        state.timer.time = 0.5;
        let snap = state.snapshot();
        // 50 % 30 = 20 -> -30 + 20
        assert!((snap.road_line_offset(30.0) - (-10.0)).abs() < 1e-4);
        assert_eq!(snap.road_line_offset(0.0), 0.0);
    }

    #[test]
    fn test_serializes_to_json() {
        let snap = GameState::new(1).snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"phase\":\"NotStarted\""));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
