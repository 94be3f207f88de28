//! The player's car

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::input::{Control, InputState};
use crate::tuning::Tuning;

/// Movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The player's car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Top-left corner (canvas space)
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per move call
    pub speed: f32,
    /// Drift tilt in radians (positive = clockwise)
    pub rotation: f32,
}

impl Vehicle {
    /// A car parked at the start position
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Self::start_position(tuning),
            size: Vec2::new(tuning.vehicle_width, tuning.vehicle_height),
            speed: tuning.vehicle_speed,
            rotation: 0.0,
        }
    }

    /// Horizontal center of the road, just above the bottom edge
    pub fn start_position(tuning: &Tuning) -> Vec2 {
        Vec2::new(
            tuning.canvas_width / 2.0,
            tuning.canvas_height - tuning.vehicle_start_offset,
        )
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Move one step. Lateral moves tilt the car while drifting, up to the
    /// tilt limit. No position clamping; see [`Vehicle::apply_input`].
    pub fn move_in(&mut self, direction: Direction, drift_held: bool, tuning: &Tuning) {
        let max = tuning.max_drift_rotation;
        let step = tuning.rotation_step;
        match direction {
            Direction::Up => self.pos.y -= self.speed,
            Direction::Down => self.pos.y += self.speed,
            Direction::Left => {
                if drift_held && self.rotation > -max {
                    self.rotation = (self.rotation - step).max(-max);
                }
                self.pos.x -= self.speed;
            }
            Direction::Right => {
                if drift_held && self.rotation < max {
                    self.rotation = (self.rotation + step).min(max);
                }
                self.pos.x += self.speed;
            }
        }
    }

    /// Apply held controls, skipping any move that would leave the road
    pub fn apply_input(&mut self, input: &InputState, tuning: &Tuning) {
        let drift = input.is_held(Control::Drift);
        if input.is_held(Control::Up) && self.pos.y > 0.0 {
            self.move_in(Direction::Up, drift, tuning);
        }
        if input.is_held(Control::Down) && self.pos.y < tuning.canvas_height - self.size.y {
            self.move_in(Direction::Down, drift, tuning);
        }
        if input.is_held(Control::Left) && self.pos.x > tuning.lane_border {
            self.move_in(Direction::Left, drift, tuning);
        }
        if input.is_held(Control::Right)
            && self.pos.x < tuning.canvas_width - self.size.x - tuning.lane_border
        {
            self.move_in(Direction::Right, drift, tuning);
        }
    }

    /// Relax the tilt toward zero once drift is released.
    /// Snaps to exactly 0.0 instead of stepping past it.
    pub fn decay_rotation(&mut self, drift_held: bool, tuning: &Tuning) {
        if drift_held {
            return;
        }
        let step = tuning.rotation_step;
        if self.rotation > 0.0 {
            self.rotation = if self.rotation <= step { 0.0 } else { self.rotation - step };
        } else if self.rotation < 0.0 {
            self.rotation = if self.rotation >= -step { 0.0 } else { self.rotation + step };
        }
    }

    /// Back to the start position, straightened out
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_start_position() {
        let tuning = Tuning::default();
        let car = Vehicle::new(&tuning);
        assert_eq!(car.pos, Vec2::new(200.0, 550.0));
        assert_eq!(car.size, Vec2::new(20.0, 29.0));
        assert_eq!(car.rotation, 0.0);
    }

    #[test]
    fn test_move_without_drift_keeps_heading() {
        let tuning = Tuning::default();
        let mut car = Vehicle::new(&tuning);
        car.move_in(Direction::Left, false, &tuning);
        car.move_in(Direction::Up, false, &tuning);
        assert_eq!(car.pos, Vec2::new(198.0, 548.0));
        assert_eq!(car.rotation, 0.0);
    }

    #[test]
    fn test_drift_tilts_up_to_limit() {
        let tuning = Tuning::default();
        let mut car = Vehicle::new(&tuning);
        car.move_in(Direction::Right, true, &tuning);
        assert!((car.rotation - tuning.rotation_step).abs() < 1e-6);

        for _ in 0..100 {
            car.move_in(Direction::Right, true, &tuning);
        }
        assert_eq!(car.rotation, tuning.max_drift_rotation);

        for _ in 0..200 {
            car.move_in(Direction::Left, true, &tuning);
        }
        assert_eq!(car.rotation, -tuning.max_drift_rotation);
    }

    #[test]
    fn test_rotation_decay_snaps_to_zero() {
        let tuning = Tuning::default();
        let mut car = Vehicle::new(&tuning);
        car.rotation = 2.5 * tuning.rotation_step;

        car.decay_rotation(false, &tuning);
        car.decay_rotation(false, &tuning);
        assert!(car.rotation > 0.0);
        car.decay_rotation(false, &tuning);
        assert_eq!(car.rotation, 0.0);
        car.decay_rotation(false, &tuning);
        assert_eq!(car.rotation, 0.0);

        car.rotation = -0.3 * tuning.rotation_step;
        car.decay_rotation(false, &tuning);
        assert_eq!(car.rotation, 0.0);
    }

    #[test]
    fn test_rotation_held_while_drifting() {
        let tuning = Tuning::default();
        let mut car = Vehicle::new(&tuning);
        car.rotation = 0.3;
        car.decay_rotation(true, &tuning);
        assert_eq!(car.rotation, 0.3);
    }

    #[test]
    fn test_boundary_gating() {
        let tuning = Tuning::default();
        let mut car = Vehicle::new(&tuning);

        car.pos = Vec2::new(tuning.lane_border, 0.0);
        car.apply_input(&InputState::with(&[Control::Left, Control::Up]), &tuning);
        assert_eq!(car.pos, Vec2::new(tuning.lane_border, 0.0));

        let max_x = tuning.canvas_width - car.size.x - tuning.lane_border;
        let max_y = tuning.canvas_height - car.size.y;
        car.pos = Vec2::new(max_x, max_y);
        car.apply_input(&InputState::with(&[Control::Right, Control::Down]), &tuning);
        assert_eq!(car.pos, Vec2::new(max_x, max_y));

        // One step inside the boundary still moves, possibly past it
        car.pos = Vec2::new(max_x - 1.0, max_y - 1.0);
        car.apply_input(&InputState::with(&[Control::Right, Control::Down]), &tuning);
        assert_eq!(car.pos, Vec2::new(max_x + 1.0, max_y + 1.0));
    }

    #[test]
    fn test_reset() {
        let tuning = Tuning::default();
        let mut car = Vehicle::new(&tuning);
        car.pos = Vec2::new(60.0, 10.0);
        car.rotation = -0.5;
        car.reset(&tuning);
        assert_eq!(car, Vehicle::new(&tuning));
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn prop_rotation_stays_bounded(
            moves in proptest::collection::vec((arb_direction(), any::<bool>(), any::<bool>()), 0..400)
        ) {
            let tuning = Tuning::default();
            let mut car = Vehicle::new(&tuning);
            let max = tuning.max_drift_rotation;
            for (direction, drift, decay) in moves {
                car.move_in(direction, drift, &tuning);
                if decay {
                    car.decay_rotation(drift, &tuning);
                }
                prop_assert!(car.rotation >= -max && car.rotation <= max);
            }
        }
    }
}
