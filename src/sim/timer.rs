//! Run timer (doubles as the score)

use serde::{Deserialize, Serialize};

/// Seconds survived in the current run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    pub time: f32,
}

impl Timer {
    pub fn update(&mut self, dt: f32) {
        if dt > 0.0 {
            self.time += dt;
        }
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    /// HUD text, e.g. "Time: 12.34"
    pub fn label(&self) -> String {
        format!("Time: {:.2}", self.time)
    }
}
