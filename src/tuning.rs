//! Data-driven game balance
//!
//! Every number the simulation reads lives here. Defaults come from
//! [`crate::consts`]; a host may override any subset from a JSON document.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::obstacle::spawn_interval_ms;

/// Why a tuning document was rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Road ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Shoulder width on both sides (movement boundary, spawn minimum)
    pub lane_border: f32,
    /// Distance from a lane's right edge where spawns stop
    pub lane_spawn_margin: f32,

    // === Vehicle ===
    pub vehicle_width: f32,
    pub vehicle_height: f32,
    pub vehicle_speed: f32,
    pub vehicle_start_offset: f32,
    pub max_drift_rotation: f32,
    pub rotation_step: f32,

    // === Difficulty ===
    pub base_road_speed: f32,
    pub road_acceleration: f32,
    pub spawn_base_interval_ms: f32,
    pub spawn_time_constant: f32,
    pub drift_slowdown: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            lane_border: LANE_BORDER,
            lane_spawn_margin: LANE_SPAWN_MARGIN,

            vehicle_width: VEHICLE_WIDTH,
            vehicle_height: VEHICLE_HEIGHT,
            vehicle_speed: VEHICLE_SPEED,
            vehicle_start_offset: VEHICLE_START_OFFSET,
            max_drift_rotation: MAX_DRIFT_ROTATION,
            rotation_step: ROTATION_STEP,

            base_road_speed: BASE_ROAD_SPEED,
            road_acceleration: ROAD_ACCELERATION,
            spawn_base_interval_ms: SPAWN_BASE_INTERVAL_MS,
            spawn_time_constant: SPAWN_TIME_CONSTANT,
            drift_slowdown: DRIFT_SLOWDOWN,
        }
    }
}

impl Tuning {
    /// Parse and validate a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse a JSON document, falling back to defaults on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning document: {}", e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("vehicle_width", self.vehicle_width),
            ("vehicle_height", self.vehicle_height),
            ("vehicle_speed", self.vehicle_speed),
            ("rotation_step", self.rotation_step),
            ("max_drift_rotation", self.max_drift_rotation),
            ("base_road_speed", self.base_road_speed),
            ("spawn_base_interval_ms", self.spawn_base_interval_ms),
            ("spawn_time_constant", self.spawn_time_constant),
            ("drift_slowdown", self.drift_slowdown),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }

        let non_negative = [
            ("lane_border", self.lane_border),
            ("lane_spawn_margin", self.lane_spawn_margin),
            ("vehicle_start_offset", self.vehicle_start_offset),
            ("road_acceleration", self.road_acceleration),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be zero or positive",
                });
            }
        }

        let half = self.canvas_width / 2.0;
        if self.lane_border + self.lane_spawn_margin >= half {
            return Err(TuningError::Invalid {
                field: "lane_border",
                reason: "left lane has no room to spawn obstacles",
            });
        }
        if self.lane_spawn_margin >= half {
            return Err(TuningError::Invalid {
                field: "lane_spawn_margin",
                reason: "right lane has no room to spawn obstacles",
            });
        }
        if self.vehicle_width + 2.0 * self.lane_border >= self.canvas_width {
            return Err(TuningError::Invalid {
                field: "vehicle_width",
                reason: "car does not fit between the borders",
            });
        }
        if self.vehicle_start_offset > self.canvas_height {
            return Err(TuningError::Invalid {
                field: "vehicle_start_offset",
                reason: "start position is above the canvas",
            });
        }

        Ok(())
    }

    /// Milliseconds between spawns after `elapsed_secs` of play
    pub fn spawn_interval_ms(&self, elapsed_secs: f32) -> f32 {
        spawn_interval_ms(
            elapsed_secs,
            self.spawn_base_interval_ms,
            self.spawn_time_constant,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "base_road_speed": 150.0 }"#).unwrap();
        assert_eq!(tuning.base_road_speed, 150.0);
        assert_eq!(tuning.canvas_width, CANVAS_WIDTH);
        assert_eq!(tuning.spawn_base_interval_ms, SPAWN_BASE_INTERVAL_MS);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "canvas_width": -1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "canvas_width",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "lane_border": 190.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { .. }));
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
        assert_eq!(Tuning::from_json_or_default("{ not json"), Tuning::default());
    }

    #[test]
    fn test_reference_spawn_interval() {
        let tuning = Tuning::default();
        assert_eq!(tuning.spawn_interval_ms(0.0), 4000.0);
        assert_eq!(tuning.spawn_interval_ms(5.0), 2000.0);
    }
}
