//! Pattern classification configuration.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Rule deciding whether a pattern counts as long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongPolicyKind {
    /// `length_sensors >= long_threshold_sensors`.
    #[default]
    SensorCount,
    /// Sensor count rule AND `spacing_mm * length_sensors >= long_min_distance_mm`.
    SensorCountAndDistance,
}

/// Configuration for the pattern classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Minimum propagation length in sensors for a long pattern. Default: 5.
    pub long_threshold_sensors: Option<u32>,
    /// Minimum run of consecutive high-amplitude sensors. Default: 3.
    pub hapc_min_consecutive_sensors: Option<u32>,
    /// Amplitude (mmHg) a sensor must reach to count as high-amplitude. Default: 100.
    pub hapc_min_amplitude: Option<f64>,
    /// Spacing between adjacent sensors in millimetres. Default: 25.
    pub distance_between_sensors_mm: Option<u32>,
    /// Long-pattern rule. Default: sensor count only.
    pub long_policy: Option<LongPolicyKind>,
    /// Minimum propagation distance for the distance policy. Default: 100.
    pub long_min_distance_mm: Option<u32>,
}

impl ClassificationConfig {
    pub fn effective_long_threshold_sensors(&self) -> u32 {
        self.long_threshold_sensors
            .unwrap_or(DEFAULT_LONG_THRESHOLD_SENSORS)
    }

    pub fn effective_hapc_min_consecutive_sensors(&self) -> u32 {
        self.hapc_min_consecutive_sensors
            .unwrap_or(DEFAULT_HAPC_MIN_CONSECUTIVE_SENSORS)
    }

    pub fn effective_hapc_min_amplitude(&self) -> f64 {
        self.hapc_min_amplitude.unwrap_or(DEFAULT_HAPC_MIN_AMPLITUDE)
    }

    pub fn effective_distance_between_sensors_mm(&self) -> u32 {
        self.distance_between_sensors_mm
            .unwrap_or(DEFAULT_DISTANCE_BETWEEN_SENSORS_MM)
    }

    pub fn effective_long_policy(&self) -> LongPolicyKind {
        self.long_policy.unwrap_or_default()
    }

    pub fn effective_long_min_distance_mm(&self) -> u32 {
        self.long_min_distance_mm
            .unwrap_or(DEFAULT_LONG_MIN_DISTANCE_MM)
    }
}
