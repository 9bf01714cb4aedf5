//! Classification thresholds.

use hrm_core::config::{ClassificationConfig, LongPolicyKind};

/// Rule deciding whether a pattern is long.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LongPatternPolicy {
    /// `length_sensors >= threshold`.
    SensorCount,
    /// Sensor count rule and a minimum propagation distance.
    SensorCountAndDistance { spacing_mm: u32, min_distance_mm: u32 },
}

/// Resolved thresholds used by [`PatternClassifier`](super::PatternClassifier).
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationParams {
    pub long_threshold_sensors: u32,
    pub hapc_min_consecutive_sensors: u32,
    pub hapc_min_amplitude: f64,
    pub long_policy: LongPatternPolicy,
}

impl Default for ClassificationParams {
    fn default() -> Self {
        Self::from_config(&ClassificationConfig::default())
    }
}

impl ClassificationParams {
    pub fn from_config(config: &ClassificationConfig) -> Self {
        let long_policy = match config.effective_long_policy() {
            LongPolicyKind::SensorCount => LongPatternPolicy::SensorCount,
            LongPolicyKind::SensorCountAndDistance => LongPatternPolicy::SensorCountAndDistance {
                spacing_mm: config.effective_distance_between_sensors_mm(),
                min_distance_mm: config.effective_long_min_distance_mm(),
            },
        };
        Self {
            long_threshold_sensors: config.effective_long_threshold_sensors(),
            hapc_min_consecutive_sensors: config.effective_hapc_min_consecutive_sensors(),
            hapc_min_amplitude: config.effective_hapc_min_amplitude(),
            long_policy,
        }
    }

    pub fn is_long(&self, length_sensors: u32) -> bool {
        if length_sensors < self.long_threshold_sensors {
            return false;
        }
        match self.long_policy {
            LongPatternPolicy::SensorCount => true,
            LongPatternPolicy::SensorCountAndDistance {
                spacing_mm,
                min_distance_mm,
            } => u64::from(spacing_mm) * u64::from(length_sensors) >= u64::from(min_distance_mm),
        }
    }
}
