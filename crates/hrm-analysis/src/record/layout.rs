//! Resolved column layout.

use hrm_core::config::LayoutConfig;

/// 0-based column positions of the logical pattern fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    pub label: usize,
    pub hour: usize,
    pub minute: usize,
    pub second: usize,
    pub direction: usize,
    pub velocity: usize,
    pub length: usize,
    pub first_sensor: usize,
    pub sensor_count: Option<usize>,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl RowLayout {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            label: config.effective_label_column(),
            hour: config.effective_hour_column(),
            minute: config.effective_minute_column(),
            second: config.effective_second_column(),
            direction: config.effective_direction_column(),
            velocity: config.effective_velocity_column(),
            length: config.effective_length_column(),
            first_sensor: config.effective_first_sensor_column(),
            sensor_count: config.sensor_count,
        }
    }

    /// Minimum row width holding every fixed field.
    pub fn required_columns(&self) -> usize {
        [
            self.label,
            self.hour,
            self.minute,
            self.second,
            self.direction,
            self.velocity,
            self.length,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }

    /// Column range holding sensor amplitudes for a row of `width` cells.
    pub fn sensor_columns(&self, width: usize) -> std::ops::Range<usize> {
        let start = self.first_sensor.min(width);
        let end = match self.sensor_count {
            Some(n) => (self.first_sensor + n).min(width),
            None => width,
        };
        start..end
    }
}
