//! Column layout of the pattern sheet.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// 0-based column positions of the logical pattern fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub label_column: Option<usize>,
    pub hour_column: Option<usize>,
    pub minute_column: Option<usize>,
    pub second_column: Option<usize>,
    pub direction_column: Option<usize>,
    pub velocity_column: Option<usize>,
    pub length_column: Option<usize>,
    /// Column of sensor 1; sensors follow in increasing order.
    pub first_sensor_column: Option<usize>,
    /// Number of sensor columns to read. Default: every column to the end of the row.
    pub sensor_count: Option<usize>,
}

impl LayoutConfig {
    pub fn effective_label_column(&self) -> usize {
        self.label_column.unwrap_or(DEFAULT_LABEL_COLUMN)
    }

    pub fn effective_hour_column(&self) -> usize {
        self.hour_column.unwrap_or(DEFAULT_HOUR_COLUMN)
    }

    pub fn effective_minute_column(&self) -> usize {
        self.minute_column.unwrap_or(DEFAULT_MINUTE_COLUMN)
    }

    pub fn effective_second_column(&self) -> usize {
        self.second_column.unwrap_or(DEFAULT_SECOND_COLUMN)
    }

    pub fn effective_direction_column(&self) -> usize {
        self.direction_column.unwrap_or(DEFAULT_DIRECTION_COLUMN)
    }

    pub fn effective_velocity_column(&self) -> usize {
        self.velocity_column.unwrap_or(DEFAULT_VELOCITY_COLUMN)
    }

    pub fn effective_length_column(&self) -> usize {
        self.length_column.unwrap_or(DEFAULT_LENGTH_COLUMN)
    }

    pub fn effective_first_sensor_column(&self) -> usize {
        self.first_sensor_column
            .unwrap_or(DEFAULT_FIRST_SENSOR_COLUMN)
    }
}
