//! Typed view of one pattern row.

use hrm_core::errors::RowError;
use hrm_core::types::Cell;

use super::RowLayout;
use crate::regions::SensorRange;

/// One detected pressure-wave pattern.
///
/// Fields stay as raw cells: the classifier decides how lenient to be with
/// each of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PatternRecord {
    pub label: Cell,
    pub hour: Cell,
    pub minute: Cell,
    pub second: Cell,
    pub direction: Cell,
    pub velocity: Cell,
    pub length_sensors: Cell,
    /// Sensor amplitudes; index 0 is sensor 1.
    pub amplitudes: Vec<Cell>,
}

impl PatternRecord {
    /// Extract a record from a row of cells.
    ///
    /// Fails when the row is too short for the fixed fields, when the label is
    /// empty, or when the propagation length holds non-numeric text.
    pub fn from_cells(cells: &[Cell], layout: &RowLayout) -> Result<Self, RowError> {
        let expected = layout.required_columns();
        if cells.len() < expected {
            return Err(RowError::MissingColumns {
                expected,
                found: cells.len(),
            });
        }

        let label = cells[layout.label].clone();
        if label.is_empty() {
            return Err(RowError::EmptyLabel);
        }

        let length_sensors = cells[layout.length].clone();
        if let Cell::Text(text) = &length_sensors {
            if !text.trim().is_empty() && length_sensors.as_f64().is_none() {
                return Err(RowError::NonNumericField {
                    field: "length_sensors",
                    value: text.clone(),
                });
            }
        }

        Ok(Self {
            label,
            hour: cells[layout.hour].clone(),
            minute: cells[layout.minute].clone(),
            second: cells[layout.second].clone(),
            direction: cells[layout.direction].clone(),
            velocity: cells[layout.velocity].clone(),
            length_sensors,
            amplitudes: cells[layout.sensor_columns(cells.len())].to_vec(),
        })
    }

    /// Record with the given direction, velocity, length and sensor readings
    /// (`(sensor, amplitude)` pairs, 1-based) over `sensor_count` sensors.
    pub fn with_readings(
        direction: impl Into<Cell>,
        velocity: impl Into<Cell>,
        length_sensors: u32,
        readings: &[(u32, f64)],
        sensor_count: usize,
    ) -> Self {
        let mut amplitudes = vec![Cell::Empty; sensor_count];
        for &(sensor, amp) in readings {
            if let Some(slot) = (sensor as usize)
                .checked_sub(1)
                .and_then(|i| amplitudes.get_mut(i))
            {
                *slot = Cell::Number(amp);
            }
        }
        Self {
            label: Cell::Number(1.0),
            direction: direction.into(),
            velocity: velocity.into(),
            length_sensors: Cell::Number(f64::from(length_sensors)),
            amplitudes,
            ..Self::default()
        }
    }

    /// Cell of a 1-based sensor.
    pub fn sensor(&self, sensor: u32) -> Option<&Cell> {
        (sensor as usize)
            .checked_sub(1)
            .and_then(|i| self.amplitudes.get(i))
    }

    /// 1-based indices of sensors with a positive reading, ascending.
    pub fn active_sensors(&self) -> impl DoubleEndedIterator<Item = u32> + '_ {
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_active_sensor())
            .map(|(i, _)| i as u32 + 1)
    }

    pub fn first_active_sensor(&self) -> Option<u32> {
        self.active_sensors().next()
    }

    pub fn last_active_sensor(&self) -> Option<u32> {
        self.active_sensors().next_back()
    }

    /// True if any sensor inside `range` has a positive reading.
    pub fn has_activity_in(&self, range: SensorRange) -> bool {
        (range.start..=range.end).any(|s| self.sensor(s).is_some_and(Cell::is_active_sensor))
    }

    /// Timestamp as whole (hour, minute, second), if all three are readable.
    pub fn clock(&self) -> Option<(i64, i64, i64)> {
        Some((
            self.hour.as_whole()?,
            self.minute.as_whole()?,
            self.second.as_whole()?,
        ))
    }
}
