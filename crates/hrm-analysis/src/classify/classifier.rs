//! PatternClassifier: direction, length category, and HAPC/HARPC flags.

use hrm_core::errors::RowError;
use hrm_core::types::Cell;

use super::{Classification, ClassificationParams, Direction, LengthCategory};
use crate::record::PatternRecord;

/// Stateless classifier over a fixed parameter set.
#[derive(Debug, Clone, Default)]
pub struct PatternClassifier {
    params: ClassificationParams,
}

impl PatternClassifier {
    pub fn new(params: ClassificationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ClassificationParams {
        &self.params
    }

    /// Classify a record. Never fails: unreadable fields produce the default
    /// classification.
    pub fn classify(&self, record: &PatternRecord) -> Classification {
        self.try_classify(record).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "classification fell back to defaults");
            Classification::default()
        })
    }

    /// Classify a record, reporting the first field that could not be read.
    ///
    /// Non-numeric velocity reads as 0 and an empty length as 0; only
    /// non-finite numbers and non-numeric length text are errors.
    pub fn try_classify(&self, record: &PatternRecord) -> Result<Classification, RowError> {
        let length_sensors = read_length(&record.length_sensors)?;
        let velocity = read_velocity(&record.velocity)?;
        let direction = Self::parse_direction(&record.direction);

        let amplitudes: Vec<f64> = record
            .amplitudes
            .iter()
            .filter_map(Cell::as_sensor_value)
            .filter(|v| *v > 0.0)
            .collect();

        let is_long = self.params.is_long(length_sensors);
        let high_amplitude = Self::longest_high_amplitude_run(
            &amplitudes,
            self.params.hapc_min_amplitude,
        ) >= self.params.hapc_min_consecutive_sensors as usize;

        Ok(Classification {
            length_category: if is_long {
                LengthCategory::Long
            } else {
                LengthCategory::Short
            },
            direction,
            velocity,
            is_hapc: high_amplitude && is_long && direction == Some(Direction::Anterograde),
            is_harpc: high_amplitude && is_long && direction == Some(Direction::Retrograde),
            amplitudes,
            starting_region: None,
            ending_region: None,
        })
    }

    /// Read a direction code. An exact `a`/`r`/`s` wins; otherwise the first
    /// of those letters found in the lowercased text.
    pub fn parse_direction(cell: &Cell) -> Option<Direction> {
        let text = cell.to_text();
        let text = text.trim();
        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = Direction::from_code(c) {
                return Some(d);
            }
        }
        text.to_lowercase().chars().find_map(Direction::from_code)
    }

    /// Longest run of consecutive values at or above `threshold`.
    pub fn longest_high_amplitude_run(amplitudes: &[f64], threshold: f64) -> usize {
        let mut longest = 0;
        let mut current = 0;
        for &amp in amplitudes {
            if amp >= threshold {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }
        longest
    }
}

fn read_length(cell: &Cell) -> Result<u32, RowError> {
    if cell.is_empty() {
        return Ok(0);
    }
    let Some(v) = cell.as_f64() else {
        return Err(RowError::NonNumericField {
            field: "length_sensors",
            value: cell.to_text(),
        });
    };
    if !v.is_finite() {
        return Err(RowError::NonFiniteField {
            field: "length_sensors",
        });
    }
    // Saturating float-to-int cast clamps negatives to 0.
    Ok(v.trunc() as u32)
}

fn read_velocity(cell: &Cell) -> Result<f64, RowError> {
    match cell.as_f64() {
        Some(v) if !v.is_finite() => Err(RowError::NonFiniteField { field: "velocity" }),
        Some(v) => Ok(v),
        None => Ok(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::LongPatternPolicy;

    fn hapc_candidate(direction: &str) -> PatternRecord {
        PatternRecord::with_readings(
            direction,
            12.0,
            5,
            &[(2, 150.0), (3, 150.0), (4, 150.0), (70, 40.0)],
            80,
        )
    }

    #[test]
    fn test_hapc_detected() {
        let c = PatternClassifier::default().classify(&hapc_candidate("a"));
        assert!(c.is_hapc);
        assert!(!c.is_harpc);
        assert_eq!(c.length_category, LengthCategory::Long);
        assert_eq!(c.amplitudes, vec![150.0, 150.0, 150.0, 40.0]);
    }

    #[test]
    fn test_harpc_detected() {
        let c = PatternClassifier::default().classify(&hapc_candidate("r"));
        assert!(!c.is_hapc);
        assert!(c.is_harpc);
    }

    #[test]
    fn test_short_pattern_is_never_hapc() {
        let mut record = hapc_candidate("a");
        record.length_sensors = Cell::Number(4.0);
        let c = PatternClassifier::default().classify(&record);
        assert_eq!(c.length_category, LengthCategory::Short);
        assert!(!c.is_hapc);
    }

    #[test]
    fn test_distance_policy_gates_hapc() {
        let classifier = PatternClassifier::new(ClassificationParams {
            long_policy: LongPatternPolicy::SensorCountAndDistance {
                spacing_mm: 25,
                min_distance_mm: 150,
            },
            ..ClassificationParams::default()
        });

        // 5 sensors * 25 mm falls short of 150 mm.
        let c = classifier.classify(&hapc_candidate("a"));
        assert_eq!(c.length_category, LengthCategory::Short);
        assert!(!c.is_hapc);

        let mut record = hapc_candidate("a");
        record.length_sensors = Cell::Number(6.0);
        let c = classifier.classify(&record);
        assert_eq!(c.length_category, LengthCategory::Long);
        assert!(c.is_hapc);
    }

    #[test]
    fn test_run_breaks_below_threshold() {
        let record = PatternRecord::with_readings(
            "a",
            12.0,
            6,
            &[(1, 150.0), (2, 150.0), (3, 90.0), (4, 150.0)],
            10,
        );
        let c = PatternClassifier::default().classify(&record);
        assert!(!c.is_hapc);
        assert_eq!(
            PatternClassifier::longest_high_amplitude_run(&c.amplitudes, 100.0),
            2
        );
    }

    #[test]
    fn test_parse_direction() {
        let parse = PatternClassifier::parse_direction;
        assert_eq!(parse(&Cell::text(" a ")), Some(Direction::Anterograde));
        assert_eq!(parse(&Cell::text("xxRyy")), Some(Direction::Retrograde));
        assert_eq!(parse(&Cell::text("??")), None);
        assert_eq!(parse(&Cell::Number(3.0)), None);
        assert_eq!(parse(&Cell::Empty), None);
    }

    #[test]
    fn test_garbage_velocity_reads_as_zero() {
        let record = PatternRecord::with_readings("zzrzz", "fast", 5, &[(10, 30.0)], 80);
        let c = PatternClassifier::default().classify(&record);
        assert_eq!(c.direction, Some(Direction::Retrograde));
        assert_eq!(c.velocity, 0.0);
        assert_eq!(c.length_category, LengthCategory::Long);
    }

    #[test]
    fn test_non_finite_field_falls_back() {
        let record = PatternRecord::with_readings("a", f64::NAN, 5, &[(2, 150.0)], 80);
        let classifier = PatternClassifier::default();
        assert!(matches!(
            classifier.try_classify(&record),
            Err(RowError::NonFiniteField { field: "velocity" })
        ));
        assert_eq!(classifier.classify(&record), Classification::default());
    }

    #[test]
    fn test_text_amplitudes_are_ignored() {
        let mut record = hapc_candidate("a");
        record.amplitudes[2] = Cell::text("150");
        let c = PatternClassifier::default().classify(&record);
        assert_eq!(c.amplitudes, vec![150.0, 150.0, 40.0]);
        assert!(!c.is_hapc);
    }
}
