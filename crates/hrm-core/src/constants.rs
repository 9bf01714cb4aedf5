//! Shared constants for the HRM analysis engine.

/// Lowest sensor index a region range may use (1-based).
pub const MIN_SENSOR: u32 = 1;

/// Highest sensor index a region range may use.
pub const MAX_SENSOR: u32 = 80;

/// Default spacing between adjacent sensors in millimetres.
pub const DEFAULT_DISTANCE_BETWEEN_SENSORS_MM: u32 = 25;

/// Default minimum propagation length (in sensors) for a long pattern.
pub const DEFAULT_LONG_THRESHOLD_SENSORS: u32 = 5;

/// Default minimum run of consecutive high-amplitude sensors for a HAPC/HARPC.
pub const DEFAULT_HAPC_MIN_CONSECUTIVE_SENSORS: u32 = 3;

/// Default amplitude (mmHg) a sensor must reach to count as high-amplitude.
pub const DEFAULT_HAPC_MIN_AMPLITUDE: f64 = 100.0;

/// Default minimum propagation distance for the distance-based long policy.
pub const DEFAULT_LONG_MIN_DISTANCE_MM: u32 = 100;

/// Default name of the event anchored at time zero.
pub const DEFAULT_FIRST_EVENT: &str = "Post-Wake";

/// Labels that identify header rows in the pattern sheet. Never event markers.
pub const RESERVED_HEADER_LABELS: [&str; 5] = ["Sequence", "Hour", "Minute", "Second", "Sample"];

// ---- Default row layout (0-based column indices) ----

pub const DEFAULT_LABEL_COLUMN: usize = 0;
pub const DEFAULT_HOUR_COLUMN: usize = 1;
pub const DEFAULT_MINUTE_COLUMN: usize = 2;
pub const DEFAULT_SECOND_COLUMN: usize = 3;
pub const DEFAULT_DIRECTION_COLUMN: usize = 5;
pub const DEFAULT_VELOCITY_COLUMN: usize = 6;
pub const DEFAULT_LENGTH_COLUMN: usize = 9;
pub const DEFAULT_FIRST_SENSOR_COLUMN: usize = 13;
