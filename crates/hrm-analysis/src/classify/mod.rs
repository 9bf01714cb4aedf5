//! Per-row pattern classification.

pub mod classifier;
pub mod params;
pub mod types;

pub use classifier::PatternClassifier;
pub use params::{ClassificationParams, LongPatternPolicy};
pub use types::{Classification, Direction, LengthCategory};
