//! Analysis pipeline errors.

use super::error_code::{self, HrmErrorCode};
use super::{ConfigError, RowError};

/// Errors that can escape an analysis run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Row error: {0}")]
    Row(#[from] RowError),

    #[error("Event {name} is not tracked by the timeline")]
    UnknownEvent { name: String },
}

impl HrmErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Row(e) => e.error_code(),
            Self::UnknownEvent { .. } => error_code::ANALYSIS_ERROR,
        }
    }
}
