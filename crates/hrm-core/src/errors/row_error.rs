//! Per-row parse warnings.

use super::error_code::{self, HrmErrorCode};

/// A single row could not be read. Recoverable: the row is skipped or
/// classified with safe defaults and the aggregation pass continues.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
    #[error("Row has {found} columns, expected at least {expected}")]
    MissingColumns { expected: usize, found: usize },

    #[error("Row label is empty")]
    EmptyLabel,

    #[error("Field {field} is not numeric: {value:?}")]
    NonNumericField { field: &'static str, value: String },

    #[error("Field {field} is not a finite number")]
    NonFiniteField { field: &'static str },
}

impl HrmErrorCode for RowError {
    fn error_code(&self) -> &'static str {
        error_code::ROW_PARSE_WARNING
    }
}
