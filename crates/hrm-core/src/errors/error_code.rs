//! HrmErrorCode trait for structured error reporting.

/// Trait for exposing a stable error code on every HRM error.
/// Callers outside Rust (report writers, UI shells) match on the code,
/// never on the message text.
pub trait HrmErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REGION_CONFIG_ERROR: &str = "REGION_CONFIG_ERROR";
pub const ROW_PARSE_WARNING: &str = "ROW_PARSE_WARNING";
pub const ANALYSIS_ERROR: &str = "ANALYSIS_ERROR";
