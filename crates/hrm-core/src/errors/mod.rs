//! Error handling for the HRM engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod row_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use error_code::HrmErrorCode;
pub use row_error::RowError;
