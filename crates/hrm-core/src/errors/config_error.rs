//! Configuration errors.

use super::error_code::{self, HrmErrorCode};

/// Errors that can occur during configuration loading and validation.
///
/// All variants are fatal: they are raised before any row is processed
/// and are never silently repaired.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Sensor range [{start}, {end}] for {region} is outside {min}..={max}")]
    RegionOutOfBounds {
        region: String,
        start: u32,
        end: u32,
        min: u32,
        max: u32,
    },

    #[error("Sensor range [{start}, {end}] for {region} ends before it starts")]
    RegionInverted { region: String, start: u32, end: u32 },

    #[error("Sensor ranges of {first} and {second} overlap")]
    RegionOverlap { first: String, second: String },

    #[error("Sensor range of {region} starts before the range of {previous}")]
    RegionOutOfOrder { region: String, previous: String },

    #[error("At least one region must stay enabled (Rectum cannot be disabled)")]
    NoEnabledRegion,
}

impl ConfigError {
    /// True for the variants raised by region range validation.
    pub fn is_region_error(&self) -> bool {
        matches!(
            self,
            Self::RegionOutOfBounds { .. }
                | Self::RegionInverted { .. }
                | Self::RegionOverlap { .. }
                | Self::RegionOutOfOrder { .. }
                | Self::NoEnabledRegion
        )
    }
}

impl HrmErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        if self.is_region_error() {
            error_code::REGION_CONFIG_ERROR
        } else {
            error_code::CONFIG_ERROR
        }
    }
}
