//! Top-level HRM configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClassificationConfig, EventsConfig, LayoutConfig, RegionsConfig};
use crate::constants::RESERVED_HEADER_LABELS;
use crate::errors::ConfigError;
use crate::types::Region;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`HRM_*`)
/// 3. Project config (`hrm.toml` in the analysis root)
/// 4. User config (`~/.hrm/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HrmConfig {
    pub regions: RegionsConfig,
    pub classification: ClassificationConfig,
    pub events: EventsConfig,
    pub layout: LayoutConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub long_threshold_sensors: Option<u32>,
    pub hapc_min_consecutive_sensors: Option<u32>,
    pub hapc_min_amplitude: Option<f64>,
    pub distance_between_sensors_mm: Option<u32>,
    pub first_event: Option<String>,
}

impl HrmConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join("hrm.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate scalar values. Region ranges are checked when the region map
    /// is built from this config.
    pub fn validate(config: &HrmConfig) -> Result<(), ConfigError> {
        let c = &config.classification;
        if c.long_threshold_sensors == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "classification.long_threshold_sensors".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if c.hapc_min_consecutive_sensors == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "classification.hapc_min_consecutive_sensors".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(amp) = c.hapc_min_amplitude {
            if !amp.is_finite() || amp <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "classification.hapc_min_amplitude".to_string(),
                    message: "must be a positive number".to_string(),
                });
            }
        }
        if c.distance_between_sensors_mm == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "classification.distance_between_sensors_mm".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        // A blank first event falls back to the default name.
        let first_event = config.events.first_event.as_deref().map(str::trim);
        if let Some(name) = first_event.filter(|s| !s.is_empty()) {
            Self::validate_event_name("events.first_event", name)?;
        }
        for marker in &config.events.markers {
            Self::validate_event_name("events.markers.name", &marker.name)?;
        }
        Ok(())
    }

    /// An event name must read back as a marker row.
    fn validate_event_name(field: &str, name: &str) -> Result<(), ConfigError> {
        let name = name.trim();
        let message = if name.is_empty() {
            "event names must not be blank"
        } else if RESERVED_HEADER_LABELS.contains(&name) {
            "event names must not be a reserved header label"
        } else if name.bytes().all(|b| b.is_ascii_digit()) {
            "event names must not be all digits"
        } else {
            return Ok(());
        };
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("{message}: {name:?}"),
        })
    }

    fn user_config_path() -> Option<std::path::PathBuf> {
        home_dir().map(|h| h.join(".hrm").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut HrmConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: HrmConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut HrmConfig, other: &HrmConfig) {
        // Regions
        for region in Region::ALL {
            if let Some(range) = other.regions.get(region) {
                base.regions.set(region, range);
            }
        }

        // Classification
        let (b, o) = (&mut base.classification, &other.classification);
        if o.long_threshold_sensors.is_some() {
            b.long_threshold_sensors = o.long_threshold_sensors;
        }
        if o.hapc_min_consecutive_sensors.is_some() {
            b.hapc_min_consecutive_sensors = o.hapc_min_consecutive_sensors;
        }
        if o.hapc_min_amplitude.is_some() {
            b.hapc_min_amplitude = o.hapc_min_amplitude;
        }
        if o.distance_between_sensors_mm.is_some() {
            b.distance_between_sensors_mm = o.distance_between_sensors_mm;
        }
        if o.long_policy.is_some() {
            b.long_policy = o.long_policy;
        }
        if o.long_min_distance_mm.is_some() {
            b.long_min_distance_mm = o.long_min_distance_mm;
        }

        // Events
        if other.events.first_event.is_some() {
            base.events.first_event = other.events.first_event.clone();
        }
        if !other.events.markers.is_empty() {
            base.events.markers = other.events.markers.clone();
        }

        // Layout
        let (b, o) = (&mut base.layout, &other.layout);
        for (dst, src) in [
            (&mut b.label_column, o.label_column),
            (&mut b.hour_column, o.hour_column),
            (&mut b.minute_column, o.minute_column),
            (&mut b.second_column, o.second_column),
            (&mut b.direction_column, o.direction_column),
            (&mut b.velocity_column, o.velocity_column),
            (&mut b.length_column, o.length_column),
            (&mut b.first_sensor_column, o.first_sensor_column),
            (&mut b.sensor_count, o.sensor_count),
        ] {
            if src.is_some() {
                *dst = src;
            }
        }
    }

    /// Apply environment variable overrides.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(config: &mut HrmConfig) {
        if let Ok(val) = std::env::var("HRM_LONG_THRESHOLD_SENSORS") {
            if let Ok(v) = val.parse::<u32>() {
                config.classification.long_threshold_sensors = Some(v);
            }
        }
        if let Ok(val) = std::env::var("HRM_HAPC_MIN_CONSECUTIVE_SENSORS") {
            if let Ok(v) = val.parse::<u32>() {
                config.classification.hapc_min_consecutive_sensors = Some(v);
            }
        }
        if let Ok(val) = std::env::var("HRM_HAPC_MIN_AMPLITUDE") {
            if let Ok(v) = val.parse::<f64>() {
                config.classification.hapc_min_amplitude = Some(v);
            }
        }
        if let Ok(val) = std::env::var("HRM_DISTANCE_BETWEEN_SENSORS_MM") {
            if let Ok(v) = val.parse::<u32>() {
                config.classification.distance_between_sensors_mm = Some(v);
            }
        }
        if let Ok(val) = std::env::var("HRM_FIRST_EVENT") {
            if !val.trim().is_empty() {
                config.events.first_event = Some(val);
            }
        }
    }

    fn apply_cli_overrides(config: &mut HrmConfig, cli: &CliOverrides) {
        if let Some(v) = cli.long_threshold_sensors {
            config.classification.long_threshold_sensors = Some(v);
        }
        if let Some(v) = cli.hapc_min_consecutive_sensors {
            config.classification.hapc_min_consecutive_sensors = Some(v);
        }
        if let Some(v) = cli.hapc_min_amplitude {
            config.classification.hapc_min_amplitude = Some(v);
        }
        if let Some(v) = cli.distance_between_sensors_mm {
            config.classification.distance_between_sensors_mm = Some(v);
        }
        if let Some(ref v) = cli.first_event {
            config.events.first_event = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
