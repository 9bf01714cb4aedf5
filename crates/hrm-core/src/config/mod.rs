//! Configuration system for the HRM engine.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod classification_config;
pub mod events_config;
pub mod hrm_config;
pub mod layout_config;
pub mod regions_config;

pub use classification_config::{ClassificationConfig, LongPolicyKind};
pub use events_config::{EventMarkerConfig, EventsConfig};
pub use hrm_config::{CliOverrides, HrmConfig};
pub use layout_config::LayoutConfig;
pub use regions_config::{RegionRangeConfig, RegionsConfig};
