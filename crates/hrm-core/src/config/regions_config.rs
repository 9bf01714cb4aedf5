//! Sensor-to-region configuration.

use serde::{Deserialize, Serialize};

use crate::types::Region;

/// Sensor range and enabled flag of one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRangeConfig {
    /// First sensor of the range (1-based, inclusive).
    pub start: u32,
    /// Last sensor of the range (inclusive).
    pub end: u32,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl RegionRangeConfig {
    pub const fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end,
            enabled: true,
        }
    }
}

/// Per-region overrides. Missing regions fall back to the default
/// 16-sensor layout (Ascending 1–16 … Rectum 65–80).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionsConfig {
    pub ascending: Option<RegionRangeConfig>,
    pub transverse: Option<RegionRangeConfig>,
    pub descending: Option<RegionRangeConfig>,
    pub sigmoid: Option<RegionRangeConfig>,
    pub rectum: Option<RegionRangeConfig>,
}

impl RegionsConfig {
    /// Default range for a region.
    pub fn default_range(region: Region) -> RegionRangeConfig {
        let start = region.index() as u32 * 16 + 1;
        RegionRangeConfig::new(start, start + 15)
    }

    pub fn get(&self, region: Region) -> Option<RegionRangeConfig> {
        match region {
            Region::Ascending => self.ascending,
            Region::Transverse => self.transverse,
            Region::Descending => self.descending,
            Region::Sigmoid => self.sigmoid,
            Region::Rectum => self.rectum,
        }
    }

    pub fn set(&mut self, region: Region, range: RegionRangeConfig) {
        let slot = match region {
            Region::Ascending => &mut self.ascending,
            Region::Transverse => &mut self.transverse,
            Region::Descending => &mut self.descending,
            Region::Sigmoid => &mut self.sigmoid,
            Region::Rectum => &mut self.rectum,
        };
        *slot = Some(range);
    }

    /// Effective ranges in anatomical order.
    pub fn effective_ranges(&self) -> [(Region, RegionRangeConfig); 5] {
        Region::ALL.map(|r| (r, self.get(r).unwrap_or_else(|| Self::default_range(r))))
    }
}
