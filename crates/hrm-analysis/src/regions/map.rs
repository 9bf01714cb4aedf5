//! Immutable sensor-to-region map with cascading enable/disable.
//!
//! Two invariants hold for every `RegionMap` value:
//! - enabled ranges lie within `1..=80`, never overlap, and strictly
//!   increase in start sensor;
//! - the enabled regions form a contiguous run ending at Rectum.
//!
//! Every mutation returns a new map; a map is never changed in place.

use serde::Serialize;

use hrm_core::config::{RegionRangeConfig, RegionsConfig};
use hrm_core::constants::{MAX_SENSOR, MIN_SENSOR};
use hrm_core::errors::ConfigError;
use hrm_core::types::collections::SmallVec5;
use hrm_core::types::Region;

/// Inclusive, 1-based range of sensor indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SensorRange {
    pub start: u32,
    pub end: u32,
}

impl SensorRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, sensor: u32) -> bool {
        self.start <= sensor && sensor <= self.end
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

impl From<RegionRangeConfig> for SensorRange {
    fn from(c: RegionRangeConfig) -> Self {
        Self::new(c.start, c.end)
    }
}

/// An enabled region together with its sensor range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveRegion {
    pub region: Region,
    pub range: SensorRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RegionSlot {
    range: SensorRange,
    enabled: bool,
}

/// Ordered anatomical regions with their sensor ranges and enabled flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMap {
    slots: [RegionSlot; 5],
}

impl Default for RegionMap {
    /// Five 16-sensor regions covering sensors 1–80, all enabled.
    fn default() -> Self {
        Self {
            slots: Region::ALL.map(|r| RegionSlot {
                range: RegionsConfig::default_range(r).into(),
                enabled: true,
            }),
        }
    }
}

impl RegionMap {
    /// Build a map with every region enabled.
    pub fn new(ranges: [SensorRange; 5]) -> Result<Self, ConfigError> {
        Self::default().configure(ranges)
    }

    /// Build a map from configuration, validating both invariants.
    pub fn from_config(config: &RegionsConfig) -> Result<Self, ConfigError> {
        let effective = config.effective_ranges();
        let slots = effective.map(|(_, c)| RegionSlot {
            range: c.into(),
            enabled: c.enabled,
        });

        let first_enabled = slots.iter().position(|s| s.enabled);
        match first_enabled {
            None => return Err(ConfigError::NoEnabledRegion),
            Some(first) => {
                if slots[first..].iter().any(|s| !s.enabled) {
                    return Err(ConfigError::ValidationFailed {
                        field: "regions".to_string(),
                        message: "enabled regions must form a contiguous run ending at Rectum"
                            .to_string(),
                    });
                }
            }
        }

        let map = Self { slots };
        map.validate()?;
        Ok(map)
    }

    /// Replace all five sensor ranges, keeping the enabled flags.
    /// Fails on out-of-bounds, inverted, overlapping, or out-of-order ranges.
    pub fn configure(&self, ranges: [SensorRange; 5]) -> Result<Self, ConfigError> {
        let mut next = self.clone();
        for (slot, range) in next.slots.iter_mut().zip(ranges) {
            slot.range = range;
        }
        next.validate()?;
        Ok(next)
    }

    /// Replace the sensor range of one region.
    pub fn with_range(&self, region: Region, range: SensorRange) -> Result<Self, ConfigError> {
        let mut next = self.clone();
        next.slots[region.index()].range = range;
        next.validate()?;
        Ok(next)
    }

    /// Disable `region` and every region proximal to it.
    /// Disabling an already-disabled region is a no-op. Rectum cannot be
    /// disabled because no region would remain to resolve patterns into.
    pub fn disable(&self, region: Region) -> Result<Self, ConfigError> {
        if region == Region::Rectum {
            return Err(ConfigError::NoEnabledRegion);
        }
        let mut next = self.clone();
        for r in region.proximal().iter().chain(std::iter::once(&region)) {
            next.slots[r.index()].enabled = false;
        }
        Ok(next)
    }

    /// Enable `region` and every region distal to it.
    /// Fails when a newly enabled range overlaps its neighbour.
    pub fn enable(&self, region: Region) -> Result<Self, ConfigError> {
        let mut next = self.clone();
        for r in region.and_distal() {
            next.slots[r.index()].enabled = true;
        }
        next.validate()?;
        Ok(next)
    }

    pub fn is_enabled(&self, region: Region) -> bool {
        self.slots[region.index()].enabled
    }

    /// Configured range of a region, enabled or not.
    pub fn range(&self, region: Region) -> SensorRange {
        self.slots[region.index()].range
    }

    /// Range of a region if it is enabled.
    pub fn enabled_range(&self, region: Region) -> Option<SensorRange> {
        let slot = self.slots[region.index()];
        slot.enabled.then_some(slot.range)
    }

    /// Enabled regions in anatomical order with their ranges.
    pub fn active_regions(&self) -> SmallVec5<ActiveRegion> {
        Region::ALL
            .iter()
            .zip(self.slots.iter())
            .filter(|(_, s)| s.enabled)
            .map(|(r, s)| ActiveRegion {
                region: *r,
                range: s.range,
            })
            .collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (region, slot) in Region::ALL.iter().zip(self.slots.iter()) {
            let SensorRange { start, end } = slot.range;
            if start < MIN_SENSOR || end > MAX_SENSOR {
                return Err(ConfigError::RegionOutOfBounds {
                    region: region.to_string(),
                    start,
                    end,
                    min: MIN_SENSOR,
                    max: MAX_SENSOR,
                });
            }
            if end < start {
                return Err(ConfigError::RegionInverted {
                    region: region.to_string(),
                    start,
                    end,
                });
            }
        }

        let active = self.active_regions();
        for pair in active.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.range.start <= prev.range.start {
                return Err(ConfigError::RegionOutOfOrder {
                    region: next.region.to_string(),
                    previous: prev.region.to_string(),
                });
            }
            if next.range.start <= prev.range.end {
                return Err(ConfigError::RegionOverlap {
                    first: prev.region.to_string(),
                    second: next.region.to_string(),
                });
            }
        }
        Ok(())
    }
}
