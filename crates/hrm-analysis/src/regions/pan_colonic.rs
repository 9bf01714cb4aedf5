//! Pan-colonic propagation test.

use hrm_core::types::Region;

use super::RegionMap;
use crate::record::PatternRecord;

/// Decides whether a pattern reaches the rectum from its starting region.
#[derive(Debug, Clone, Copy)]
pub struct PanColonicDetector<'a> {
    map: &'a RegionMap,
}

impl<'a> PanColonicDetector<'a> {
    pub fn new(map: &'a RegionMap) -> Self {
        Self { map }
    }

    /// True when both the rectum range and the starting region's range hold
    /// at least one positive reading. False when either region is disabled
    /// or the starting region is unknown.
    pub fn is_pan_colonic(&self, record: &PatternRecord, starting_region: Option<Region>) -> bool {
        let Some(start) = starting_region else {
            return false;
        };
        let (Some(rectum), Some(own)) = (
            self.map.enabled_range(Region::Rectum),
            self.map.enabled_range(start),
        ) else {
            return false;
        };
        record.has_activity_in(rectum) && record.has_activity_in(own)
    }
}
