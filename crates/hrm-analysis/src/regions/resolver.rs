//! Maps a pattern's first and last active sensor to an enabled region.

use hrm_core::types::Region;

use super::{ActiveRegion, RegionMap};
use crate::record::PatternRecord;

/// Resolves starting and ending regions against a fixed `RegionMap`.
///
/// Resolution is total: every call returns an enabled region.
#[derive(Debug, Clone, Copy)]
pub struct RegionResolver<'a> {
    map: &'a RegionMap,
}

impl<'a> RegionResolver<'a> {
    pub fn new(map: &'a RegionMap) -> Self {
        Self { map }
    }

    /// Region of the first (most proximal) active sensor.
    /// With no active sensor, the first enabled region.
    pub fn resolve_start(&self, record: &PatternRecord) -> Region {
        let active = self.map.active_regions();
        match record.first_active_sensor() {
            Some(sensor) => locate(&active, sensor),
            None => active.first().map_or(Region::Rectum, |a| a.region),
        }
    }

    /// Region of the last (most distal) active sensor.
    /// With no active sensor, the last enabled region.
    pub fn resolve_end(&self, record: &PatternRecord) -> Region {
        let active = self.map.active_regions();
        match record.last_active_sensor() {
            Some(sensor) => locate(&active, sensor),
            None => active.last().map_or(Region::Rectum, |a| a.region),
        }
    }

    /// Region containing `sensor`, with the edge policy applied when no
    /// enabled range contains it.
    pub fn region_of_sensor(&self, sensor: u32) -> Region {
        locate(&self.map.active_regions(), sensor)
    }
}

fn locate(active: &[ActiveRegion], sensor: u32) -> Region {
    let (Some(first), Some(last)) = (active.first(), active.last()) else {
        // A RegionMap always keeps Rectum enabled.
        return Region::Rectum;
    };

    if let Some(hit) = active.iter().find(|a| a.range.contains(sensor)) {
        return hit.region;
    }
    if sensor < first.range.start {
        return first.region;
    }
    if sensor > last.range.end {
        return last.region;
    }
    // In a gap between two enabled ranges: nearest region starting at or
    // before the sensor.
    active
        .iter()
        .rev()
        .find(|a| a.range.start <= sensor)
        .map_or(first.region, |a| a.region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::SensorRange;

    fn record(readings: &[(u32, f64)]) -> PatternRecord {
        PatternRecord::with_readings("a", 10.0, 5, readings, 80)
    }

    #[test]
    fn test_resolves_by_range() {
        let map = RegionMap::default();
        let resolver = RegionResolver::new(&map);
        let r = record(&[(20, 50.0), (50, 60.0)]);
        assert_eq!(resolver.resolve_start(&r), Region::Transverse);
        assert_eq!(resolver.resolve_end(&r), Region::Sigmoid);
    }

    #[test]
    fn test_no_active_sensor_defaults() {
        let map = RegionMap::default().disable(Region::Transverse).unwrap();
        let resolver = RegionResolver::new(&map);
        let r = record(&[(5, 0.0)]);
        assert_eq!(resolver.resolve_start(&r), Region::Descending);
        assert_eq!(resolver.resolve_end(&r), Region::Rectum);
    }

    #[test]
    fn test_sensor_before_first_enabled_range() {
        let map = RegionMap::default().disable(Region::Transverse).unwrap();
        let resolver = RegionResolver::new(&map);
        let r = record(&[(4, 120.0)]);
        assert_eq!(resolver.resolve_start(&r), Region::Descending);
        assert_eq!(resolver.resolve_end(&r), Region::Descending);
    }

    #[test]
    fn test_sensor_in_gap_falls_back_to_preceding_region() {
        let map = RegionMap::new([
            SensorRange::new(1, 10),
            SensorRange::new(15, 30),
            SensorRange::new(35, 45),
            SensorRange::new(50, 60),
            SensorRange::new(70, 78),
        ])
        .unwrap();
        let resolver = RegionResolver::new(&map);
        assert_eq!(resolver.region_of_sensor(12), Region::Ascending);
        assert_eq!(resolver.region_of_sensor(65), Region::Sigmoid);
        assert_eq!(resolver.region_of_sensor(80), Region::Rectum);
    }
}
