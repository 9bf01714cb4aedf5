//! Composite bucket keys.

use std::fmt;

use serde::{Serialize, Serializer};

use hrm_core::types::Region;

use crate::classify::{Direction, LengthCategory};

/// Pattern category a bucket counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatternType {
    LongS,
    ShortS,
    LongR,
    ShortR,
    LongA,
    ShortA,
    CyclicS,
    CyclicR,
    CyclicA,
    Hapcs,
    Harpcs,
}

impl PatternType {
    /// Every pattern type in table order.
    pub const ALL: [PatternType; 11] = [
        PatternType::LongS,
        PatternType::ShortS,
        PatternType::LongR,
        PatternType::ShortR,
        PatternType::LongA,
        PatternType::ShortA,
        PatternType::CyclicS,
        PatternType::CyclicR,
        PatternType::CyclicA,
        PatternType::Hapcs,
        PatternType::Harpcs,
    ];

    pub fn of(length: LengthCategory, direction: Direction) -> Self {
        match (length, direction) {
            (LengthCategory::Long, Direction::Simultaneous) => Self::LongS,
            (LengthCategory::Short, Direction::Simultaneous) => Self::ShortS,
            (LengthCategory::Long, Direction::Retrograde) => Self::LongR,
            (LengthCategory::Short, Direction::Retrograde) => Self::ShortR,
            (LengthCategory::Long, Direction::Anterograde) => Self::LongA,
            (LengthCategory::Short, Direction::Anterograde) => Self::ShortA,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LongS => "Long s",
            Self::ShortS => "Short s",
            Self::LongR => "Long r",
            Self::ShortR => "Short r",
            Self::LongA => "Long a",
            Self::ShortA => "Short a",
            Self::CyclicS => "cyclic s",
            Self::CyclicR => "cyclic r",
            Self::CyclicA => "cyclic a",
            Self::Hapcs => "HAPCs",
            Self::Harpcs => "HARPCs",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Types kept only as a single `Total` bucket, without a region breakdown.
    pub fn is_special(self) -> bool {
        matches!(
            self,
            Self::CyclicS | Self::CyclicR | Self::CyclicA | Self::Hapcs | Self::Harpcs
        )
    }

    /// Region keys this type has buckets for.
    pub fn region_keys(self) -> &'static [RegionKey] {
        if self.is_special() {
            &[RegionKey::Total]
        } else {
            &RegionKey::ALL
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for PatternType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Region axis of a bucket: a single region, a region-to-rectum range, or
/// the total over the pattern type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionKey {
    Region(Region),
    ToRectum(Region),
    Total,
}

impl RegionKey {
    pub const ALL: [RegionKey; 10] = [
        RegionKey::Region(Region::Ascending),
        RegionKey::Region(Region::Transverse),
        RegionKey::Region(Region::Descending),
        RegionKey::Region(Region::Sigmoid),
        RegionKey::Region(Region::Rectum),
        RegionKey::ToRectum(Region::Ascending),
        RegionKey::ToRectum(Region::Transverse),
        RegionKey::ToRectum(Region::Descending),
        RegionKey::ToRectum(Region::Sigmoid),
        RegionKey::Total,
    ];

    /// Pan-colonic range starting at `region`. Rectum has none.
    pub fn to_rectum(region: Region) -> Option<Self> {
        (region != Region::Rectum).then_some(Self::ToRectum(region))
    }

    pub fn label(self) -> String {
        match self {
            Self::Region(r) => r.name().to_string(),
            Self::ToRectum(r) => format!("{r} → Rectum"),
            Self::Total => "Total".to_string(),
        }
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for RegionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// Full address of a result bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketKey {
    pub event: String,
    pub pattern: PatternType,
    pub region: RegionKey,
}

impl BucketKey {
    pub fn new(event: impl Into<String>, pattern: PatternType, region: RegionKey) -> Self {
        Self {
            event: event.into(),
            pattern,
            region,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(PatternType::of(LengthCategory::Long, Direction::Anterograde).label(), "Long a");
        assert_eq!(PatternType::from_label("HARPCs"), Some(PatternType::Harpcs));
        assert_eq!(RegionKey::ToRectum(Region::Sigmoid).label(), "Sigmoid → Rectum");
        assert_eq!(RegionKey::to_rectum(Region::Rectum), None);
    }

    #[test]
    fn test_special_types_have_only_total() {
        assert_eq!(PatternType::Hapcs.region_keys(), &[RegionKey::Total]);
        assert_eq!(PatternType::ShortS.region_keys().len(), 10);
    }
}
