//! Flat per-event summary counters.

use serde::Serialize;

use hrm_core::types::{FxHashMap, Region};

use super::PatternType;
use crate::regions::RegionMap;

/// Per-event flat counters: regions, region-to-rectum ranges, and pattern
/// types. Counts are raw; the HAPC/HARPC correction is applied by
/// [`LegacyCounters::summary`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyCounters {
    regions: [u64; 5],
    to_rectum: [u64; 5],
    patterns: FxHashMap<PatternType, u64>,
}

impl LegacyCounters {
    pub fn count_region(&mut self, region: Region, pan_colonic: bool) {
        self.regions[region.index()] += 1;
        if pan_colonic && region != Region::Rectum {
            self.to_rectum[region.index()] += 1;
        }
    }

    pub fn count_pattern(&mut self, pattern: PatternType) {
        *self.patterns.entry(pattern).or_default() += 1;
    }

    pub fn region(&self, region: Region) -> u64 {
        self.regions[region.index()]
    }

    pub fn to_rectum(&self, region: Region) -> u64 {
        self.to_rectum[region.index()]
    }

    pub fn pattern(&self, pattern: PatternType) -> u64 {
        self.patterns.get(&pattern).copied().unwrap_or(0)
    }

    pub fn merge(&mut self, other: &LegacyCounters) {
        for i in 0..5 {
            self.regions[i] += other.regions[i];
            self.to_rectum[i] += other.to_rectum[i];
        }
        for (pattern, count) in &other.patterns {
            *self.patterns.entry(*pattern).or_default() += count;
        }
    }

    /// Labelled counters for one event, in sheet order. Only enabled regions
    /// are listed; `Long a` and `Long r` exclude HAPCs and HARPCs.
    pub fn summary(&self, event: &str, map: &RegionMap) -> LegacySummary {
        let active = map.active_regions();
        let mut entries = Vec::with_capacity(active.len() * 2 + PatternType::ALL.len());

        for a in &active {
            entries.push(LegacyEntry::new(a.region.name(), self.region(a.region)));
        }
        for a in active.iter().filter(|a| a.region != Region::Rectum) {
            entries.push(LegacyEntry::new(
                format!("{} tot in Rectum", a.region),
                self.to_rectum(a.region),
            ));
        }
        for pattern in PatternType::ALL {
            let raw = self.pattern(pattern);
            let count = match pattern {
                PatternType::LongA => raw.saturating_sub(self.pattern(PatternType::Hapcs)),
                PatternType::LongR => raw.saturating_sub(self.pattern(PatternType::Harpcs)),
                _ => raw,
            };
            entries.push(LegacyEntry::new(pattern.label(), count));
        }

        LegacySummary {
            event: event.to_string(),
            entries,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyEntry {
    pub label: String,
    pub count: u64,
}

impl LegacyEntry {
    fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Flat summary of one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacySummary {
    pub event: String,
    pub entries: Vec<LegacyEntry>,
}

impl LegacySummary {
    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.count)
    }
}
