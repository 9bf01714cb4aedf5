//! Output table addressable by (event, pattern type, region).

use serde::Serialize;

use hrm_core::types::FxHashMap;

use super::{
    BucketKey, BucketSummary, LegacyCounters, LegacySummary, MetricSummary, PatternType, RegionKey,
    StatsBucket,
};
use crate::classify::{Classification, Direction};
use crate::regions::RegionMap;

/// One cell group of the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub event: String,
    pub pattern: PatternType,
    pub region: RegionKey,
    #[serde(flatten)]
    pub summary: BucketSummary,
}

/// Final statistics of an aggregation pass.
///
/// Rows are ordered by event (tracking order), then pattern type, then
/// region key, so serialization is deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsTable {
    pub events: Vec<String>,
    pub rows: Vec<TableRow>,
    pub legacy: Vec<LegacySummary>,
    pub direction_totals: Vec<DirectionSummary>,
    #[serde(skip)]
    index: FxHashMap<BucketKey, usize>,
}

impl StatisticsTable {
    /// Build the table from merged raw buckets, applying the HAPC/HARPC
    /// correction to the `Long a` and `Long r` totals once per event.
    pub(crate) fn build(
        events: &[String],
        results: &FxHashMap<BucketKey, StatsBucket>,
        legacy: &FxHashMap<String, LegacyCounters>,
        map: &RegionMap,
        direction_totals: DirectionTotals,
    ) -> Self {
        let empty = StatsBucket::default();
        let count_of = |event: &str, pattern: PatternType| {
            results
                .get(&BucketKey::new(event, pattern, RegionKey::Total))
                .map_or(0, |b| b.count)
        };

        let mut rows = Vec::with_capacity(events.len() * 60);
        let mut index = FxHashMap::default();
        for event in events {
            let hapcs = count_of(event.as_str(), PatternType::Hapcs);
            let harpcs = count_of(event.as_str(), PatternType::Harpcs);

            for pattern in PatternType::ALL {
                for &region in pattern.region_keys() {
                    let key = BucketKey::new(event.as_str(), pattern, region);
                    let mut summary = results.get(&key).unwrap_or(&empty).summary();
                    if region == RegionKey::Total {
                        let correction = match pattern {
                            PatternType::LongA => hapcs,
                            PatternType::LongR => harpcs,
                            _ => 0,
                        };
                        summary.count = summary.count.saturating_sub(correction);
                    }
                    index.insert(key, rows.len());
                    rows.push(TableRow {
                        event: event.clone(),
                        pattern,
                        region,
                        summary,
                    });
                }
            }
        }

        let empty_legacy = LegacyCounters::default();
        let legacy = events
            .iter()
            .map(|e| legacy.get(e).unwrap_or(&empty_legacy).summary(e, map))
            .collect();

        Self {
            events: events.to_vec(),
            rows,
            legacy,
            direction_totals: direction_totals.summaries(),
            index,
        }
    }

    pub fn get(
        &self,
        event: &str,
        pattern: PatternType,
        region: RegionKey,
    ) -> Option<&BucketSummary> {
        self.index
            .get(&BucketKey::new(event, pattern, region))
            .map(|&i| &self.rows[i].summary)
    }

    /// Count of a bucket, 0 when the bucket does not exist.
    pub fn count(&self, event: &str, pattern: PatternType, region: RegionKey) -> u64 {
        self.get(event, pattern, region).map_or(0, |s| s.count)
    }

    pub fn legacy(&self, event: &str) -> Option<&LegacySummary> {
        self.legacy.iter().find(|l| l.event == event)
    }

    /// Totals of one direction; `None` selects rows without a direction.
    pub fn direction(&self, direction: Option<Direction>) -> Option<&DirectionSummary> {
        self.direction_totals.iter().find(|d| d.direction == direction)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, Default)]
struct DirectionSlot {
    bucket: StatsBucket,
    hapcs: u64,
    harpcs: u64,
}

/// Run-wide totals grouped by direction.
#[derive(Debug, Clone, Default)]
pub struct DirectionTotals {
    slots: [DirectionSlot; 4],
}

impl DirectionTotals {
    const ORDER: [Option<Direction>; 4] = [
        Some(Direction::Anterograde),
        Some(Direction::Retrograde),
        Some(Direction::Simultaneous),
        None,
    ];

    pub fn record(&mut self, c: &Classification) {
        let i = match c.direction {
            Some(Direction::Anterograde) => 0,
            Some(Direction::Retrograde) => 1,
            Some(Direction::Simultaneous) => 2,
            None => 3,
        };
        let slot = &mut self.slots[i];
        slot.bucket.record(c.velocity, &c.amplitudes);
        slot.hapcs += u64::from(c.is_hapc);
        slot.harpcs += u64::from(c.is_harpc);
    }

    pub fn summaries(&self) -> Vec<DirectionSummary> {
        Self::ORDER
            .iter()
            .zip(&self.slots)
            .map(|(direction, slot)| DirectionSummary {
                direction: *direction,
                count: slot.bucket.count,
                hapcs: slot.hapcs,
                harpcs: slot.harpcs,
                velocity: MetricSummary::of(&slot.bucket.velocities),
                amplitude: MetricSummary::of(&slot.bucket.amplitudes),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionSummary {
    pub direction: Option<Direction>,
    pub count: u64,
    pub hapcs: u64,
    pub harpcs: u64,
    pub velocity: Option<MetricSummary>,
    pub amplitude: Option<MetricSummary>,
}
