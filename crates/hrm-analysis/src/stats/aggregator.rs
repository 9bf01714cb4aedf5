//! StatisticsAggregator: event-scoped state machine over the row stream.
//!
//! Rows are processed strictly in order. A recognized marker row switches
//! the active event; every pattern row after it counts toward that event
//! until the next recognized marker. Counters accumulate locally and are
//! merged into the per-event result when the event ends, so an event that
//! recurs later in the stream keeps the statistics of all its occurrences.

use std::time::Instant;

use serde::{Serialize, Serializer};

use hrm_core::errors::RowError;
use hrm_core::events::{
    AnalysisCompleteEvent, AnalysisStartedEvent, EventFlushedEvent, EventStartedEvent,
    HrmEventHandler, MarkerIgnoredEvent, NoOpHandler, RowSkippedEvent,
};
use hrm_core::types::{Cell, FxHashMap, FxHashSet, Region};

use super::table::DirectionTotals;
use super::{BucketKey, LegacyCounters, PatternType, RegionKey, StatisticsTable, StatsBucket};
use crate::classify::{Classification, PatternClassifier};
use crate::record::{PatternRecord, RowKind, RowLayout};
use crate::regions::{PanColonicDetector, RegionMap, RegionResolver};

static NO_OP: NoOpHandler = NoOpHandler;

/// Where the aggregator is in the row stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregatorState {
    /// No recognized marker seen yet.
    Idle,
    Accumulating { event: String },
}

/// Why a row did not contribute to the statistics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    #[error(transparent)]
    Row(#[from] RowError),

    #[error("Pattern row before the first event marker")]
    NoActiveEvent,
}

impl Serialize for SkipReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Colouring of a HAPC or HARPC row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Highlight {
    Hapc,
    Harpc,
}

/// Per-row result written back alongside the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternAnnotation {
    pub row_index: usize,
    pub event: String,
    pub starting_region: Region,
    pub ending_region: Region,
    /// `None` when the row has no readable direction.
    pub pattern: Option<PatternType>,
    pub pan_colonic: bool,
    pub highlight: Option<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRow {
    pub row_index: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoredMarker {
    pub row_index: usize,
    pub label: String,
}

/// Outcome of feeding one row to the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Classified(PatternAnnotation),
    Header,
    EventStarted(String),
    MarkerIgnored(String),
    Skipped(SkipReason),
}

/// Counters for the event currently accumulating.
#[derive(Debug, Default)]
struct LocalCounters {
    buckets: FxHashMap<(PatternType, RegionKey), StatsBucket>,
    legacy: LegacyCounters,
    patterns: u64,
}

impl LocalCounters {
    fn bucket(&mut self, pattern: PatternType, region: RegionKey) -> &mut StatsBucket {
        self.buckets.entry((pattern, region)).or_default()
    }
}

/// Accumulates per-(event, pattern type, region) buckets over a row stream.
pub struct StatisticsAggregator<'a> {
    map: &'a RegionMap,
    classifier: &'a PatternClassifier,
    layout: &'a RowLayout,
    handler: &'a dyn HrmEventHandler,
    events: Vec<String>,
    tracked: FxHashSet<String>,
    state: AggregatorState,
    local: LocalCounters,
    results: FxHashMap<BucketKey, StatsBucket>,
    legacy: FxHashMap<String, LegacyCounters>,
    direction_totals: DirectionTotals,
    annotations: Vec<PatternAnnotation>,
    skipped: Vec<SkippedRow>,
    ignored: Vec<IgnoredMarker>,
    next_row: usize,
    started: Instant,
}

impl<'a> StatisticsAggregator<'a> {
    /// Aggregator tracking `events`, with every bucket pre-allocated at zero.
    /// Duplicate names are tracked once.
    pub fn new(
        map: &'a RegionMap,
        classifier: &'a PatternClassifier,
        layout: &'a RowLayout,
        events: &[String],
    ) -> Self {
        let mut tracked = FxHashSet::default();
        let events: Vec<String> = events
            .iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty() && tracked.insert(e.clone()))
            .collect();

        let mut results = FxHashMap::default();
        let mut legacy = FxHashMap::default();
        for event in &events {
            for pattern in PatternType::ALL {
                for region in pattern.region_keys() {
                    results.insert(
                        BucketKey::new(event.as_str(), pattern, *region),
                        StatsBucket::default(),
                    );
                }
            }
            legacy.insert(event.clone(), LegacyCounters::default());
        }

        Self {
            map,
            classifier,
            layout,
            handler: &NO_OP,
            events,
            tracked,
            state: AggregatorState::Idle,
            local: LocalCounters::default(),
            results,
            legacy,
            direction_totals: DirectionTotals::default(),
            annotations: Vec::new(),
            skipped: Vec::new(),
            ignored: Vec::new(),
            next_row: 0,
            started: Instant::now(),
        }
    }

    /// Report state transitions to `handler`.
    pub fn with_handler(mut self, handler: &'a dyn HrmEventHandler) -> Self {
        self.handler = handler;
        self
    }

    pub fn state(&self) -> &AggregatorState {
        &self.state
    }

    pub fn tracked_events(&self) -> &[String] {
        &self.events
    }

    /// Process every row and build the table.
    pub fn aggregate(mut self, rows: &[Vec<Cell>]) -> AggregationOutput {
        let span = tracing::info_span!(
            "hrm.aggregate",
            rows = rows.len(),
            events = self.events.len()
        );
        let _guard = span.enter();

        self.handler.on_analysis_started(&AnalysisStartedEvent {
            row_count: rows.len(),
            tracked_events: self.events.len(),
        });
        for row in rows {
            self.process_row(row);
        }
        self.finish()
    }

    /// Feed the next row of the stream.
    pub fn process_row(&mut self, row: &[Cell]) -> RowOutcome {
        let row_index = self.next_row;
        self.next_row += 1;

        let label = match row.get(self.layout.label) {
            None => {
                return self.skip(
                    row_index,
                    RowError::MissingColumns {
                        expected: self.layout.required_columns(),
                        found: row.len(),
                    }
                    .into(),
                )
            }
            Some(label) if label.is_empty() => {
                return self.skip(row_index, RowError::EmptyLabel.into())
            }
            Some(label) => label,
        };

        match RowKind::of_label(label) {
            RowKind::Header => RowOutcome::Header,
            RowKind::EventMarker(name) => self.on_marker(row_index, name),
            RowKind::Pattern => self.on_pattern(row_index, row),
        }
    }

    fn on_marker(&mut self, row_index: usize, name: String) -> RowOutcome {
        if !self.tracked.contains(&name) {
            tracing::debug!(row_index, label = %name, "ignoring unknown event marker");
            self.handler.on_marker_ignored(&MarkerIgnoredEvent {
                label: name.clone(),
                row_index,
            });
            self.ignored.push(IgnoredMarker {
                row_index,
                label: name.clone(),
            });
            return RowOutcome::MarkerIgnored(name);
        }

        self.flush();
        self.state = AggregatorState::Accumulating { event: name.clone() };
        self.handler.on_event_started(&EventStartedEvent {
            name: name.clone(),
            row_index,
        });
        RowOutcome::EventStarted(name)
    }

    fn on_pattern(&mut self, row_index: usize, row: &[Cell]) -> RowOutcome {
        let event = match &self.state {
            AggregatorState::Accumulating { event } => event.clone(),
            AggregatorState::Idle => return self.skip(row_index, SkipReason::NoActiveEvent),
        };

        let record = match PatternRecord::from_cells(row, self.layout) {
            Ok(record) => record,
            Err(e) => return self.skip(row_index, e.into()),
        };

        let resolver = RegionResolver::new(self.map);
        let start = resolver.resolve_start(&record);
        let end = resolver.resolve_end(&record);
        let classification = self.classifier.classify(&record).located(start, end);
        let pan_colonic = PanColonicDetector::new(self.map).is_pan_colonic(&record, Some(start));

        let annotation = self.record(row_index, event, &classification, pan_colonic);
        self.annotations.push(annotation.clone());
        RowOutcome::Classified(annotation)
    }

    fn record(
        &mut self,
        row_index: usize,
        event: String,
        c: &Classification,
        pan_colonic: bool,
    ) -> PatternAnnotation {
        let start = c.starting_region.unwrap_or(Region::Rectum);
        let end = c.ending_region.unwrap_or(Region::Rectum);
        let local = &mut self.local;
        local.patterns += 1;
        local.legacy.count_region(start, pan_colonic);

        let pattern = c.direction.map(|d| PatternType::of(c.length_category, d));
        if let Some(pattern) = pattern {
            local.bucket(pattern, RegionKey::Region(start)).record(c.velocity, &c.amplitudes);
            if pan_colonic {
                if let Some(range) = RegionKey::to_rectum(start) {
                    local.bucket(pattern, range).record(c.velocity, &c.amplitudes);
                }
            }
            local.bucket(pattern, RegionKey::Total).record(c.velocity, &c.amplitudes);
            local.legacy.count_pattern(pattern);
        }

        let highlight = if c.is_hapc {
            Some(Highlight::Hapc)
        } else if c.is_harpc {
            Some(Highlight::Harpc)
        } else {
            None
        };
        match highlight {
            Some(Highlight::Hapc) => {
                local
                    .bucket(PatternType::Hapcs, RegionKey::Total)
                    .record(c.velocity, &c.amplitudes);
                local.legacy.count_pattern(PatternType::Hapcs);
            }
            Some(Highlight::Harpc) => {
                local
                    .bucket(PatternType::Harpcs, RegionKey::Total)
                    .record(c.velocity, &c.amplitudes);
                local.legacy.count_pattern(PatternType::Harpcs);
            }
            None => {}
        }

        self.direction_totals.record(c);

        PatternAnnotation {
            row_index,
            event,
            starting_region: start,
            ending_region: end,
            pattern,
            pan_colonic,
            highlight,
        }
    }

    fn skip(&mut self, row_index: usize, reason: SkipReason) -> RowOutcome {
        tracing::debug!(row_index, reason = %reason, "skipping row");
        self.handler.on_row_skipped(&RowSkippedEvent {
            row_index,
            reason: reason.to_string(),
        });
        self.skipped.push(SkippedRow {
            row_index,
            reason: reason.clone(),
        });
        RowOutcome::Skipped(reason)
    }

    /// Merge local counters into the active event's results and reset them.
    fn flush(&mut self) {
        let AggregatorState::Accumulating { event } = &self.state else {
            return;
        };
        let local = std::mem::take(&mut self.local);

        for ((pattern, region), bucket) in &local.buckets {
            self.results
                .entry(BucketKey::new(event.as_str(), *pattern, *region))
                .or_default()
                .merge(bucket);
        }
        self.legacy
            .entry(event.clone())
            .or_default()
            .merge(&local.legacy);

        let hapcs = local.legacy.pattern(PatternType::Hapcs);
        let harpcs = local.legacy.pattern(PatternType::Harpcs);
        tracing::info!(event = %event, patterns = local.patterns, hapcs, harpcs, "event flushed");
        self.handler.on_event_flushed(&EventFlushedEvent {
            name: event.clone(),
            patterns: local.patterns,
            hapcs,
            harpcs,
        });
    }

    /// Flush the active event and build the output.
    pub fn finish(mut self) -> AggregationOutput {
        self.flush();

        let table = StatisticsTable::build(
            &self.events,
            &self.results,
            &self.legacy,
            self.map,
            self.direction_totals,
        );

        self.handler.on_analysis_complete(&AnalysisCompleteEvent {
            classified_rows: self.annotations.len(),
            skipped_rows: self.skipped.len(),
            ignored_markers: self.ignored.len(),
            duration_ms: self.started.elapsed().as_millis() as u64,
        });

        AggregationOutput {
            table,
            annotations: self.annotations,
            skipped: self.skipped,
            ignored_markers: self.ignored,
        }
    }
}

/// Everything one aggregation pass produces.
#[derive(Debug, Clone, Serialize)]
pub struct AggregationOutput {
    pub table: StatisticsTable,
    pub annotations: Vec<PatternAnnotation>,
    pub skipped: Vec<SkippedRow>,
    pub ignored_markers: Vec<IgnoredMarker>,
}
