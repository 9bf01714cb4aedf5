//! AnalysisPipeline: configuration in, statistics report out.

use serde::Serialize;

use hrm_core::config::HrmConfig;
use hrm_core::errors::ConfigError;
use hrm_core::events::{HrmEventHandler, NoOpHandler};
use hrm_core::types::Row;

use crate::classify::{ClassificationParams, PatternClassifier};
use crate::record::RowLayout;
use crate::regions::RegionMap;
use crate::stats::{
    IgnoredMarker, PatternAnnotation, SkippedRow, StatisticsAggregator, StatisticsTable,
};
use crate::timeline::EventTimeline;

/// Result of one analysis run.
///
/// Row indices in `annotations`, `skipped` and `ignored_markers` refer to
/// `rows`, the input with event markers inserted.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub table: StatisticsTable,
    pub annotations: Vec<PatternAnnotation>,
    pub skipped: Vec<SkippedRow>,
    pub ignored_markers: Vec<IgnoredMarker>,
    #[serde(skip)]
    pub rows: Vec<Row>,
}

/// Validated configuration bundled for repeated runs.
#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    map: RegionMap,
    classifier: PatternClassifier,
    layout: RowLayout,
    timeline: EventTimeline,
}

impl AnalysisPipeline {
    pub fn new(
        map: RegionMap,
        params: ClassificationParams,
        layout: RowLayout,
        timeline: EventTimeline,
    ) -> Self {
        Self {
            map,
            classifier: PatternClassifier::new(params),
            layout,
            timeline,
        }
    }

    /// Build every component from configuration. Invalid region ranges,
    /// thresholds, or event times are rejected here, before any row is read.
    pub fn from_config(config: &HrmConfig) -> Result<Self, ConfigError> {
        HrmConfig::validate(config)?;
        Ok(Self::new(
            RegionMap::from_config(&config.regions)?,
            ClassificationParams::from_config(&config.classification),
            RowLayout::from_config(&config.layout),
            EventTimeline::from_config(&config.events)?,
        ))
    }

    pub fn region_map(&self) -> &RegionMap {
        &self.map
    }

    /// Replace the region map, e.g. after a cascade.
    pub fn set_region_map(&mut self, map: RegionMap) {
        self.map = map;
    }

    pub fn classifier(&self) -> &PatternClassifier {
        &self.classifier
    }

    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    pub fn timeline(&self) -> &EventTimeline {
        &self.timeline
    }

    pub fn timeline_mut(&mut self) -> &mut EventTimeline {
        &mut self.timeline
    }

    /// Insert event markers into `rows` and aggregate.
    pub fn run(&self, rows: &[Row]) -> AnalysisReport {
        self.run_with_handler(rows, &NoOpHandler)
    }

    pub fn run_with_handler(&self, rows: &[Row], handler: &dyn HrmEventHandler) -> AnalysisReport {
        let marked = self.timeline.insert_markers(rows, &self.layout);
        self.aggregate_marked(marked, handler)
    }

    /// Aggregate rows that already carry their event markers.
    pub fn aggregate_marked(
        &self,
        rows: Vec<Row>,
        handler: &dyn HrmEventHandler,
    ) -> AnalysisReport {
        let events = self.timeline.names();
        let output = StatisticsAggregator::new(&self.map, &self.classifier, &self.layout, &events)
            .with_handler(handler)
            .aggregate(&rows);

        tracing::info!(
            rows = rows.len(),
            classified = output.annotations.len(),
            skipped = output.skipped.len(),
            ignored_markers = output.ignored_markers.len(),
            "analysis complete"
        );

        AnalysisReport {
            table: output.table,
            annotations: output.annotations,
            skipped: output.skipped,
            ignored_markers: output.ignored_markers,
            rows,
        }
    }
}
