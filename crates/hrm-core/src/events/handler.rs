//! HrmEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing an aggregation run.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about.
pub trait HrmEventHandler: Send + Sync {
    fn on_analysis_started(&self, _event: &AnalysisStartedEvent) {}
    fn on_event_started(&self, _event: &EventStartedEvent) {}
    fn on_event_flushed(&self, _event: &EventFlushedEvent) {}
    fn on_marker_ignored(&self, _event: &MarkerIgnoredEvent) {}
    fn on_row_skipped(&self, _event: &RowSkippedEvent) {}
    fn on_analysis_complete(&self, _event: &AnalysisCompleteEvent) {}
}

/// Handler that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl HrmEventHandler for NoOpHandler {}
