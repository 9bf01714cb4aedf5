//! Event payload types emitted during an aggregation run.

/// Payload for `on_analysis_started`.
#[derive(Debug, Clone)]
pub struct AnalysisStartedEvent {
    pub row_count: usize,
    pub tracked_events: usize,
}

/// Payload for `on_event_started`: a recognized marker switched the active event.
#[derive(Debug, Clone)]
pub struct EventStartedEvent {
    pub name: String,
    pub row_index: usize,
}

/// Payload for `on_event_flushed`: local counters merged into the result.
#[derive(Debug, Clone)]
pub struct EventFlushedEvent {
    pub name: String,
    pub patterns: u64,
    pub hapcs: u64,
    pub harpcs: u64,
}

/// Payload for `on_marker_ignored`: a marker label that names no tracked event.
#[derive(Debug, Clone)]
pub struct MarkerIgnoredEvent {
    pub label: String,
    pub row_index: usize,
}

/// Payload for `on_row_skipped`.
#[derive(Debug, Clone)]
pub struct RowSkippedEvent {
    pub row_index: usize,
    pub reason: String,
}

/// Payload for `on_analysis_complete`.
#[derive(Debug, Clone)]
pub struct AnalysisCompleteEvent {
    pub classified_rows: usize,
    pub skipped_rows: usize,
    pub ignored_markers: usize,
    pub duration_ms: u64,
}
