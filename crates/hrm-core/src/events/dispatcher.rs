//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::HrmEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// The dispatcher is itself a handler, so it can be passed anywhere a single
/// `&dyn HrmEventHandler` is expected.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn HrmEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn HrmEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn HrmEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                ::tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }
}

impl HrmEventHandler for EventDispatcher {
    fn on_analysis_started(&self, event: &AnalysisStartedEvent) {
        self.emit(|h| h.on_analysis_started(event));
    }

    fn on_event_started(&self, event: &EventStartedEvent) {
        self.emit(|h| h.on_event_started(event));
    }

    fn on_event_flushed(&self, event: &EventFlushedEvent) {
        self.emit(|h| h.on_event_flushed(event));
    }

    fn on_marker_ignored(&self, event: &MarkerIgnoredEvent) {
        self.emit(|h| h.on_marker_ignored(event));
    }

    fn on_row_skipped(&self, event: &RowSkippedEvent) {
        self.emit(|h| h.on_row_skipped(event));
    }

    fn on_analysis_complete(&self, event: &AnalysisCompleteEvent) {
        self.emit(|h| h.on_analysis_complete(event));
    }
}
