//! EventDispatcher fan-out.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hrm_core::events::{EventDispatcher, EventFlushedEvent, HrmEventHandler, RowSkippedEvent};

#[derive(Default)]
struct Counting {
    flushed: AtomicUsize,
    skipped: AtomicUsize,
}

impl HrmEventHandler for Counting {
    fn on_event_flushed(&self, _event: &EventFlushedEvent) {
        self.flushed.fetch_add(1, Ordering::SeqCst);
    }

    fn on_row_skipped(&self, _event: &RowSkippedEvent) {
        self.skipped.fetch_add(1, Ordering::SeqCst);
    }
}

struct Panicking;

impl HrmEventHandler for Panicking {
    fn on_event_flushed(&self, _event: &EventFlushedEvent) {
        panic!("handler failure");
    }
}

fn flushed() -> EventFlushedEvent {
    EventFlushedEvent {
        name: "Wake".into(),
        patterns: 3,
        hapcs: 1,
        harpcs: 0,
    }
}

#[test]
fn test_dispatch_reaches_every_handler() {
    let a = Arc::new(Counting::default());
    let b = Arc::new(Counting::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(a.clone());
    dispatcher.register(b.clone());
    assert_eq!(dispatcher.handler_count(), 2);

    dispatcher.on_event_flushed(&flushed());
    dispatcher.on_row_skipped(&RowSkippedEvent {
        row_index: 4,
        reason: "Row label is empty".into(),
    });
    assert_eq!(a.flushed.load(Ordering::SeqCst), 1);
    assert_eq!(b.skipped.load(Ordering::SeqCst), 1);
}

#[test]
fn test_panicking_handler_does_not_block_others() {
    let counting = Arc::new(Counting::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(Panicking));
    dispatcher.register(counting.clone());

    dispatcher.on_event_flushed(&flushed());
    assert_eq!(counting.flushed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_empty_dispatcher_is_a_no_op() {
    let dispatcher = EventDispatcher::new();
    dispatcher.on_event_flushed(&flushed());
    assert_eq!(dispatcher.handler_count(), 0);
}
