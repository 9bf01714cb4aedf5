//! End-to-end aggregation through the pipeline.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use common::{hapc_row, header_row, marker_row, pattern_row};
use hrm_analysis::classify::Direction;
use hrm_analysis::regions::RegionMap;
use hrm_analysis::stats::{Highlight, PatternType, RegionKey, SkipReason};
use hrm_analysis::{AnalysisPipeline, EventTime};
use hrm_core::config::HrmConfig;
use hrm_core::events::{EventFlushedEvent, EventStartedEvent, HrmEventHandler};
use hrm_core::types::Region;

const WAKE_MEAL: &str = r#"
[events]
first_event = "Wake"

[[events.markers]]
name = "Meal"
time = "00:02:00"
"#;

fn pipeline(toml: &str) -> AnalysisPipeline {
    AnalysisPipeline::from_config(&HrmConfig::from_toml(toml).unwrap()).unwrap()
}

#[test]
fn test_hapc_scenario() {
    let rows = vec![
        header_row(),
        hapc_row(1, (0, 0, 10)),
        hapc_row(2, (0, 0, 40)),
        hapc_row(3, (0, 1, 30)),
        pattern_row(4, (0, 2, 30), "s", 5.0, 2.0, &[(50, 30.0)]),
    ];
    let report = pipeline(WAKE_MEAL).run(&rows);
    let table = &report.table;

    assert_eq!(table.events, vec!["Wake", "Meal"]);
    assert_eq!(table.count("Wake", PatternType::Hapcs, RegionKey::Total), 3);
    assert_eq!(
        table.count("Wake", PatternType::LongA, RegionKey::ToRectum(Region::Ascending)),
        3
    );
    assert_eq!(
        table.count("Wake", PatternType::LongA, RegionKey::Region(Region::Ascending)),
        3
    );
    assert_eq!(table.count("Wake", PatternType::LongA, RegionKey::Total), 0);
    assert_eq!(table.count("Meal", PatternType::Hapcs, RegionKey::Total), 0);
    assert_eq!(
        table.count("Meal", PatternType::ShortS, RegionKey::Region(Region::Sigmoid)),
        1
    );

    let hapcs = table.get("Wake", PatternType::Hapcs, RegionKey::Total).unwrap();
    let velocity = hapcs.velocity.unwrap();
    assert_eq!((velocity.min, velocity.max, velocity.mean), (15.0, 15.0, 15.0));
    let amplitude = hapcs.amplitude.unwrap();
    assert_eq!((amplitude.min, amplitude.max), (40.0, 150.0));

    let wake = table.legacy("Wake").unwrap();
    assert_eq!(wake.get("Ascending"), Some(3));
    assert_eq!(wake.get("Ascending tot in Rectum"), Some(3));
    assert_eq!(wake.get("Long a"), Some(0));
    assert_eq!(wake.get("HAPCs"), Some(3));

    assert!(report
        .annotations
        .iter()
        .filter(|a| a.event == "Wake")
        .all(|a| a.highlight == Some(Highlight::Hapc) && a.starting_region == Region::Ascending));
    assert_eq!(report.annotations[0].ending_region, Region::Rectum);
}

#[test]
fn test_garbage_direction_and_velocity() {
    let rows = vec![
        pattern_row(1, (0, 0, 5), "#?r!", "fast", 2.0, &[(20, 35.0)]),
        pattern_row(2, (0, 0, 6), "x r", "n/a", 6.0, &[(20, 35.0)]),
    ];
    let report = pipeline("").run(&rows);
    let table = &report.table;
    let event = "Post-Wake";

    assert!(report.skipped.is_empty());
    assert_eq!(
        table.count(event, PatternType::ShortR, RegionKey::Region(Region::Transverse)),
        1
    );
    assert_eq!(table.count(event, PatternType::LongR, RegionKey::Total), 1);
    let short_r = table.get(event, PatternType::ShortR, RegionKey::Total).unwrap();
    assert!(short_r.velocity.is_none());
    assert_eq!(short_r.amplitude.unwrap().mean, 35.0);

    let retro = table.direction(Some(Direction::Retrograde)).unwrap();
    assert_eq!(retro.count, 2);
}

#[test]
fn test_disabled_regions_resolve_to_first_enabled() {
    let toml = r#"
[regions.ascending]
start = 1
end = 16
enabled = false

[regions.transverse]
start = 17
end = 32
enabled = false
"#;
    let p = pipeline(toml);
    assert!(!p.region_map().is_enabled(Region::Transverse));

    let rows = vec![pattern_row(1, (0, 0, 1), "a", 5.0, 2.0, &[(3, 40.0), (70, 20.0)])];
    let report = p.run(&rows);
    assert_eq!(report.annotations[0].starting_region, Region::Descending);
    // The descending range itself is silent, so the row is not pan-colonic.
    assert!(!report.annotations[0].pan_colonic);

    let legacy = report.table.legacy("Post-Wake").unwrap();
    assert_eq!(legacy.get("Ascending"), None);
    assert_eq!(legacy.get("Descending"), Some(1));
}

#[test]
fn test_region_overlap_is_rejected_before_processing() {
    let toml = r#"
[regions.transverse]
start = 10
end = 32
"#;
    let config = HrmConfig::from_toml(toml).unwrap();
    let err = AnalysisPipeline::from_config(&config).unwrap_err();
    assert!(err.is_region_error());
}

#[test]
fn test_rows_before_any_marker_are_skipped() {
    let p = pipeline("");
    let rows = vec![marker_row("Nap"), hapc_row(1, (0, 0, 1))];
    // Aggregate without the timeline's markers: no tracked event is active.
    let report = p.aggregate_marked(rows, &hrm_core::events::NoOpHandler);
    assert_eq!(report.ignored_markers.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::NoActiveEvent);
}

#[test]
fn test_output_is_deterministic() {
    let mut p = pipeline(WAKE_MEAL);
    p.timeline_mut().add(EventTime::from_hms(0, 3, 0), "Walk");
    let rows: Vec<_> = (0..40)
        .map(|i| {
            let clock = (0, i / 10, (i * 7) % 60);
            match i % 4 {
                0 => hapc_row(i, clock),
                1 => pattern_row(i, clock, "r", 3.0, 6.0, &[(60, 120.0), (61, 130.0), (62, 140.0)]),
                2 => pattern_row(i, clock, "s", 0.0, 1.0, &[(33, 20.0)]),
                _ => pattern_row(i, clock, "", 2.0, 4.0, &[]),
            }
        })
        .collect();
    let first = p.run(&rows).table.to_json().unwrap();
    let second = p.run(&rows).table.to_json().unwrap();
    assert_eq!(first, second);
}

#[derive(Default)]
struct Recorder {
    started: AtomicUsize,
    flushed: AtomicUsize,
}

impl HrmEventHandler for Recorder {
    fn on_event_started(&self, _event: &EventStartedEvent) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }

    fn on_event_flushed(&self, _event: &EventFlushedEvent) {
        self.flushed.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_handler_sees_every_flush() {
    let rows = vec![hapc_row(1, (0, 0, 10)), hapc_row(2, (0, 2, 10))];
    let recorder = Recorder::default();
    pipeline(WAKE_MEAL).run_with_handler(&rows, &recorder);
    assert_eq!(recorder.started.load(Ordering::SeqCst), 2);
    assert_eq!(recorder.flushed.load(Ordering::SeqCst), 2);
}

#[test]
fn test_region_map_swap_changes_resolution() {
    let mut p = pipeline("");
    let map = RegionMap::default().disable(Region::Sigmoid).unwrap();
    p.set_region_map(map);
    let rows = vec![pattern_row(1, (0, 0, 1), "a", 5.0, 2.0, &[(10, 40.0)])];
    let report = p.run(&rows);
    assert_eq!(report.annotations[0].starting_region, Region::Rectum);
}

#[test]
fn test_report_serializes() {
    let report = pipeline(WAKE_MEAL).run(&[hapc_row(1, (0, 0, 10))]);
    let json = serde_json::to_value(&report).unwrap();
    assert!(json["table"]["rows"].as_array().unwrap().len() > 100);
    assert_eq!(json["annotations"][0]["highlight"], "Hapc");
    let first_row = &json["table"]["rows"][0];
    assert_eq!(first_row["pattern"], "Long s");
    assert_eq!(first_row["region"], "Ascending");
    assert!(first_row["velocity"].is_null());
}
