//! Property tests for classification, region resolution and aggregation.

mod common;

use proptest::prelude::*;

use common::pattern_row;
use hrm_analysis::record::{PatternRecord, RowLayout};
use hrm_analysis::regions::{RegionMap, RegionResolver};
use hrm_analysis::stats::{Highlight, PatternType, RegionKey, StatisticsAggregator};
use hrm_analysis::PatternClassifier;
use hrm_core::types::{Cell, Region, Row};

fn direction() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("a".to_string()),
        Just("r".to_string()),
        Just("s".to_string()),
        Just(String::new()),
        "[a-z?#! ]{0,6}",
    ]
}

fn readings() -> impl Strategy<Value = Vec<(usize, f64)>> {
    prop::collection::vec((1usize..=80, 0.0f64..250.0), 0..20)
}

fn row() -> impl Strategy<Value = Row> {
    (direction(), 0.0f64..40.0, 0u32..12, readings()).prop_map(|(d, v, len, r)| {
        pattern_row(1, (0, 0, 1), d.as_str(), v, f64::from(len), &r)
    })
}

fn stream() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        prop_oneof![
            8 => row(),
            1 => Just(vec![Cell::text("Wake")]),
            1 => Just(vec![Cell::text("Meal")]),
        ],
        0..60,
    )
    .prop_map(|mut rows| {
        rows.insert(0, vec![Cell::text("Wake")]);
        rows
    })
}

/// Map with `disabled` leading regions switched off (0..=4).
fn region_map(disabled: usize) -> RegionMap {
    match disabled.checked_sub(1).and_then(Region::from_index) {
        Some(region) if region != Region::Rectum => RegionMap::default().disable(region).unwrap(),
        _ => RegionMap::default(),
    }
}

fn events() -> Vec<String> {
    vec!["Wake".to_string(), "Meal".to_string()]
}

proptest! {
    #[test]
    fn hapc_and_harpc_are_exclusive(r in row()) {
        let record = PatternRecord::from_cells(&r, &RowLayout::default()).unwrap();
        let c = PatternClassifier::default().classify(&record);
        prop_assert!(!(c.is_hapc && c.is_harpc));
    }

    #[test]
    fn high_amplitude_run_makes_hapc(
        start in 1usize..=78,
        amp in 100.0f64..300.0,
        len in 5u32..20,
        extra in readings(),
    ) {
        let mut readings = extra;
        readings.extend([(start, amp), (start + 1, amp), (start + 2, amp)]);
        let r = pattern_row(1, (0, 0, 1), "a", 10.0, f64::from(len), &readings);
        let record = PatternRecord::from_cells(&r, &RowLayout::default()).unwrap();
        let c = PatternClassifier::default().classify(&record);
        prop_assert!(c.is_hapc);
        prop_assert!(!c.is_harpc);
    }

    #[test]
    fn resolution_is_total(r in row(), disabled in 0usize..=4) {
        let map = region_map(disabled);
        let record = PatternRecord::from_cells(&r, &RowLayout::default()).unwrap();
        let resolver = RegionResolver::new(&map);
        prop_assert!(map.is_enabled(resolver.resolve_start(&record)));
        prop_assert!(map.is_enabled(resolver.resolve_end(&record)));
    }

    #[test]
    fn cascade_holds(i in 0usize..4, j in 0usize..5) {
        let region = Region::from_index(i).unwrap();
        let disabled = RegionMap::default().disable(region).unwrap();
        let other = Region::from_index(j).unwrap();
        prop_assert_eq!(disabled.is_enabled(other), j > i);

        let enabled = disabled.enable(other).unwrap();
        for k in j..5 {
            prop_assert!(enabled.is_enabled(Region::from_index(k).unwrap()));
        }
    }

    #[test]
    fn long_totals_exclude_high_amplitude_patterns(rows in stream(), disabled in 0usize..=4) {
        let map = region_map(disabled);
        let classifier = PatternClassifier::default();
        let layout = RowLayout::default();
        let out = StatisticsAggregator::new(&map, &classifier, &layout, &events()).aggregate(&rows);

        for event in events() {
            let (mut raw_long_a, mut raw_long_r, mut hapcs, mut harpcs) = (0u64, 0u64, 0u64, 0u64);
            for a in out.annotations.iter().filter(|a| a.event == event) {
                match a.pattern {
                    Some(PatternType::LongA) => raw_long_a += 1,
                    Some(PatternType::LongR) => raw_long_r += 1,
                    _ => {}
                }
                match a.highlight {
                    Some(Highlight::Hapc) => hapcs += 1,
                    Some(Highlight::Harpc) => harpcs += 1,
                    None => {}
                }
            }

            prop_assert_eq!(out.table.count(&event, PatternType::Hapcs, RegionKey::Total), hapcs);
            prop_assert_eq!(
                out.table.count(&event, PatternType::LongA, RegionKey::Total),
                raw_long_a.saturating_sub(hapcs)
            );
            prop_assert_eq!(
                out.table.count(&event, PatternType::LongR, RegionKey::Total),
                raw_long_r.saturating_sub(harpcs)
            );
        }
    }

    #[test]
    fn aggregation_is_idempotent(rows in stream()) {
        let map = RegionMap::default();
        let classifier = PatternClassifier::default();
        let layout = RowLayout::default();
        let run = || {
            StatisticsAggregator::new(&map, &classifier, &layout, &events())
                .aggregate(&rows)
                .table
                .to_json()
                .unwrap()
        };
        prop_assert_eq!(run(), run());
    }
}
