//! Row builders shared by the integration tests.

#![allow(dead_code)]

use hrm_core::types::{Cell, Row};

/// Width of a pattern row in the default layout: 13 fixed columns plus 80
/// sensors.
pub const ROW_WIDTH: usize = 13 + 80;

/// Pattern row in the default layout. `readings` are `(sensor, amplitude)`
/// pairs with 1-based sensors.
pub fn pattern_row(
    seq: u32,
    (hour, minute, second): (u32, u32, u32),
    direction: impl Into<Cell>,
    velocity: impl Into<Cell>,
    length: f64,
    readings: &[(usize, f64)],
) -> Row {
    let mut row = vec![Cell::Empty; ROW_WIDTH];
    row[0] = Cell::Number(f64::from(seq));
    row[1] = Cell::Number(f64::from(hour));
    row[2] = Cell::Number(f64::from(minute));
    row[3] = Cell::Number(f64::from(second));
    row[5] = direction.into();
    row[6] = velocity.into();
    row[9] = Cell::Number(length);
    for &(sensor, amp) in readings {
        row[12 + sensor] = Cell::Number(amp);
    }
    row
}

pub fn header_row() -> Row {
    ["Sequence", "Hour", "Minute", "Second", "", "Direction", "Velocity"]
        .into_iter()
        .map(Cell::text)
        .collect()
}

pub fn marker_row(name: &str) -> Row {
    vec![Cell::text(name)]
}

/// Anterograde HAPC starting in the ascending colon and reaching the rectum.
pub fn hapc_row(seq: u32, clock: (u32, u32, u32)) -> Row {
    pattern_row(
        seq,
        clock,
        "a",
        15.0,
        5.0,
        &[(2, 150.0), (3, 150.0), (4, 150.0), (70, 40.0)],
    )
}
