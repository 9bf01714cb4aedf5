//! EventTimeline: the first event plus named events keyed by time.

use hrm_core::config::EventsConfig;
use hrm_core::errors::{AnalysisError, ConfigError};
use hrm_core::types::collections::BTreeMap;
use hrm_core::types::{Cell, FxHashSet, Row};

use super::EventTime;
use crate::record::RowLayout;

/// Events placed on the recording clock. The first event is anchored at
/// time zero and is not stored in the event map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTimeline {
    first_event: String,
    events: BTreeMap<EventTime, String>,
}

impl EventTimeline {
    pub fn new(first_event: impl Into<String>) -> Self {
        Self {
            first_event: first_event.into(),
            events: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &EventsConfig) -> Result<Self, ConfigError> {
        let mut timeline = Self::new(config.effective_first_event());
        for marker in &config.markers {
            let time = match (marker.deciseconds, marker.time.as_deref()) {
                (Some(ds), _) => EventTime::from_deciseconds(ds),
                (None, Some(text)) => EventTime::parse(text)?,
                (None, None) => {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("events.markers.{}", marker.name),
                        message: "either `deciseconds` or `time` must be set".to_string(),
                    })
                }
            };
            timeline.add(time, marker.name.trim());
        }
        Ok(timeline)
    }

    pub fn first_event(&self) -> &str {
        &self.first_event
    }

    pub fn set_first_event(&mut self, name: impl Into<String>) {
        self.first_event = name.into();
    }

    /// Place an event, replacing any event already at `time`.
    /// Returns the replaced name.
    pub fn add(&mut self, time: EventTime, name: impl Into<String>) -> Option<String> {
        self.events.insert(time, name.into())
    }

    pub fn remove(&mut self, time: EventTime) -> Option<String> {
        self.events.remove(&time)
    }

    /// Move and/or rename the event at `time`.
    pub fn edit(
        &mut self,
        time: EventTime,
        new_time: EventTime,
        new_name: impl Into<String>,
    ) -> Result<(), AnalysisError> {
        if self.events.remove(&time).is_none() {
            return Err(AnalysisError::UnknownEvent {
                name: time.to_string(),
            });
        }
        self.events.insert(new_time, new_name.into());
        Ok(())
    }

    /// Copy the event at `time` to the first free slot after it, stepping one
    /// second at a time. Returns the new slot.
    pub fn duplicate(&mut self, time: EventTime) -> Result<EventTime, AnalysisError> {
        let name = self
            .events
            .get(&time)
            .cloned()
            .ok_or_else(|| AnalysisError::UnknownEvent {
                name: time.to_string(),
            })?;
        let mut slot = time;
        while self.events.contains_key(&slot) {
            slot = slot
                .checked_plus_seconds(1)
                .ok_or_else(|| ConfigError::InvalidValue {
                    field: "event time".to_string(),
                    message: format!("no free slot after {time}"),
                })?;
        }
        self.events.insert(slot, name);
        Ok(slot)
    }

    /// Remove every placed event. The first event is kept.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Every marker in row order: the first event at zero, then placed events
    /// chronologically.
    pub fn markers(&self) -> Vec<(EventTime, &str)> {
        std::iter::once((EventTime::ZERO, self.first_event.as_str()))
            .chain(self.events.iter().map(|(t, n)| (*t, n.as_str())))
            .collect()
    }

    /// Distinct event names, first event first, then by time.
    pub fn names(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        self.markers()
            .into_iter()
            .filter(|(_, name)| seen.insert(*name))
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Insert a marker row for every event. Markers at time zero open the
    /// output, so the first event is active from row 0. The rest go before
    /// the first row whose clock reads at or after the event time, or at the
    /// end when no such row exists. Rows whose clock cannot be read never
    /// receive a marker.
    pub fn insert_markers(&self, rows: &[Row], layout: &RowLayout) -> Vec<Row> {
        let markers = self.markers();
        let mut pending = markers.iter().peekable();
        let mut out = Vec::with_capacity(rows.len() + markers.len());

        while let Some((time, name)) = pending.next_if(|(t, _)| *t == EventTime::ZERO) {
            out.push(marker_row(*time, name, layout));
        }
        for row in rows {
            if let Some(clock) = row_clock(row, layout) {
                while let Some((time, name)) =
                    pending.next_if(|(t, _)| hms_as_i64(*t) <= clock)
                {
                    out.push(marker_row(*time, name, layout));
                }
            }
            out.push(row.clone());
        }
        out.extend(pending.map(|(time, name)| marker_row(*time, name, layout)));
        out
    }
}

fn row_clock(row: &[Cell], layout: &RowLayout) -> Option<(i64, i64, i64)> {
    let read = |i: usize| row.get(i).and_then(Cell::as_whole);
    Some((read(layout.hour)?, read(layout.minute)?, read(layout.second)?))
}

fn hms_as_i64(time: EventTime) -> (i64, i64, i64) {
    let (h, m, s) = time.hms();
    (h as i64, m as i64, s as i64)
}

fn marker_row(time: EventTime, name: &str, layout: &RowLayout) -> Row {
    let (h, m, s) = time.hms();
    let mut row = vec![Cell::Empty; layout.required_columns()];
    row[layout.label] = Cell::text(name);
    row[layout.hour] = Cell::Number(h as f64);
    row[layout.minute] = Cell::Number(m as f64);
    row[layout.second] = Cell::Number(s as f64);
    row
}
