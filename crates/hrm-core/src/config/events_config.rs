//! Clinical event configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FIRST_EVENT;

/// One named event and its start time.
///
/// The time is given either as a raw decisecond counter (as recorded by the
/// acquisition software) or as an `HH:MM:SS` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMarkerConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deciseconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Configuration for the event timeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Event anchored at time zero. Default: "Post-Wake".
    pub first_event: Option<String>,
    /// Further events in any order.
    pub markers: Vec<EventMarkerConfig>,
}

impl EventsConfig {
    /// Returns the first event name; blank names fall back to the default.
    pub fn effective_first_event(&self) -> String {
        self.first_event
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_FIRST_EVENT)
            .to_string()
    }
}
