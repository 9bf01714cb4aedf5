//! Clinical events placed on the recording clock.

pub mod time;
pub mod timeline;

pub use time::EventTime;
pub use timeline::EventTimeline;
