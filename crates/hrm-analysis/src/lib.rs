//! hrm-analysis: pattern classification and statistics for colonic
//! high-resolution manometry.
//!
//! Rows flow through [`record`] (typed extraction), [`classify`] and
//! [`regions`] (per-row, stateless) into [`stats`] (event-scoped
//! aggregation). [`pipeline::AnalysisPipeline`] wires them together from an
//! [`hrm_core::config::HrmConfig`].

pub mod classify;
pub mod pipeline;
pub mod record;
pub mod regions;
pub mod stats;
pub mod timeline;

pub use classify::{Classification, ClassificationParams, PatternClassifier};
pub use pipeline::{AnalysisPipeline, AnalysisReport};
pub use regions::{PanColonicDetector, RegionMap, RegionResolver, SensorRange};
pub use stats::{PatternType, RegionKey, StatisticsAggregator, StatisticsTable};
pub use timeline::{EventTime, EventTimeline};
