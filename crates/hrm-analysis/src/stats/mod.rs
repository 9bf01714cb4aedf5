//! Event-scoped statistics: bucket keys, buckets, the aggregator state
//! machine, and the output table.

pub mod aggregator;
pub mod bucket;
pub mod keys;
pub mod legacy;
pub mod table;

pub use aggregator::{
    AggregationOutput, AggregatorState, Highlight, IgnoredMarker, PatternAnnotation, RowOutcome,
    SkipReason, SkippedRow, StatisticsAggregator,
};
pub use bucket::{BucketSummary, MetricSummary, StatsBucket};
pub use keys::{BucketKey, PatternType, RegionKey};
pub use legacy::{LegacyCounters, LegacyEntry, LegacySummary};
pub use table::{DirectionSummary, DirectionTotals, StatisticsTable, TableRow};
