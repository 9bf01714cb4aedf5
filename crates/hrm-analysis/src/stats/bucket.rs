//! StatsBucket and its min/max/mean summaries.

use serde::Serialize;
use statrs::statistics::Statistics;

/// Count plus the raw velocity and amplitude samples behind it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsBucket {
    pub count: u64,
    pub velocities: Vec<f64>,
    pub amplitudes: Vec<f64>,
}

impl StatsBucket {
    /// Count one pattern. Zero velocities are not sampled.
    pub fn record(&mut self, velocity: f64, amplitudes: &[f64]) {
        self.count += 1;
        if velocity != 0.0 {
            self.velocities.push(velocity);
        }
        self.amplitudes.extend_from_slice(amplitudes);
    }

    pub fn merge(&mut self, other: &StatsBucket) {
        self.count += other.count;
        self.velocities.extend_from_slice(&other.velocities);
        self.amplitudes.extend_from_slice(&other.amplitudes);
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0 && self.velocities.is_empty() && self.amplitudes.is_empty()
    }

    pub fn summary(&self) -> BucketSummary {
        BucketSummary {
            count: self.count,
            velocity: MetricSummary::of(&self.velocities),
            amplitude: MetricSummary::of(&self.amplitudes),
        }
    }
}

/// Min, max and mean of a sample list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl MetricSummary {
    /// `None` for an empty list.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        Some(Self {
            min: Statistics::min(values),
            max: Statistics::max(values),
            mean: Statistics::mean(values),
        })
    }
}

/// Output form of a bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSummary {
    pub count: u64,
    pub velocity: Option<MetricSummary>,
    pub amplitude: Option<MetricSummary>,
}
