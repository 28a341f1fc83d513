//! Per-state station counts and their value domain.

use serde::Serialize;

/// Station counts for one state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Metrics {
    /// Total number of electric stations; drives the fill color.
    pub value: f64,
    pub level1: f64,
    pub level2: f64,
    pub fast: f64,
}

/// One row of the tabular dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricRecord {
    pub state: String,
    pub metrics: Metrics,
}

impl MetricRecord {
    pub fn new(state: impl Into<String>, value: f64, level1: f64, level2: f64, fast: f64) -> Self {
        Self { state: state.into(), metrics: Metrics { value, level1, level2, fast } }
    }
}

/// Closed value interval shared by the map fill and the legend axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Position of `value` in the domain: 0 at `min`, 1 at `max`.
    /// A zero-width domain maps everything to 0.5.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 { 0.5 } else { (value - self.min) / span }
    }
}

/// Min and max of every record's `value`, ignoring non-finite entries.
/// Returns `None` when there is nothing to scan.
pub fn compute_domain(records: &[MetricRecord]) -> Option<Domain> {
    records.iter()
        .map(|record| record.metrics.value)
        .filter(|value| value.is_finite())
        .fold(None, |domain, value| match domain {
            None => Some(Domain { min: value, max: value }),
            Some(Domain { min, max }) => Some(Domain { min: min.min(value), max: max.max(value) }),
        })
}
