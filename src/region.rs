//! State outlines keyed by name, and their pairing with metrics after the join.

use geo::MultiPolygon;

use crate::metrics::Metrics;

/// One feature of the geometry dataset, in lon/lat degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionFeature {
    /// `properties.name`; the join key.
    pub name: String,
    pub shape: MultiPolygon<f64>,
}

/// A region paired with the metrics of its matching record, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedRegion {
    pub feature: RegionFeature,
    pub metrics: Option<Metrics>,
}

impl EnrichedRegion {
    pub fn name(&self) -> &str { &self.feature.name }

    pub fn value(&self) -> Option<f64> { self.metrics.map(|m| m.value) }
}
