//! Pairing of metric records with region features by state name.

use std::collections::{HashMap, HashSet};

use anyhow::{Result, ensure};
use serde::Serialize;

use crate::{metrics::MetricRecord, region::{EnrichedRegion, RegionFeature}};

/// Anomalies found while joining. Empty vectors mean a clean one-to-one join.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct JoinReport {
    /// Number of features that found a record.
    pub matched: usize,
    /// Feature names with no record; these render with the missing-data color.
    pub unmatched_regions: Vec<String>,
    /// Record states that name no feature.
    pub unused_records: Vec<String>,
    /// States appearing more than once in the records; only the first row is used.
    pub duplicate_states: Vec<String>,
}

impl JoinReport {
    pub fn is_clean(&self) -> bool {
        self.unmatched_regions.is_empty() && self.unused_records.is_empty() && self.duplicate_states.is_empty()
    }

    /// Error listing the duplicated states, for strict runs.
    pub fn ensure_no_duplicates(&self) -> Result<()> {
        ensure!(self.duplicate_states.is_empty(),
            "[join] duplicate state records: {}", self.duplicate_states.join(", "));
        Ok(())
    }
}

/// Enrich every feature with the first record whose `state` equals its name exactly.
/// Features keep their input order; a feature without a match gets `metrics: None`.
pub fn join(records: &[MetricRecord], features: Vec<RegionFeature>) -> (Vec<EnrichedRegion>, JoinReport) {
    let mut report = JoinReport {
        duplicate_states: duplicate_states(records),
        ..Default::default()
    };

    let names: HashSet<&str> = features.iter().map(|f| f.name.as_str()).collect();
    report.unused_records = records.iter()
        .filter(|r| !names.contains(r.state.as_str()))
        .map(|r| r.state.clone())
        .collect();

    let regions = features.into_iter()
        .map(|feature| {
            let metrics = records.iter()
                .find(|r| r.state == feature.name)
                .map(|r| r.metrics);
            match metrics {
                Some(_) => report.matched += 1,
                None => report.unmatched_regions.push(feature.name.clone()),
            }
            EnrichedRegion { feature, metrics }
        })
        .collect();

    (regions, report)
}

/// States that occur more than once, in order of first occurrence.
fn duplicate_states(records: &[MetricRecord]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.state.as_str()).or_default() += 1;
    }

    let mut seen = HashSet::new();
    records.iter()
        .map(|r| r.state.as_str())
        .filter(|state| counts[state] > 1 && seen.insert(*state))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use geo::{MultiPolygon, polygon};

    use super::*;
    use crate::metrics::{compute_domain, Domain, Metrics};

    fn feature(name: &str) -> RegionFeature {
        let square = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)];
        RegionFeature { name: name.to_string(), shape: MultiPolygon(vec![square]) }
    }

    #[test]
    fn matching_features_carry_record_metrics() {
        let records = vec![
            MetricRecord::new("Ohio", 1200.0, 10.0, 1000.0, 190.0),
            MetricRecord::new("Iowa", 300.0, 2.0, 250.0, 48.0),
        ];
        let (regions, report) = join(&records, vec![feature("Iowa"), feature("Ohio")]);

        assert_eq!(regions[0].name(), "Iowa");
        assert_eq!(regions[0].metrics, Some(records[1].metrics));
        assert_eq!(regions[1].metrics, Some(records[0].metrics));
        assert_eq!(report.matched, 2);
        assert!(report.is_clean());
        assert!(report.ensure_no_duplicates().is_ok());
    }

    #[test]
    fn first_record_wins_for_duplicate_states() {
        let records = vec![
            MetricRecord::new("Texas", 10.0, 5.0, 4.0, 1.0),
            MetricRecord::new("Texas", 20.0, 6.0, 12.0, 2.0),
        ];
        let (regions, report) = join(&records, vec![feature("Texas")]);

        assert_eq!(regions[0].metrics, Some(Metrics { value: 10.0, level1: 5.0, level2: 4.0, fast: 1.0 }));
        assert_eq!(report.duplicate_states, vec!["Texas".to_string()]);
        assert_eq!(compute_domain(&records), Some(Domain { min: 10.0, max: 20.0 }));

        let err = report.ensure_no_duplicates().unwrap_err();
        assert_eq!(err.to_string(), "[join] duplicate state records: Texas");
    }

    #[test]
    fn unmatched_feature_keeps_no_metrics() {
        let records = vec![MetricRecord::new("Maine", 500.0, 1.0, 2.0, 3.0)];
        let (regions, report) = join(&records, vec![feature("Puerto Rico"), feature("Maine")]);

        assert_eq!(regions[0].metrics, None);
        assert_eq!(regions[0].value(), None);
        assert_eq!(report.unmatched_regions, vec!["Puerto Rico".to_string()]);
        assert_eq!(report.matched, 1);
    }

    #[test]
    fn join_key_is_exact() {
        let records = vec![
            MetricRecord::new("new york", 1.0, 0.0, 0.0, 0.0),
            MetricRecord::new("Guam", 2.0, 0.0, 0.0, 0.0),
        ];
        let (regions, report) = join(&records, vec![feature("New York")]);

        assert_eq!(regions[0].metrics, None);
        assert_eq!(report.unused_records, vec!["new york".to_string(), "Guam".to_string()]);
    }
}
