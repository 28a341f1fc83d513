use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::{
    config::RenderConfig,
    io::{self, ColorScale},
    join::{join, JoinReport},
    metrics::{compute_domain, Domain, MetricRecord},
    region::RegionFeature,
    render::{render_legend, render_map},
};

/// Rendered output of one pipeline run.
#[derive(Clone, Debug)]
pub struct Plot {
    /// Map surface (inline SVG).
    pub map_svg: String,
    /// Legend surface (inline SVG).
    pub legend_svg: String,
    /// Value domain shared by the map fill and the legend axis.
    pub domain: Domain,
    pub report: JoinReport,
}

impl Plot {
    /// Page with both surfaces inside `div#plot`, map first.
    pub fn to_html(&self) -> Result<String> {
        io::html::write_page("Electric Stations by State", &[self.map_svg.as_str(), self.legend_svg.as_str()])
    }

    /// Atomically write the page to `path`.
    pub fn write_html(&self, path: &Path, force: bool) -> Result<()> {
        io::fs::write_atomic(path, self.to_html()?.as_bytes(), force)?;
        log::info!("[render] wrote {}", path.display());
        Ok(())
    }
}

/// Runs the pipeline: fetch metrics, compute the domain, fetch geometry, join,
/// draw the map, draw the legend. Each stage runs once, strictly in that order.
pub struct MapRenderer {
    config: RenderConfig,
}

impl MapRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig { &self.config }

    /// Fetch and parse the station table.
    pub fn load_metrics(&self) -> Result<Vec<MetricRecord>> {
        let source = &self.config.metrics;
        log::info!("[metrics] fetching {source}");
        let bytes = source.fetch()?;
        let records = io::csv::read_metric_records(&bytes)
            .with_context(|| format!("[metrics] Failed to parse {source}"))?;
        log::info!("[metrics] {} records", records.len());
        Ok(records)
    }

    /// Fetch and parse the state outlines.
    pub fn load_geometry(&self) -> Result<Vec<RegionFeature>> {
        let source = &self.config.geometry;
        log::info!("[geometry] fetching {source}");
        let bytes = source.fetch()?;
        let features = io::geojson::read_region_features(&bytes)
            .with_context(|| format!("[geometry] Failed to parse {source}"))?;
        log::info!("[geometry] {} features", features.len());
        Ok(features)
    }

    /// Run the whole pipeline against the configured sources.
    pub fn render(&self) -> Result<Plot> {
        let records = self.load_metrics()?;
        let domain = domain_of(&records)?;
        let features = self.load_geometry()?;
        self.draw(&records, domain, features)
    }

    /// Run the pipeline on datasets already in memory.
    pub fn render_bytes(&self, metrics: &[u8], geometry: &[u8]) -> Result<Plot> {
        let records = io::csv::read_metric_records(metrics).context("[metrics] Failed to parse metrics CSV")?;
        let domain = domain_of(&records)?;
        let features = io::geojson::read_region_features(geometry).context("[geometry] Failed to parse GeoJSON")?;
        self.draw(&records, domain, features)
    }

    fn draw(&self, records: &[MetricRecord], domain: Domain, features: Vec<RegionFeature>) -> Result<Plot> {
        let (regions, report) = join(records, features);
        log_report(&report);
        if self.config.strict_join {
            report.ensure_no_duplicates()?;
        }

        let scale = ColorScale::new(domain, self.config.low_color, self.config.high_color);
        log::debug!("[render] domain [{}, {}]", domain.min, domain.max);

        let map_svg = render_map(&regions, &scale, &self.config)?;
        let legend_svg = render_legend(&scale, &self.config.legend)?;

        Ok(Plot { map_svg, legend_svg, domain, report })
    }
}

fn domain_of(records: &[MetricRecord]) -> Result<Domain> {
    compute_domain(records).ok_or_else(|| anyhow!("[metrics] no metric records with a numeric value"))
}

fn log_report(report: &JoinReport) {
    log::info!("[join] {} regions matched", report.matched);
    if !report.unmatched_regions.is_empty() {
        log::warn!("[join] no metrics for: {}", report.unmatched_regions.join(", "));
    }
    if !report.unused_records.is_empty() {
        log::warn!("[join] records without a region: {}", report.unused_records.join(", "));
    }
    if !report.duplicate_states.is_empty() {
        log::warn!("[join] duplicate records, first kept: {}", report.duplicate_states.join(", "));
    }
}
