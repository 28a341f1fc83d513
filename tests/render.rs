// End-to-end runs of the station map pipeline over the fixture datasets in tests/data.

use std::path::PathBuf;

use stationmap::{compute_domain, legend_axis, ColorScale, MapRenderer, RenderConfig, Source};

fn fixture(name: &str) -> Source {
    Source::File(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name))
}

fn renderer() -> MapRenderer {
    MapRenderer::new(RenderConfig {
        metrics: fixture("state_summary.csv"),
        geometry: fixture("us-states.json"),
        ..RenderConfig::default()
    })
}

#[test]
fn loads_both_fixtures() {
    let renderer = renderer();
    let records = renderer.load_metrics().unwrap();
    let features = renderer.load_geometry().unwrap();

    assert_eq!(records.len(), 7);
    assert_eq!(features.len(), 7);
    assert_eq!(features[0].name, "Alaska");
    assert_eq!(features[0].shape.0.len(), 2);
}

#[test]
fn every_record_value_lies_in_the_domain() {
    let records = renderer().load_metrics().unwrap();
    let domain = compute_domain(&records).unwrap();

    assert_eq!((domain.min, domain.max), (5.0, 16381.0));
    assert!(records.iter().all(|r| domain.contains(r.metrics.value)));
}

#[test]
fn join_report_lists_anomalies() {
    let plot = renderer().render().unwrap();

    assert_eq!(plot.report.matched, 6);
    assert_eq!(plot.report.unmatched_regions, vec!["Puerto Rico".to_string()]);
    assert_eq!(plot.report.unused_records, vec!["Guam".to_string()]);
    assert!(plot.report.duplicate_states.is_empty());
}

#[test]
fn map_has_one_path_per_feature_and_clips_puerto_rico() {
    let plot = renderer().render().unwrap();

    assert_eq!(plot.map_svg.matches(r#"<path class="region""#).count(), 7);
    // outside every Albers USA extent, so the element has no outline
    assert_eq!(plot.map_svg.matches(r#"d="" "#).count(), 1);
    let puerto_rico = plot.map_svg.lines().find(|l| l.contains("Puerto Rico")).unwrap();
    assert!(puerto_rico.contains(r#"d="" "#));
    assert!(puerto_rico.contains("fill:rgb(150,150,150)"));
    assert!(plot.map_svg.contains("Puerto Rico&#10;&#10;No data"));
    // California holds the maximum
    assert!(plot.map_svg.contains("fill:rgb(53,1,74)"));
}

#[test]
fn legend_reads_the_map_domain() {
    let renderer = renderer();
    let plot = renderer.render().unwrap();
    let config = renderer.config();

    let scale = ColorScale::new(plot.domain, config.low_color, config.high_color);
    assert_eq!(legend_axis(&scale, &config.legend).domain(), plot.domain);
    assert!(plot.legend_svg.contains(">16,000</text>"));
}

#[test]
fn writes_the_page_atomically() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("index.html");

    let plot = renderer().render().unwrap();
    plot.write_html(&out, false).unwrap();

    let page = std::fs::read_to_string(&out).unwrap();
    let map = page.find(r#"class="map""#).unwrap();
    let legend = page.find(r#"class="legend""#).unwrap();
    assert!(page.contains(r#"<div id="plot">"#));
    assert!(map < legend);

    assert!(plot.write_html(&out, false).is_err());
    plot.write_html(&out, true).unwrap();
}

#[test]
fn missing_metrics_file_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = MapRenderer::new(RenderConfig {
        metrics: Source::File(dir.path().join("nope.csv")),
        geometry: fixture("us-states.json"),
        ..RenderConfig::default()
    });

    let err = renderer.render().unwrap_err();
    assert!(format!("{err:#}").contains("nope.csv"));
}
