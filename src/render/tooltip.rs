//! Hover label for a region.
//!
//! Every region path carries its label twice: as a `data-tip` attribute read by
//! the page script on `mouseover`/`mouseout`, and as a `<title>` child so a
//! standalone SVG still shows a native tooltip.

use std::io::Write;

use anyhow::Result;

use crate::{io::svg::escape_xml, region::EnrichedRegion};

/// Region name, a blank line, then one line per metric.
pub fn tooltip_label(region: &EnrichedRegion) -> String {
    match region.metrics {
        Some(m) => format!(
            "{}\n\n\
             Number of Electric Stations: {}\n\
             Number of Level 1 Stations: {}\n\
             Number of Level 2 Stations: {}\n\
             Number of Fast Stations: {}",
            region.name(), m.value, m.level1, m.level2, m.fast,
        ),
        None => format!("{}\n\nNo data", region.name()),
    }
}

/// Attribute carrying the label for the page script.
pub(crate) fn tooltip_attr(region: &EnrichedRegion) -> String {
    format!(r#" data-tip="{}""#, escape_xml(&tooltip_label(region)))
}

/// `<title>` child for the region's path element.
pub(crate) fn write_title(writer: &mut impl Write, region: &EnrichedRegion) -> Result<()> {
    // content keeps raw newlines; only attributes need them as references
    let label = tooltip_label(region);
    let escaped = escape_xml(&label).replace("&#10;", "\n");
    write!(writer, "<title>{escaped}</title>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use geo::MultiPolygon;

    use super::*;
    use crate::{metrics::Metrics, region::RegionFeature};

    fn region(name: &str, metrics: Option<Metrics>) -> EnrichedRegion {
        EnrichedRegion { feature: RegionFeature { name: name.to_string(), shape: MultiPolygon(vec![]) }, metrics }
    }

    #[test]
    fn label_lists_all_four_metrics() {
        let texas = region("Texas", Some(Metrics { value: 2873.0, level1: 9.0, level2: 2422.0, fast: 442.5 }));
        assert_eq!(tooltip_label(&texas), "Texas\n\n\
            Number of Electric Stations: 2873\n\
            Number of Level 1 Stations: 9\n\
            Number of Level 2 Stations: 2422\n\
            Number of Fast Stations: 442.5");
    }

    #[test]
    fn unmatched_region_says_no_data() {
        assert_eq!(tooltip_label(&region("Puerto Rico", None)), "Puerto Rico\n\nNo data");
    }

    #[test]
    fn attribute_and_title_are_escaped() {
        let r = region("A&M", None);
        assert_eq!(tooltip_attr(&r), r#" data-tip="A&amp;M&#10;&#10;No data""#);

        let mut out = Vec::new();
        write_title(&mut out, &r).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "<title>A&amp;M\n\nNo data</title>");
    }
}
