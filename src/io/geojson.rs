use anyhow::{Context, Result, anyhow, bail, ensure};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;

use crate::region::RegionFeature;

/// Read named region features from GeoJSON FeatureCollection bytes.
/// Each feature needs a string `properties.name` and a Polygon or MultiPolygon geometry.
pub(crate) fn read_region_features(bytes: &[u8]) -> Result<Vec<RegionFeature>> {
    let value: Value = serde_json::from_slice(bytes).context("[io::geojson] Failed to parse GeoJSON bytes")?;

    ensure!(value["type"].as_str() == Some("FeatureCollection"),
        "[io::geojson] expected a FeatureCollection, got type {}", value["type"]);
    let features = value["features"].as_array()
        .ok_or_else(|| anyhow!("[io::geojson] FeatureCollection has no features array"))?;

    features.iter().enumerate()
        .map(|(idx, feature)| {
            let name = feature["properties"]["name"].as_str()
                .ok_or_else(|| anyhow!("[io::geojson] feature {idx} has no properties.name"))?;
            let shape = parse_geometry(&feature["geometry"])
                .with_context(|| format!("[io::geojson] feature {idx} ({name:?})"))?;
            Ok(RegionFeature { name: name.to_string(), shape })
        })
        .collect()
}

/// Polygon geometries are promoted to a single-member MultiPolygon.
fn parse_geometry(geometry: &Value) -> Result<MultiPolygon<f64>> {
    let coords = geometry["coordinates"].as_array()
        .ok_or_else(|| anyhow!("geometry has no coordinates array"))?;

    match geometry["type"].as_str() {
        Some("Polygon") => Ok(MultiPolygon(vec![parse_polygon_coords(coords)?])),
        Some("MultiPolygon") => coords.iter()
            .map(|polygon| {
                let rings = polygon.as_array().ok_or_else(|| anyhow!("Invalid MultiPolygon: polygon is not an array"))?;
                parse_polygon_coords(rings)
            })
            .collect::<Result<Vec<_>>>()
            .map(MultiPolygon),
        Some(other) => bail!("unsupported geometry type {other:?}"),
        None => bail!("geometry has no type"),
    }
}

/// Parse `[exterior, hole, hole, ...]`.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| {
        let points = ring.as_array().ok_or_else(|| anyhow!("Invalid Polygon: ring is not an array"))?;
        parse_ring_coords(points)
    });

    let exterior = rings.next()
        .ok_or_else(|| anyhow!("Invalid Polygon: missing exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;

    Ok(Polygon::new(exterior, interiors))
}

/// Parse `[[x, y], [x, y], ...]`; extra ordinates (altitude) are ignored.
fn parse_ring_coords(points: &[Value]) -> Result<LineString<f64>> {
    points.iter()
        .map(|point| {
            let x = point[0].as_f64().ok_or_else(|| anyhow!("Invalid position: {point}"))?;
            let y = point[1].as_f64().ok_or_else(|| anyhow!("Invalid position: {point}"))?;
            Ok(Coord { x, y })
        })
        .collect::<Result<Vec<_>>>()
        .map(LineString::new)
}
