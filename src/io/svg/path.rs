//! Geometry to SVG path data.

use geo::{CoordsIter, LineString, MultiPolygon};

use crate::proj::AlbersUsa;

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
/// Each polygon is projected and clipped by the Albers USA inset it belongs to;
/// the string is empty when no part of the shape is visible.
pub(crate) fn multipolygon_to_path(shape: &MultiPolygon<f64>, albers: &AlbersUsa) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        for piece in albers.project_polygon(polygon) {
            ring_to_path(piece.exterior(), &mut out);
            for interior in piece.interiors() {
                ring_to_path(interior, &mut out);
            }
        }
    }

    out.trim_start().to_string()
}

/// Append a screen-space ring as an SVG subpath: "M x,y L x,y ... Z"
/// The closing vertex of a closed ring is left to `Z`.
pub(crate) fn ring_to_path(ring: &LineString<f64>, out: &mut String) {
    let count = if ring.is_closed() && ring.0.len() > 1 { ring.0.len() - 1 } else { ring.0.len() };

    let mut coords = ring.coords_iter()
        .take(count)
        .map(|coord| (coord.x, coord.y));
    if let Some((x, y)) = coords.next() {
        out.push_str(&format!(" M{x:.3},{y:.3}"));
        for (x, y) in coords {
            out.push_str(&format!(" L{x:.3},{y:.3}"));
        }
        out.push('Z');
    }
}
