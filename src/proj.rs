//! Albers USA: a conic equal-area projection of the lower 48 with Alaska and
//! Hawaii drawn as insets in the lower-left corner. Each piece is clipped to
//! its own screen extent; anything outside all three is not drawn.

use std::f64::consts::PI;

use geo::{BooleanOps, BoundingRect, Coord, MapCoords, MultiPolygon, Polygon, Rect};

/// Conic equal-area projection with rotation, centering, scale and translate.
/// Output is in screen space (y down).
#[derive(Clone, Copy, Debug)]
pub struct ConicEqualArea {
    n: f64,
    c: f64,
    r0: f64,
    /// Longitude rotation, radians.
    rotate: f64,
    scale: f64,
    dx: f64,
    dy: f64,
}

impl ConicEqualArea {
    /// All angles in degrees. `center` is (lon, lat) in the rotated frame and lands on `translate`.
    pub fn new(rotate: f64, center: (f64, f64), parallels: (f64, f64), scale: f64, translate: (f64, f64)) -> Self {
        let sy0 = parallels.0.to_radians().sin();
        let n = (sy0 + parallels.1.to_radians().sin()) / 2.0;
        let c = 1.0 + sy0 * (2.0 * n - sy0);
        let r0 = c.sqrt() / n;

        let mut proj = Self { n, c, r0, rotate: rotate.to_radians(), scale, dx: 0.0, dy: 0.0 };
        let (cx, cy) = proj.raw(center.0.to_radians(), center.1.to_radians());
        proj.dx = translate.0 - scale * cx;
        proj.dy = translate.1 + scale * cy;
        proj
    }

    /// Unscaled projection of (lambda, phi) in radians, y up.
    fn raw(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let r = (self.c - 2.0 * self.n * phi.sin()).max(0.0).sqrt() / self.n;
        let x = lambda * self.n;
        (r * x.sin(), self.r0 - r * x.cos())
    }

    /// Project lon/lat degrees to screen coordinates.
    pub fn project(&self, coord: &Coord<f64>) -> (f64, f64) {
        let mut lambda = coord.x.to_radians() + self.rotate;
        if lambda > PI { lambda -= 2.0 * PI } else if lambda < -PI { lambda += 2.0 * PI }
        let (x, y) = self.raw(lambda, coord.y.to_radians());
        (self.dx + self.scale * x, self.dy - self.scale * y)
    }
}

/// Which piece of the composite a coordinate belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inset { Lower48, Alaska, Hawaii }

impl Inset {
    pub fn of(coord: &Coord<f64>) -> Self {
        if coord.y >= 50.0 && (coord.x <= -129.0 || coord.x >= 170.0) {
            Inset::Alaska
        } else if coord.y <= 23.0 && coord.x <= -150.0 {
            Inset::Hawaii
        } else {
            Inset::Lower48
        }
    }

    /// Inset of a whole polygon, chosen by its first exterior vertex so rings
    /// are never split across insets.
    pub fn of_polygon(polygon: &Polygon<f64>) -> Self {
        polygon.exterior().0.first().map_or(Inset::Lower48, Inset::of)
    }
}

/// Composite projection for U.S. states.
#[derive(Clone, Copy, Debug)]
pub struct AlbersUsa {
    lower48: ConicEqualArea,
    alaska: ConicEqualArea,
    hawaii: ConicEqualArea,
    lower48_extent: Rect<f64>,
    alaska_extent: Rect<f64>,
    hawaii_extent: Rect<f64>,
}

impl AlbersUsa {
    pub fn new(scale: f64, translate: (f64, f64)) -> Self {
        let (x, y) = translate;
        let k = scale;
        Self {
            lower48: ConicEqualArea::new(96.0, (-0.6, 38.7), (29.5, 45.5), k, (x, y)),
            alaska: ConicEqualArea::new(154.0, (-2.0, 58.5), (55.0, 65.0), 0.35 * k, (x - 0.307 * k, y + 0.201 * k)),
            hawaii: ConicEqualArea::new(157.0, (-3.0, 19.9), (8.0, 18.0), k, (x - 0.205 * k, y + 0.212 * k)),
            lower48_extent: Rect::new(
                Coord { x: x - 0.455 * k, y: y - 0.238 * k },
                Coord { x: x + 0.455 * k, y: y + 0.238 * k },
            ),
            alaska_extent: Rect::new(
                Coord { x: x - 0.425 * k, y: y + 0.120 * k },
                Coord { x: x - 0.214 * k, y: y + 0.234 * k },
            ),
            hawaii_extent: Rect::new(
                Coord { x: x - 0.214 * k, y: y + 0.166 * k },
                Coord { x: x - 0.115 * k, y: y + 0.234 * k },
            ),
        }
    }

    pub fn inset(&self, inset: Inset) -> &ConicEqualArea {
        match inset {
            Inset::Lower48 => &self.lower48,
            Inset::Alaska => &self.alaska,
            Inset::Hawaii => &self.hawaii,
        }
    }

    /// Screen-space clip box of an inset.
    pub fn extent(&self, inset: Inset) -> Rect<f64> {
        match inset {
            Inset::Lower48 => self.lower48_extent,
            Inset::Alaska => self.alaska_extent,
            Inset::Hawaii => self.hawaii_extent,
        }
    }

    /// Project a single coordinate with the inset that contains it.
    /// `None` when the point lands outside that inset's extent.
    pub fn project(&self, coord: &Coord<f64>) -> Option<(f64, f64)> {
        let inset = Inset::of(coord);
        let (x, y) = self.inset(inset).project(coord);
        covers(&self.extent(inset), &Rect::new(Coord { x, y }, Coord { x, y })).then_some((x, y))
    }

    /// Project a polygon into screen space and clip it to its inset's extent.
    /// The result is empty when nothing of the polygon is visible.
    pub fn project_polygon(&self, polygon: &Polygon<f64>) -> MultiPolygon<f64> {
        let inset = Inset::of_polygon(polygon);
        let projection = self.inset(inset);
        let extent = self.extent(inset);

        let projected = polygon.map_coords(|coord| {
            let (x, y) = projection.project(&coord);
            Coord { x, y }
        });
        match projected.bounding_rect() {
            Some(bbox) if covers(&extent, &bbox) => MultiPolygon(vec![projected]),
            Some(bbox) if overlaps(&extent, &bbox) => projected.intersection(&extent.to_polygon()),
            _ => MultiPolygon(vec![]),
        }
    }
}

fn covers(outer: &Rect<f64>, inner: &Rect<f64>) -> bool {
    outer.min().x <= inner.min().x && inner.max().x <= outer.max().x
        && outer.min().y <= inner.min().y && inner.max().y <= outer.max().y
}

fn overlaps(a: &Rect<f64>, b: &Rect<f64>) -> bool {
    a.min().x <= b.max().x && b.min().x <= a.max().x
        && a.min().y <= b.max().y && b.min().y <= a.max().y
}
