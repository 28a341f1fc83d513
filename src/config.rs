//! Render configuration. Defaults reproduce the published station map.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::io::{Rgb, Source};

pub const DEFAULT_METRICS_URL: &str =
    "https://raw.githubusercontent.com/YueMenaYang/EDAVFinalProj/refs/heads/main/data/state_summary.csv";
pub const DEFAULT_GEOMETRY_URL: &str =
    "https://raw.githubusercontent.com/YueMenaYang/EDAVFinalProj/refs/heads/main/data/us-states.json";

/// Everything the pipeline needs besides the two datasets themselves.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Tabular source (URL or local path).
    pub metrics: Source,
    /// GeoJSON source (URL or local path).
    pub geometry: Source,

    pub width: f64,
    pub height: f64,

    /// Albers USA scale factor.
    pub projection_scale: f64,
    /// Albers USA translate; defaults to the center of the map.
    pub projection_translate: Option<(f64, f64)>,

    pub low_color: Rgb,
    pub high_color: Rgb,
    /// Fill for regions without a matching metric record.
    pub missing_color: Rgb,

    pub stroke_color: Rgb,
    pub stroke_width: f64,

    pub legend: LegendConfig,

    /// Fail on duplicate state keys instead of keeping the first record.
    pub strict_join: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LegendConfig {
    pub width: f64,
    pub height: f64,
    /// Width of the gradient bar; the axis sits one pixel to its right.
    pub bar_width: f64,
    /// Vertical offset of the bar and axis inside the legend surface.
    pub offset: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            metrics: Source::from(DEFAULT_METRICS_URL),
            geometry: Source::from(DEFAULT_GEOMETRY_URL),
            width: 960.0,
            height: 500.0,
            projection_scale: 850.0,
            projection_translate: None,
            low_color: Rgb { r: 0xd5, g: 0xb1, b: 0xe3 },
            high_color: Rgb { r: 0x35, g: 0x01, b: 0x4a },
            missing_color: Rgb { r: 150, g: 150, b: 150 },
            stroke_color: Rgb { r: 0xff, g: 0xff, b: 0xff },
            stroke_width: 1.0,
            legend: LegendConfig::default(),
            strict_join: false,
        }
    }
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self { width: 140.0, height: 300.0, bar_width: 40.0, offset: 10.0 }
    }
}

impl RenderConfig {
    /// Read a JSON config file. Fields left out keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("[config] Invalid config in {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("[config] Failed to parse config JSON")
    }

    /// Projection translate, centered on the map unless overridden.
    pub fn translate(&self) -> (f64, f64) {
        self.projection_translate.unwrap_or((self.width / 2.0, self.height / 2.0))
    }
}
