#![doc = "Choropleth of U.S. electric charging stations by state"]
mod config;
mod io;
mod join;
mod metrics;
mod proj;
mod region;
mod render;
mod renderer;
mod scale;

#[doc(inline)]
pub use config::{LegendConfig, RenderConfig, DEFAULT_GEOMETRY_URL, DEFAULT_METRICS_URL};

#[doc(inline)]
pub use io::{ColorScale, Rgb, Source};

#[doc(inline)]
pub use join::{join, JoinReport};

#[doc(inline)]
pub use metrics::{compute_domain, Domain, MetricRecord, Metrics};

#[doc(inline)]
pub use proj::{AlbersUsa, ConicEqualArea, Inset};

#[doc(inline)]
pub use region::{EnrichedRegion, RegionFeature};

#[doc(inline)]
pub use render::{legend_axis, render_legend, render_map, tooltip_label};

#[doc(inline)]
pub use renderer::{MapRenderer, Plot};

#[doc(inline)]
pub use scale::LinearScale;
