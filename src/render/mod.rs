//! Drawing of the two surfaces: the choropleth map and its color legend.

pub mod legend;
pub mod map;
pub mod tooltip;

pub use legend::{legend_axis, render_legend};
pub use map::render_map;
pub use tooltip::tooltip_label;
