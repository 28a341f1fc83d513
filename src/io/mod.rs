//! IO module for format-specific reading and writing operations.
//!
//! # Format Modules
//!
//! - `source` - dataset locations (HTTP URLs or local files) and fetching
//! - `csv` - station metrics table
//! - `geojson` - state outlines
//! - `svg` - map and legend surfaces, colors
//! - `html` - the page that hosts both surfaces
//! - `fs` - atomic file output

pub(crate) mod csv;
pub(crate) mod fs;
pub(crate) mod geojson;
pub(crate) mod html;
pub(crate) mod svg;
mod source;

pub use source::Source;
pub use svg::{ColorScale, Rgb};
