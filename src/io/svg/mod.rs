//! SVG format writing operations for the map and legend surfaces.

mod color;
mod path;
mod writer;

pub use color::*;
pub(crate) use path::*;
pub(crate) use writer::*;
