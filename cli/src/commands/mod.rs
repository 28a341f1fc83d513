pub mod check;
pub mod render;

use anyhow::Result;
use stationmap::{RenderConfig, Source};

use crate::cli::SourceArgs;

/// Config file (or defaults) with command-line overrides applied.
pub(crate) fn load_config(args: &SourceArgs) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::from_json_file(path)?,
        None => RenderConfig::default(),
    };
    if let Some(metrics) = &args.metrics { config.metrics = Source::from(metrics.as_str()) }
    if let Some(geometry) = &args.geometry { config.geometry = Source::from(geometry.as_str()) }
    if args.strict { config.strict_join = true }
    Ok(config)
}
