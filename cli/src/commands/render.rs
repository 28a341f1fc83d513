use anyhow::Result;
use stationmap::MapRenderer;

use crate::cli::{Cli, RenderArgs};

pub fn run(_cli: &Cli, args: &RenderArgs) -> Result<()> {
    let config = super::load_config(&args.sources)?;
    log::info!("[render] metrics={} geometry={}", config.metrics, config.geometry);

    let plot = MapRenderer::new(config).render()?;
    plot.write_html(&args.output, args.force)?;

    println!("Wrote {} ({} of {} regions with data)",
        args.output.display(),
        plot.report.matched,
        plot.report.matched + plot.report.unmatched_regions.len(),
    );
    Ok(())
}
