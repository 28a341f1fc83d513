use anyhow::Result;
use serde_json::json;
use stationmap::{compute_domain, join, MapRenderer};

use crate::cli::{Cli, CheckArgs};

/// Runs the load and join stages only; nothing is drawn or written.
pub fn run(_cli: &Cli, args: &CheckArgs) -> Result<()> {
    let renderer = MapRenderer::new(super::load_config(&args.sources)?);

    let records = renderer.load_metrics()?;
    let domain = compute_domain(&records);
    let features = renderer.load_geometry()?;
    let (_, report) = join(&records, features);

    let summary = json!({
        "records": records.len(),
        "domain": domain,
        "join": report,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if renderer.config().strict_join {
        report.ensure_no_duplicates()?;
    }
    Ok(())
}
