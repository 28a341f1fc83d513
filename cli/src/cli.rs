use std::path::PathBuf;

/// Electric station choropleth CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "stationmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Fetch both datasets and write the map page
    Render(RenderArgs),

    /// Fetch both datasets and print the join report as JSON
    Check(CheckArgs),
}

/// Dataset and config options shared by every command.
#[derive(clap::Args, Debug)]
pub struct SourceArgs {
    /// Metrics CSV (URL or path); overrides the config file
    #[arg(long, value_hint = clap::ValueHint::AnyPath)]
    pub metrics: Option<String>,

    /// States GeoJSON (URL or path); overrides the config file
    #[arg(long, value_hint = clap::ValueHint::AnyPath)]
    pub geometry: Option<String>,

    /// JSON render config; unspecified fields keep their defaults
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Fail on duplicate state records instead of keeping the first
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output HTML file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath, default_value = "index.html")]
    pub output: PathBuf,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub sources: SourceArgs,
}
