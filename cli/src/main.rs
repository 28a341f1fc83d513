
mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{check, render};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Render(args) => render::run(&cli, args),
        Commands::Check(args) => check::run(&cli, args),
    }
}

/// `-v` enables info, `-vv` debug, `-vvv` trace. RUST_LOG still wins when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> { run() }
