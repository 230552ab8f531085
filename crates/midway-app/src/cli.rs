use std::path::PathBuf;

use clap::Parser;

/// Midway: headless window manager for a theme park game UI.
#[derive(Parser, Debug)]
#[command(name = "midway", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. "midway=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Screen width override.
    #[arg(long)]
    pub width: Option<u32>,

    /// Screen height override.
    #[arg(long)]
    pub height: Option<u32>,

    /// JSON array of window-manager steps to replay.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
