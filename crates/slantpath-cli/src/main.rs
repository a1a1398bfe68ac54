//! Slant-Path Attenuation Analyzer
//!
//! Command-line analyses of ground-station / satellite link attenuation:
//! gaseous absorption, cloud liquid water, rain, and tropospheric
//! scintillation along the slant path. Each subcommand sweeps one
//! variable (elevation angle or exceedance percentage), tabulates the
//! contributions, and renders a PNG line chart.
//!
//! ```text
//! slantpath atmo --elevation 10
//! slantpath cloud-elevation --exceedance 1
//! slantpath rain-exceedance --min-elevation 1 --max-elevation 10
//! ```

mod commands;
mod options;
mod plot;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use options::{Cli, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Atmo(args) => commands::run_atmo(&cli.common, args),
        Command::CloudElevation(args) => commands::run_cloud_elevation(&cli.common, args),
        Command::RainExceedance(args) => commands::run_rain_exceedance(&cli.common, args),
    }
}
