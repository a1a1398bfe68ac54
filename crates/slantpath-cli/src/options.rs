//! Command-line argument definitions for the `slantpath` binary.
//!
//! Every flag is optional with a sensible default, so each subcommand
//! runs without arguments. Shared flags (station, frequency, output
//! location) are global and may appear before or after the subcommand;
//! values given here override the configuration file, which overrides
//! the built-in defaults.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use slantpath_core::ReportFormat;

#[derive(Parser, Debug, Clone)]
#[command(name = "slantpath", author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// All attenuation contributions vs. exceedance percentage at a
    /// fixed elevation angle
    Atmo(AtmoArgs),
    /// Cloud attenuation vs. elevation angle at a fixed exceedance
    /// percentage
    CloudElevation(CloudElevationArgs),
    /// Rain attenuation vs. exceedance percentage for a family of
    /// elevation angles
    RainExceedance(RainExceedanceArgs),
}

// ---------------------------------------------------------------------------
// Shared options
// ---------------------------------------------------------------------------

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Ground station name (used in chart titles and output file names)
    #[arg(long, global = true)]
    pub gs_name: Option<String>,

    /// Ground station latitude [deg]
    #[arg(long, global = true)]
    pub gs_lat: Option<f64>,

    /// Ground station longitude [deg]
    #[arg(long, global = true)]
    pub gs_lon: Option<f64>,

    /// Operating frequency [Hz]
    #[arg(long, global = true)]
    pub freq: Option<f64>,

    /// Output directory for charts and reports
    #[arg(long, global = true)]
    pub out_dir: Option<PathBuf>,

    /// Output file base name (the station name and extension are appended)
    #[arg(long, global = true)]
    pub out_name: Option<String>,

    /// Save the rendered chart, overriding the configuration file
    #[arg(long, global = true, conflicts_with = "no_save")]
    pub save: bool,

    /// Do not save the rendered chart
    #[arg(long, global = true)]
    pub no_save: bool,

    /// Also write the sweep results as a report in this format
    #[arg(long, global = true, value_enum)]
    pub export: Option<ExportFormat>,

    /// Configuration file to load instead of the default search path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Report format selector for `--export`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Text,
}

impl From<ExportFormat> for ReportFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Csv => ReportFormat::Csv,
            ExportFormat::Json => ReportFormat::Json,
            ExportFormat::Text => ReportFormat::Text,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-command options
// ---------------------------------------------------------------------------

#[derive(Args, Debug, Clone)]
pub struct AtmoArgs {
    /// Fixed elevation angle [deg]
    #[arg(long, default_value_t = 10.0)]
    pub elevation: f64,

    /// Number of exceedance samples between 10^-1.5 % and 10^1.5 %
    #[arg(long, default_value_t = 100)]
    pub points: usize,
}

#[derive(Args, Debug, Clone)]
pub struct CloudElevationArgs {
    /// Fixed exceedance percentage [%]
    #[arg(long, default_value_t = 1.0)]
    pub exceedance: f64,

    /// Number of elevation samples between 1 and 90 degrees
    #[arg(long, default_value_t = 100)]
    pub points: usize,
}

#[derive(Args, Debug, Clone)]
pub struct RainExceedanceArgs {
    /// Lowest elevation angle in the family [deg]
    #[arg(long, default_value_t = 1.0)]
    pub min_elevation: f64,

    /// Highest elevation angle in the family [deg]
    #[arg(long, default_value_t = 10.0)]
    pub max_elevation: f64,

    /// Number of elevation series between the two bounds
    #[arg(long, default_value_t = 10)]
    pub series: usize,

    /// Number of exceedance samples per series
    #[arg(long, default_value_t = 100)]
    pub points: usize,
}
