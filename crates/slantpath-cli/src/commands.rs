//! The three slant-path analysis commands.
//!
//! Each command resolves its effective configuration (CLI flags over
//! config file over built-in defaults), runs the sweep with the
//! built-in model, renders a chart unless saving is disabled, and
//! optionally writes a report via `--export`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use slantpath_core::{
    linspace, run_multi_sweep, run_sweep, Contribution, FixedValue, IturApproxModel,
    MultiSweepReport, SlantPathModel, SlantpathConfig, SweepAxis, SweepReport,
};

use crate::options::{AtmoArgs, CloudElevationArgs, CommonArgs, RainExceedanceArgs};
use crate::plot;

// Exceedance sweeps cover 10^-1.5 % to 10^1.5 % of an average year.
const EXCEEDANCE_EXP_LO: f64 = -1.5;
const EXCEEDANCE_EXP_HI: f64 = 1.5;

/// All attenuation contributions vs. exceedance at a fixed elevation.
pub fn run_atmo(common: &CommonArgs, args: &AtmoArgs) -> Result<()> {
    let config = resolve_config(common)?;
    let scenario = config.scenario();
    let model = IturApproxModel::new();

    tracing::info!(
        elevation_deg = args.elevation,
        points = args.points,
        "running atmo analysis"
    );

    let axis = SweepAxis::exceedance_logspace(EXCEEDANCE_EXP_LO, EXCEEDANCE_EXP_HI, args.points)?;
    let fixed = FixedValue::ElevationDeg(args.elevation);
    let table = run_sweep(&model, &scenario, &axis, fixed)?;

    let points = table.len();
    let (total_min, total_max) = series_range(table.series(Contribution::Total));
    let base = output_base(common, "Atmospheric_Attenuation");

    if config.output.save {
        let chart_path = output_path(&config, &base, &scenario.station.name, "png");
        let title = format!(
            "Atmospheric Attenuation Probabilities, Elevation={:.1} [deg]",
            args.elevation
        );
        plot::render_exceedance_chart(
            &chart_path,
            &title,
            &scenario.station,
            &table,
            &Contribution::ALL,
        )?;
        println!("chart:      {}", chart_path.display());
    }

    if let Some(format) = common.export {
        let report = SweepReport::new("atmo", model.name(), &scenario, fixed, table);
        let report_path = output_path(
            &config,
            &base,
            &scenario.station.name,
            slantpath_core::ReportFormat::from(format).file_extension(),
        );
        report
            .write(&report_path, format.into())
            .with_context(|| format!("writing report to {}", report_path.display()))?;
        println!("report:     {}", report_path.display());
    }

    print_station_summary(&config);
    println!("points:     {}", points);
    println!("total:      {:.3} .. {:.3} dB", total_min, total_max);
    Ok(())
}

/// Cloud attenuation vs. elevation angle at a fixed exceedance.
pub fn run_cloud_elevation(common: &CommonArgs, args: &CloudElevationArgs) -> Result<()> {
    let config = resolve_config(common)?;
    let scenario = config.scenario();
    let model = IturApproxModel::new();

    tracing::info!(
        exceedance_pct = args.exceedance,
        points = args.points,
        "running cloud-elevation analysis"
    );

    let axis = SweepAxis::elevation_linspace(1.0, 90.0, args.points)?;
    let fixed = FixedValue::ExceedancePct(args.exceedance);
    let table = run_sweep(&model, &scenario, &axis, fixed)?;

    let points = table.len();
    let (cloud_min, cloud_max) = series_range(table.series(Contribution::Cloud));
    let base = output_base(common, "Cloud_Attenuation_vs_Elevation");

    if config.output.save {
        let chart_path = output_path(&config, &base, &scenario.station.name, "png");
        let title = format!(
            "Worst Case ({:.1}%) Cloud Attenuation vs Elevation",
            args.exceedance
        );
        plot::render_elevation_chart(
            &chart_path,
            &title,
            &scenario.station,
            &table,
            &[Contribution::Cloud],
        )?;
        println!("chart:      {}", chart_path.display());
    }

    if let Some(format) = common.export {
        let report = SweepReport::new("cloud-elevation", model.name(), &scenario, fixed, table);
        let report_path = output_path(
            &config,
            &base,
            &scenario.station.name,
            slantpath_core::ReportFormat::from(format).file_extension(),
        );
        report
            .write(&report_path, format.into())
            .with_context(|| format!("writing report to {}", report_path.display()))?;
        println!("report:     {}", report_path.display());
    }

    print_station_summary(&config);
    println!("points:     {}", points);
    println!("cloud:      {:.3} .. {:.3} dB", cloud_min, cloud_max);
    Ok(())
}

/// Rain attenuation vs. exceedance for a family of elevation angles.
pub fn run_rain_exceedance(common: &CommonArgs, args: &RainExceedanceArgs) -> Result<()> {
    let config = resolve_config(common)?;
    let scenario = config.scenario();
    let model = IturApproxModel::new();

    tracing::info!(
        min_elevation = args.min_elevation,
        max_elevation = args.max_elevation,
        series = args.series,
        points = args.points,
        "running rain-exceedance analysis"
    );

    let elevations = linspace(args.min_elevation, args.max_elevation, args.series);
    let axis = SweepAxis::exceedance_logspace(EXCEEDANCE_EXP_LO, EXCEEDANCE_EXP_HI, args.points)?;
    let table = run_multi_sweep(&model, &scenario, &elevations, &axis)?;

    let series = table.len();
    let points = table
        .series()
        .first()
        .map(|s| s.table.len())
        .unwrap_or_default();
    let base = output_base(common, "Rain_Attenuation_Exceedance");

    if config.output.save {
        let chart_path = output_path(&config, &base, &scenario.station.name, "png");
        plot::render_family_chart(
            &chart_path,
            "Rain Attenuation Exceedance",
            &scenario.station,
            &table,
            Contribution::Rain,
        )?;
        println!("chart:      {}", chart_path.display());
    }

    if let Some(format) = common.export {
        let report = MultiSweepReport::new("rain-exceedance", model.name(), &scenario, table);
        let report_path = output_path(
            &config,
            &base,
            &scenario.station.name,
            slantpath_core::ReportFormat::from(format).file_extension(),
        );
        report
            .write(&report_path, format.into())
            .with_context(|| format!("writing report to {}", report_path.display()))?;
        println!("report:     {}", report_path.display());
    }

    print_station_summary(&config);
    println!("series:     {}", series);
    println!("points:     {} per series", points);
    Ok(())
}

// ---------------------------------------------------------------------------
// Configuration resolution
// ---------------------------------------------------------------------------

/// Load the configuration and apply command-line overrides.
fn resolve_config(common: &CommonArgs) -> Result<SlantpathConfig> {
    let config = match &common.config {
        Some(path) => SlantpathConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SlantpathConfig::load()?,
    };

    let config = apply_overrides(config, common);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(mut config: SlantpathConfig, common: &CommonArgs) -> SlantpathConfig {
    if let Some(name) = &common.gs_name {
        config.station.name = name.clone();
    }
    if let Some(lat) = common.gs_lat {
        config.station.lat_deg = lat;
    }
    if let Some(lon) = common.gs_lon {
        config.station.lon_deg = lon;
    }
    if let Some(freq) = common.freq {
        config.link.frequency_hz = freq;
    }
    if let Some(dir) = &common.out_dir {
        config.output.dir = dir.display().to_string();
    }
    if common.save {
        config.output.save = true;
    }
    if common.no_save {
        config.output.save = false;
    }
    config
}

fn output_base(common: &CommonArgs, default: &str) -> String {
    common
        .out_name
        .clone()
        .unwrap_or_else(|| default.to_string())
}

fn output_path(config: &SlantpathConfig, base: &str, station: &str, extension: &str) -> PathBuf {
    Path::new(&config.output.dir).join(format!("{}_{}.{}", base, station, extension))
}

fn series_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

fn print_station_summary(config: &SlantpathConfig) {
    println!(
        "station:    {} ({:.6}, {:.6})",
        config.station.name, config.station.lat_deg, config.station.lon_deg
    );
    println!("frequency:  {:.5} GHz", config.link.frequency_hz / 1e9);
}
