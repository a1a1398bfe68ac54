//! Chart rendering for finished sweeps.
//!
//! Line charts are drawn with `plotters` into a PNG file. Exceedance
//! sweeps get a logarithmic x-axis, elevation sweeps a linear one; the
//! x-axis label comes from the swept variable and the y-axis is always
//! attenuation in dB. The ground-station name and coordinates appear
//! under the chart title. Missing output directories are created.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use plotters::prelude::*;

use slantpath_core::{Contribution, GroundStation, MultiSweepTable, ResultTable};

const CHART_SIZE: (u32, u32) = (800, 600);
const TITLE_FONT: (&str, u32) = ("sans-serif", 22);
const SUBTITLE_FONT: (&str, u32) = ("sans-serif", 15);

/// Render selected contributions of an exceedance sweep (log x-axis).
pub fn render_exceedance_chart(
    path: &Path,
    title: &str,
    station: &GroundStation,
    table: &ResultTable,
    contributions: &[Contribution],
) -> Result<()> {
    ensure_parent_dir(path)?;
    let (x_min, x_max) = axis_bounds(table.axis_values())?;
    let y_max = padded_max(contributions.iter().map(|&c| table.series(c)));

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, TITLE_FONT)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(station_line(station), SUBTITLE_FONT)
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d((x_min..x_max).log_scale(), 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc(table.variable().label())
        .y_desc("Attenuation [dB]")
        .draw()?;

    for (i, &contribution) in contributions.iter().enumerate() {
        let color = Palette99::pick(i);
        chart
            .draw_series(LineSeries::new(
                points(table.axis_values(), table.series(contribution)),
                color.stroke_width(2),
            ))?
            .label(format!("{} attenuation", contribution.label()))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x - 12, y), (x, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("writing chart to {}", path.display()))?;
    Ok(())
}

/// Render selected contributions of an elevation sweep (linear x-axis).
pub fn render_elevation_chart(
    path: &Path,
    title: &str,
    station: &GroundStation,
    table: &ResultTable,
    contributions: &[Contribution],
) -> Result<()> {
    ensure_parent_dir(path)?;
    let (x_min, x_max) = axis_bounds(table.axis_values())?;
    let y_max = padded_max(contributions.iter().map(|&c| table.series(c)));

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, TITLE_FONT)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(station_line(station), SUBTITLE_FONT)
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc(table.variable().label())
        .y_desc("Attenuation [dB]")
        .draw()?;

    for (i, &contribution) in contributions.iter().enumerate() {
        let color = Palette99::pick(i);
        chart
            .draw_series(LineSeries::new(
                points(table.axis_values(), table.series(contribution)),
                color.stroke_width(2),
            ))?
            .label(format!("{} attenuation", contribution.label()))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x - 12, y), (x, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("writing chart to {}", path.display()))?;
    Ok(())
}

/// Render one contribution of a multi-elevation sweep, one line per
/// elevation, with "El=x.x°" legend entries (log x-axis).
pub fn render_family_chart(
    path: &Path,
    title: &str,
    station: &GroundStation,
    table: &MultiSweepTable,
    contribution: Contribution,
) -> Result<()> {
    ensure_parent_dir(path)?;
    let first = table
        .series()
        .first()
        .ok_or_else(|| anyhow!("no series to plot"))?;
    let (x_min, x_max) = axis_bounds(first.table.axis_values())?;
    let y_max = padded_max(table.series().iter().map(|s| s.table.series(contribution)));

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, TITLE_FONT)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(station_line(station), SUBTITLE_FONT)
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d((x_min..x_max).log_scale(), 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc(first.table.variable().label())
        .y_desc("Attenuation [dB]")
        .draw()?;

    for (i, series) in table.series().iter().enumerate() {
        let color = Palette99::pick(i);
        chart
            .draw_series(LineSeries::new(
                points(series.table.axis_values(), series.table.series(contribution)),
                color.stroke_width(2),
            ))?
            .label(format!("El={:.1}°", series.elevation_deg))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x - 12, y), (x, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("writing chart to {}", path.display()))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn station_line(station: &GroundStation) -> String {
    format!(
        "GS: {} ({:.6}, {:.6})",
        station.name, station.lat_deg, station.lon_deg
    )
}

fn points<'a>(xs: &'a [f64], ys: &'a [f64]) -> impl Iterator<Item = (f64, f64)> + 'a {
    xs.iter().copied().zip(ys.iter().copied())
}

fn axis_bounds(values: &[f64]) -> Result<(f64, f64)> {
    let x_min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !x_min.is_finite() || !x_max.is_finite() {
        return Err(anyhow!("no axis values to plot"));
    }
    // Single-point sweeps still need a non-degenerate range.
    if x_max > x_min {
        Ok((x_min, x_max))
    } else {
        Ok((x_min, x_min + 1.0))
    }
}

fn padded_max<'a>(series: impl Iterator<Item = &'a [f64]>) -> f64 {
    let max = series
        .flat_map(|s| s.iter().copied())
        .fold(0.0_f64, f64::max);
    max.max(1e-3) * 1.05
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
    }
    Ok(())
}
