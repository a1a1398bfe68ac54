//! Sweep report generation
//!
//! Output formats: JSON, text, CSV

use std::path::Path;

use serde::Serialize;

use crate::scenario::Scenario;
use crate::sweep::{FixedValue, MultiSweepTable, ResultTable};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Pretty-printed JSON.
    Json,
    /// Human-readable text.
    Text,
    /// One row per sweep point.
    Csv,
}

impl ReportFormat {
    /// Conventional file extension for the format.
    pub fn file_extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Text => "txt",
            ReportFormat::Csv => "csv",
        }
    }
}

/// Complete record of one finished sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub tool: String,
    pub model: String,
    pub scenario: Scenario,
    pub fixed: FixedValue,
    pub table: ResultTable,
    pub timestamp: String,
}

impl SweepReport {
    /// Create a report from a finished sweep.
    pub fn new(
        tool: &str,
        model: &str,
        scenario: &Scenario,
        fixed: FixedValue,
        table: ResultTable,
    ) -> Self {
        Self {
            tool: tool.to_string(),
            model: model.to_string(),
            scenario: scenario.clone(),
            fixed,
            table,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Output as pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Output as human-readable text.
    pub fn to_text(&self) -> String {
        let mut s = String::new();

        s.push_str("Slant-Path Attenuation Report\n");
        s.push_str("=============================\n\n");

        s.push_str(&format!("Tool:        {}\n", self.tool));
        s.push_str(&format!("Model:       {}\n", self.model));
        s.push_str(&format!(
            "Station:     {} ({:.6}, {:.6})\n",
            self.scenario.station.name, self.scenario.station.lat_deg, self.scenario.station.lon_deg
        ));
        s.push_str(&format!("Frequency:   {:.5} GHz\n", self.scenario.frequency_ghz));
        s.push_str(&format!("Antenna:     {:.3} m\n", self.scenario.antenna_diameter_m));
        let fixed_desc = match self.fixed {
            FixedValue::ElevationDeg(v) => format!("elevation = {v} deg"),
            FixedValue::ExceedancePct(v) => format!("exceedance = {v} %"),
        };
        s.push_str(&format!("Fixed:       {fixed_desc}\n"));
        s.push_str(&format!("Points:      {}\n", self.table.len()));
        s.push_str(&format!("Timestamp:   {}\n\n", self.timestamp));

        s.push_str(&format!(
            "{:>16}  {:>12}  {:>12}  {:>12}  {:>14}  {:>12}\n",
            self.table.variable().column_name(),
            "gaseous_db",
            "cloud_db",
            "rain_db",
            "scint_db",
            "total_db"
        ));
        for i in 0..self.table.len() {
            if let Some(sample) = self.table.sample(i) {
                s.push_str(&format!(
                    "{:>16.6}  {:>12.6}  {:>12.6}  {:>12.6}  {:>14.6}  {:>12.6}\n",
                    self.table.axis_values()[i],
                    sample.gaseous_db,
                    sample.cloud_db,
                    sample.rain_db,
                    sample.scintillation_db,
                    sample.total_db,
                ));
            }
        }

        s
    }

    /// CSV header line for this report's swept variable.
    pub fn csv_header(&self) -> String {
        format!(
            "{},gaseous_db,cloud_db,rain_db,scintillation_db,total_db",
            self.table.variable().column_name()
        )
    }

    /// Output as CSV: header plus one row per sweep point.
    pub fn to_csv(&self) -> String {
        let mut s = String::new();
        s.push_str(&self.csv_header());
        s.push('\n');
        for i in 0..self.table.len() {
            if let Some(sample) = self.table.sample(i) {
                s.push_str(&format!(
                    "{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}\n",
                    self.table.axis_values()[i],
                    sample.gaseous_db,
                    sample.cloud_db,
                    sample.rain_db,
                    sample.scintillation_db,
                    sample.total_db,
                ));
            }
        }
        s
    }

    /// Write the report to `path`, creating parent directories as needed.
    pub fn write(&self, path: &Path, format: ReportFormat) -> std::io::Result<()> {
        let content = match format {
            ReportFormat::Json => self.to_json(),
            ReportFormat::Text => self.to_text(),
            ReportFormat::Csv => self.to_csv(),
        };
        write_file(path, &content)
    }
}

/// Record of a finished multi-series sweep.
#[derive(Debug, Clone, Serialize)]
pub struct MultiSweepReport {
    pub tool: String,
    pub model: String,
    pub scenario: Scenario,
    pub table: MultiSweepTable,
    pub timestamp: String,
}

impl MultiSweepReport {
    /// Create a report from a finished multi-series sweep.
    pub fn new(tool: &str, model: &str, scenario: &Scenario, table: MultiSweepTable) -> Self {
        Self {
            tool: tool.to_string(),
            model: model.to_string(),
            scenario: scenario.clone(),
            table,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Output as pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Output as human-readable text: one summary line per elevation series.
    pub fn to_text(&self) -> String {
        let mut s = String::new();

        s.push_str("Slant-Path Attenuation Report (multi-series)\n");
        s.push_str("============================================\n\n");
        s.push_str(&format!("Tool:        {}\n", self.tool));
        s.push_str(&format!("Model:       {}\n", self.model));
        s.push_str(&format!(
            "Station:     {} ({:.6}, {:.6})\n",
            self.scenario.station.name, self.scenario.station.lat_deg, self.scenario.station.lon_deg
        ));
        s.push_str(&format!("Frequency:   {:.5} GHz\n", self.scenario.frequency_ghz));
        s.push_str(&format!("Series:      {}\n", self.table.len()));
        s.push_str(&format!("Timestamp:   {}\n\n", self.timestamp));

        for series in self.table.series() {
            let rain = series.table.series(crate::types::Contribution::Rain);
            let (min, max) = rain.iter().fold((f64::MAX, f64::MIN), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
            s.push_str(&format!(
                "El = {:5.1} deg: {:3} points, rain {:.6} to {:.6} dB\n",
                series.elevation_deg,
                series.table.len(),
                min,
                max
            ));
        }

        s
    }

    /// Output as CSV with a leading elevation column.
    pub fn to_csv(&self) -> String {
        let mut s = String::new();
        s.push_str("elevation_deg,exceedance_pct,gaseous_db,cloud_db,rain_db,scintillation_db,total_db\n");
        for series in self.table.series() {
            for i in 0..series.table.len() {
                if let Some(sample) = series.table.sample(i) {
                    s.push_str(&format!(
                        "{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}\n",
                        series.elevation_deg,
                        series.table.axis_values()[i],
                        sample.gaseous_db,
                        sample.cloud_db,
                        sample.rain_db,
                        sample.scintillation_db,
                        sample.total_db,
                    ));
                }
            }
        }
        s
    }

    /// Write the report to `path`, creating parent directories as needed.
    pub fn write(&self, path: &Path, format: ReportFormat) -> std::io::Result<()> {
        let content = match format {
            ReportFormat::Json => self.to_json(),
            ReportFormat::Text => self.to_text(),
            ReportFormat::Csv => self.to_csv(),
        };
        write_file(path, &content)
    }
}

/// Write `content` to `path`, creating missing parent directories.
fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)
}
