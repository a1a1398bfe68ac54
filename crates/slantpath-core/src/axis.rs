//! Swept-variable axes
//!
//! A sweep iterates exactly one independent variable; the other link
//! geometry parameter is held fixed. [`SweepAxis`] is the ordered,
//! validated list of sample points for that variable. Axes are checked
//! at construction and never mutated afterwards, so the sweep engine
//! can assume every value is finite and inside the variable's domain.

use serde::{Deserialize, Serialize};

use crate::types::{SweepError, SweepResult};

// ---------------------------------------------------------------------------
// SweepVariable
// ---------------------------------------------------------------------------

/// The independent variable a sweep iterates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepVariable {
    /// Elevation angle above the local horizon, in degrees. Valid in (0, 90].
    ElevationDeg,
    /// Exceedance (unavailability) percentage of an average year. Valid in (0, 100).
    ExceedancePct,
}

impl SweepVariable {
    /// True when `value` is finite and inside this variable's domain.
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self {
            SweepVariable::ElevationDeg => value > 0.0 && value <= 90.0,
            SweepVariable::ExceedancePct => value > 0.0 && value < 100.0,
        }
    }

    /// Chart axis caption.
    pub fn label(&self) -> &'static str {
        match self {
            SweepVariable::ElevationDeg => "Elevation angle [deg]",
            SweepVariable::ExceedancePct => {
                "Percentage of time attenuation value is exceeded [%]"
            }
        }
    }

    /// Column name used in CSV exports.
    pub fn column_name(&self) -> &'static str {
        match self {
            SweepVariable::ElevationDeg => "elevation_deg",
            SweepVariable::ExceedancePct => "exceedance_pct",
        }
    }

    /// Domain-violation error for a value of this variable.
    pub(crate) fn domain_error(&self, value: f64) -> SweepError {
        match self {
            SweepVariable::ElevationDeg => SweepError::InvalidElevation(value),
            SweepVariable::ExceedancePct => SweepError::InvalidExceedance(value),
        }
    }
}

impl std::fmt::Display for SweepVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepVariable::ElevationDeg => write!(f, "elevation"),
            SweepVariable::ExceedancePct => write!(f, "exceedance"),
        }
    }
}

// ---------------------------------------------------------------------------
// SweepAxis
// ---------------------------------------------------------------------------

/// Ordered, validated sample points for one swept variable.
///
/// Samples are kept exactly in the order given; the sweep engine and
/// the result table preserve that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepAxis {
    variable: SweepVariable,
    values: Vec<f64>,
}

impl SweepAxis {
    /// Build an axis from explicit sample values.
    ///
    /// Fails with the variable's domain error on the first value that
    /// is non-finite or outside the valid domain, or with
    /// [`SweepError::EmptyAxis`] when no values are given.
    pub fn from_values(variable: SweepVariable, values: Vec<f64>) -> SweepResult<Self> {
        if values.is_empty() {
            return Err(SweepError::EmptyAxis);
        }
        for &v in &values {
            if !variable.contains(v) {
                return Err(variable.domain_error(v));
            }
        }
        Ok(Self { variable, values })
    }

    /// Evenly spaced elevation axis from `start_deg` to `stop_deg` inclusive.
    pub fn elevation_linspace(start_deg: f64, stop_deg: f64, points: usize) -> SweepResult<Self> {
        Self::from_values(
            SweepVariable::ElevationDeg,
            linspace(start_deg, stop_deg, points),
        )
    }

    /// Log-spaced exceedance axis from `10^exp_lo` to `10^exp_hi` percent inclusive.
    pub fn exceedance_logspace(exp_lo: f64, exp_hi: f64, points: usize) -> SweepResult<Self> {
        Self::from_values(SweepVariable::ExceedancePct, logspace(exp_lo, exp_hi, points))
    }

    /// The swept variable.
    pub fn variable(&self) -> SweepVariable {
        self.variable
    }

    /// The sample values, in sweep order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the axis holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Spacing helpers
// ---------------------------------------------------------------------------

/// `points` evenly spaced values from `start` to `stop`, endpoints included.
///
/// The last value is set to `stop` exactly so endpoint comparisons do
/// not depend on accumulated rounding.
pub fn linspace(start: f64, stop: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// `points` log10-spaced values from `10^exp_lo` to `10^exp_hi`, endpoints included.
pub fn logspace(exp_lo: f64, exp_hi: f64, points: usize) -> Vec<f64> {
    linspace(exp_lo, exp_hi, points)
        .into_iter()
        .map(|e| 10.0_f64.powf(e))
        .collect()
}
