//! Sweep engine and result tables
//!
//! [`run_sweep`] iterates one swept variable over a validated axis,
//! invokes the attenuation model once per sample, and collects the five
//! contribution series index-aligned with the axis. The sweep is
//! strictly sequential and fail-fast: the first model error aborts the
//! run and no partial table is returned. [`run_multi_sweep`] repeats an
//! exceedance sweep for a family of elevation angles and keys each
//! series by the elevation value itself.
//!
//! # Example
//!
//! ```
//! use slantpath_core::axis::SweepAxis;
//! use slantpath_core::itu_approx::IturApproxModel;
//! use slantpath_core::scenario::Scenario;
//! use slantpath_core::sweep::{run_sweep, FixedValue};
//! use slantpath_core::types::Contribution;
//!
//! let axis = SweepAxis::exceedance_logspace(-1.5, 1.5, 100).unwrap();
//! let table = run_sweep(
//!     &IturApproxModel::new(),
//!     &Scenario::default(),
//!     &axis,
//!     FixedValue::ElevationDeg(10.0),
//! )
//! .unwrap();
//!
//! assert_eq!(table.len(), 100);
//! assert_eq!(table.series(Contribution::Total).len(), 100);
//! ```

use serde::Serialize;

use crate::axis::{SweepAxis, SweepVariable};
use crate::model::SlantPathModel;
use crate::scenario::Scenario;
use crate::types::{AttenuationSample, SweepError, SweepResult};

// ---------------------------------------------------------------------------
// FixedValue
// ---------------------------------------------------------------------------

/// The link geometry parameter held fixed while the other one sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FixedValue {
    /// Hold the elevation angle fixed (degrees) while exceedance sweeps.
    ElevationDeg(f64),
    /// Hold the exceedance percentage fixed while elevation sweeps.
    ExceedancePct(f64),
}

impl FixedValue {
    /// The variable this fixed value holds.
    pub fn variable(&self) -> SweepVariable {
        match self {
            FixedValue::ElevationDeg(_) => SweepVariable::ElevationDeg,
            FixedValue::ExceedancePct(_) => SweepVariable::ExceedancePct,
        }
    }

    /// The held value.
    pub fn value(&self) -> f64 {
        match self {
            FixedValue::ElevationDeg(v) | FixedValue::ExceedancePct(v) => *v,
        }
    }

    /// Check the held value against its variable's domain.
    pub fn validate(&self) -> SweepResult<()> {
        let variable = self.variable();
        let value = self.value();
        if !variable.contains(value) {
            return Err(variable.domain_error(value));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ResultTable
// ---------------------------------------------------------------------------

/// Tabulated output of one sweep.
///
/// Holds the swept axis values plus one series per contribution, all of
/// equal length and filled strictly in axis order. Read-only once
/// returned from [`run_sweep`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    variable: SweepVariable,
    axis_values: Vec<f64>,
    gaseous_db: Vec<f64>,
    cloud_db: Vec<f64>,
    rain_db: Vec<f64>,
    scintillation_db: Vec<f64>,
    total_db: Vec<f64>,
}

impl ResultTable {
    fn with_capacity(variable: SweepVariable, capacity: usize) -> Self {
        Self {
            variable,
            axis_values: Vec::with_capacity(capacity),
            gaseous_db: Vec::with_capacity(capacity),
            cloud_db: Vec::with_capacity(capacity),
            rain_db: Vec::with_capacity(capacity),
            scintillation_db: Vec::with_capacity(capacity),
            total_db: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, axis_value: f64, sample: AttenuationSample) {
        self.axis_values.push(axis_value);
        self.gaseous_db.push(sample.gaseous_db);
        self.cloud_db.push(sample.cloud_db);
        self.rain_db.push(sample.rain_db);
        self.scintillation_db.push(sample.scintillation_db);
        self.total_db.push(sample.total_db);
    }

    /// The swept variable.
    pub fn variable(&self) -> SweepVariable {
        self.variable
    }

    /// Swept axis values, in sweep order.
    pub fn axis_values(&self) -> &[f64] {
        &self.axis_values
    }

    /// One contribution series, index-aligned with [`Self::axis_values`].
    pub fn series(&self, contribution: crate::types::Contribution) -> &[f64] {
        use crate::types::Contribution;
        match contribution {
            Contribution::Gaseous => &self.gaseous_db,
            Contribution::Cloud => &self.cloud_db,
            Contribution::Rain => &self.rain_db,
            Contribution::Scintillation => &self.scintillation_db,
            Contribution::Total => &self.total_db,
        }
    }

    /// Reassemble the attenuation sample at one index.
    pub fn sample(&self, index: usize) -> Option<AttenuationSample> {
        if index >= self.len() {
            return None;
        }
        Some(AttenuationSample {
            gaseous_db: self.gaseous_db[index],
            cloud_db: self.cloud_db[index],
            rain_db: self.rain_db[index],
            scintillation_db: self.scintillation_db[index],
            total_db: self.total_db[index],
        })
    }

    /// Number of sweep points.
    pub fn len(&self) -> usize {
        self.axis_values.len()
    }

    /// True when the table holds no points.
    pub fn is_empty(&self) -> bool {
        self.axis_values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// run_sweep
// ---------------------------------------------------------------------------

/// Run one sweep: evaluate the model at every axis point and tabulate
/// the contributions.
///
/// Validation happens before any model call: the scenario must pass
/// [`Scenario::validate`], the fixed value must be in-domain, and it
/// must hold the variable complementary to the axis. The first model
/// failure (including a non-finite output) aborts the sweep with
/// [`SweepError::Model`] carrying the sample index and swept value.
pub fn run_sweep<M>(
    model: &M,
    scenario: &Scenario,
    axis: &SweepAxis,
    fixed: FixedValue,
) -> SweepResult<ResultTable>
where
    M: SlantPathModel + ?Sized,
{
    scenario.validate()?;
    fixed.validate()?;
    if fixed.variable() == axis.variable() {
        return Err(SweepError::FixedValueMismatch);
    }

    tracing::debug!(
        model = model.name(),
        variable = %axis.variable(),
        points = axis.len(),
        fixed = fixed.value(),
        "starting sweep"
    );

    let mut table = ResultTable::with_capacity(axis.variable(), axis.len());
    for (index, &value) in axis.values().iter().enumerate() {
        let (elevation_deg, exceedance_pct) = match axis.variable() {
            SweepVariable::ElevationDeg => (value, fixed.value()),
            SweepVariable::ExceedancePct => (fixed.value(), value),
        };

        let sample = model
            .attenuation(scenario, elevation_deg, exceedance_pct)
            .map_err(|source| SweepError::Model {
                index,
                value,
                source,
            })?;

        if let Some(contribution) = sample.non_finite_component() {
            return Err(SweepError::Model {
                index,
                value,
                source: crate::types::ModelError::NonFinite(contribution),
            });
        }

        tracing::debug!(index, value, total_db = sample.total_db, "sweep sample");
        table.push(value, sample);
    }

    Ok(table)
}

// ---------------------------------------------------------------------------
// Multi-series sweep
// ---------------------------------------------------------------------------

/// One member of a multi-series sweep, keyed by its elevation angle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepSeries {
    /// Elevation angle this series was computed at (degrees).
    pub elevation_deg: f64,
    /// Exceedance sweep at that elevation.
    pub table: ResultTable,
}

/// Ordered family of exceedance sweeps, one per elevation angle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiSweepTable {
    series: Vec<SweepSeries>,
}

impl MultiSweepTable {
    /// The series, in the order the elevations were given.
    pub fn series(&self) -> &[SweepSeries] {
        &self.series
    }

    /// Number of elevation series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// True when no series were computed.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Run an exceedance sweep for each elevation in `elevations_deg`.
///
/// The outer iterations are independent: each elevation gets its own
/// [`run_sweep`] over the shared axis, and any inner failure aborts the
/// whole call. Series appear in the order the elevations were given and
/// are keyed by the elevation value itself.
pub fn run_multi_sweep<M>(
    model: &M,
    scenario: &Scenario,
    elevations_deg: &[f64],
    axis: &SweepAxis,
) -> SweepResult<MultiSweepTable>
where
    M: SlantPathModel + ?Sized,
{
    if elevations_deg.is_empty() {
        return Err(SweepError::EmptyAxis);
    }
    if axis.variable() != SweepVariable::ExceedancePct {
        return Err(SweepError::FixedValueMismatch);
    }
    for &elevation in elevations_deg {
        if !SweepVariable::ElevationDeg.contains(elevation) {
            return Err(SweepError::InvalidElevation(elevation));
        }
    }

    let mut series = Vec::with_capacity(elevations_deg.len());
    for &elevation in elevations_deg {
        tracing::info!(elevation_deg = elevation, "computing attenuation for elevation");
        let table = run_sweep(model, scenario, axis, FixedValue::ElevationDeg(elevation))?;
        series.push(SweepSeries {
            elevation_deg: elevation,
            table,
        });
    }

    Ok(MultiSweepTable { series })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::linspace;
    use crate::types::{Contribution, ModelError};
    use std::cell::Cell;

    const EPSILON: f64 = 1e-12;

    /// Deterministic stub whose outputs encode the inputs, so tests can
    /// check index alignment and cross-series isolation.
    struct AffineModel;

    impl SlantPathModel for AffineModel {
        fn attenuation(
            &self,
            _scenario: &Scenario,
            elevation_deg: f64,
            exceedance_pct: f64,
        ) -> Result<AttenuationSample, ModelError> {
            Ok(AttenuationSample {
                gaseous_db: elevation_deg,
                cloud_db: exceedance_pct,
                rain_db: 1000.0 * elevation_deg + exceedance_pct,
                scintillation_db: 0.5,
                total_db: elevation_deg + exceedance_pct,
            })
        }
    }

    /// Stub that counts calls and fails at a configured call index.
    struct FailAfter {
        fail_index: usize,
        calls: Cell<usize>,
    }

    impl FailAfter {
        fn new(fail_index: usize) -> Self {
            Self {
                fail_index,
                calls: Cell::new(0),
            }
        }
    }

    impl SlantPathModel for FailAfter {
        fn attenuation(
            &self,
            _scenario: &Scenario,
            _elevation_deg: f64,
            _exceedance_pct: f64,
        ) -> Result<AttenuationSample, ModelError> {
            let call = self.calls.get();
            self.calls.set(call + 1);
            if call == self.fail_index {
                return Err(ModelError::Evaluation("synthetic failure".to_string()));
            }
            Ok(AttenuationSample {
                gaseous_db: 0.1,
                cloud_db: 0.1,
                rain_db: 0.1,
                scintillation_db: 0.1,
                total_db: 0.4,
            })
        }
    }

    /// Stub that returns NaN rain at one swept exceedance value.
    struct NanAt {
        bad_exceedance: f64,
    }

    impl SlantPathModel for NanAt {
        fn attenuation(
            &self,
            _scenario: &Scenario,
            _elevation_deg: f64,
            exceedance_pct: f64,
        ) -> Result<AttenuationSample, ModelError> {
            let rain = if (exceedance_pct - self.bad_exceedance).abs() < EPSILON {
                f64::NAN
            } else {
                0.2
            };
            Ok(AttenuationSample {
                gaseous_db: 0.1,
                cloud_db: 0.1,
                rain_db: rain,
                scintillation_db: 0.1,
                total_db: 0.5,
            })
        }
    }

    fn exceedance_axis(points: usize) -> SweepAxis {
        SweepAxis::exceedance_logspace(-1.5, 1.5, points).unwrap()
    }

    #[test]
    fn test_series_lengths_match_axis() {
        let axis = SweepAxis::from_values(
            SweepVariable::ExceedancePct,
            vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0],
        )
        .unwrap();
        let table = run_sweep(
            &AffineModel,
            &Scenario::default(),
            &axis,
            FixedValue::ElevationDeg(10.0),
        )
        .unwrap();

        assert_eq!(table.len(), 7);
        for c in Contribution::ALL {
            assert_eq!(table.series(c).len(), 7, "series {c} length");
        }
        assert_eq!(table.axis_values().len(), 7);
    }

    #[test]
    fn test_tabulation_preserves_model_values_and_order() {
        // Axis deliberately unsorted; the table must keep this order.
        let axis =
            SweepAxis::from_values(SweepVariable::ElevationDeg, vec![30.0, 10.0, 20.0]).unwrap();
        let table = run_sweep(
            &AffineModel,
            &Scenario::default(),
            &axis,
            FixedValue::ExceedancePct(1.0),
        )
        .unwrap();

        assert_eq!(table.axis_values(), &[30.0, 10.0, 20.0]);
        assert_eq!(table.series(Contribution::Gaseous), &[30.0, 10.0, 20.0]);
        assert_eq!(table.series(Contribution::Cloud), &[1.0, 1.0, 1.0]);
        assert_eq!(
            table.series(Contribution::Rain),
            &[30_001.0, 10_001.0, 20_001.0]
        );
        let sample = table.sample(1).unwrap();
        assert_eq!(sample.gaseous_db, 10.0);
        assert_eq!(sample.total_db, 11.0);
    }

    #[test]
    fn test_identical_runs_produce_identical_tables() {
        let axis = exceedance_axis(50);
        let scenario = Scenario::default();
        let a = run_sweep(&AffineModel, &scenario, &axis, FixedValue::ElevationDeg(10.0)).unwrap();
        let b = run_sweep(&AffineModel, &scenario, &axis, FixedValue::ElevationDeg(10.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_value_domain_checked() {
        let axis = exceedance_axis(10);
        let scenario = Scenario::default();

        let err = run_sweep(&AffineModel, &scenario, &axis, FixedValue::ElevationDeg(0.0));
        assert!(matches!(err, Err(SweepError::InvalidElevation(v)) if v == 0.0));

        let err = run_sweep(&AffineModel, &scenario, &axis, FixedValue::ElevationDeg(95.0));
        assert!(matches!(err, Err(SweepError::InvalidElevation(v)) if v == 95.0));

        let el_axis = SweepAxis::elevation_linspace(1.0, 90.0, 10).unwrap();
        let err = run_sweep(
            &AffineModel,
            &scenario,
            &el_axis,
            FixedValue::ExceedancePct(0.0),
        );
        assert!(matches!(err, Err(SweepError::InvalidExceedance(v)) if v == 0.0));

        let err = run_sweep(
            &AffineModel,
            &scenario,
            &el_axis,
            FixedValue::ExceedancePct(150.0),
        );
        assert!(matches!(err, Err(SweepError::InvalidExceedance(v)) if v == 150.0));
    }

    #[test]
    fn test_fixed_variable_must_complement_axis() {
        let el_axis = SweepAxis::elevation_linspace(1.0, 90.0, 10).unwrap();
        let err = run_sweep(
            &AffineModel,
            &Scenario::default(),
            &el_axis,
            FixedValue::ElevationDeg(10.0),
        );
        assert!(matches!(err, Err(SweepError::FixedValueMismatch)));
    }

    #[test]
    fn test_scenario_validated_before_model_runs() {
        let axis = exceedance_axis(10);
        let mut scenario = Scenario::default();
        scenario.antenna_diameter_m = -1.0;

        let model = FailAfter::new(usize::MAX);
        let err = run_sweep(&model, &scenario, &axis, FixedValue::ElevationDeg(10.0));
        assert!(matches!(err, Err(SweepError::InvalidDiameter(_))));
        assert_eq!(model.calls.get(), 0, "model must not be called");
    }

    #[test]
    fn test_fail_fast_no_partial_results() {
        let axis = exceedance_axis(100);
        let model = FailAfter::new(5);
        let err = run_sweep(
            &model,
            &Scenario::default(),
            &axis,
            FixedValue::ElevationDeg(10.0),
        );

        match err {
            Err(SweepError::Model { index, value, .. }) => {
                assert_eq!(index, 5);
                assert!((value - axis.values()[5]).abs() < EPSILON);
            }
            other => panic!("expected model error, got {other:?}"),
        }
        // The sweep stops at the failing sample.
        assert_eq!(model.calls.get(), 6);
    }

    #[test]
    fn test_non_finite_output_is_model_error() {
        let axis = SweepAxis::from_values(
            SweepVariable::ExceedancePct,
            vec![0.1, 0.5, 1.0, 2.0, 5.0],
        )
        .unwrap();
        let model = NanAt {
            bad_exceedance: 2.0,
        };
        let err = run_sweep(
            &model,
            &Scenario::default(),
            &axis,
            FixedValue::ElevationDeg(10.0),
        );

        match err {
            Err(SweepError::Model {
                index,
                value,
                source: ModelError::NonFinite(c),
            }) => {
                assert_eq!(index, 3);
                assert_eq!(value, 2.0);
                assert_eq!(c, Contribution::Rain);
            }
            other => panic!("expected non-finite model error, got {other:?}"),
        }
    }

    #[test]
    fn test_multi_sweep_series_keyed_by_elevation() {
        let elevations = linspace(1.0, 10.0, 10);
        let axis = exceedance_axis(100);
        let multi = run_multi_sweep(&AffineModel, &Scenario::default(), &elevations, &axis).unwrap();

        assert_eq!(multi.len(), 10);
        for (i, series) in multi.series().iter().enumerate() {
            assert!(
                (series.elevation_deg - elevations[i]).abs() < EPSILON,
                "series {i} keyed by {}",
                series.elevation_deg
            );
            assert_eq!(series.table.len(), 100);

            // Each series carries exactly its own elevation's values.
            let rain = series.table.series(Contribution::Rain);
            for (j, &p) in axis.values().iter().enumerate() {
                let expected = 1000.0 * elevations[i] + p;
                assert!(
                    (rain[j] - expected).abs() < EPSILON,
                    "series {i} sample {j}: {} != {expected}",
                    rain[j]
                );
            }
        }
    }

    #[test]
    fn test_multi_sweep_rejects_elevation_inner_axis() {
        let el_axis = SweepAxis::elevation_linspace(1.0, 90.0, 10).unwrap();
        let err = run_multi_sweep(&AffineModel, &Scenario::default(), &[10.0], &el_axis);
        assert!(matches!(err, Err(SweepError::FixedValueMismatch)));
    }

    #[test]
    fn test_multi_sweep_rejects_empty_family() {
        let axis = exceedance_axis(10);
        let err = run_multi_sweep(&AffineModel, &Scenario::default(), &[], &axis);
        assert!(matches!(err, Err(SweepError::EmptyAxis)));
    }

    #[test]
    fn test_multi_sweep_validates_family_members() {
        let axis = exceedance_axis(10);
        let err = run_multi_sweep(&AffineModel, &Scenario::default(), &[10.0, 95.0], &axis);
        assert!(matches!(err, Err(SweepError::InvalidElevation(v)) if v == 95.0));
    }

    #[test]
    fn test_multi_sweep_aborts_on_inner_failure() {
        let axis = exceedance_axis(100);
        // Fails partway through the third series.
        let model = FailAfter::new(250);
        let err = run_multi_sweep(
            &model,
            &Scenario::default(),
            &linspace(1.0, 10.0, 10),
            &axis,
        );
        assert!(matches!(
            err,
            Err(SweepError::Model { index: 50, .. })
        ));
        assert_eq!(model.calls.get(), 251);
    }
}
