//! # Slant-Path Attenuation Library
//!
//! This crate computes atmospheric signal attenuation along the slant
//! path between a ground station and a satellite, swept across one link
//! geometry variable at a time.
//!
//! ## Overview
//!
//! A sweep holds a [`Scenario`] (station position, carrier frequency,
//! antenna diameter) fixed, iterates either the elevation angle or the
//! exceedance percentage over a validated [`SweepAxis`], and invokes a
//! [`SlantPathModel`] once per sample. Each sample yields five
//! attenuation contributions in dB (gaseous, cloud, rain,
//! scintillation, total) which are tabulated index-aligned with the
//! axis into a [`ResultTable`]. The built-in [`IturApproxModel`]
//! provides a compact, map-free approximation of the relevant ITU-R
//! recommendations; any other model can be plugged in behind the trait.
//!
//! ## Sweep Flow
//!
//! ```text
//! Scenario ──┐
//!            ├─→ run_sweep ─→ model.attenuation() per sample ─→ ResultTable
//! SweepAxis ─┘                                                      │
//!                                              chart / CSV / JSON ←─┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use slantpath_core::{
//!     run_sweep, Contribution, FixedValue, IturApproxModel, Scenario, SweepAxis,
//! };
//!
//! // Exceedance sweep at 10 deg elevation for the default GPS L1 scenario
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
//! assert!(table.series(Contribution::Total).iter().all(|a| *a >= 0.0));
//! ```

pub mod axis;
pub mod config;
pub mod itu_approx;
pub mod model;
pub mod report;
pub mod scenario;
pub mod sweep;
pub mod types;

// Re-export main types
pub use axis::{linspace, logspace, SweepAxis, SweepVariable};
pub use config::{ConfigError, SlantpathConfig};
pub use itu_approx::IturApproxModel;
pub use model::SlantPathModel;
pub use report::{MultiSweepReport, ReportFormat, SweepReport};
pub use scenario::{GroundStation, Scenario};
pub use sweep::{run_multi_sweep, run_sweep, FixedValue, MultiSweepTable, ResultTable, SweepSeries};
pub use types::{AttenuationSample, Contribution, ModelError, SweepError, SweepResult};
