//! Attenuation model seam
//!
//! The sweep engine treats the attenuation model as a black box behind
//! the [`SlantPathModel`] trait. An implementation receives the fixed
//! [`Scenario`] plus the evaluated elevation angle and exceedance
//! percentage, and returns the five attenuation contributions in dB.
//!
//! Implementations are expected to be pure functions of their inputs:
//! deterministic, side-effect free, and returning finite non-negative
//! values for in-domain inputs. Inputs outside the valid domains
//! (elevation in (0, 90], exceedance in (0, 100)) may be rejected with
//! [`ModelError::InputOutOfRange`].

use crate::scenario::Scenario;
use crate::types::{AttenuationSample, ModelError};

/// A slant-path attenuation model.
pub trait SlantPathModel {
    /// Evaluate the model at one point of the sweep.
    ///
    /// * `scenario` - fixed link parameters (station, frequency, antenna).
    /// * `elevation_deg` - elevation angle in degrees, (0, 90].
    /// * `exceedance_pct` - exceedance percentage of an average year, (0, 100).
    fn attenuation(
        &self,
        scenario: &Scenario,
        elevation_deg: f64,
        exceedance_pct: f64,
    ) -> Result<AttenuationSample, ModelError>;

    /// Short model name for reports and log lines.
    fn name(&self) -> &str {
        "slant-path model"
    }
}
