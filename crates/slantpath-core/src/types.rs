//! Core types for slant-path attenuation sweeps
//!
//! This module defines the per-sample attenuation record, the set of
//! attenuation contributions, and the error types used throughout the
//! library. A sweep produces one [`AttenuationSample`] per point of the
//! swept axis; each sample carries the five contributions in dB:
//!
//! - **Gaseous**: absorption by oxygen and water vapor
//! - **Cloud**: absorption by suspended liquid water
//! - **Rain**: absorption and scattering by hydrometeors
//! - **Scintillation**: tropospheric amplitude fading
//! - **Total**: the combined effect of the above

use serde::{Deserialize, Serialize};

/// Result type for sweep operations
pub type SweepResult<T> = Result<T, SweepError>;

// ---------------------------------------------------------------------------
// Contributions
// ---------------------------------------------------------------------------

/// One attenuation contribution along the slant path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contribution {
    /// Absorption by atmospheric oxygen and water vapor.
    Gaseous,
    /// Absorption by suspended cloud liquid water.
    Cloud,
    /// Absorption and scattering by rain.
    Rain,
    /// Tropospheric scintillation fading.
    Scintillation,
    /// Combined total attenuation.
    Total,
}

impl Contribution {
    /// All contributions in tabulation order.
    pub const ALL: [Contribution; 5] = [
        Contribution::Gaseous,
        Contribution::Cloud,
        Contribution::Rain,
        Contribution::Scintillation,
        Contribution::Total,
    ];

    /// Human-readable name for chart legends and report headers.
    pub fn label(&self) -> &'static str {
        match self {
            Contribution::Gaseous => "Gaseous",
            Contribution::Cloud => "Cloud",
            Contribution::Rain => "Rain",
            Contribution::Scintillation => "Scintillation",
            Contribution::Total => "Total",
        }
    }
}

impl std::fmt::Display for Contribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Contribution::Gaseous => "gaseous",
            Contribution::Cloud => "cloud",
            Contribution::Rain => "rain",
            Contribution::Scintillation => "scintillation",
            Contribution::Total => "total",
        };
        write!(f, "{}", name)
    }
}

// ---------------------------------------------------------------------------
// AttenuationSample
// ---------------------------------------------------------------------------

/// Attenuation contributions for one point of a sweep.
///
/// All values are in dB for the full slant path at the evaluated
/// elevation angle and exceedance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttenuationSample {
    /// Gaseous absorption (dB).
    pub gaseous_db: f64,
    /// Cloud liquid water attenuation (dB).
    pub cloud_db: f64,
    /// Rain attenuation (dB).
    pub rain_db: f64,
    /// Scintillation fade depth (dB).
    pub scintillation_db: f64,
    /// Combined total attenuation (dB).
    pub total_db: f64,
}

impl AttenuationSample {
    /// Value of a single contribution (dB).
    pub fn component(&self, contribution: Contribution) -> f64 {
        match contribution {
            Contribution::Gaseous => self.gaseous_db,
            Contribution::Cloud => self.cloud_db,
            Contribution::Rain => self.rain_db,
            Contribution::Scintillation => self.scintillation_db,
            Contribution::Total => self.total_db,
        }
    }

    /// True when every contribution is a finite number.
    pub fn is_finite(&self) -> bool {
        self.non_finite_component().is_none()
    }

    /// First contribution (in tabulation order) that is NaN or infinite.
    pub fn non_finite_component(&self) -> Option<Contribution> {
        Contribution::ALL
            .iter()
            .copied()
            .find(|c| !self.component(*c).is_finite())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors reported by an attenuation model implementation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    #[error("model input out of range: {name} = {value}")]
    InputOutOfRange { name: &'static str, value: f64 },

    #[error("model produced a non-finite {0} value")]
    NonFinite(Contribution),

    #[error("model evaluation failed: {0}")]
    Evaluation(String),
}

/// Errors that can occur while preparing or running a sweep.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SweepError {
    #[error("invalid elevation angle: {0} deg. Must be in (0, 90]")]
    InvalidElevation(f64),

    #[error("invalid exceedance percentage: {0} %. Must be in (0, 100)")]
    InvalidExceedance(f64),

    #[error("invalid carrier frequency: {0} GHz. Must be positive and finite")]
    InvalidFrequency(f64),

    #[error("invalid antenna diameter: {0} m. Must be positive and finite")]
    InvalidDiameter(f64),

    #[error("invalid ground station: {0}")]
    InvalidStation(String),

    #[error("sweep axis has no samples")]
    EmptyAxis,

    #[error("fixed value must hold the variable complementary to the swept axis")]
    FixedValueMismatch,

    #[error("attenuation model failed at sample {index} (swept value {value}): {source}")]
    Model {
        index: usize,
        value: f64,
        source: ModelError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AttenuationSample {
        AttenuationSample {
            gaseous_db: 0.1,
            cloud_db: 0.2,
            rain_db: 0.3,
            scintillation_db: 0.4,
            total_db: 1.0,
        }
    }

    #[test]
    fn test_component_accessor() {
        let s = sample();
        assert_eq!(s.component(Contribution::Gaseous), 0.1);
        assert_eq!(s.component(Contribution::Cloud), 0.2);
        assert_eq!(s.component(Contribution::Rain), 0.3);
        assert_eq!(s.component(Contribution::Scintillation), 0.4);
        assert_eq!(s.component(Contribution::Total), 1.0);
    }

    #[test]
    fn test_all_contributions_ordered() {
        let labels: Vec<&str> = Contribution::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Gaseous", "Cloud", "Rain", "Scintillation", "Total"]
        );
    }

    #[test]
    fn test_finite_detection() {
        let mut s = sample();
        assert!(s.is_finite());
        assert_eq!(s.non_finite_component(), None);

        s.rain_db = f64::NAN;
        assert!(!s.is_finite());
        assert_eq!(s.non_finite_component(), Some(Contribution::Rain));

        s.rain_db = 0.3;
        s.total_db = f64::INFINITY;
        assert_eq!(s.non_finite_component(), Some(Contribution::Total));
    }

    #[test]
    fn test_error_messages_carry_values() {
        let err = SweepError::InvalidElevation(95.0);
        assert!(err.to_string().contains("95"), "msg = {err}");

        let err = SweepError::Model {
            index: 5,
            value: 0.25,
            source: ModelError::NonFinite(Contribution::Cloud),
        };
        let msg = err.to_string();
        assert!(msg.contains("sample 5"), "msg = {msg}");
        assert!(msg.contains("cloud"), "msg = {msg}");
    }

    #[test]
    fn test_sample_serde_round_trip() {
        let s = sample();
        let json = serde_json::to_string(&s).unwrap();
        let back: AttenuationSample = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
