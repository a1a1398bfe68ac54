//! Link scenario description
//!
//! A [`Scenario`] bundles the parameters that stay fixed across every
//! sample of a sweep: the ground station position, the carrier
//! frequency, and the receive antenna diameter. Scenarios are plain
//! data; [`Scenario::validate`] checks the physical bounds before a
//! sweep starts.

use serde::{Deserialize, Serialize};

use crate::types::{SweepError, SweepResult};

/// Ground station identity and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundStation {
    /// Station name, used in chart titles and output file names.
    pub name: String,
    /// Geodetic latitude in degrees, positive north.
    pub lat_deg: f64,
    /// Geodetic longitude in degrees, positive east.
    pub lon_deg: f64,
}

impl Default for GroundStation {
    fn default() -> Self {
        Self {
            name: "BlacksburgVA".to_string(),
            lat_deg: 37.206831,
            lon_deg: -80.419138,
        }
    }
}

impl GroundStation {
    /// Create a new ground station.
    pub fn new(name: impl Into<String>, lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            name: name.into(),
            lat_deg,
            lon_deg,
        }
    }

    /// Check that the coordinates are finite and on the globe.
    pub fn validate(&self) -> SweepResult<()> {
        if !self.lat_deg.is_finite() || !(-90.0..=90.0).contains(&self.lat_deg) {
            return Err(SweepError::InvalidStation(format!(
                "latitude {} deg outside [-90, 90]",
                self.lat_deg
            )));
        }
        if !self.lon_deg.is_finite() || !(-180.0..=180.0).contains(&self.lon_deg) {
            return Err(SweepError::InvalidStation(format!(
                "longitude {} deg outside [-180, 180]",
                self.lon_deg
            )));
        }
        Ok(())
    }
}

/// Fixed link parameters shared by every sample of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Ground station at one end of the slant path.
    pub station: GroundStation,
    /// Carrier frequency in GHz.
    pub frequency_ghz: f64,
    /// Receive antenna diameter in meters.
    pub antenna_diameter_m: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            station: GroundStation::default(),
            // GPS L1 carrier
            frequency_ghz: 1.57542,
            antenna_diameter_m: 0.1,
        }
    }
}

impl Scenario {
    /// Create a new scenario.
    pub fn new(station: GroundStation, frequency_ghz: f64, antenna_diameter_m: f64) -> Self {
        Self {
            station,
            frequency_ghz,
            antenna_diameter_m,
        }
    }

    /// Check all scenario parameters.
    ///
    /// Frequency and antenna diameter must be positive and finite, and
    /// the station coordinates must be on the globe.
    pub fn validate(&self) -> SweepResult<()> {
        self.station.validate()?;
        if !self.frequency_ghz.is_finite() || self.frequency_ghz <= 0.0 {
            return Err(SweepError::InvalidFrequency(self.frequency_ghz));
        }
        if !self.antenna_diameter_m.is_finite() || self.antenna_diameter_m <= 0.0 {
            return Err(SweepError::InvalidDiameter(self.antenna_diameter_m));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_default_scenario() {
        let s = Scenario::default();
        assert_eq!(s.station.name, "BlacksburgVA");
        assert!((s.station.lat_deg - 37.206831).abs() < EPSILON);
        assert!((s.station.lon_deg + 80.419138).abs() < EPSILON);
        assert!((s.frequency_ghz - 1.57542).abs() < EPSILON);
        assert!((s.antenna_diameter_m - 0.1).abs() < EPSILON);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_frequency() {
        let mut s = Scenario::default();
        s.frequency_ghz = 0.0;
        assert!(matches!(s.validate(), Err(SweepError::InvalidFrequency(_))));
        s.frequency_ghz = f64::NAN;
        assert!(matches!(s.validate(), Err(SweepError::InvalidFrequency(_))));
    }

    #[test]
    fn test_validate_rejects_bad_diameter() {
        let mut s = Scenario::default();
        s.antenna_diameter_m = 0.0;
        assert!(matches!(s.validate(), Err(SweepError::InvalidDiameter(_))));
        s.antenna_diameter_m = -0.5;
        assert!(matches!(s.validate(), Err(SweepError::InvalidDiameter(_))));
    }

    #[test]
    fn test_validate_rejects_bad_coordinates() {
        let mut s = Scenario::default();
        s.station.lat_deg = 100.0;
        assert!(matches!(s.validate(), Err(SweepError::InvalidStation(_))));

        let mut s = Scenario::default();
        s.station.lon_deg = -200.0;
        assert!(matches!(s.validate(), Err(SweepError::InvalidStation(_))));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "station:\n  name: \"Svalbard\"\n  lat_deg: 78.229772\n";
        let s: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(s.station.name, "Svalbard");
        assert!((s.station.lat_deg - 78.229772).abs() < EPSILON);
        // Unspecified fields fall back to the defaults.
        assert!((s.station.lon_deg + 80.419138).abs() < EPSILON);
        assert!((s.frequency_ghz - 1.57542).abs() < EPSILON);
    }
}
