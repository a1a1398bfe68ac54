//! # Compact ITU-R approximation model
//!
//! Built-in [`SlantPathModel`] implementation assembled from compact
//! approximations of the relevant ITU-R recommendations: power-law rain
//! attenuation with frequency-interpolated coefficients (P.838) driven
//! by a rain-rate exceedance law (P.837), a zenith gaseous absorption
//! curve capturing the 22 GHz water-vapor line and the 60 GHz oxygen
//! complex (P.676), an exceedance-scaled cloud liquid water term
//! (P.840), a scintillation time-percentage factor (P.618), and the
//! P.618 total combination. Coefficient values are representative of
//! the recommendations; digital climate maps are not used, so regional
//! statistics reduce to latitude bands.
//!
//! # Example
//!
//! ```
//! use slantpath_core::itu_approx::IturApproxModel;
//! use slantpath_core::model::SlantPathModel;
//! use slantpath_core::scenario::Scenario;
//!
//! // GPS L1 from the default station, 10 deg elevation, 1 % exceedance
//! let model = IturApproxModel::new();
//! let sample = model.attenuation(&Scenario::default(), 10.0, 1.0).unwrap();
//!
//! assert!(sample.total_db > 0.0, "total attenuation must be positive");
//! assert!(sample.total_db >= sample.gaseous_db, "total includes the gaseous term");
//! ```

use std::f64::consts::PI;

use crate::model::SlantPathModel;
use crate::scenario::Scenario;
use crate::types::{AttenuationSample, ModelError};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Effective Earth radius in km (4/3 model, for slant-path geometry).
const EFFECTIVE_EARTH_RADIUS_KM: f64 = 8_500.0;

/// Equivalent height of the gaseous absorption layer (km).
const GASEOUS_LAYER_KM: f64 = 6.0;

/// Mean height of the cloud liquid water layer (km).
const CLOUD_LAYER_KM: f64 = 2.0;

/// Height of the turbulence layer driving scintillation (m).
const TURBULENCE_HEIGHT_M: f64 = 1_000.0;

/// Exponent of the rain-rate exceedance power law.
const RAIN_EXCEEDANCE_BETA: f64 = 0.55;

// ---------------------------------------------------------------------------
// ITU-R P.838 coefficient table (circular polarization)
// ---------------------------------------------------------------------------

/// A row of the rain power-law coefficient table: frequency (GHz), k, α.
#[derive(Debug, Clone, Copy)]
struct RainRow {
    freq: f64,
    k: f64,
    alpha: f64,
}

/// Circular-polarization power-law coefficients covering 1 to 100 GHz,
/// representative of ITU-R P.838-3 (log-interpolation between entries,
/// clamped outside the range).
const RAIN_TABLE: &[RainRow] = &[
    RainRow { freq: 1.0,   k: 0.0000369, alpha: 0.896 },
    RainRow { freq: 2.0,   k: 0.000146,  alpha: 0.943 },
    RainRow { freq: 4.0,   k: 0.000620,  alpha: 1.098 },
    RainRow { freq: 6.0,   k: 0.001647,  alpha: 1.287 },
    RainRow { freq: 7.0,   k: 0.002824,  alpha: 1.322 },
    RainRow { freq: 8.0,   k: 0.004235,  alpha: 1.319 },
    RainRow { freq: 10.0,  k: 0.009465,  alpha: 1.270 },
    RainRow { freq: 12.0,  k: 0.01777,   alpha: 1.209 },
    RainRow { freq: 15.0,  k: 0.03506,   alpha: 1.141 },
    RainRow { freq: 20.0,  k: 0.07204,   alpha: 1.082 },
    RainRow { freq: 25.0,  k: 0.1184,    alpha: 1.046 },
    RainRow { freq: 30.0,  k: 0.1767,    alpha: 1.011 },
    RainRow { freq: 35.0,  k: 0.2476,    alpha: 0.971 },
    RainRow { freq: 40.0,  k: 0.3294,    alpha: 0.934 },
    RainRow { freq: 50.0,  k: 0.5067,    alpha: 0.871 },
    RainRow { freq: 60.0,  k: 0.6737,    alpha: 0.825 },
    RainRow { freq: 70.0,  k: 0.8168,    alpha: 0.793 },
    RainRow { freq: 80.0,  k: 0.9399,    alpha: 0.769 },
    RainRow { freq: 90.0,  k: 1.0291,    alpha: 0.754 },
    RainRow { freq: 100.0, k: 1.0896,    alpha: 0.744 },
];

/// Cloud liquid water specific attenuation coefficient K_l in
/// (dB/km)/(g/m³) at 0 °C, representative of ITU-R P.840.
const CLOUD_KL_TABLE: &[(f64, f64)] = &[
    (1.0, 0.0009),
    (2.0, 0.0035),
    (5.0, 0.022),
    (10.0, 0.088),
    (15.0, 0.19),
    (20.0, 0.33),
    (30.0, 0.70),
    (40.0, 1.16),
    (50.0, 1.65),
    (60.0, 2.1),
    (80.0, 3.0),
    (100.0, 3.8),
];

// ---------------------------------------------------------------------------
// Table interpolation helpers
// ---------------------------------------------------------------------------

/// Look up `(k, α)` for a frequency by log-interpolating the rain table.
fn rain_coefficients(freq_ghz: f64) -> (f64, f64) {
    let table = RAIN_TABLE;
    let clamped = freq_ghz.clamp(table[0].freq, table[table.len() - 1].freq);

    // Find bracketing entries.
    let mut lo = 0usize;
    for i in 0..table.len() - 1 {
        if table[i + 1].freq >= clamped {
            lo = i;
            break;
        }
    }
    let hi = lo + 1;

    if (table[hi].freq - table[lo].freq).abs() < 1e-12 {
        return (table[lo].k, table[lo].alpha);
    }
    // Log-interpolation for k, linear interpolation for α.
    let frac =
        (clamped.ln() - table[lo].freq.ln()) / (table[hi].freq.ln() - table[lo].freq.ln());
    let k = (table[lo].k.ln() + frac * (table[hi].k.ln() - table[lo].k.ln())).exp();
    let alpha = table[lo].alpha + frac * (table[hi].alpha - table[lo].alpha);
    (k, alpha)
}

/// Look up a positive coefficient in a `(frequency, value)` table by
/// log-interpolating between the bracketing entries.
fn lookup_log(table: &[(f64, f64)], freq_ghz: f64) -> f64 {
    let clamped = freq_ghz.clamp(table[0].0, table[table.len() - 1].0);

    let mut lo = 0usize;
    for i in 0..table.len() - 1 {
        if table[i + 1].0 >= clamped {
            lo = i;
            break;
        }
    }
    let hi = lo + 1;

    if (table[hi].0 - table[lo].0).abs() < 1e-12 {
        return table[lo].1;
    }
    let frac = (clamped.ln() - table[lo].0.ln()) / (table[hi].0.ln() - table[lo].0.ln());
    (table[lo].1.ln() + frac * (table[hi].1.ln() - table[lo].1.ln())).exp()
}

// ---------------------------------------------------------------------------
// Geometry and climate helpers
// ---------------------------------------------------------------------------

/// Slant path length (km) through a layer of the given height.
///
/// Uses the curved-atmosphere form with an effective Earth radius, so
/// the path stays finite at grazing elevations:
///   L = 2h / (sqrt(sin²θ + 2h/Rₑ) + sin θ)
/// At zenith this reduces to the layer height.
fn slant_path_km(layer_height_km: f64, elevation_deg: f64) -> f64 {
    let sin_el = (elevation_deg * PI / 180.0).sin();
    let ratio = 2.0 * layer_height_km / EFFECTIVE_EARTH_RADIUS_KM;
    2.0 * layer_height_km / ((sin_el * sin_el + ratio).sqrt() + sin_el)
}

/// Long-term rain rate (mm/h) exceeded 0.01 % of an average year, by
/// latitude band.
fn rain_rate_001(lat_deg: f64) -> f64 {
    let lat = lat_deg.abs();
    if lat <= 23.0 {
        95.0
    } else if lat <= 45.0 {
        42.0
    } else if lat <= 60.0 {
        30.0
    } else {
        22.0
    }
}

/// Mean rain height (km) by latitude, after ITU-R P.839.
fn rain_height_km(lat_deg: f64) -> f64 {
    let lat = lat_deg.abs();
    if lat <= 23.0 {
        5.0
    } else {
        (5.0 - 0.075 * (lat - 23.0)).max(1.0)
    }
}

/// Rain rate (mm/h) exceeded for `p` percent of an average year.
///
/// R(p) = R₀.₀₁ · (0.01 / p)^β with β = 0.55; `p` is clamped to the
/// validity range 0.001 to 10 %.
fn rain_rate_exceedance(r_001: f64, p_percent: f64) -> f64 {
    if r_001 <= 0.0 || p_percent <= 0.0 {
        return 0.0;
    }
    let p = p_percent.clamp(0.001, 10.0);
    r_001 * (0.01 / p).powf(RAIN_EXCEEDANCE_BETA)
}

/// Columnar cloud liquid water (kg/m²) exceeded for `p` percent of an
/// average year. Median 0.28 kg/m², capped at a physical ceiling.
fn columnar_liquid_water(p_percent: f64) -> f64 {
    let p = p_percent.clamp(0.01, 100.0);
    (0.28 * (50.0 / p).powf(0.45)).min(8.0)
}

/// Scintillation time-percentage factor a(p), after ITU-R P.618:
///   a(p) = −0.061·log₁₀³p + 0.072·log₁₀²p − 1.71·log₁₀p + 3.0
/// `p` is clamped to the validity range 0.01 to 50 %.
fn time_percentage_factor(p_percent: f64) -> f64 {
    let lp = p_percent.clamp(0.01, 50.0).log10();
    -0.061 * lp.powi(3) + 0.072 * lp.powi(2) - 1.71 * lp + 3.0
}

/// Zenith gaseous absorption (dB) as a function of frequency.
///
/// Baseline dry-air floor plus Gaussian bumps for the 22.235 GHz water
/// vapor line and the 50 to 70 GHz oxygen complex (peak ≈ 15 dB zenith).
fn zenith_gaseous_db(freq_ghz: f64) -> f64 {
    let f = freq_ghz.max(0.0);
    let mut zenith = if f < 1.0 {
        0.01
    } else if f < 10.0 {
        0.01 + 0.003 * (f - 1.0)
    } else {
        0.037 + 0.004 * (f - 10.0)
    };
    let d22 = f - 22.235;
    zenith += 0.11 * (-d22 * d22 / 9.0).exp();
    let d60 = f - 60.0;
    zenith += 15.0 * (-d60 * d60 / 50.0).exp();
    zenith
}

// ---------------------------------------------------------------------------
// IturApproxModel
// ---------------------------------------------------------------------------

/// Built-in compact attenuation model.
///
/// Stateless; every evaluation is a pure function of the scenario and
/// the swept point, so repeated sweeps over the same inputs produce
/// identical tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct IturApproxModel;

impl IturApproxModel {
    /// Create the model.
    pub fn new() -> Self {
        Self
    }

    /// Gaseous absorption (dB) along the slant path. Independent of the
    /// exceedance percentage.
    fn gaseous_db(&self, freq_ghz: f64, elevation_deg: f64) -> f64 {
        let path_factor = slant_path_km(GASEOUS_LAYER_KM, elevation_deg) / GASEOUS_LAYER_KM;
        (zenith_gaseous_db(freq_ghz) * path_factor).max(0.0)
    }

    /// Cloud liquid water attenuation (dB) along the slant path.
    fn cloud_db(&self, freq_ghz: f64, elevation_deg: f64, exceedance_pct: f64) -> f64 {
        let kl = lookup_log(CLOUD_KL_TABLE, freq_ghz);
        let columnar = columnar_liquid_water(exceedance_pct);
        let path_factor = slant_path_km(CLOUD_LAYER_KM, elevation_deg) / CLOUD_LAYER_KM;
        (kl * columnar * path_factor).max(0.0)
    }

    /// Rain attenuation (dB) along the slant path.
    fn rain_db(&self, freq_ghz: f64, lat_deg: f64, elevation_deg: f64, exceedance_pct: f64) -> f64 {
        let rain_rate = rain_rate_exceedance(rain_rate_001(lat_deg), exceedance_pct);
        if rain_rate <= 0.0 {
            return 0.0;
        }
        let (k, alpha) = rain_coefficients(freq_ghz);
        let gamma = k * rain_rate.powf(alpha);

        let slant_km = slant_path_km(rain_height_km(lat_deg), elevation_deg);
        // Path reduction factor, same shape as the terrestrial d₀ model.
        let d0 = 35.0 * (-0.015 * rain_rate).exp();
        let reduction = 1.0 / (1.0 + slant_km / d0);
        (gamma * slant_km * reduction).max(0.0)
    }

    /// Scintillation fade depth (dB) exceeded for the given percentage
    /// of time.
    fn scintillation_db(
        &self,
        freq_ghz: f64,
        elevation_deg: f64,
        antenna_diameter_m: f64,
        exceedance_pct: f64,
    ) -> f64 {
        let sin_el = (elevation_deg * PI / 180.0).sin();
        // Aperture averaging against the first Fresnel zone at the
        // turbulence layer.
        let lambda_m = 0.299_792_458 / freq_ghz;
        let fresnel_m = (lambda_m * TURBULENCE_HEIGHT_M / sin_el).sqrt();
        let d_eff = 0.5_f64.sqrt() * antenna_diameter_m;
        let averaging = (1.0 + (d_eff / fresnel_m).powi(2)).powf(-7.0 / 12.0);

        // Reference amplitude deviation for a mid-latitude wet term.
        let sigma = 0.025 * freq_ghz.powf(7.0 / 12.0) * averaging / sin_el.powf(1.2);
        (time_percentage_factor(exceedance_pct) * sigma).max(0.0)
    }
}

impl SlantPathModel for IturApproxModel {
    fn attenuation(
        &self,
        scenario: &Scenario,
        elevation_deg: f64,
        exceedance_pct: f64,
    ) -> Result<AttenuationSample, ModelError> {
        if !elevation_deg.is_finite() || elevation_deg <= 0.0 || elevation_deg > 90.0 {
            return Err(ModelError::InputOutOfRange {
                name: "elevation_deg",
                value: elevation_deg,
            });
        }
        if !exceedance_pct.is_finite() || exceedance_pct <= 0.0 || exceedance_pct >= 100.0 {
            return Err(ModelError::InputOutOfRange {
                name: "exceedance_pct",
                value: exceedance_pct,
            });
        }
        if !scenario.frequency_ghz.is_finite() || scenario.frequency_ghz <= 0.0 {
            return Err(ModelError::InputOutOfRange {
                name: "frequency_ghz",
                value: scenario.frequency_ghz,
            });
        }
        if !scenario.antenna_diameter_m.is_finite() || scenario.antenna_diameter_m <= 0.0 {
            return Err(ModelError::InputOutOfRange {
                name: "antenna_diameter_m",
                value: scenario.antenna_diameter_m,
            });
        }

        let f = scenario.frequency_ghz;
        let lat = scenario.station.lat_deg;

        let gaseous_db = self.gaseous_db(f, elevation_deg);
        let cloud_db = self.cloud_db(f, elevation_deg, exceedance_pct);
        let rain_db = self.rain_db(f, lat, elevation_deg, exceedance_pct);
        let scintillation_db =
            self.scintillation_db(f, elevation_deg, scenario.antenna_diameter_m, exceedance_pct);

        // ITU-R P.618 §2.5 combination of the contributions.
        let total_db =
            gaseous_db + ((rain_db + cloud_db).powi(2) + scintillation_db.powi(2)).sqrt();

        Ok(AttenuationSample {
            gaseous_db,
            cloud_db,
            rain_db,
            scintillation_db,
            total_db,
        })
    }

    fn name(&self) -> &str {
        "compact ITU-R approximation"
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::SweepAxis;
    use crate::sweep::{run_sweep, FixedValue};
    use crate::types::Contribution;

    const EPSILON: f64 = 1e-9;

    fn gps_l1_scenario() -> Scenario {
        let mut s = Scenario::default();
        s.frequency_ghz = 1.57543;
        s.antenna_diameter_m = 0.1;
        s
    }

    // 1. Rain coefficients at L-band are small and positive
    #[test]
    fn test_rain_coefficients_l_band() {
        let (k, alpha) = rain_coefficients(1.57543);
        assert!(k > 0.0 && k < 0.001, "k = {k}");
        assert!(alpha > 0.8 && alpha < 1.0, "alpha = {alpha}");
    }

    // 2. Rain coefficients clamp outside the table
    #[test]
    fn test_rain_coefficients_clamped() {
        let (k_low, _) = rain_coefficients(0.1);
        let (k_1, _) = rain_coefficients(1.0);
        assert!((k_low - k_1).abs() < EPSILON);

        let (k_high, _) = rain_coefficients(300.0);
        let (k_100, _) = rain_coefficients(100.0);
        assert!((k_high - k_100).abs() < EPSILON);
    }

    // 3. Rain rate exceedance law
    #[test]
    fn test_rain_rate_exceedance() {
        // At 0.01 % the exceeded rate equals the R001 baseline.
        let r = rain_rate_exceedance(42.0, 0.01);
        assert!((r - 42.0).abs() < 0.01, "r = {r}");
        // Higher exceedance percentages see lower rain rates.
        let r1 = rain_rate_exceedance(42.0, 1.0);
        let r5 = rain_rate_exceedance(42.0, 5.0);
        assert!(r1 < 42.0, "r1 = {r1}");
        assert!(r5 < r1, "r5 = {r5}, r1 = {r1}");
    }

    // 4. Latitude bands
    #[test]
    fn test_latitude_bands() {
        assert!(rain_rate_001(0.0) > rain_rate_001(37.2));
        assert!(rain_rate_001(37.2) > rain_rate_001(55.0));
        assert!(rain_rate_001(55.0) > rain_rate_001(70.0));
        // Bands are symmetric about the equator.
        assert!((rain_rate_001(-37.2) - rain_rate_001(37.2)).abs() < EPSILON);
        assert!(rain_height_km(0.0) > rain_height_km(60.0));
    }

    // 5. Slant path geometry
    #[test]
    fn test_slant_path_geometry() {
        // Zenith path is the layer height (within curvature rounding).
        let zenith = slant_path_km(6.0, 90.0);
        assert!((zenith - 6.0).abs() / 6.0 < 1e-3, "zenith = {zenith}");
        // Path grows monotonically as elevation falls, and stays finite.
        let l30 = slant_path_km(6.0, 30.0);
        let l10 = slant_path_km(6.0, 10.0);
        let l1 = slant_path_km(6.0, 1.0);
        assert!(zenith < l30 && l30 < l10 && l10 < l1, "{zenith} {l30} {l10} {l1}");
        assert!(l1.is_finite() && l1 < 1000.0, "l1 = {l1}");
    }

    // 6. Zenith gaseous curve has the 22 GHz and 60 GHz features
    #[test]
    fn test_zenith_gaseous_features() {
        let a15 = zenith_gaseous_db(15.0);
        let a22 = zenith_gaseous_db(22.235);
        let a35 = zenith_gaseous_db(35.0);
        let a60 = zenith_gaseous_db(60.0);
        assert!(a22 > a15, "a22 = {a22}, a15 = {a15}");
        assert!(a22 > a35, "a22 = {a22}, a35 = {a35}");
        assert!(a60 > 10.0, "a60 = {a60}");
        assert!(a60 > 10.0 * a22, "a60 = {a60}, a22 = {a22}");
    }

    // 7. Gaseous term ignores the exceedance percentage
    #[test]
    fn test_gaseous_independent_of_exceedance() {
        let model = IturApproxModel::new();
        let scenario = gps_l1_scenario();
        let a = model.attenuation(&scenario, 10.0, 0.1).unwrap();
        let b = model.attenuation(&scenario, 10.0, 10.0).unwrap();
        assert!((a.gaseous_db - b.gaseous_db).abs() < EPSILON);
    }

    // 8. All components are finite and non-negative across the domain
    #[test]
    fn test_components_finite_non_negative() {
        let model = IturApproxModel::new();
        let scenario = gps_l1_scenario();
        for &el in &[0.5, 1.0, 5.0, 10.0, 30.0, 60.0, 90.0] {
            for &p in &[0.032, 0.1, 1.0, 10.0, 31.6, 99.0] {
                let s = model.attenuation(&scenario, el, p).unwrap();
                for c in Contribution::ALL {
                    let v = s.component(c);
                    assert!(v.is_finite(), "{c} at el={el} p={p} is {v}");
                    assert!(v >= 0.0, "{c} at el={el} p={p} is {v}");
                }
            }
        }
    }

    // 9. Total combination dominates its parts
    #[test]
    fn test_total_combination() {
        let model = IturApproxModel::new();
        let sample = model.attenuation(&gps_l1_scenario(), 10.0, 1.0).unwrap();
        assert!(sample.total_db >= sample.gaseous_db);
        assert!(sample.total_db >= sample.rain_db);
        assert!(sample.total_db >= sample.cloud_db);
        assert!(sample.total_db >= sample.scintillation_db);
    }

    // 10. Attenuation grows as elevation falls
    #[test]
    fn test_attenuation_vs_elevation() {
        let model = IturApproxModel::new();
        let scenario = gps_l1_scenario();
        let low = model.attenuation(&scenario, 5.0, 1.0).unwrap();
        let high = model.attenuation(&scenario, 60.0, 1.0).unwrap();
        assert!(low.cloud_db > high.cloud_db);
        assert!(low.gaseous_db > high.gaseous_db);
        assert!(low.total_db > high.total_db);
    }

    // 11. Attenuation grows with frequency
    #[test]
    fn test_attenuation_vs_frequency() {
        let model = IturApproxModel::new();
        let mut ku = gps_l1_scenario();
        ku.frequency_ghz = 12.0;
        let mut ka = gps_l1_scenario();
        ka.frequency_ghz = 30.0;

        let a_l1 = model.attenuation(&gps_l1_scenario(), 30.0, 0.1).unwrap();
        let a_ku = model.attenuation(&ku, 30.0, 0.1).unwrap();
        let a_ka = model.attenuation(&ka, 30.0, 0.1).unwrap();
        assert!(a_l1.rain_db < a_ku.rain_db, "{} vs {}", a_l1.rain_db, a_ku.rain_db);
        assert!(a_ku.rain_db < a_ka.rain_db, "{} vs {}", a_ku.rain_db, a_ka.rain_db);
        assert!(a_l1.cloud_db < a_ka.cloud_db);
    }

    // 12. Out-of-domain inputs are rejected
    #[test]
    fn test_rejects_out_of_domain_inputs() {
        let model = IturApproxModel::new();
        let scenario = gps_l1_scenario();
        assert!(matches!(
            model.attenuation(&scenario, 0.0, 1.0),
            Err(ModelError::InputOutOfRange { name: "elevation_deg", .. })
        ));
        assert!(matches!(
            model.attenuation(&scenario, 95.0, 1.0),
            Err(ModelError::InputOutOfRange { name: "elevation_deg", .. })
        ));
        assert!(matches!(
            model.attenuation(&scenario, 10.0, 0.0),
            Err(ModelError::InputOutOfRange { name: "exceedance_pct", .. })
        ));
        assert!(matches!(
            model.attenuation(&scenario, 10.0, 150.0),
            Err(ModelError::InputOutOfRange { name: "exceedance_pct", .. })
        ));
    }

    // 13. Deterministic evaluation
    #[test]
    fn test_deterministic() {
        let model = IturApproxModel::new();
        let scenario = gps_l1_scenario();
        let a = model.attenuation(&scenario, 12.5, 0.7).unwrap();
        let b = model.attenuation(&scenario, 12.5, 0.7).unwrap();
        assert_eq!(a, b);
    }

    // 14. Cloud attenuation is non-increasing over the unavailability sweep
    #[test]
    fn test_cloud_non_increasing_over_unavailability_sweep() {
        let model = IturApproxModel::new();
        let scenario = gps_l1_scenario();
        let axis = SweepAxis::exceedance_logspace(-1.5, 1.5, 100).unwrap();
        let table =
            run_sweep(&model, &scenario, &axis, FixedValue::ElevationDeg(10.0)).unwrap();

        let cloud = table.series(Contribution::Cloud);
        assert_eq!(cloud.len(), 100);
        for (i, pair) in cloud.windows(2).enumerate() {
            assert!(
                pair[1] <= pair[0] + EPSILON,
                "cloud[{}] = {} rose above cloud[{}] = {}",
                i + 1,
                pair[1],
                i,
                pair[0]
            );
        }
        for (i, v) in cloud.iter().enumerate() {
            assert!(*v >= 0.0, "cloud[{i}] = {v}");
        }
    }

    // 15. Scintillation deepens toward rare exceedances
    #[test]
    fn test_scintillation_vs_exceedance() {
        let model = IturApproxModel::new();
        let scenario = gps_l1_scenario();
        let rare = model.attenuation(&scenario, 10.0, 0.05).unwrap();
        let common = model.attenuation(&scenario, 10.0, 20.0).unwrap();
        assert!(
            rare.scintillation_db > common.scintillation_db,
            "rare = {}, common = {}",
            rare.scintillation_db,
            common.scintillation_db
        );
    }
}
