//! Built-in detector constant sets.

use std::f64::consts::PI;

use gws_core::constants::{AU_SI, C_SI, SQRT_3};
use gws_core::units::{days_to_seconds, deg_to_rad};

use crate::{
    DetectorConfig, EarthOrbitConfig, GeocentricOrbitConfig, HeliocentricOrbitConfig, NoiseConfig,
    OrbitConfig, RedNoiseConfig,
};

/// LISA arm length (m).
pub const LISA_ARM_LENGTH_M: f64 = 2.5e9;
/// Guiding-centre orbital frequency, one cycle per year (Hz).
pub const LISA_ORBITAL_FREQUENCY_HZ: f64 = 3.168_753_575e-8;
/// Eccentricity giving the nominal arm length, `L / (2√3 AU)`.
pub const LISA_ECCENTRICITY: f64 = 0.004_824_185_2;

/// TianQin spacecraft distance from the Earth (m).
pub const TIANQIN_RADIUS_M: f64 = 1.0e8;
/// TianQin constellation period (days).
pub const TIANQIN_PERIOD_DAYS: f64 = 3.65;
/// Ecliptic longitude of the orbital plane normal (deg), pointing at RX J0806.3+1527.
pub const TIANQIN_NORMAL_PHI_DEG: f64 = 120.5;
/// Polar angle of the orbital plane normal (deg).
pub const TIANQIN_NORMAL_THETA_DEG: f64 = 94.7;

/// Mean angular rate of the Earth around the Sun (rad/s).
pub const EARTH_ORBIT_OMEGA_SI: f64 = 1.990_986_592_77e-7;
pub const EARTH_ECCENTRICITY: f64 = 0.016_708_6;
/// Longitude of the Earth's perihelion (deg).
pub const EARTH_PERIHELION_DEG: f64 = 102.9373;

/// Transfer frequency `c / (2πL)` of an arm of length `arm_length_m`.
pub fn transfer_frequency(arm_length_m: f64) -> f64 {
    C_SI / (2.0 * PI * arm_length_m)
}

/// LISA-like constellation on a heliocentric orbit trailing the Earth.
pub fn lisa() -> DetectorConfig {
    DetectorConfig {
        name: "LISA".to_string(),
        noise: NoiseConfig {
            arm_length_m: LISA_ARM_LENGTH_M,
            transfer_frequency_hz: transfer_frequency(LISA_ARM_LENGTH_M),
            position_noise: 2.25e-22,
            acceleration_noise: 9.0e-30,
            local_noise: 2.89e-24,
            red_noise: RedNoiseConfig::default(),
        },
        orbit: OrbitConfig::Heliocentric(HeliocentricOrbitConfig {
            orbital_frequency_hz: LISA_ORBITAL_FREQUENCY_HZ,
            semi_major_axis_m: AU_SI,
            eccentricity: LISA_ECCENTRICITY,
            initial_phase_rad: 0.0,
            constellation_phase_rad: 0.0,
        }),
    }
}

/// TianQin-like constellation on a geocentric orbit.
pub fn tianqin() -> DetectorConfig {
    let arm_length_m = SQRT_3 * TIANQIN_RADIUS_M;
    DetectorConfig {
        name: "TianQin".to_string(),
        noise: NoiseConfig {
            arm_length_m,
            transfer_frequency_hz: transfer_frequency(arm_length_m),
            position_noise: 1.0e-24,
            acceleration_noise: 1.0e-30,
            local_noise: 2.89e-24,
            red_noise: RedNoiseConfig::default(),
        },
        orbit: OrbitConfig::Geocentric(GeocentricOrbitConfig {
            earth: EarthOrbitConfig {
                angular_rate_rad_s: EARTH_ORBIT_OMEGA_SI,
                semi_major_axis_m: AU_SI,
                eccentricity: EARTH_ECCENTRICITY,
                perihelion_rad: deg_to_rad(EARTH_PERIHELION_DEG),
                initial_phase_rad: 0.0,
            },
            radius_m: TIANQIN_RADIUS_M,
            angular_rate_rad_s: 2.0 * PI / days_to_seconds(TIANQIN_PERIOD_DAYS),
            constellation_phase_rad: 0.0,
            normal_theta_rad: deg_to_rad(TIANQIN_NORMAL_THETA_DEG),
            normal_phi_rad: deg_to_rad(TIANQIN_NORMAL_PHI_DEG),
        }),
    }
}

/// All built-in presets.
pub fn all() -> Vec<DetectorConfig> {
    vec![lisa(), tianqin()]
}

/// Find a built-in preset by case-insensitive name.
pub fn by_name(name: &str) -> Option<DetectorConfig> {
    all()
        .into_iter()
        .find(|cfg| cfg.name.eq_ignore_ascii_case(name))
}
