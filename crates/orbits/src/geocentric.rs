//! Geocentric triangle: a rigid equilateral constellation on a circular orbit around
//! the Earth, carried along the Earth's eccentric heliocentric orbit.

use std::f64::consts::PI;

use gws_config::{EarthOrbitConfig, GeocentricOrbitConfig};
use gws_core::vector::{self, Vector3};

use crate::SpacecraftPositions;

/// Phase of the Earth relative to the heliocentric constellation epoch (20°).
/// Pinned literally rather than derived from degrees.
pub const EARTH_PHASE_OFFSET_RAD: f64 = 0.349_065_850_398_865_9;

/// Earth position to second order in its orbital eccentricity.
pub fn earth_position(config: &EarthOrbitConfig, time_s: f64) -> Vector3 {
    let alpha =
        config.angular_rate_rad_s * time_s + config.initial_phase_rad + EARTH_PHASE_OFFSET_RAD;
    let (s, c) = (alpha - config.perihelion_rad).sin_cos();
    let ecc = config.eccentricity;
    let ecc2 = ecc * ecc;
    let au = config.semi_major_axis_m;

    [
        au * (c + ecc * (1.0 + s * s) - 1.5 * ecc2 * c * s * s),
        au * (s + ecc * s * c + 0.5 * ecc2 * s * (1.0 - 3.0 * s * s)),
        0.0,
    ]
}

/// Spacecraft offsets from the Earth: a circle of radius `radius_m` in the plane whose
/// normal points at (`normal_theta_rad`, `normal_phi_rad`).
pub fn constellation_offsets(config: &GeocentricOrbitConfig, time_s: f64) -> SpacecraftPositions {
    let phase = config.angular_rate_rad_s * time_s + config.constellation_phase_rad;
    let (sp, cp) = config.normal_phi_rad.sin_cos();
    let (st, ct) = config.normal_theta_rad.sin_cos();
    let r = config.radius_m;

    std::array::from_fn(|i| {
        let (sa, ca) = (phase + i as f64 * 2.0 * PI / 3.0).sin_cos();
        [
            r * (ct * cp * sa + sp * ca),
            r * (ct * sp * sa - cp * ca),
            r * (-st * sa),
        ]
    })
}

/// Positions of the three spacecraft at `time_s`.
pub fn positions(config: &GeocentricOrbitConfig, time_s: f64) -> SpacecraftPositions {
    let earth = earth_position(&config.earth, time_s);
    constellation_offsets(config, time_s).map(|offset| vector::add(&offset, &earth))
}
