//! Heliocentric triangle: three spacecraft on slightly eccentric orbits around the Sun
//! whose relative motion keeps a rigid equilateral triangle to first order in the
//! eccentricity.

use std::f64::consts::PI;

use gws_config::HeliocentricOrbitConfig;
use gws_core::constants::SQRT_3;

use crate::SpacecraftPositions;

/// Orbital phase of the guiding centre, `2π fm t + κ`.
#[inline]
pub fn guiding_centre_phase(config: &HeliocentricOrbitConfig, time_s: f64) -> f64 {
    2.0 * PI * config.orbital_frequency_hz * time_s + config.initial_phase_rad
}

/// Positions of the three spacecraft at `time_s`.
pub fn positions(config: &HeliocentricOrbitConfig, time_s: f64) -> SpacecraftPositions {
    let au = config.semi_major_axis_m;
    let ec = config.eccentricity;
    let (sa, ca) = guiding_centre_phase(config, time_s).sin_cos();

    std::array::from_fn(|i| {
        let beta = 2.0 * PI * i as f64 / 3.0 + config.constellation_phase_rad;
        let (sb, cb) = beta.sin_cos();
        [
            au * ca + au * ec * (sa * ca * sb - (1.0 + sa * sa) * cb),
            au * sa + au * ec * (sa * ca * cb - (1.0 + ca * ca) * sb),
            -SQRT_3 * au * ec * (ca * cb + sa * sb),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arm_lengths, centroid};
    use approx::assert_relative_eq;
    use gws_config::{OrbitConfig, presets};

    fn lisa_orbit() -> HeliocentricOrbitConfig {
        match presets::lisa().orbit {
            OrbitConfig::Heliocentric(cfg) => cfg,
            OrbitConfig::Geocentric(_) => unreachable!("LISA preset is heliocentric"),
        }
    }

    #[test]
    fn epoch_positions_match_closed_form() {
        let cfg = lisa_orbit();
        let au = cfg.semi_major_axis_m;
        let ec = cfg.eccentricity;
        let p = positions(&cfg, 0.0);

        // alpha = 0: spacecraft 0 sits at beta = 0.
        assert_eq!(p[0][1], 0.0);
        assert_relative_eq!(p[0][0], au - au * ec, max_relative = 1e-15);
        assert_relative_eq!(p[0][2], -SQRT_3 * au * ec, max_relative = 1e-15);

        assert_relative_eq!(p[0][0], 148_876_182_826.410_52, max_relative = 1e-12);
        assert_relative_eq!(p[0][2], -1_249_999_994.981_303, max_relative = 1e-10);
        assert_relative_eq!(p[1][0], 149_958_714_576.794_74, max_relative = 1e-12);
        assert_relative_eq!(p[1][1], -1_249_999_994.981_303, max_relative = 1e-10);
        assert_relative_eq!(p[2][2], 624_999_997.490_652, max_relative = 1e-10);
    }

    #[test]
    fn guiding_centre_lies_on_circle() {
        let cfg = lisa_orbit();
        for day in [0.0, 17.0, 91.0, 200.0] {
            let c = centroid(&positions(&cfg, day * 86_400.0));
            let r = (c[0] * c[0] + c[1] * c[1]).sqrt();
            assert_relative_eq!(r, cfg.semi_major_axis_m, max_relative = 1e-12);
            assert!(c[2].abs() < 1e-3, "centroid should stay in the ecliptic: {c:?}");
        }
    }

    #[test]
    fn constellation_phase_rotates_roles() {
        let mut cfg = lisa_orbit();
        let base = positions(&cfg, 3.0e6);
        cfg.constellation_phase_rad = 2.0 * PI / 3.0;
        let shifted = positions(&cfg, 3.0e6);
        for k in 0..3 {
            assert_relative_eq!(shifted[0][k], base[1][k], max_relative = 1e-9, epsilon = 1e-3);
        }
    }

    #[test]
    fn arms_stay_equal_over_a_year() {
        let cfg = lisa_orbit();
        let nominal = 2.0 * SQRT_3 * cfg.semi_major_axis_m * cfg.eccentricity;
        for day in 0..366 {
            for arm in arm_lengths(&positions(&cfg, day as f64 * 86_400.0)) {
                assert!((arm / nominal - 1.0).abs() < 1e-6, "day {day}: {arm}");
            }
        }
    }
}
