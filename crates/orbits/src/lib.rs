//! Spacecraft positions of triangular detector constellations.
//!
//! Each model is a pure function of time (seconds since the model epoch) and its
//! orbit constants. Positions are in metres in an ecliptic frame centred on the Sun.

use gws_config::OrbitConfig;
use gws_core::constants::C_SI;
use gws_core::vector::{self, Vector3};
use serde::Serialize;

pub mod geocentric;
pub mod heliocentric;

/// Positions of spacecraft 0, 1 and 2.
pub type SpacecraftPositions = [Vector3; 3];

/// Positions at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitSample {
    pub time_s: f64,
    pub positions: SpacecraftPositions,
}

/// Evaluate whichever orbit model `orbit` describes.
pub fn spacecraft_positions(orbit: &OrbitConfig, time_s: f64) -> SpacecraftPositions {
    match orbit {
        OrbitConfig::Heliocentric(cfg) => heliocentric::positions(cfg, time_s),
        OrbitConfig::Geocentric(cfg) => geocentric::positions(cfg, time_s),
    }
}

/// Evaluate the orbit at `count` instants starting at `start_s` spaced by `step_s`.
pub fn sample_positions(
    orbit: &OrbitConfig,
    start_s: f64,
    step_s: f64,
    count: usize,
) -> Vec<OrbitSample> {
    (0..count)
        .map(|i| {
            let time_s = start_s + step_s * i as f64;
            OrbitSample {
                time_s,
                positions: spacecraft_positions(orbit, time_s),
            }
        })
        .collect()
}

/// Arm lengths, arm `i` joining spacecraft `i` and `(i + 1) % 3`.
pub fn arm_lengths(positions: &SpacecraftPositions) -> [f64; 3] {
    std::array::from_fn(|i| vector::distance(&positions[i], &positions[(i + 1) % 3]))
}

/// Unit vectors along each arm, pointing from spacecraft `i` to `(i + 1) % 3`.
pub fn link_unit_vectors(positions: &SpacecraftPositions) -> [Vector3; 3] {
    std::array::from_fn(|i| {
        vector::normalize(&vector::sub(&positions[(i + 1) % 3], &positions[i]))
    })
}

/// One-way light travel time along each arm (s).
pub fn light_travel_times(positions: &SpacecraftPositions) -> [f64; 3] {
    arm_lengths(positions).map(|l| l / C_SI)
}

/// Centroid of the three spacecraft.
pub fn centroid(positions: &SpacecraftPositions) -> Vector3 {
    let sum = vector::add(&vector::add(&positions[0], &positions[1]), &positions[2]);
    vector::scale(&sum, 1.0 / 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gws_config::presets;

    const TRIANGLE: SpacecraftPositions = [[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 1.0, 0.0]];

    #[test]
    fn geometry_helpers_on_simple_triangle() {
        let arms = arm_lengths(&TRIANGLE);
        assert_eq!(arms[0], 2.0);
        assert_relative_eq!(arms[1], 2f64.sqrt());
        assert_relative_eq!(arms[2], 2f64.sqrt());

        let units = link_unit_vectors(&TRIANGLE);
        assert_eq!(units[0], [1.0, 0.0, 0.0]);
        for u in units {
            assert_relative_eq!(vector::norm(&u), 1.0);
        }

        let c = centroid(&TRIANGLE);
        assert_relative_eq!(c[0], 1.0);
        assert_relative_eq!(c[1], 1.0 / 3.0);

        let ltt = light_travel_times(&TRIANGLE);
        assert_relative_eq!(ltt[0], 2.0 / C_SI);
    }

    #[test]
    fn dispatch_matches_direct_models() {
        let lisa = presets::lisa();
        let tq = presets::tianqin();
        let t = 1.234_567e6;
        match (&lisa.orbit, &tq.orbit) {
            (OrbitConfig::Heliocentric(h), OrbitConfig::Geocentric(g)) => {
                assert_eq!(spacecraft_positions(&lisa.orbit, t), heliocentric::positions(h, t));
                assert_eq!(spacecraft_positions(&tq.orbit, t), geocentric::positions(g, t));
            }
            _ => panic!("unexpected preset orbit kinds"),
        }
    }

    #[test]
    fn samples_are_evenly_spaced() {
        let orbit = presets::lisa().orbit;
        let samples = sample_positions(&orbit, 100.0, 60.0, 5);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[4].time_s, 340.0);
        assert_eq!(samples[2].positions, spacecraft_positions(&orbit, 220.0));
    }
}
