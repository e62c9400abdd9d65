//! Analytic models of space-borne gravitational-wave detectors.
//!
//! The instrument noise PSD and the spacecraft orbits are closed-form, stateless
//! evaluations driven by an immutable [`config::DetectorConfig`]. Keeping them in a
//! library crate lets the CLI binaries, plotting tools and simulation drivers share
//! them.

pub mod detector;
pub mod scenario;

pub use detector::{Detector, DetectorError};
pub use gws_config as config;
pub use gws_core::{constants, units, vector};
pub use gws_export as export;
pub use gws_noise as noise;
pub use gws_orbits as orbits;
