//! Detector façade pairing a noise budget with an orbit model.

use gws_config::{DetectorConfig, OrbitConfig, presets};
use gws_noise::PsdPair;
use gws_orbits::SpacecraftPositions;
use thiserror::Error;

/// Errors surfaced when building a detector.
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("detector '{0}' is not a built-in preset")]
    UnknownPreset(String),
    #[error("invalid detector constants: {0}")]
    Config(#[from] gws_config::ConfigError),
}

/// A validated, immutable detector design.
#[derive(Debug, Clone, PartialEq)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    /// Wrap a constant set after validating it.
    pub fn new(config: DetectorConfig) -> Result<Self, DetectorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build one of the built-in presets by case-insensitive name.
    pub fn by_name(name: &str) -> Result<Self, DetectorError> {
        let config =
            presets::by_name(name).ok_or_else(|| DetectorError::UnknownPreset(name.to_string()))?;
        Self::new(config)
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Short label of the orbit model.
    pub fn orbit_model(&self) -> &'static str {
        match self.config.orbit {
            OrbitConfig::Heliocentric(_) => "heliocentric",
            OrbitConfig::Geocentric(_) => "geocentric",
        }
    }

    /// Instrument noise PSD at `frequency_hz` (> 0).
    pub fn psd(&self, frequency_hz: f64) -> PsdPair {
        gws_noise::instrument_noise(&self.config.noise, frequency_hz)
    }

    /// Spacecraft positions at `time_s`.
    pub fn positions(&self, time_s: f64) -> SpacecraftPositions {
        gws_orbits::spacecraft_positions(&self.config.orbit, time_s)
    }

    /// Arm length the noise budget assumes (m).
    pub fn nominal_arm_length(&self) -> f64 {
        self.config.noise.arm_length_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_preset_is_reported() {
        match Detector::by_name("Taiji") {
            Err(DetectorError::UnknownPreset(name)) => assert_eq!(name, "Taiji"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn invalid_constants_are_rejected() {
        let mut cfg = presets::lisa();
        cfg.noise.transfer_frequency_hz = f64::NAN;
        assert!(matches!(
            Detector::new(cfg),
            Err(DetectorError::Config(_))
        ));
    }

    #[test]
    fn orbit_model_labels() {
        assert_eq!(Detector::by_name("lisa").unwrap().orbit_model(), "heliocentric");
        assert_eq!(Detector::by_name("TIANQIN").unwrap().orbit_model(), "geocentric");
    }
}
