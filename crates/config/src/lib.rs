//! Detector constant sets and their loaders.
//!
//! Every physical or mission parameter consumed by the noise and orbit models lives in
//! one of the structs below. A [`DetectorConfig`] is built once (from a preset or a
//! catalog file) and then only ever read.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod presets;

/// Red (low-frequency) acceleration noise correction parameters.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct RedNoiseConfig {
    #[serde(default = "default_red_scale")]
    pub scale: f64,
    /// Knee of the steep `f^-10` branch (Hz).
    #[serde(default = "default_steep_knee")]
    pub steep_knee_hz: f64,
    /// Knee of the `f^-2` branch (Hz).
    #[serde(default = "default_knee")]
    pub knee_hz: f64,
}

impl Default for RedNoiseConfig {
    fn default() -> Self {
        Self {
            scale: default_red_scale(),
            steep_knee_hz: default_steep_knee(),
            knee_hz: default_knee(),
        }
    }
}

fn default_red_scale() -> f64 {
    16.0
}

fn default_steep_knee() -> f64 {
    2.0e-5
}

fn default_knee() -> f64 {
    1.0e-4
}

fn default_local_noise() -> f64 {
    2.89e-24
}

/// Instrument noise budget of a three-arm interferometric constellation.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct NoiseConfig {
    pub arm_length_m: f64,
    /// Transfer frequency `c / (2πL)` (Hz).
    pub transfer_frequency_hz: f64,
    /// Position (optical metrology) noise level.
    pub position_noise: f64,
    /// Acceleration noise level.
    pub acceleration_noise: f64,
    /// Frequency-independent local noise floor.
    #[serde(default = "default_local_noise")]
    pub local_noise: f64,
    #[serde(default)]
    pub red_noise: RedNoiseConfig,
}

/// Constellation trailing the Earth on a heliocentric orbit.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct HeliocentricOrbitConfig {
    /// Orbital frequency of the constellation guiding centre (Hz, one cycle per year).
    pub orbital_frequency_hz: f64,
    pub semi_major_axis_m: f64,
    pub eccentricity: f64,
    /// Initial orbital phase of the guiding centre (`kappa`).
    #[serde(default)]
    pub initial_phase_rad: f64,
    /// Initial orientation of the triangle in its own plane (`lambda`).
    #[serde(default)]
    pub constellation_phase_rad: f64,
}

/// Keplerian parameters of the Earth orbit a geocentric constellation rides on.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct EarthOrbitConfig {
    pub angular_rate_rad_s: f64,
    pub semi_major_axis_m: f64,
    pub eccentricity: f64,
    /// Longitude of perihelion (rad).
    pub perihelion_rad: f64,
    /// Reference phase shared with the heliocentric model (`kappa`).
    #[serde(default)]
    pub initial_phase_rad: f64,
}

/// Rigid triangle on a circular orbit around the Earth.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct GeocentricOrbitConfig {
    pub earth: EarthOrbitConfig,
    /// Distance of each spacecraft from the Earth (m).
    pub radius_m: f64,
    pub angular_rate_rad_s: f64,
    #[serde(default)]
    pub constellation_phase_rad: f64,
    /// Polar angle of the orbital plane normal (rad).
    pub normal_theta_rad: f64,
    /// Azimuth of the orbital plane normal (rad).
    pub normal_phi_rad: f64,
}

/// Orbit geometry of a detector.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(tag = "type")]
pub enum OrbitConfig {
    #[serde(rename = "heliocentric")]
    Heliocentric(HeliocentricOrbitConfig),
    #[serde(rename = "geocentric")]
    Geocentric(GeocentricOrbitConfig),
}

/// Full constant set of one detector design.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DetectorConfig {
    pub name: String,
    pub noise: NoiseConfig,
    pub orbit: OrbitConfig,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("detector `{detector}`: {field} = {value} is out of range")]
    Invalid {
        detector: String,
        field: &'static str,
        value: f64,
    },
}

impl DetectorConfig {
    /// Check that every physical scale is finite and positive and every eccentricity
    /// lies in `[0, 1)`. Phase angles may take any finite value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = &self.noise;
        self.positive("noise.arm_length_m", n.arm_length_m)?;
        self.positive("noise.transfer_frequency_hz", n.transfer_frequency_hz)?;
        self.positive("noise.position_noise", n.position_noise)?;
        self.positive("noise.acceleration_noise", n.acceleration_noise)?;
        self.non_negative("noise.local_noise", n.local_noise)?;
        self.non_negative("noise.red_noise.scale", n.red_noise.scale)?;
        self.non_negative("noise.red_noise.steep_knee_hz", n.red_noise.steep_knee_hz)?;
        self.non_negative("noise.red_noise.knee_hz", n.red_noise.knee_hz)?;

        match &self.orbit {
            OrbitConfig::Heliocentric(o) => {
                self.positive("orbit.orbital_frequency_hz", o.orbital_frequency_hz)?;
                self.positive("orbit.semi_major_axis_m", o.semi_major_axis_m)?;
                self.eccentricity("orbit.eccentricity", o.eccentricity)?;
                self.finite("orbit.initial_phase_rad", o.initial_phase_rad)?;
                self.finite("orbit.constellation_phase_rad", o.constellation_phase_rad)?;
            }
            OrbitConfig::Geocentric(o) => {
                self.positive("orbit.earth.angular_rate_rad_s", o.earth.angular_rate_rad_s)?;
                self.positive("orbit.earth.semi_major_axis_m", o.earth.semi_major_axis_m)?;
                self.eccentricity("orbit.earth.eccentricity", o.earth.eccentricity)?;
                self.finite("orbit.earth.perihelion_rad", o.earth.perihelion_rad)?;
                self.finite("orbit.earth.initial_phase_rad", o.earth.initial_phase_rad)?;
                self.positive("orbit.radius_m", o.radius_m)?;
                self.positive("orbit.angular_rate_rad_s", o.angular_rate_rad_s)?;
                self.finite("orbit.constellation_phase_rad", o.constellation_phase_rad)?;
                self.finite("orbit.normal_theta_rad", o.normal_theta_rad)?;
                self.finite("orbit.normal_phi_rad", o.normal_phi_rad)?;
            }
        }
        Ok(())
    }

    fn invalid(&self, field: &'static str, value: f64) -> ConfigError {
        ConfigError::Invalid {
            detector: self.name.clone(),
            field,
            value,
        }
    }

    fn finite(&self, field: &'static str, value: f64) -> Result<(), ConfigError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(self.invalid(field, value))
        }
    }

    fn positive(&self, field: &'static str, value: f64) -> Result<(), ConfigError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(self.invalid(field, value))
        }
    }

    fn non_negative(&self, field: &'static str, value: f64) -> Result<(), ConfigError> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(self.invalid(field, value))
        }
    }

    fn eccentricity(&self, field: &'static str, value: f64) -> Result<(), ConfigError> {
        if (0.0..1.0).contains(&value) {
            Ok(())
        } else {
            Err(self.invalid(field, value))
        }
    }
}

/// Load detector constant sets from a YAML list, a single TOML file, or a directory of
/// TOML files. Every record is validated before it is returned.
pub fn load_detectors<P: AsRef<Path>>(path: P) -> Result<Vec<DetectorConfig>, ConfigError> {
    let path = path.as_ref();
    let detectors: Vec<DetectorConfig> = load_records(path)?;
    for detector in &detectors {
        detector.validate()?;
    }
    if detectors.is_empty() {
        log::warn!("no detector definitions found in {}", path.display());
    } else {
        log::debug!(
            "loaded {} detector definition(s) from {}",
            detectors.len(),
            path.display()
        );
    }
    Ok(detectors)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
