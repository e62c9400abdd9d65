//! Detector catalogs: built-in presets merged with definitions loaded from disk.

use std::path::Path;

use gws_config::{ConfigError, DetectorConfig, load_detectors, presets};
use thiserror::Error;

use crate::detector::{Detector, DetectorError};

/// Default location of the on-disk detector catalog.
pub const DEFAULT_CATALOG_DIR: &str = "configs/detectors";

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to load detector catalog: {0}")]
    Config(#[from] ConfigError),
    #[error("detector '{0}' not found in catalog")]
    NotFound(String),
    #[error(transparent)]
    Detector(#[from] DetectorError),
}

/// Load a detector catalog from a YAML list, a TOML file, or a directory of TOML files.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<DetectorConfig>, ScenarioError> {
    Ok(load_detectors(path)?)
}

/// Find a detector by case-insensitive name in `catalog`, falling back to the built-in
/// presets.
pub fn find_detector(catalog: &[DetectorConfig], name: &str) -> Result<Detector, ScenarioError> {
    let config = catalog
        .iter()
        .find(|cfg| cfg.name.eq_ignore_ascii_case(name))
        .cloned()
        .or_else(|| presets::by_name(name))
        .ok_or_else(|| ScenarioError::NotFound(name.to_string()))?;
    Ok(Detector::new(config)?)
}

/// Resolve `name` against an optional catalog path. Without a path only presets are
/// searched.
pub fn resolve_detector(catalog: Option<&Path>, name: &str) -> Result<Detector, ScenarioError> {
    let configs = match catalog {
        Some(path) => load_catalog(path)?,
        None => Vec::new(),
    };
    find_detector(&configs, name)
}
