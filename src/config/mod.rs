//! Configuration module for Sahayak
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "SAHAYAK_SETTINGS_PATH";

/// Load settings from an explicit path, the environment, or the default locations.
///
/// An explicit path must exist. Otherwise the first existing file among
/// `$SAHAYAK_SETTINGS_PATH`, `settings.yml`, `config/settings.yml`,
/// `/etc/sahayak/settings.yml` and the user config directory is used, falling
/// back to defaults. Environment overrides are applied in every case.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        info!("Loading settings from: {}", path.display());
        let mut settings = Settings::from_file(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        settings.merge_env();
        return Ok(settings);
    }

    let mut candidates = Vec::new();
    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        candidates.push(PathBuf::from(path));
    }
    candidates.extend(default_paths());

    for path in candidates.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)
                .with_context(|| format!("failed to read settings from {}", path.display()))?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/sahayak/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("sahayak/settings.yml"));
    }
    paths
}
