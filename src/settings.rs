//! Sketch settings
//!
//! Stored as JSON on disk. Every field has a default, so a partial file only
//! overrides what it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::sim::SimParams;

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("settings io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Sketch settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation tunables
    pub sim: SimParams,
    /// Start a new round once every ball and explosion is gone
    pub auto_restart: bool,
    /// Fixed seed for reproducible runs; `None` lets the host pick one
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sim: SimParams::default(),
            auto_restart: true,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> SettingsResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Load from `path`, falling back to defaults if it is missing or broken
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Cascade;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("chainreaction-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "sim": { "ball_count": 5, "cascade": "next_step" } }"#)
                .unwrap();
        assert_eq!(settings.sim.ball_count, 5);
        assert_eq!(settings.sim.cascade, Cascade::NextStep);
        assert_eq!(settings.sim.ball_radius, SimParams::default().ball_radius);
        assert!(settings.auto_restart);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save.json");
        let settings = Settings {
            auto_restart: false,
            seed: Some(1234),
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load(temp_path("missing.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(err.to_string().contains("settings io error"));
    }

    #[test]
    fn test_broken_file_falls_back() {
        let path = temp_path("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Settings::load(&path), Err(SettingsError::Parse(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
        let _ = std::fs::remove_file(&path);
    }
}
