use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::MetarError;

/// Dotfile name, relative to the user's home directory.
pub const DOTFILE_NAME: &str = ".metar.json";

/// Station list stored on disk.
///
/// Example `~/.metar.json`:
/// {"stations": ["KJFK", "KEWR"]}
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub stations: Vec<String>,
}

impl Config {
    pub fn new(stations: Vec<String>) -> Self {
        Self { stations }
    }

    /// Load the dotfile at `path`, or an empty default if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self, MetarError> {
        if !path.exists() {
            log::debug!("no config file at {}", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| config_error("Failed to read", path, e))?;

        serde_json::from_str(&contents).map_err(|e| config_error("Failed to parse", path, e))
    }

    /// Write the dotfile, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), MetarError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| config_error("Failed to create directory for", path, e))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| config_error("Failed to serialize", path, e))?;

        fs::write(path, json).map_err(|e| config_error("Failed to write", path, e))?;

        log::info!("saved {} station(s) to {}", self.stations.len(), path.display());
        Ok(())
    }

    /// Path to the dotfile: `$HOME/.metar.json`.
    pub fn config_file_path() -> Result<PathBuf, MetarError> {
        let dirs = BaseDirs::new().ok_or_else(|| MetarError::Config {
            action: "Could not locate",
            path: PathBuf::from(DOTFILE_NAME),
            message: "no home directory for the current user".into(),
        })?;

        Ok(dirs.home_dir().join(DOTFILE_NAME))
    }

    /// Stations from this config, or a usage error pointing at `path` when there are none.
    pub fn stations_or_usage(&self, path: &Path) -> Result<&[String], MetarError> {
        if self.stations.iter().all(|s| s.trim().is_empty()) {
            return Err(MetarError::usage_with_hint(format!(
                "no stations configured in {}; run `metar --save ICAO1 ICAO2 ...` first.",
                path.display()
            )));
        }
        Ok(&self.stations)
    }
}

fn config_error(action: &'static str, path: &Path, err: impl std::fmt::Display) -> MetarError {
    MetarError::Config { action, path: path.to_path_buf(), message: err.to_string() }
}
