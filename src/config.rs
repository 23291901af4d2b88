//! User configuration stored as TOML in the platform config directory.

use crate::calculator::AngleMode;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const APP_DIR: &str = "scipro";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available on this platform")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Persistent settings. Missing keys fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Angle mode a new session starts in.
    pub angle_mode: AngleMode,
    /// Ring the terminal bell on key presses.
    pub sound: bool,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Degrees,
            sound: true,
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Default location: `<config_dir>/scipro/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config at `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the config to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "saved config");
        Ok(())
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Swatch;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"
            angle_mode = "rad"

            [theme]
            equals = "blue"
            "#,
        )
        .unwrap();
        assert_eq!(config.angle_mode, AngleMode::Radians);
        assert!(config.sound);
        assert_eq!(config.theme.equals, Swatch::Blue);
        assert_eq!(config.theme.numbers, Swatch::Slate);
    }

    #[test]
    fn test_invalid_swatch_is_rejected() {
        assert!(Config::from_toml("[theme]\nnumbers = \"teal\"").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("scipro-config-test-{}", std::process::id()))
            .join(CONFIG_FILE);

        let mut config = Config::default();
        config.sound = false;
        config.theme.clear = Swatch::Indigo;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let blocker = std::env::temp_dir()
            .join(format!("scipro-config-blocker-{}", std::process::id()));
        fs::write(&blocker, "not a directory").unwrap();

        let result = Config::default().save(&blocker.join(CONFIG_FILE));
        assert!(matches!(result, Err(ConfigError::Io { .. })));

        let _ = fs::remove_file(&blocker);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("scipro-does-not-exist").join(CONFIG_FILE);
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }
}
