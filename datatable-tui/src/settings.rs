//! User settings, read from a JSON file in the config directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use datatable_lib::edit::AbandonPolicy;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

/// Every field falls back to its default when absent from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rows per page.
    pub page_size: usize,
    /// What clicking another cell does to an unfinished edit.
    pub abandon_policy: AbandonPolicy,
    /// Write committed edits back into the loaded rows.
    pub apply_edits: bool,
    /// One of off, error, warn, info, debug, trace.
    pub log_level: String,
    /// Dataset to load instead of the bundled sample.
    pub data_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: 10,
            abandon_policy: AbandonPolicy::Discard,
            apply_edits: false,
            log_level: "debug".to_string(),
            data_file: None,
        }
    }
}

impl Settings {
    /// Load from the platform config directory.
    pub fn load_default() -> Result<Self, SettingsError> {
        match paths::settings_file() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.level_filter()?;
        Ok(settings)
    }

    /// Parsed log level.
    pub fn level_filter(&self) -> Result<LevelFilter, SettingsError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| SettingsError::LogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = write_temp(
            "partial-settings.json",
            r#"{"abandon_policy": "auto_commit", "page_size": 5}"#,
        );
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.abandon_policy, AbandonPolicy::AutoCommit);
        assert_eq!(settings.page_size, 5);
        assert!(!settings.apply_edits);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = write_temp("bad-settings.json", "{ page_size: ");
        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::Parse { .. })
        ));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_unknown_log_level() {
        let path = write_temp("level-settings.json", r#"{"log_level": "loud"}"#);
        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::LogLevel(level)) if level == "loud"
        ));
        fs::remove_file(path).unwrap();
    }
}
