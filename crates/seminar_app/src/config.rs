use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use engine_logging::LogDestination;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const DEFAULT_CONFIG_FILE: &str = "seminar_app.ron";
pub const TASKS_FILENAME: &str = ".seminar_tasks.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

/// Settings read from `seminar_app.ron`; every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: LogLevel,
    pub log_destination: LogTarget,
    pub log_file: PathBuf,
    /// Directory holding the persisted task list.
    pub state_dir: PathBuf,
    /// Directory with saved detail pages named `<seminar_id>.html`.
    pub pages_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_destination: LogTarget::Terminal,
            log_file: PathBuf::from("./seminar_app.log"),
            state_dir: PathBuf::from("."),
            pages_dir: PathBuf::from("pages"),
        }
    }
}

impl AppConfig {
    /// Loads `explicit` if given (it must exist), else the default file when
    /// present, else built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|err| AppError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        ron::from_str(&content).map_err(|err| AppError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.state_dir.join(TASKS_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"(log_level: debug, pages_dir: "saved")"#).unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.pages_dir, PathBuf::from("saved"));
        assert_eq!(config.log_destination, LogTarget::Terminal);
        assert_eq!(config.tasks_path(), PathBuf::from(".").join(TASKS_FILENAME));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "(log_level: loud)").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("nope.ron"))).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }
}
