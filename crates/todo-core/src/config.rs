//! Configuration structures for the todo tool.
//!
//! - [`StoreConfig`] - Where the task file lives
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`]; a JSON file only needs to
//! name the values it changes.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::store::DEFAULT_TASKS_PATH;

/// Configuration for task persistence.
///
/// # Examples
///
/// ```
/// use todo_core::StoreConfig;
///
/// let config = StoreConfig::default();
/// assert_eq!(config.path, "data/tasks.csv");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the task file, relative to the working directory unless absolute.
    pub path: Utf8PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: Utf8PathBuf::from(DEFAULT_TASKS_PATH),
        }
    }
}

/// Root configuration for the todo tool.
///
/// # Examples
///
/// ```
/// use todo_core::Config;
///
/// let config: Config = serde_json::from_str(r#"{"store": {"path": "work.csv"}}"#).unwrap();
/// assert_eq!(config.store.path, "work.csv");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Persistence configuration.
    pub store: StoreConfig,
}

impl Config {
    /// Reads and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Parse`] if it is not valid JSON for this structure, and
    /// [`ConfigError::InvalidOption`] if a value is unusable.
    pub fn from_json_file(path: impl AsRef<Utf8Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every option holds a usable value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] naming the first bad option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.path.as_str().trim().is_empty() {
            return Err(ConfigError::InvalidOption {
                option: "store.path".to_owned(),
                reason: "must not be empty".to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().join("todo.json")).unwrap();
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_store_config_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.path, Utf8PathBuf::from("data/tasks.csv"));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.store.path, "data/tasks.csv");

        let config: Config = serde_json::from_str(r#"{"store": {}}"#).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"store": {"path": "/srv/todo/tasks.csv"}}"#);
        let config = Config::from_json_file(&path).unwrap();
        assert_eq!(config.store.path, "/srv/todo/tasks.csv");
    }

    #[test]
    fn test_from_json_file_rejects_empty_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"store": {"path": "  "}}"#);
        let err = Config::from_json_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption { .. }));
    }

    #[test]
    fn test_from_json_file_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{not json");
        let err = Config::from_json_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = Config::from_json_file("/definitely/not/here/todo.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
