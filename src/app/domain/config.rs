use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app::infrastructure::error::AppError;

const APP_DIR: &str = "eduacessivel";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where preferences are persisted. `None` means the default location.
    #[serde(default)]
    pub preferences_path: Option<PathBuf>,

    /// Audit the page outline for unlabeled content at startup
    #[serde(default)]
    pub audit_on_start: bool,

    /// Delay before a simulated contact-form submission completes
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// Default tracing filter (overridden by `EDUACESSIVEL_LOG`)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_submit_delay_ms() -> u64 {
    1500
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preferences_path: None,
            audit_on_start: false,
            submit_delay_ms: default_submit_delay_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Load config from the default location. See `try_load_from`.
    pub fn try_load() -> Result<Self, AppError> {
        Self::try_load_from(&Self::get_config_path())
    }

    /// Defaults if the file is missing or unreadable; a malformed file is an error
    /// so the caller can report it once logging is up.
    pub fn try_load_from(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            // No config file yet
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Resolved preference store location
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences_path
            .clone()
            .unwrap_or_else(|| app_dir().join("preferences.json"))
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        app_dir().join("config.json")
    }
}

fn app_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.preferences_path, None);
        assert!(!config.audit_on_start);
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.log_filter, "info");
        assert!(config.preferences_path().ends_with("eduacessivel/preferences.json"));
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"audit_on_start": true}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert!(config.audit_on_start);
        assert_eq!(config.submit_delay_ms, 1500);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            preferences_path: Some(dir.path().join("prefs.json")),
            submit_delay_ms: 10,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::try_load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(AppConfig::try_load_from(&path), Err(AppError::Json(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.json");
        assert_eq!(AppConfig::try_load_from(&absent).unwrap(), AppConfig::default());
    }
}
