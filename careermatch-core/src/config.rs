use crate::error::ConfigError;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

pub const CONFIG_ENV_VAR: &str = "CAREERMATCH_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "careermatch.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_analysis_delay_ms")]
    pub analysis_delay_ms: u64,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_min_width")]
    pub min_width: f32,
    #[serde(default = "default_min_height")]
    pub min_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: default_analysis_delay_ms(),
            log_filter: default_log_filter(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            min_width: default_min_width(),
            min_height: default_min_height(),
        }
    }
}

fn default_analysis_delay_ms() -> u64 {
    2500
}

fn default_log_filter() -> String {
    "careermatch=debug,careermatch_core=debug,gui=debug,analysis_service=debug".to_string()
}

fn default_width() -> f32 {
    1200.0
}

fn default_height() -> f32 {
    800.0
}

fn default_min_width() -> f32 {
    800.0
}

fn default_min_height() -> f32 {
    600.0
}

impl AppConfig {
    /// Reads `$CAREERMATCH_CONFIG` if set, else `careermatch.toml` in the
    /// working directory when present, else falls back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(&fallback)
                } else {
                    debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config = Self::from_toml_str(&raw)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = &self.window;
        for (field, value) in [
            ("window.width", window.width),
            ("window.height", window.height),
            ("window.min_width", window.min_width),
            ("window.min_height", window.min_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                });
            }
        }

        if window.min_width > window.width || window.min_height > window.height {
            return Err(ConfigError::ValidationFailed {
                reason: "minimum window size exceeds the initial size".to_string(),
            });
        }

        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_filter".to_string(),
                value: self.log_filter.clone(),
            });
        }

        Ok(())
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.analysis_delay(), Duration::from_millis(2500));
    }

    #[test]
    fn partial_override() {
        let config = AppConfig::from_toml_str(
            r#"
            analysis_delay_ms = 100

            [window]
            width = 1000.0
            "#,
        )
        .unwrap();

        assert_eq!(config.analysis_delay_ms, 100);
        assert_eq!(config.window.width, 1000.0);
        assert_eq!(config.window.height, 800.0);
    }

    #[test]
    fn rejects_invalid_window() {
        let err = AppConfig::from_toml_str("[window]\nwidth = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = AppConfig::from_toml_str("[window]\nwidth = 700.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = AppConfig::from_toml_str("analysis_delay_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = AppConfig::from_file(Path::new("/nonexistent/careermatch.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }
}
