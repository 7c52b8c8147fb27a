//! Configuration loading for the Campus TUI.
//!
//! All fields are required unless explicitly marked optional. No defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub refresh_interval_ms: u64,
    /// Where the last active page is remembered between runs.
    pub persistence_path: PathBuf,
    /// Stored bearer token and user record for admin actions.
    pub auth_path: PathBuf,
    /// Session marker consulted once at startup; absent means fresh session.
    pub session_marker_path: PathBuf,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or CAMPUS_TUI_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TuiConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.persistence_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "persistence_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.auth_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "auth_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.session_marker_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "session_marker_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.to_ascii_lowercase() != "campus" {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'campus' is supported".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("CAMPUS_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> TuiConfig {
        TuiConfig {
            api_base_url: "http://localhost:8080".to_string(),
            request_timeout_ms: 5_000,
            refresh_interval_ms: 2_000,
            persistence_path: "tmp/campus-tui.json".into(),
            auth_path: "tmp/campus-auth.json".into(),
            session_marker_path: "tmp/campus-session".into(),
            theme: ThemeConfig {
                name: "campus".to_string(),
            },
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn empty_base_url_rejected() {
        let mut config = base_config();
        config.api_base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let mut config = base_config();
        config.request_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_theme_rejected() {
        let mut config = base_config();
        config.theme.name = "synthwave".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_toml() {
        let toml_src = r#"
            api_base_url = "http://localhost:8080"
            request_timeout_ms = 5000
            refresh_interval_ms = 2000
            persistence_path = "tmp/ui.json"
            auth_path = "tmp/auth.json"
            session_marker_path = "tmp/session"

            [theme]
            name = "campus"
        "#;
        let config: TuiConfig = toml::from_str(toml_src).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.refresh_interval_ms, 2000);
    }
}
