//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("ui.tick_rate_ms must be greater than zero")]
    ZeroTickRate,
    #[error("logging.level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        self.logging.level()?;
        Ok(())
    }
}

/// UI refresh and interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// How long a status bar notice stays visible.
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            notice_secs: default_notice_secs(),
            mouse: true,
        }
    }
}

/// Diagnostic log settings. The terminal is owned by the UI, so log lines
/// go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.level.clone()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tick_rate() -> u64 {
    250
}
fn default_notice_secs() -> u64 {
    3
}
fn default_log_dir() -> String {
    "~/.local/share/issue-tracker/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.tick_rate_ms, 250);
        assert_eq!(cfg.ui.notice_secs, 3);
        assert!(cfg.ui.mouse);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            mouse = false

            [logging]
            enabled = true
            level = "debug"
            "#,
        )
        .unwrap();
        assert!(!cfg.ui.mouse);
        assert_eq!(cfg.ui.tick_rate_ms, 250);
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.level().unwrap(), tracing::Level::DEBUG);
        assert_eq!(cfg.logging.log_dir, "~/.local/share/issue-tracker/logs");
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let cfg: AppConfig = toml::from_str("[ui]\ntick_rate_ms = 0\n").unwrap();
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTickRate));
    }

    #[test]
    fn test_unknown_level_rejected() {
        let cfg: AppConfig = toml::from_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::UnknownLogLevel("loud".into()))
        );
    }
}
