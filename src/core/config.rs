//! Configuration management for Riverbed
//!
//! Settings come from a TOML file, then `RIVERBED_*` environment variables,
//! then validation. Every section has defaults, so a file only needs the keys
//! it changes.

use std::path::Path;

use riverbed_core::constants::DEFAULT_CHAIN_DEPTH_WARNING;
use riverbed_core::core::FoldSettings;
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Builder configuration
    pub builder: BuilderConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (pretty, compact, json)
    pub format: String,
}

/// Builder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Chain depth past which an immutable replay logs a warning (0 = never)
    pub chain_depth_warning: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            chain_depth_warning: DEFAULT_CHAIN_DEPTH_WARNING,
        }
    }
}

impl BuilderConfig {
    /// Settings to publish to the builder core
    pub fn fold_settings(&self) -> FoldSettings {
        FoldSettings {
            chain_depth_warning: self.chain_depth_warning,
        }
    }
}

impl Config {
    /// Load configuration from an optional file, then environment overrides,
    /// then validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))
    }

    /// Apply `RIVERBED_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(level) = lookup("RIVERBED_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = lookup("RIVERBED_LOG_FORMAT") {
            self.logging.format = format;
        }

        if let Some(depth) = lookup("RIVERBED_CHAIN_DEPTH_WARNING") {
            self.builder.chain_depth_warning = depth
                .parse()
                .map_err(|e| Error::config(format!("Invalid chain depth warning: {}", e)))?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(Error::config(format!("Invalid log level: {}", other))),
        }

        match self.logging.format.as_str() {
            "pretty" | "compact" | "json" => {}
            other => return Err(Error::config(format!("Invalid log format: {}", other))),
        }

        Ok(())
    }
}

/// Load configuration from file or use defaults
pub fn load_config_or_default(path: Option<&str>) -> Config {
    match path {
        Some(path) => match Config::from_file(path).and_then(|config| {
            config.validate()?;
            Ok(config)
        }) {
            Ok(config) => {
                tracing::info!("Loaded configuration from: {}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}. Using defaults.", path, e);
                Config::default()
            }
        },
        None => {
            tracing::info!("No config file specified, using defaults");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.builder.chain_depth_warning, DEFAULT_CHAIN_DEPTH_WARNING);
        assert_eq!(config.builder.fold_settings(), FoldSettings::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: Config = toml::from_str("[builder]\nchain_depth_warning = 5\n").unwrap();
        assert_eq!(config.builder.chain_depth_warning, 5);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup(&[
                ("RIVERBED_LOG_LEVEL", "debug"),
                ("RIVERBED_CHAIN_DEPTH_WARNING", "42"),
            ]))
            .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.builder.chain_depth_warning, 42);
    }

    #[test]
    fn malformed_override_is_a_config_error() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(lookup(&[("RIVERBED_CHAIN_DEPTH_WARNING", "many")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn validation_rejects_unknown_level_and_format() {
        let mut config = Config::default();
        config.logging.level = "loud".into();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.format = "xml".into();
        assert!(config.validate().is_err());
    }
}
