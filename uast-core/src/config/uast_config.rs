//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DriverConfig, LogConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`UAST_*`)
/// 3. Project config (`uast.toml` in the working directory)
/// 4. User config (`~/.uast/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UastConfig {
    pub driver: DriverConfig,
    pub log: LogConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub max_content_size: Option<u64>,
    pub log_filter: Option<String>,
}

impl UastConfig {
    /// Load configuration with layered resolution rooted at `root`.
    ///
    /// An explicit `config_path` in the overrides replaces the project file
    /// and must exist.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        match cli_overrides.and_then(|cli| cli.config_path.as_deref()) {
            Some(explicit) => Self::merge_toml_file(&mut config, explicit)?,
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &UastConfig) -> Result<(), ConfigError> {
        if config.driver.max_content_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "driver.max_content_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref language) = config.driver.language {
            if language.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "driver.language".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|h| h.join(".uast").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut UastConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: UastConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `Some` values in `other` win.
    fn merge(base: &mut UastConfig, other: &UastConfig) {
        if other.driver.max_content_size.is_some() {
            base.driver.max_content_size = other.driver.max_content_size;
        }
        if other.driver.language.is_some() {
            base.driver.language = other.driver.language.clone();
        }
        if other.log.filter.is_some() {
            base.log.filter = other.log.filter.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `UAST_MAX_CONTENT_SIZE`, `UAST_LANGUAGE`, `UAST_LOG_FILTER`.
    fn apply_env_overrides(config: &mut UastConfig) {
        if let Ok(val) = std::env::var("UAST_MAX_CONTENT_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.driver.max_content_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("UAST_LANGUAGE") {
            config.driver.language = Some(val);
        }
        if let Ok(val) = std::env::var("UAST_LOG_FILTER") {
            config.log.filter = Some(val);
        }
    }

    fn apply_cli_overrides(config: &mut UastConfig, cli: &CliOverrides) {
        if let Some(v) = cli.max_content_size {
            config.driver.max_content_size = Some(v);
        }
        if let Some(ref v) = cli.log_filter {
            config.log.filter = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
