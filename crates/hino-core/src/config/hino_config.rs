//! Top-level Hino configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::DetectionConfig;
use crate::constants::{CONFIG_FILE_NAME, MIN_QUANTILES, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`HINO_*`)
/// 3. Project config (`hino.toml` in project root)
/// 4. User config (`~/.hino/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct HinoConfig {
    pub detection: DetectionConfig,
}

/// Override values that take precedence over every file and env layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub n_quantiles: Option<i64>,
    pub limit: Option<i64>,
    pub max_outlier_fraction: Option<f64>,
    pub parallel: Option<bool>,
}

impl HinoConfig {
    /// Load configuration with layered resolution.
    ///
    /// A missing project or user file is not an error. An unreadable user
    /// file is skipped; invalid TOML in either file is.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): programmatic overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
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
    pub fn validate(config: &HinoConfig) -> Result<(), ConfigError> {
        let detection = &config.detection;
        if let Some(n) = detection.n_quantiles {
            if n < MIN_QUANTILES {
                return Err(ConfigError::ValidationFailed {
                    field: "detection.n_quantiles".to_string(),
                    message: format!("must be at least {MIN_QUANTILES}, got {n}"),
                });
            }
        }
        if let Some(limit) = detection.limit {
            if limit < 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "detection.limit".to_string(),
                    message: format!("must be greater than or equal to 0, got {limit}"),
                });
            }
        }
        if let Some(fraction) = detection.max_outlier_fraction {
            if !(fraction > 0.0 && fraction < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "detection.max_outlier_fraction".to_string(),
                    message: format!("must lie in ]0.0; 1.0[, got {fraction}"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.hino/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut HinoConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: HinoConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut HinoConfig, other: &HinoConfig) {
        let (base, other) = (&mut base.detection, &other.detection);
        if other.n_quantiles.is_some() {
            base.n_quantiles = other.n_quantiles;
        }
        if other.limit.is_some() {
            base.limit = other.limit;
        }
        if other.max_outlier_fraction.is_some() {
            base.max_outlier_fraction = other.max_outlier_fraction;
        }
        if other.parallel.is_some() {
            base.parallel = other.parallel;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `HINO_DETECTION_N_QUANTILES`, `HINO_DETECTION_LIMIT`, etc.
    fn apply_env_overrides(config: &mut HinoConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_value::<i64>("HINO_DETECTION_N_QUANTILES")? {
            config.detection.n_quantiles = Some(v);
        }
        if let Some(v) = env_value::<i64>("HINO_DETECTION_LIMIT")? {
            config.detection.limit = Some(v);
        }
        if let Some(v) = env_value::<f64>("HINO_DETECTION_MAX_OUTLIER_FRACTION")? {
            config.detection.max_outlier_fraction = Some(v);
        }
        if let Some(v) = env_value::<bool>("HINO_DETECTION_PARALLEL")? {
            config.detection.parallel = Some(v);
        }
        Ok(())
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(config: &mut HinoConfig, overrides: &ConfigOverrides) {
        let detection = &mut config.detection;
        if let Some(v) = overrides.n_quantiles {
            detection.n_quantiles = Some(v);
        }
        if let Some(v) = overrides.limit {
            detection.limit = Some(v);
        }
        if let Some(v) = overrides.max_outlier_fraction {
            detection.max_outlier_fraction = Some(v);
        }
        if let Some(v) = overrides.parallel {
            detection.parallel = Some(v);
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

/// Reads and parses an environment variable. Unset is `None`; a value that
/// does not parse is an `InvalidValue` error.
fn env_value<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                field: key.to_string(),
                message: format!("cannot parse {raw:?}"),
            }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
