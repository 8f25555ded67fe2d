//! Configuration for performance statistics.
//!
//! Policy knobs (periods per year, rolling window, warm-up, drawdown count)
//! are loaded from YAML with environment variable interpolation and
//! validated before use. Every field has a documented default, so an empty
//! document is a valid configuration.
//!
//! # Usage
//!
//! ```rust,ignore
//! use performance_stats::config::load_config;
//!
//! let config = load_config(Some("stats.yaml"))?;
//! let evaluator = performance_stats::rolling::RollingEvaluator::new(config.rolling_config());
//! ```
//!
//! ```yaml
//! metrics:
//!   yearly_days: ${YEARLY_DAYS:-252}
//! rolling:
//!   window_days: 252
//!   min_periods: 100
//! drawdown:
//!   top: 10
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::drawdown::{DEFAULT_TOP, DrawdownConfig};
use crate::metrics::{DEFAULT_YEARLY_DAYS, MetricsOptions};
use crate::rolling::RollingConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Point-in-time metrics configuration.
    #[serde(default)]
    pub metrics: MetricsSection,
    /// Rolling evaluation configuration.
    #[serde(default)]
    pub rolling: RollingSection,
    /// Drawdown extraction configuration.
    #[serde(default)]
    pub drawdown: DrawdownSection,
}

/// Metrics configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSection {
    /// Trading periods per year.
    #[serde(default = "default_yearly_days")]
    pub yearly_days: u32,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            yearly_days: default_yearly_days(),
        }
    }
}

const fn default_yearly_days() -> u32 {
    DEFAULT_YEARLY_DAYS
}

/// Rolling evaluation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingSection {
    /// Window width in calendar days.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    /// Warm-up samples before the first window.
    #[serde(default = "default_min_periods")]
    pub min_periods: usize,
    /// Periods per year; inferred from the series dates when absent.
    #[serde(default)]
    pub yearly_days: Option<u32>,
    /// Whether windows may be evaluated in parallel.
    #[serde(default = "default_true")]
    pub parallel: bool,
    /// Window count at which evaluation goes parallel.
    #[serde(default = "default_min_parallel_windows")]
    pub min_parallel_windows: usize,
}

impl Default for RollingSection {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            min_periods: default_min_periods(),
            yearly_days: None,
            parallel: default_true(),
            min_parallel_windows: default_min_parallel_windows(),
        }
    }
}

const fn default_window_days() -> u32 {
    252
}
const fn default_min_periods() -> usize {
    100
}
const fn default_true() -> bool {
    true
}
const fn default_min_parallel_windows() -> usize {
    64
}

/// Drawdown extraction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawdownSection {
    /// Maximum number of episodes to extract.
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Default for DrawdownSection {
    fn default() -> Self {
        Self { top: default_top() }
    }
}

const fn default_top() -> usize {
    DEFAULT_TOP
}

impl StatsConfig {
    /// Options for the point-in-time metrics engine.
    #[must_use]
    pub const fn metrics_options(&self) -> MetricsOptions {
        MetricsOptions::with_yearly_days(self.metrics.yearly_days)
    }

    /// Configuration for the rolling evaluator.
    #[must_use]
    pub const fn rolling_config(&self) -> RollingConfig {
        RollingConfig {
            window_days: self.rolling.window_days,
            min_periods: self.rolling.min_periods,
            yearly_days: self.rolling.yearly_days,
            parallel: self.rolling.parallel,
            min_parallel_windows: self.rolling.min_parallel_windows,
        }
    }

    /// Configuration for the drawdown extractor.
    #[must_use]
    pub const fn drawdown_config(&self) -> DrawdownConfig {
        DrawdownConfig {
            top: self.drawdown.top,
        }
    }
}

/// Load configuration from a YAML file.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed or validated.
pub fn load_config(path: Option<&str>) -> Result<StatsConfig, ConfigError> {
    let path = path.unwrap_or("stats.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<StatsConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: StatsConfig = if interpolated.trim().is_empty() {
        StatsConfig::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is a compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &StatsConfig) -> Result<(), ConfigError> {
    if config.metrics.yearly_days == 0 {
        return Err(ConfigError::ValidationError(
            "metrics.yearly_days must be positive".to_string(),
        ));
    }

    if config.rolling.window_days == 0 {
        return Err(ConfigError::ValidationError(
            "rolling.window_days must be positive".to_string(),
        ));
    }

    if config.rolling.yearly_days == Some(0) {
        return Err(ConfigError::ValidationError(
            "rolling.yearly_days must be positive when set".to_string(),
        ));
    }

    if config.rolling.min_parallel_windows == 0 {
        return Err(ConfigError::ValidationError(
            "rolling.min_parallel_windows must be positive".to_string(),
        ));
    }

    if config.drawdown.top == 0 {
        return Err(ConfigError::ValidationError(
            "drawdown.top must be positive".to_string(),
        ));
    }

    Ok(())
}
