// Runtime configuration.
// Everything is read from environment variables; `.env` loading happens in the binary.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use med_guard_data::external::openfda::DEFAULT_OPENFDA_BASE_URL;
use med_guard_data::external::wikipedia::DEFAULT_WIKIPEDIA_BASE_URL;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Default deployment environment name
pub const DEFAULT_APP_ENV: &str = "development";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Artificial delays standing in for real processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Metrics "save"
    pub metrics_save: Duration,
    /// Pill search by criteria
    pub pill_search: Duration,
    /// Pill photo analysis
    pub pill_image_analysis: Duration,
    /// Counterfeit scan
    pub authenticity_scan: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            metrics_save: Duration::from_millis(1500),
            pill_search: Duration::from_millis(1500),
            pill_image_analysis: Duration::from_millis(2000),
            authenticity_scan: Duration::from_millis(2000),
        }
    }
}

impl LatencyProfile {
    /// No delays at all
    pub fn instant() -> Self {
        Self {
            metrics_save: Duration::ZERO,
            pill_search: Duration::ZERO,
            pill_image_analysis: Duration::ZERO,
            authenticity_scan: Duration::ZERO,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub app_env: String,
    pub openfda_base_url: String,
    pub wikipedia_base_url: String,
    pub latency: LatencyProfile,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            app_env: DEFAULT_APP_ENV.to_string(),
            openfda_base_url: DEFAULT_OPENFDA_BASE_URL.to_string(),
            wikipedia_base_url: DEFAULT_WIKIPEDIA_BASE_URL.to_string(),
            latency: LatencyProfile::default(),
        }
    }
}

impl AppConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: port.clone(),
            })?;
        }

        if let Some(env) = lookup("APP_ENV").filter(|v| !v.trim().is_empty()) {
            config.app_env = env;
        }

        if let Some(url) = lookup("OPENFDA_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.openfda_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(url) = lookup("WIKIPEDIA_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.wikipedia_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(flag) = lookup("SIMULATED_LATENCY") {
            config.latency = match flag.trim().to_lowercase().as_str() {
                "on" | "true" | "1" => LatencyProfile::default(),
                "off" | "false" | "0" => LatencyProfile::instant(),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "SIMULATED_LATENCY",
                        value: flag,
                    })
                }
            };
        }

        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Defaults with every simulated delay switched off
    pub fn for_tests() -> Self {
        Self {
            latency: LatencyProfile::instant(),
            ..Self::default()
        }
    }
}
