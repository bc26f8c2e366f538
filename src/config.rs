/// Service configuration.
///
/// The upstream portal requires a per-account service key, and the fetch and
/// analysis defaults (timeout, row count, horizon) vary by deployment, so all
/// of it is loaded here rather than hardcoded. The service key may come from
/// the config file or from the `AIRKOREA_SERVICE_KEY` environment variable
/// (a `.env` file is honored); the environment wins when both are set.

use serde::Deserialize;
use std::fmt;
use std::fs;

/// Environment variable overriding the configured service key.
pub const SERVICE_KEY_ENV: &str = "AIRKOREA_SERVICE_KEY";

// ---------------------------------------------------------------------------
// Config structure
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// data.go.kr service key, sent as the `serviceKey` query parameter.
    #[serde(default)]
    pub service_key: String,
    /// Upstream request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Rows requested per analysis when the caller does not choose a lookback.
    #[serde(default = "default_rows")]
    pub default_rows: u32,
    /// Forecast steps produced when the caller does not choose a horizon.
    #[serde(default = "default_horizon")]
    pub default_horizon: usize,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_rows() -> u32 {
    24
}

fn default_horizon() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_key: String::new(),
            request_timeout_secs: default_timeout_secs(),
            default_rows: default_rows(),
            default_horizon: default_horizon(),
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Toml(String),
    MissingServiceKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::Toml(msg) => write!(f, "Config parse error: {}", msg),
            ConfigError::MissingServiceKey => write!(
                f,
                "No AirKorea service key: set `service_key` in the config file \
                 or the {} environment variable",
                SERVICE_KEY_ENV
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Toml(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Loads configuration from a TOML file and applies the environment override
/// for the service key.
///
/// Returns `MissingServiceKey` if neither the file nor the environment
/// provides one; every live fetch needs it.
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    let mut config: Config = toml::from_str(&toml)?;

    apply_env_override(&mut config);

    if config.service_key.is_empty() {
        return Err(ConfigError::MissingServiceKey);
    }

    Ok(config)
}

/// Builds a configuration entirely from defaults plus the environment.
///
/// Used by deployments without a config file; still requires the service key
/// to be present in the environment.
pub fn from_env() -> Result<Config, ConfigError> {
    let mut config = Config::default();
    apply_env_override(&mut config);

    if config.service_key.is_empty() {
        return Err(ConfigError::MissingServiceKey);
    }

    Ok(config)
}

fn apply_env_override(config: &mut Config) {
    // Loads a .env file if one exists; already-set variables are untouched.
    let _ = dotenv::dotenv();

    if let Ok(key) = std::env::var(SERVICE_KEY_ENV) {
        if !key.is_empty() {
            config.service_key = key;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
