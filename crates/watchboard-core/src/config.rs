//! Configuration types for watchboard.
//!
//! [`Config::load`] reads `~/.config/watchboard/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
theme       = "default"
start_tab   = "stocks"
recent_rows = 5

[endpoints]
transactions  = "https://house-stock-watcher-data.s3-us-west-2.amazonaws.com/data/all_transactions.json"
forecast      = "https://api.open-meteo.com/v1/forecast"
geocoding     = "https://geocoding-api.open-meteo.com/v1/search"
apod          = "https://api.nasa.gov/planetary/apod"
apod_api_key  = "DEMO_KEY"
timeout_secs  = 15

[stocks]
startup_representative  = "Nancy Pelosi"
default_representatives = ["Nancy Pelosi", "Ro Khanna", "Dan Crenshaw"]

[weather]
startup_city   = "Austin"
forecast_hours = 12
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/watchboard/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub stocks: StocksConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    /// `stocks` or `weather`.
    #[serde(default = "default_start_tab")]
    pub start_tab: String,
    /// Rows in the "Recent Great Buys" table.
    #[serde(default = "default_recent_rows")]
    pub recent_rows: usize,
}

fn default_theme() -> String { "default".to_string() }
fn default_start_tab() -> String { "stocks".to_string() }
fn default_recent_rows() -> usize { 5 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            start_tab: default_start_tab(),
            recent_rows: default_recent_rows(),
        }
    }
}

/// `[endpoints]` section — upstream URLs and the HTTP timeout.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_transactions")]
    pub transactions: String,
    #[serde(default = "default_forecast")]
    pub forecast: String,
    #[serde(default = "default_geocoding")]
    pub geocoding: String,
    #[serde(default = "default_apod")]
    pub apod: String,
    #[serde(default = "default_apod_api_key")]
    pub apod_api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_transactions() -> String {
    "https://house-stock-watcher-data.s3-us-west-2.amazonaws.com/data/all_transactions.json"
        .to_string()
}
fn default_forecast() -> String { "https://api.open-meteo.com/v1/forecast".to_string() }
fn default_geocoding() -> String { "https://geocoding-api.open-meteo.com/v1/search".to_string() }
fn default_apod() -> String { "https://api.nasa.gov/planetary/apod".to_string() }
fn default_apod_api_key() -> String { "DEMO_KEY".to_string() }
fn default_timeout_secs() -> u64 { 15 }

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            transactions: default_transactions(),
            forecast: default_forecast(),
            geocoding: default_geocoding(),
            apod: default_apod(),
            apod_api_key: default_apod_api_key(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// `[stocks]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StocksConfig {
    #[serde(default = "default_startup_representative")]
    pub startup_representative: String,
    #[serde(default = "default_representatives")]
    pub default_representatives: Vec<String>,
}

fn default_startup_representative() -> String { "Nancy Pelosi".to_string() }
fn default_representatives() -> Vec<String> {
    vec!["Nancy Pelosi".to_string(), "Ro Khanna".to_string(), "Dan Crenshaw".to_string()]
}

impl Default for StocksConfig {
    fn default() -> Self {
        Self {
            startup_representative: default_startup_representative(),
            default_representatives: default_representatives(),
        }
    }
}

/// `[weather]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_startup_city")]
    pub startup_city: String,
    #[serde(default = "default_forecast_hours")]
    pub forecast_hours: usize,
}

fn default_startup_city() -> String { "Austin".to_string() }
fn default_forecast_hours() -> usize { 12 }

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            startup_city: default_startup_city(),
            forecast_hours: default_forecast_hours(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/watchboard/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::load_from(&path)
    }

    /// Load a specific file layered on top of the built-in defaults. A
    /// missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("watchboard")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
