use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const API_BASE_ENV: &str = "FORECAST_API_BASE";

/// Longest projection the Monte Carlo target search is allowed to walk.
pub const MAX_PROJECTION_DAYS: u32 = 720;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub coingecko: CoinGeckoConfig,
    pub forecast: ForecastConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoinGeckoConfig {
    pub rest_base_url: String,
    pub coin_id: String,
    pub vs_currency: String,
    pub history_days: u32,
    pub ticker_poll_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    pub target_price: f64,
    pub horizon_paths: usize,
    pub target_paths: usize,
    pub projection_days: u32,
    /// Unseeded (entropy) when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of a running forecast backend; the dashboard skips it when empty.
    #[serde(default)]
    pub api_base: String,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_backend_seed")]
    pub seed: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub refresh_rate_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_backend_seed() -> u64 {
    42
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            bind_addr: default_bind_addr(),
            seed: default_backend_seed(),
        }
    }
}

impl CoinGeckoConfig {
    pub fn ticker_interval(&self) -> Duration {
        Duration::from_secs(self.ticker_poll_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl BackendConfig {
    pub fn api_base(&self) -> Option<&str> {
        let base = self.api_base.trim().trim_end_matches('/');
        if base.is_empty() {
            None
        } else {
            Some(base)
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        if let Ok(base) = std::env::var(API_BASE_ENV) {
            config.backend.api_base = base;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.coingecko.rest_base_url.trim().is_empty() {
            bail!("coingecko.rest_base_url must not be empty");
        }
        if self.coingecko.history_days < 60 {
            bail!(
                "coingecko.history_days = {}: at least 60 days are needed",
                self.coingecko.history_days
            );
        }
        if self.coingecko.ticker_poll_secs == 0 {
            bail!("coingecko.ticker_poll_secs must be > 0");
        }
        if !(self.forecast.target_price.is_finite() && self.forecast.target_price > 0.0) {
            bail!(
                "forecast.target_price = {}: must be a positive price",
                self.forecast.target_price
            );
        }
        if self.forecast.horizon_paths == 0 || self.forecast.target_paths == 0 {
            bail!("forecast path counts must be > 0");
        }
        if self.forecast.projection_days == 0 || self.forecast.projection_days > MAX_PROJECTION_DAYS
        {
            bail!(
                "forecast.projection_days = {}: expected 1..={}",
                self.forecast.projection_days,
                MAX_PROJECTION_DAYS
            );
        }
        if self.ui.refresh_rate_ms == 0 {
            bail!("ui.refresh_rate_ms must be > 0");
        }
        Ok(())
    }
}
