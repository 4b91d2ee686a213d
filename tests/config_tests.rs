use std::path::Path;

use btc_forecast::config::{Config, MAX_PROJECTION_DAYS};

fn default_toml() -> Config {
    let raw = std::fs::read_to_string("config/default.toml").unwrap();
    toml::from_str(&raw).unwrap()
}

#[test]
fn parse_default_toml() {
    let config = default_toml();
    assert_eq!(config.coingecko.coin_id, "bitcoin");
    assert_eq!(config.coingecko.vs_currency, "usd");
    assert_eq!(config.coingecko.history_days, 365);
    assert_eq!(config.forecast.target_price, 99_000.0);
    assert_eq!(config.forecast.horizon_paths, 5_000);
    assert_eq!(config.forecast.target_paths, 10_000);
    assert_eq!(config.forecast.seed, None);
    assert_eq!(config.backend.seed, 42);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn load_from_reads_and_validates_file() {
    let config = Config::load_from(Path::new("config/default.toml")).unwrap();
    assert_eq!(config.forecast.projection_days, 180);
}

#[test]
fn missing_backend_section_uses_defaults() {
    let toml_str = r#"
[coingecko]
rest_base_url = "https://api.coingecko.com/api/v3"
coin_id = "bitcoin"
vs_currency = "usd"
history_days = 120
ticker_poll_secs = 10

[forecast]
target_price = 80000.0
horizon_paths = 100
target_paths = 100
projection_days = 30
seed = 7

[ui]
refresh_rate_ms = 50

[logging]
level = "debug"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.backend.api_base(), None);
    assert_eq!(config.backend.bind_addr, "127.0.0.1:8000");
    assert_eq!(config.forecast.seed, Some(7));
    assert_eq!(config.coingecko.request_timeout_secs, 15);
    assert!(config.validate().is_ok());
}

#[test]
fn validate_rejects_bad_values() {
    let mut config = default_toml();
    config.forecast.target_price = -1.0;
    assert!(config.validate().is_err());

    let mut config = default_toml();
    config.forecast.projection_days = MAX_PROJECTION_DAYS + 1;
    assert!(config.validate().is_err());

    let mut config = default_toml();
    config.forecast.projection_days = 0;
    assert!(config.validate().is_err());

    let mut config = default_toml();
    config.coingecko.history_days = 30;
    assert!(config.validate().is_err());

    let mut config = default_toml();
    config.forecast.horizon_paths = 0;
    assert!(config.validate().is_err());
}

#[test]
fn load_from_missing_file_fails() {
    assert!(Config::load_from(Path::new("config/does-not-exist.toml")).is_err());
}
