use std::time::Duration;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::config::CoinGeckoConfig;
use crate::error::AppError;
use crate::forecast::MIN_HISTORY_POINTS;
use crate::model::price::PricePoint;

use super::types::{spot_from_simple_price, MarketChartResponse, SimplePriceResponse};

const USER_AGENT: &str = concat!("btc-forecast/", env!("CARGO_PKG_VERSION"));

pub struct CoinGeckoClient {
    http: reqwest::Client,
    base_url: String,
    coin_id: String,
    vs_currency: String,
}

impl CoinGeckoClient {
    pub fn new(base_url: &str, coin_id: &str, vs_currency: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            coin_id: coin_id.to_string(),
            vs_currency: vs_currency.to_string(),
        })
    }

    pub fn from_config(cfg: &CoinGeckoConfig) -> Result<Self> {
        Self::new(
            &cfg.rest_base_url,
            &cfg.coin_id,
            &cfg.vs_currency,
            cfg.request_timeout(),
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(AppError::from)
            .with_context(|| format!("GET {} failed", path))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::HttpStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let bytes = resp.bytes().await.map_err(AppError::from)?;
        let parsed = serde_json::from_slice(&bytes)
            .map_err(AppError::from)
            .with_context(|| format!("unexpected body from {}", path))?;
        Ok(parsed)
    }

    /// Current spot price for the configured coin and currency.
    pub async fn spot_price(&self) -> Result<f64> {
        let body: SimplePriceResponse = self
            .get_json(
                "/simple/price",
                &[("ids", self.coin_id.as_str()), ("vs_currencies", self.vs_currency.as_str())],
            )
            .await?;
        spot_from_simple_price(&body, &self.coin_id, &self.vs_currency).with_context(|| {
            format!(
                "simple/price response has no {}.{} quote",
                self.coin_id, self.vs_currency
            )
        })
    }

    /// Daily closes for the last `days` days; fails below the minimum history.
    pub async fn daily_history(&self, days: u32) -> Result<Vec<PricePoint>> {
        let path = format!("/coins/{}/market_chart", self.coin_id);
        let days = days.to_string();
        let body: MarketChartResponse = self
            .get_json(
                &path,
                &[
                    ("vs_currency", self.vs_currency.as_str()),
                    ("days", days.as_str()),
                    ("interval", "daily"),
                ],
            )
            .await?;

        let points = body.usable_points();
        tracing::info!(
            raw = body.prices.len(),
            usable = points.len(),
            "Fetched daily market chart"
        );
        if points.len() < MIN_HISTORY_POINTS {
            return Err(AppError::InsufficientData {
                required: MIN_HISTORY_POINTS,
                available: points.len(),
            }
            .into());
        }
        Ok(points)
    }
}
