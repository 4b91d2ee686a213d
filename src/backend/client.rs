use std::time::Duration;

use anyhow::{Context, Result};

use crate::error::AppError;

use super::types::{BackendForecast, ForecastEnvelope};

pub const FORECAST_PATH: &str = "/api/forecast";

/// Consumer of an external `GET {API_BASE}/api/forecast` service.
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Any `ok:false`, non-2xx or transport failure comes back as one error.
    pub async fn fetch_forecast(&self) -> Result<BackendForecast> {
        let url = format!("{}{}", self.base_url, FORECAST_PATH);
        tracing::info!(url = %url, "Requesting backend forecast");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(AppError::from)
            .context("backend forecast request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::HttpStatus {
                endpoint: FORECAST_PATH.to_string(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let envelope: ForecastEnvelope = resp
            .json()
            .await
            .map_err(AppError::from)
            .context("backend forecast body is not valid JSON")?;
        if !envelope.ok {
            let msg = envelope
                .error
                .unwrap_or_else(|| "backend reported failure without a message".to_string());
            return Err(AppError::Backend(msg).into());
        }
        Ok(envelope.forecast)
    }
}
