use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::coingecko::CoinGeckoClient;
use crate::forecast::{run_forecast, BoxMuller, ForecastSettings};
use crate::model::price::append_spot_close;

use super::client::FORECAST_PATH;
use super::types::ForecastResponse;

pub struct ServerState {
    pub client: CoinGeckoClient,
    pub history_days: u32,
    pub settings: ForecastSettings,
    /// Every request reseeds so identical inputs give identical answers.
    pub seed: u64,
}

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route(FORECAST_PATH, get(forecast_handler))
        .with_state(state)
}

async fn forecast_handler(State(state): State<Arc<ServerState>>) -> Json<ForecastResponse> {
    match build_forecast(&state).await {
        Ok(resp) => Json(resp),
        Err(e) => {
            tracing::warn!(error = %format!("{:#}", e), "Forecast request failed");
            Json(ForecastResponse::failure(format!("{:#}", e)))
        }
    }
}

pub async fn build_forecast(state: &ServerState) -> Result<ForecastResponse> {
    let mut history = state.client.daily_history(state.history_days).await?;

    let realtime_price = match state.client.spot_price().await {
        Ok(price) => Some(price),
        Err(e) => {
            tracing::warn!(error = %e, "Spot price unavailable, using history only");
            None
        }
    };
    if let Some(spot) = realtime_price {
        if append_spot_close(&mut history, spot, Utc::now().timestamp_millis()) {
            tracing::debug!(spot, "Appended spot price as today's close");
        }
    }

    let settings = state.settings;
    let seed = state.seed;
    let report = tokio::task::spawn_blocking(move || {
        let mut sampler = BoxMuller::seeded(seed);
        run_forecast(&history, &settings, &mut sampler)
    })
    .await
    .context("forecast worker panicked")??;

    Ok(ForecastResponse::success(report, realtime_price))
}
