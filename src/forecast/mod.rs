pub mod ensemble;
pub mod models;
pub mod monte_carlo;
pub mod params;
pub mod projection;
pub mod regime;
pub mod risk;
pub mod rng;
pub mod target;
pub mod types;

use chrono::{DateTime, Utc};

use crate::config::ForecastConfig;
use crate::error::AppError;
use crate::exit_signal::evaluate_exit_signal;
use crate::model::price::PricePoint;

pub use params::{estimate_drift_vol, log_returns, MIN_HISTORY_POINTS};
pub use rng::{BoxMuller, NormalSampler};
pub use types::{
    BlendWeights, BlendedForecast, DailyHorizons, DriftVol, ForecastReport, Horizon,
    HorizonForecast, ModelForecasts, ProjectionPoint, ProphetForecast, Regime, RiskMetrics,
    TargetPrediction,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastSettings {
    pub target_price: f64,
    pub horizon_paths: usize,
    pub target_paths: usize,
    pub projection_days: u32,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            target_price: 99_000.0,
            horizon_paths: monte_carlo::DEFAULT_HORIZON_PATHS,
            target_paths: monte_carlo::DEFAULT_TARGET_PATHS,
            projection_days: 180,
        }
    }
}

impl From<&ForecastConfig> for ForecastSettings {
    fn from(cfg: &ForecastConfig) -> Self {
        Self {
            target_price: cfg.target_price,
            horizon_paths: cfg.horizon_paths,
            target_paths: cfg.target_paths,
            projection_days: cfg.projection_days,
        }
    }
}

/// Run the whole pipeline over a fetched daily history.
pub fn run_forecast<S: NormalSampler>(
    history: &[PricePoint],
    settings: &ForecastSettings,
    sampler: &mut S,
) -> Result<ForecastReport, AppError> {
    let valid: Vec<PricePoint> = history
        .iter()
        .copied()
        .filter(|p| p.price.is_finite())
        .collect();
    let as_of = valid.last().and_then(|p| p.datetime());
    let closes: Vec<f64> = valid.iter().map(|p| p.price).collect();
    forecast_from_closes(&closes, as_of, settings, sampler)
}

/// Pure forecast over ordered daily closes. `as_of` only dates the target.
pub fn forecast_from_closes<S: NormalSampler>(
    closes: &[f64],
    as_of: Option<DateTime<Utc>>,
    settings: &ForecastSettings,
    sampler: &mut S,
) -> Result<ForecastReport, AppError> {
    let prices = params::valid_prices(closes)?;
    let returns = log_returns(&prices);
    let drift_vol = DriftVol {
        mu: params::mean(&returns),
        sigma: params::sample_std(&returns),
    };
    let last_price = prices[prices.len() - 1];
    let target_price = settings.target_price;

    let horizons = monte_carlo::simulate_horizons(
        last_price,
        drift_vol,
        target_price,
        &Horizon::ALL,
        settings.horizon_paths,
        sampler,
    );
    let daily_projection =
        projection::daily_projection(last_price, drift_vol, settings.projection_days);

    let arima = models::arima_forecast(last_price, &returns);
    let prophet = models::prophet_forecast(&prices);
    let lstm = models::lstm_forecast(last_price, &returns);
    let garch_volatility = models::garch_volatility(&returns);

    let regime = regime::detect_regime(&returns);
    let risk = risk::risk_metrics(&returns, &prices);
    let blended = ensemble::blend(regime, &arima, &prophet.prices, lstm);

    let target = target::predict_target(
        last_price,
        drift_vol,
        &daily_projection,
        target_price,
        settings.target_paths,
        as_of,
        sampler,
    );
    let exit_signal = evaluate_exit_signal(&prices, regime);

    tracing::info!(
        points = prices.len(),
        last_price,
        mu = drift_vol.mu,
        sigma = drift_vol.sigma,
        regime = %regime,
        target_day = ?target.predicted_day,
        "Forecast computed"
    );

    Ok(ForecastReport {
        as_of,
        last_price,
        mu: drift_vol.mu,
        sigma: drift_vol.sigma,
        horizons,
        daily_projection,
        models: ModelForecasts {
            arima,
            prophet,
            lstm,
            garch_volatility,
        },
        regime,
        risk,
        blended,
        target,
        exit_signal,
    })
}
