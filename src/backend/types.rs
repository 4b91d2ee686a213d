use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::exit_signal::ExitSignal;
use crate::forecast::{
    BlendedForecast, ForecastReport, HorizonForecast, ModelForecasts, Regime, RiskMetrics,
    TargetPrediction,
};

/// Body of `GET /api/forecast`. Non-finite numbers serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regime: Option<Regime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecasts: Option<ModelForecasts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monte_carlo: Option<Vec<HorizonForecast>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blended: Option<BlendedForecast>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetPrediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_signal: Option<ExitSignal>,
}

impl ForecastResponse {
    pub fn success(report: ForecastReport, realtime_price: Option<f64>) -> Self {
        Self {
            ok: true,
            error: None,
            last_price: Some(report.last_price),
            realtime_price,
            risk: Some(report.risk),
            regime: Some(report.regime),
            forecasts: Some(report.models),
            monte_carlo: Some(report.horizons),
            blended: Some(report.blended),
            target: Some(report.target),
            exit_signal: Some(report.exit_signal),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
            last_price: None,
            realtime_price: None,
            risk: None,
            regime: None,
            forecasts: None,
            monte_carlo: None,
            blended: None,
            target: None,
            exit_signal: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BackendRisk {
    pub sharpe: Option<f64>,
    pub sortino: Option<f64>,
    pub max_drawdown: Option<f64>,
    pub calmar: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackendExitSignal {
    pub signal: bool,
    pub score: Option<f64>,
    #[serde(default)]
    pub explanation: String,
}

/// Lenient view of a backend forecast; any field may be missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BackendForecast {
    #[serde(default)]
    pub last_price: Option<f64>,
    #[serde(default)]
    pub regime: Option<String>,
    #[serde(default)]
    pub risk: Option<BackendRisk>,
    #[serde(default)]
    pub blended: Option<BTreeMap<String, Option<f64>>>,
    #[serde(default)]
    pub monte_carlo: Option<serde_json::Value>,
    #[serde(default)]
    pub exit_signal: Option<BackendExitSignal>,
}

impl BackendForecast {
    pub fn blended_price(&self, label: &str) -> Option<f64> {
        self.blended.as_ref()?.get(label).copied().flatten()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastEnvelope {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub forecast: BackendForecast,
}
