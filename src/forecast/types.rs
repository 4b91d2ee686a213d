use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::exit_signal::ExitSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizon {
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    OneMonth,
}

impl Horizon {
    pub const ALL: [Horizon; 4] = [
        Horizon::OneHour,
        Horizon::OneDay,
        Horizon::OneWeek,
        Horizon::OneMonth,
    ];

    /// Horizon length in days.
    pub fn days(self) -> f64 {
        match self {
            Horizon::OneHour => 1.0 / 24.0,
            Horizon::OneDay => 1.0,
            Horizon::OneWeek => 7.0,
            Horizon::OneMonth => 30.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Horizon::OneHour => "1h",
            Horizon::OneDay => "1d",
            Horizon::OneWeek => "1w",
            Horizon::OneMonth => "1m",
        }
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftVol {
    pub mu: f64,
    pub sigma: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonForecast {
    pub horizon: Horizon,
    pub price: f64,
    pub hit_probability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub day: u32,
    pub price: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Prices at the 1-day, 1-week and 1-month horizons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyHorizons {
    #[serde(rename = "1d")]
    pub one_day: f64,
    #[serde(rename = "1w")]
    pub one_week: f64,
    #[serde(rename = "1m")]
    pub one_month: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProphetForecast {
    pub prices: DailyHorizons,
    pub slope: f64,
    /// Mean detrended log price per weekday slot (index mod 7).
    /// Computed for inspection only; no forecast reads it.
    pub weekly_seasonality: [f64; 7],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelForecasts {
    pub arima: DailyHorizons,
    pub prophet: ProphetForecast,
    pub lstm: f64,
    pub garch_volatility: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    Bull,
    Bear,
    Sideways,
}

impl Regime {
    pub fn as_str(self) -> &'static str {
        match self {
            Regime::Bull => "bull",
            Regime::Bear => "bear",
            Regime::Sideways => "sideways",
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub sharpe: f64,
    pub sortino: f64,
    pub max_drawdown: f64,
    pub calmar: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendWeights {
    pub arima: f64,
    pub prophet: f64,
    pub lstm: f64,
}

impl BlendWeights {
    pub fn total(&self) -> f64 {
        self.arima + self.prophet + self.lstm
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendedForecast {
    #[serde(rename = "1h")]
    pub one_hour: f64,
    #[serde(rename = "1d")]
    pub one_day: f64,
    #[serde(rename = "1w")]
    pub one_week: f64,
    #[serde(rename = "1m")]
    pub one_month: f64,
}

impl BlendedForecast {
    pub fn get(&self, horizon: Horizon) -> f64 {
        match horizon {
            Horizon::OneHour => self.one_hour,
            Horizon::OneDay => self.one_day,
            Horizon::OneWeek => self.one_week,
            Horizon::OneMonth => self.one_month,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetPrediction {
    pub target_price: f64,
    pub predicted_day: Option<u32>,
    pub predicted_date: Option<NaiveDate>,
    pub probability: f64,
}

/// Result of one forecast run. Replaced wholesale by the next run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub as_of: Option<DateTime<Utc>>,
    pub last_price: f64,
    pub mu: f64,
    pub sigma: f64,
    pub horizons: Vec<HorizonForecast>,
    pub daily_projection: Vec<ProjectionPoint>,
    pub models: ModelForecasts,
    pub regime: Regime,
    pub risk: RiskMetrics,
    pub blended: BlendedForecast,
    pub target: TargetPrediction,
    pub exit_signal: ExitSignal,
}

impl ForecastReport {
    pub fn horizon(&self, horizon: Horizon) -> Option<&HorizonForecast> {
        self.horizons.iter().find(|h| h.horizon == horizon)
    }
}
