use chrono::{DateTime, Utc};

use crate::backend::types::BackendForecast;
use crate::forecast::ForecastReport;

#[derive(Debug, Clone)]
pub enum AppEvent {
    TickerPrice {
        price: f64,
        at: DateTime<Utc>,
    },
    TickerError(String),
    ForecastReady {
        report: Box<ForecastReport>,
        closes: Vec<f64>,
    },
    ForecastFailed(String),
    BackendReady(Box<BackendForecast>),
    BackendFailed(String),
    LogMessage(String),
}
