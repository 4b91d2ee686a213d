//! Toy stand-ins for ARIMA, Prophet, LSTM and GARCH.
//!
//! None of these are fitted models. They are fixed formulas over the log
//! return history and are kept exactly as the dashboard has always shown them.

use super::params::{mean, tail_mean};
use super::types::{DailyHorizons, ProphetForecast};

pub const ARIMA_LONG_WEIGHT: f64 = 0.3;
pub const ARIMA_SHORT_WEIGHT: f64 = 0.7;
pub const RECENT_WINDOW: usize = 30;
pub const LSTM_DECAY_PER_DAY: f64 = 0.1;

pub const GARCH_OMEGA: f64 = 0.00001;
pub const GARCH_ALPHA: f64 = 0.1;
pub const GARCH_BETA: f64 = 0.85;
pub const GARCH_STEPS: usize = 5;

fn compound(last_price: f64, daily_log_drift: f64) -> DailyHorizons {
    DailyHorizons {
        one_day: last_price * daily_log_drift.exp(),
        one_week: last_price * (daily_log_drift * 7.0).exp(),
        one_month: last_price * (daily_log_drift * 30.0).exp(),
    }
}

/// 0.3 x all-history mean return + 0.7 x last-30-day mean return.
pub fn arima_drift(returns: &[f64]) -> f64 {
    ARIMA_LONG_WEIGHT * mean(returns) + ARIMA_SHORT_WEIGHT * tail_mean(returns, RECENT_WINDOW)
}

pub fn arima_forecast(last_price: f64, returns: &[f64]) -> DailyHorizons {
    compound(last_price, arima_drift(returns))
}

/// Ordinary least squares fit of `y` against the index `0..n`.
fn ols_against_index(y: &[f64]) -> (f64, f64) {
    let n = y.len();
    if n < 2 {
        return (0.0, y.first().copied().unwrap_or(0.0));
    }
    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = mean(y);
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (i, &v) in y.iter().enumerate() {
        let dx = i as f64 - x_mean;
        sxy += dx * (v - y_mean);
        sxx += dx * dx;
    }
    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
    (slope, y_mean - slope * x_mean)
}

fn weekly_seasonality(log_prices: &[f64], slope: f64, intercept: f64) -> [f64; 7] {
    let mut sums = [0.0; 7];
    let mut counts = [0usize; 7];
    for (i, &lp) in log_prices.iter().enumerate() {
        let residual = lp - (intercept + slope * i as f64);
        sums[i % 7] += residual;
        counts[i % 7] += 1;
    }
    let mut out = [0.0; 7];
    for slot in 0..7 {
        if counts[slot] > 0 {
            out[slot] = sums[slot] / counts[slot] as f64;
        }
    }
    out
}

pub fn prophet_forecast(prices: &[f64]) -> ProphetForecast {
    let log_prices: Vec<f64> = prices.iter().map(|p| p.ln()).collect();
    let (slope, intercept) = ols_against_index(&log_prices);
    let last_price = prices.last().copied().unwrap_or(f64::NAN);
    ProphetForecast {
        prices: compound(last_price, slope),
        slope,
        weekly_seasonality: weekly_seasonality(&log_prices, slope, intercept),
    }
}

/// Exponentially decayed average of the last 30 returns applied to the last price.
pub fn lstm_forecast(last_price: f64, returns: &[f64]) -> f64 {
    if returns.len() < RECENT_WINDOW {
        return last_price;
    }
    let recent = &returns[returns.len() - RECENT_WINDOW..];
    let mut weighted = 0.0;
    let mut weight_sum = 0.0;
    // most recent return has age 0
    for (age, r) in recent.iter().rev().enumerate() {
        let w = (-LSTM_DECAY_PER_DAY * age as f64).exp();
        weighted += w * r;
        weight_sum += w;
    }
    last_price * (weighted / weight_sum).exp()
}

/// Conditional variance path `s2 <- omega + (alpha + beta) * s2`, seeded at
/// the mean squared return. Returns the volatility (sqrt) of each step.
///
/// The recursion has no `alpha * r^2` innovation term, so it is a
/// deterministic decay toward `omega / (1 - alpha - beta)`.
pub fn garch_volatility(returns: &[f64]) -> Vec<f64> {
    let squared: Vec<f64> = returns.iter().map(|r| r * r).collect();
    let mut variance = mean(&squared);
    let mut out = Vec::with_capacity(GARCH_STEPS);
    for _ in 0..GARCH_STEPS {
        variance = GARCH_OMEGA + (GARCH_ALPHA + GARCH_BETA) * variance;
        out.push(variance.sqrt());
    }
    out
}
