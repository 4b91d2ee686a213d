use crate::error::AppError;

use super::types::DriftVol;

/// Minimum number of valid daily closes a forecast run accepts.
pub const MIN_HISTORY_POINTS: usize = 60;

/// Consecutive log returns `ln(p_i / p_{i-1})` with non-finite values dropped.
pub fn log_returns(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .map(|w| (w[1] / w[0]).ln())
        .filter(|r| r.is_finite())
        .collect()
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n-1 divisor); zero below two observations.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Mean of the last `n` values (all of them when fewer are available).
pub fn tail_mean(values: &[f64], n: usize) -> f64 {
    let start = values.len().saturating_sub(n);
    mean(&values[start..])
}

/// Drop non-finite closes and require at least [`MIN_HISTORY_POINTS`] of them.
pub fn valid_prices(prices: &[f64]) -> Result<Vec<f64>, AppError> {
    let valid: Vec<f64> = prices.iter().copied().filter(|p| p.is_finite()).collect();
    if valid.len() < MIN_HISTORY_POINTS {
        return Err(AppError::InsufficientData {
            required: MIN_HISTORY_POINTS,
            available: valid.len(),
        });
    }
    Ok(valid)
}

pub fn estimate_drift_vol(prices: &[f64]) -> Result<DriftVol, AppError> {
    let valid = valid_prices(prices)?;
    let returns = log_returns(&valid);
    Ok(DriftVol {
        mu: mean(&returns),
        sigma: sample_std(&returns),
    })
}
