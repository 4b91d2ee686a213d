//! Composite risk-off score over the daily close history.

use serde::{Deserialize, Serialize};

use crate::forecast::params::{log_returns, sample_std};
use crate::forecast::types::Regime;
use crate::indicator::{macd_series, Rsi, Sma};

pub const EXIT_SCORE_THRESHOLD: f64 = 2.0;

const RSI_PERIOD: usize = 14;
const RSI_OVERBOUGHT: f64 = 70.0;
const RECENT_VOL_WINDOW: usize = 20;
const ROLLING_VOL_WINDOW: usize = 60;
const VOL_SPIKE_QUANTILE: f64 = 0.75;
const LONG_MA_PERIOD: usize = 200;

const RSI_WEIGHT: f64 = 1.0;
const VOL_SPIKE_WEIGHT: f64 = 0.8;
const BEAR_REGIME_WEIGHT: f64 = 1.2;
const MACD_CROSS_WEIGHT: f64 = 1.0;
const BELOW_MA_WEIGHT: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitSignal {
    pub signal: bool,
    pub score: f64,
    pub explanation: String,
}

/// Linear-interpolated quantile of `values` (q in [0, 1]).
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

fn last_rsi(closes: &[f64]) -> Option<f64> {
    let mut rsi = Rsi::new(RSI_PERIOD);
    let mut last = None;
    for &p in closes {
        last = rsi.push(p);
    }
    last
}

fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    let mut sma = Sma::new(window);
    values
        .iter()
        .filter_map(|&v| {
            sma.push(v);
            sma.std()
        })
        .collect()
}

fn volatility_spike(returns: &[f64], closes_len: usize) -> bool {
    if closes_len <= ROLLING_VOL_WINDOW || returns.len() < RECENT_VOL_WINDOW {
        return false;
    }
    let recent = sample_std(&returns[returns.len() - RECENT_VOL_WINDOW..]);
    match quantile(&rolling_std(returns, ROLLING_VOL_WINDOW), VOL_SPIKE_QUANTILE) {
        Some(threshold) => recent > threshold,
        None => false,
    }
}

fn macd_bear_cross(closes: &[f64]) -> bool {
    let series = macd_series(closes);
    if series.len() <= 2 {
        return false;
    }
    let last = series[series.len() - 1];
    let prev = series[series.len() - 2];
    last.macd < last.signal && prev.macd >= prev.signal
}

fn below_long_ma(closes: &[f64]) -> bool {
    let mut sma = Sma::new(LONG_MA_PERIOD);
    let mut ma = None;
    for &p in closes {
        ma = sma.push(p);
    }
    match (ma, closes.last()) {
        (Some(ma), Some(&last)) => last < ma,
        _ => false,
    }
}

pub fn evaluate_exit_signal(closes: &[f64], regime: Regime) -> ExitSignal {
    let mut score = 0.0;
    let mut parts: Vec<String> = Vec::new();

    if closes.len() > RECENT_VOL_WINDOW {
        if let Some(rsi) = last_rsi(closes).filter(|v| *v > RSI_OVERBOUGHT) {
            score += RSI_WEIGHT;
            parts.push(format!("RSI is overbought at {:.1} (>70)", rsi));
        }
    }

    let returns = log_returns(closes);
    if volatility_spike(&returns, closes.len()) {
        score += VOL_SPIKE_WEIGHT;
        parts.push("Recent volatility spike above 75th percentile".to_string());
    }

    if regime == Regime::Bear {
        score += BEAR_REGIME_WEIGHT;
        parts.push("Moving-average regime is bear".to_string());
    }

    if macd_bear_cross(closes) {
        score += MACD_CROSS_WEIGHT;
        parts.push("MACD bear crossover detected".to_string());
    }

    if below_long_ma(closes) {
        score += BELOW_MA_WEIGHT;
        parts.push("Price below 200-day moving average".to_string());
    }

    if parts.is_empty() {
        parts.push("No major risk conditions triggered".to_string());
    }

    ExitSignal {
        signal: score >= EXIT_SCORE_THRESHOLD,
        score,
        explanation: parts.join("; "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantile_interpolates_linearly() {
        let v = [4.0, 1.0, 3.0, 2.0];
        assert_eq!(quantile(&v, 0.0), Some(1.0));
        assert_eq!(quantile(&v, 1.0), Some(4.0));
        assert!((quantile(&v, 0.75).unwrap() - 3.25).abs() < 1e-12);
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn rolling_std_starts_after_full_window() {
        let v: Vec<f64> = (0..10).map(|i| i as f64).collect();
        assert_eq!(rolling_std(&v, 4).len(), 7);
    }
}
