use super::params::tail_mean;
use super::types::Regime;

pub const SHORT_WINDOW: usize = 7;
pub const LONG_WINDOW: usize = 30;
pub const TREND_THRESHOLD: f64 = 0.005;

pub fn classify_means(short_mean: f64, long_mean: f64) -> Regime {
    if short_mean > TREND_THRESHOLD && short_mean > long_mean {
        Regime::Bull
    } else if short_mean < -TREND_THRESHOLD && short_mean < long_mean {
        Regime::Bear
    } else {
        Regime::Sideways
    }
}

/// 7-day vs 30-day mean log return.
pub fn detect_regime(returns: &[f64]) -> Regime {
    classify_means(
        tail_mean(returns, SHORT_WINDOW),
        tail_mean(returns, LONG_WINDOW),
    )
}
