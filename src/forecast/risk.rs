use super::params::{mean, sample_std};
use super::types::RiskMetrics;

pub const PERIODS_PER_YEAR: f64 = 365.0;

pub fn sharpe_ratio(returns: &[f64]) -> f64 {
    let std = sample_std(returns);
    if std == 0.0 {
        return 0.0;
    }
    mean(returns) / std * PERIODS_PER_YEAR.sqrt()
}

/// Downside deviation is the std of the negative returns only; with no
/// negative returns the overall std is used instead. A single negative
/// return has no sample std, so the ratio is NaN.
pub fn sortino_ratio(returns: &[f64]) -> f64 {
    let negatives: Vec<f64> = returns.iter().copied().filter(|r| *r < 0.0).collect();
    let downside = match negatives.len() {
        0 => sample_std(returns),
        1 => f64::NAN,
        _ => sample_std(&negatives),
    };
    if downside == 0.0 {
        return 0.0;
    }
    mean(returns) / downside * PERIODS_PER_YEAR.sqrt()
}

/// Most negative `(price - running_peak) / running_peak`; zero for a monotone rise.
pub fn max_drawdown(prices: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0f64;
    for &p in prices {
        if p > peak {
            peak = p;
        }
        if peak > 0.0 {
            worst = worst.min((p - peak) / peak);
        }
    }
    worst
}

pub fn calmar_ratio(returns: &[f64], max_drawdown: f64) -> f64 {
    let mdd = max_drawdown.abs();
    if mdd == 0.0 {
        return 0.0;
    }
    mean(returns) * PERIODS_PER_YEAR / mdd
}

pub fn risk_metrics(returns: &[f64], prices: &[f64]) -> RiskMetrics {
    let mdd = max_drawdown(prices);
    RiskMetrics {
        sharpe: sharpe_ratio(returns),
        sortino: sortino_ratio(returns),
        max_drawdown: mdd,
        calmar: calmar_ratio(returns, mdd),
    }
}
