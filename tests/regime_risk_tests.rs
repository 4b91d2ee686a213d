use btc_forecast::forecast::ensemble::{blend, regime_weights};
use btc_forecast::forecast::regime::{classify_means, detect_regime};
use btc_forecast::forecast::risk::{max_drawdown, risk_metrics, sharpe_ratio, sortino_ratio};
use btc_forecast::forecast::{DailyHorizons, Regime};

#[test]
fn regime_thresholds() {
    assert_eq!(classify_means(0.01, 0.0), Regime::Bull);
    assert_eq!(classify_means(-0.01, 0.0), Regime::Bear);
    assert_eq!(classify_means(0.001, 0.0), Regime::Sideways);
    // strong but below the long-run mean
    assert_eq!(classify_means(0.01, 0.02), Regime::Sideways);
}

#[test]
fn regime_from_recent_week() {
    let mut returns = vec![0.0; 40];
    let n = returns.len();
    for r in &mut returns[n - 7..] {
        *r = -0.02;
    }
    assert_eq!(detect_regime(&returns), Regime::Bear);
    assert_eq!(detect_regime(&[]), Regime::Sideways);
}

#[test]
fn regime_weights_sum_to_one() {
    for regime in [Regime::Bull, Regime::Bear, Regime::Sideways] {
        assert!((regime_weights(regime).total() - 1.0).abs() < 1e-12);
    }
    assert_eq!(regime_weights(Regime::Bull).lstm, 0.40);
    assert_eq!(regime_weights(Regime::Bear).arima, 0.40);
}

#[test]
fn blend_of_agreeing_models_is_that_price() {
    let h = DailyHorizons {
        one_day: 100.0,
        one_week: 100.0,
        one_month: 100.0,
    };
    let b = blend(Regime::Sideways, &h, &h, 100.0);
    assert!((b.one_hour - 100.0).abs() < 1e-9);
    assert!((b.one_day - 100.0).abs() < 1e-9);
    assert!((b.one_month - 100.0).abs() < 1e-9);
}

#[test]
fn one_hour_blend_sits_near_lstm() {
    let arima = DailyHorizons {
        one_day: 100.0,
        one_week: 110.0,
        one_month: 120.0,
    };
    let prophet = DailyHorizons {
        one_day: 101.0,
        one_week: 105.0,
        one_month: 115.0,
    };
    let b = blend(Regime::Bull, &arima, &prophet, 124.0);
    assert!((b.one_hour - 123.0).abs() < 1e-9);
    assert!((b.one_day - (0.25 * 100.0 + 0.35 * 101.0 + 0.40 * 124.0)).abs() < 1e-9);
}

#[test]
fn monotone_rise_has_no_drawdown() {
    let prices: Vec<f64> = (1..=50).map(|i| i as f64).collect();
    let returns: Vec<f64> = prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect();
    let m = risk_metrics(&returns, &prices);
    assert_eq!(m.max_drawdown, 0.0);
    assert_eq!(m.calmar, 0.0);
    assert!(m.sharpe > 0.0);
    // no negative returns: downside falls back to total std
    assert!((m.sortino - m.sharpe).abs() < 1e-12);
}

#[test]
fn drawdown_is_peak_to_trough() {
    let prices = [100.0, 120.0, 90.0, 130.0, 110.0];
    assert!((max_drawdown(&prices) - (-0.25)).abs() < 1e-12);
}

#[test]
fn zero_dispersion_ratios_are_zero() {
    let flat = vec![0.25; 10];
    assert_eq!(sharpe_ratio(&flat), 0.0);
    assert_eq!(sortino_ratio(&flat), 0.0);
}

#[test]
fn single_negative_return_leaves_sortino_undefined() {
    let returns = [0.01, 0.02, -0.01, 0.015];
    let sortino = sortino_ratio(&returns);
    assert!(sortino.is_nan());
    assert_eq!(btc_forecast::ui::fmt_ratio(sortino, 2), "N/A");
    assert!(sharpe_ratio(&returns).is_finite());
}
