use btc_forecast::forecast::log_returns;
use btc_forecast::forecast::models::{
    arima_drift, arima_forecast, garch_volatility, lstm_forecast, prophet_forecast,
};

fn geometric(n: usize, start: f64, daily: f64) -> Vec<f64> {
    (0..n).map(|i| start * (daily * i as f64).exp()).collect()
}

#[test]
fn arima_weights_recent_returns_more() {
    let mut returns = vec![0.0; 60];
    for r in returns.iter_mut().skip(30) {
        *r = 0.01;
    }
    // all-history mean 0.005, last-30 mean 0.01
    let d = arima_drift(&returns);
    assert!((d - (0.3 * 0.005 + 0.7 * 0.01)).abs() < 1e-12);

    let f = arima_forecast(100.0, &returns);
    assert!((f.one_day - 100.0 * d.exp()).abs() < 1e-9);
    assert!((f.one_week - 100.0 * (7.0 * d).exp()).abs() < 1e-9);
    assert!((f.one_month - 100.0 * (30.0 * d).exp()).abs() < 1e-9);
}

#[test]
fn prophet_recovers_exponential_trend() {
    let prices = geometric(90, 100.0, 0.004);
    let f = prophet_forecast(&prices);
    let last = prices[89];
    assert!((f.slope - 0.004).abs() < 1e-9);
    assert!((f.prices.one_day - last * 0.004f64.exp()).abs() < 1e-6);
    assert!((f.prices.one_month - last * 0.12f64.exp()).abs() < 1e-6);
    for s in f.weekly_seasonality {
        assert!(s.abs() < 1e-9);
    }
}

#[test]
fn lstm_needs_thirty_returns() {
    let returns = vec![0.02; 29];
    assert_eq!(lstm_forecast(123.0, &returns), 123.0);
}

#[test]
fn lstm_constant_returns_compound_once() {
    let prices = geometric(61, 100.0, 0.003);
    let returns = log_returns(&prices);
    let last = prices[60];
    let f = lstm_forecast(last, &returns);
    assert!((f - last * 0.003f64.exp()).abs() < 1e-6);
}

#[test]
fn lstm_leans_on_latest_returns() {
    let mut returns = vec![-0.01; 40];
    let n = returns.len();
    returns[n - 1] = 0.05;
    returns[n - 2] = 0.05;
    let f = lstm_forecast(100.0, &returns);
    // a plain mean of the last 30 would be negative
    assert!(f > 100.0, "f = {}", f);
}

#[test]
fn garch_decays_toward_long_run_level() {
    let returns = vec![0.05, -0.05, 0.05, -0.05];
    let vols = garch_volatility(&returns);
    assert_eq!(vols.len(), 5);
    let first = (0.00001 + 0.95 * 0.0025f64).sqrt();
    assert!((vols[0] - first).abs() < 1e-12);
    for w in vols.windows(2) {
        assert!(w[1] < w[0]);
    }
}
