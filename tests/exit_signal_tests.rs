use btc_forecast::exit_signal::{evaluate_exit_signal, quantile, EXIT_SCORE_THRESHOLD};
use btc_forecast::forecast::Regime;

fn dipping_uptrend(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let dip = if i % 5 == 0 { 3.0 } else { 0.0 };
            100.0 + i as f64 * 2.0 - dip
        })
        .collect()
}

#[test]
fn quantile_interpolates_between_ranks() {
    assert_eq!(quantile(&[4.0, 1.0, 3.0, 2.0], 0.75), Some(3.25));
    assert_eq!(quantile(&[5.0], 0.75), Some(5.0));
    assert_eq!(quantile(&[], 0.5), None);
}

#[test]
fn quiet_market_has_no_exit() {
    let closes = vec![100.0; 250];
    let s = evaluate_exit_signal(&closes, Regime::Sideways);
    assert!(!s.signal);
    assert_eq!(s.score, 0.0);
    assert_eq!(s.explanation, "No major risk conditions triggered");
}

#[test]
fn overbought_bear_regime_triggers_exit() {
    let closes = dipping_uptrend(60);
    let s = evaluate_exit_signal(&closes, Regime::Bear);
    assert!(s.score >= 2.2 - 1e-9, "score = {}", s.score);
    assert!(s.signal);
    assert!(s.explanation.contains("RSI is overbought"));
    assert!(s.explanation.contains("regime is bear"));
    assert!(s.explanation.contains("; "));
}

#[test]
fn falling_market_below_long_average() {
    let closes: Vec<f64> = (0..260).map(|i| 200.0 - i as f64 * 0.3).collect();
    let s = evaluate_exit_signal(&closes, Regime::Sideways);
    assert!(s.explanation.contains("200-day moving average"));
    assert!(!s.explanation.contains("RSI"));
    assert_eq!(s.signal, s.score >= EXIT_SCORE_THRESHOLD);
}

#[test]
fn short_history_skips_rsi_gate() {
    let closes = dipping_uptrend(20);
    let s = evaluate_exit_signal(&closes, Regime::Sideways);
    assert!(!s.explanation.contains("RSI"));
}

fn closes_from_returns(returns: &[f64]) -> Vec<f64> {
    let mut price = 100.0;
    let mut out = vec![price];
    for r in returns {
        price *= r.exp();
        out.push(price);
    }
    out
}

fn has(explanation: &str, reason: &str) -> f64 {
    if explanation.contains(reason) {
        1.0
    } else {
        0.0
    }
}

#[test]
fn volatility_spike_adds_to_score() {
    // 100 calm returns, quieter toward the end, then 20 large ones ending on a rise
    let mut returns: Vec<f64> = (0..100)
        .map(|i| {
            let size = if i < 60 { 0.002 } else { 0.001 };
            if i % 2 == 0 {
                size
            } else {
                -size
            }
        })
        .collect();
    returns.extend((0..20).map(|i| if i % 2 == 0 { -0.05 } else { 0.05 }));
    let closes = closes_from_returns(&returns);

    let calm = evaluate_exit_signal(&closes[..101], Regime::Sideways);
    assert!(!calm.explanation.contains("volatility spike"));

    let s = evaluate_exit_signal(&closes, Regime::Sideways);
    assert!(
        s.explanation
            .contains("Recent volatility spike above 75th percentile"),
        "{}",
        s.explanation
    );
    let others = has(&s.explanation, "MACD bear crossover") + has(&s.explanation, "RSI is overbought");
    assert!((s.score - (0.8 + others)).abs() < 1e-9, "score = {}", s.score);
}

#[test]
fn macd_bear_crossover_on_last_bar() {
    let mut closes: Vec<f64> = (0..100).map(|i| 100.0 + i as f64).collect();
    let rising = evaluate_exit_signal(&closes, Regime::Sideways);
    assert!(!rising.explanation.contains("MACD"));

    closes.push(170.0);
    let s = evaluate_exit_signal(&closes, Regime::Sideways);
    assert!(
        s.explanation.contains("MACD bear crossover detected"),
        "{}",
        s.explanation
    );
    assert!(s.score >= 1.0);
}
