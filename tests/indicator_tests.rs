use btc_forecast::indicator::{macd_series, Ema, Macd, Rsi, Sma};

#[test]
fn sma_rolls_over_window() {
    let mut sma = Sma::new(3);
    assert_eq!(sma.push(1.0), None);
    assert_eq!(sma.push(2.0), None);
    assert_eq!(sma.push(3.0), Some(2.0));
    assert_eq!(sma.push(4.0), Some(3.0));
    // window is [2, 3, 4]
    assert!((sma.std().unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn ema_starts_at_first_value() {
    let mut ema = Ema::new(3);
    assert_eq!(ema.push(10.0), 10.0);
    // alpha = 2 / (3 + 1)
    assert!((ema.push(20.0) - 15.0).abs() < 1e-12);
}

#[test]
fn wilder_ema_uses_one_over_period() {
    let mut ema = Ema::wilder(4);
    ema.push(0.0);
    assert!((ema.push(4.0) - 1.0).abs() < 1e-12);
}

#[test]
fn rsi_of_steady_decline_is_zero() {
    let mut rsi = Rsi::new(14);
    let mut last = None;
    for i in 0..30 {
        last = rsi.push(100.0 - i as f64);
    }
    assert_eq!(last, Some(0.0));
}

#[test]
fn macd_series_matches_incremental() {
    let prices: Vec<f64> = (0..80).map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0).collect();
    let series = macd_series(&prices);
    let mut macd = Macd::default();
    let last = prices.iter().map(|&p| macd.push(p)).last().unwrap();
    assert_eq!(series.len(), prices.len());
    assert_eq!(series[series.len() - 1], last);
    assert!((last.hist - (last.macd - last.signal)).abs() < 1e-12);
}

#[test]
fn macd_of_flat_series_is_zero() {
    let series = macd_series(&[50.0; 40]);
    let last = series[39];
    assert_eq!(last.macd, 0.0);
    assert_eq!(last.signal, 0.0);
}
