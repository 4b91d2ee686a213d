use super::ema::Ema;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdPoint {
    pub macd: f64,
    pub signal: f64,
    pub hist: f64,
}

/// MACD line (fast EMA - slow EMA), its signal EMA and the histogram.
#[derive(Debug, Clone)]
pub struct Macd {
    fast: Ema,
    slow: Ema,
    signal: Ema,
}

impl Macd {
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self {
            fast: Ema::new(fast),
            slow: Ema::new(slow),
            signal: Ema::new(signal),
        }
    }

    pub fn push(&mut self, price: f64) -> MacdPoint {
        let macd = self.fast.push(price) - self.slow.push(price);
        let signal = self.signal.push(macd);
        MacdPoint {
            macd,
            signal,
            hist: macd - signal,
        }
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new(12, 26, 9)
    }
}

/// MACD series over a full price history.
pub fn macd_series(prices: &[f64]) -> Vec<MacdPoint> {
    let mut macd = Macd::default();
    prices.iter().map(|&p| macd.push(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_series_has_zero_macd() {
        let series = macd_series(&[50.0; 40]);
        assert!(series.iter().all(|p| p.macd.abs() < 1e-12 && p.hist.abs() < 1e-12));
    }

    #[test]
    fn rising_series_has_positive_macd() {
        let prices: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let last = *macd_series(&prices).last().unwrap();
        assert!(last.macd > 0.0);
    }
}
