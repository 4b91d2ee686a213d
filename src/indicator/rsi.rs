use super::ema::Ema;

/// Relative Strength Index with Wilder smoothing of gains and losses.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    avg_gain: Ema,
    avg_loss: Ema,
    prev: Option<f64>,
    deltas: usize,
}

/// Reported when there are no losses in the window (gain/loss is undefined).
pub const RSI_NEUTRAL: f64 = 50.0;

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "RSI period must be > 0");
        Self {
            period,
            avg_gain: Ema::wilder(period),
            avg_loss: Ema::wilder(period),
            prev: None,
            deltas: 0,
        }
    }

    /// Push a close, return the RSI once `period` price changes were seen.
    pub fn push(&mut self, price: f64) -> Option<f64> {
        if let Some(prev) = self.prev {
            let delta = price - prev;
            self.avg_gain.push(delta.max(0.0));
            self.avg_loss.push((-delta).max(0.0));
            self.deltas += 1;
        }
        self.prev = Some(price);
        self.value()
    }

    pub fn value(&self) -> Option<f64> {
        if self.deltas < self.period {
            return None;
        }
        let gain = self.avg_gain.value()?;
        let loss = self.avg_loss.value()?;
        if loss == 0.0 {
            return Some(RSI_NEUTRAL);
        }
        let rs = gain / loss;
        Some(100.0 - 100.0 / (1.0 + rs))
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warms_up_over_period_changes() {
        let mut rsi = Rsi::new(3);
        assert_eq!(rsi.push(10.0), None);
        assert_eq!(rsi.push(11.0), None);
        assert_eq!(rsi.push(12.0), None);
        assert!(rsi.push(11.5).is_some());
    }

    #[test]
    fn strong_uptrend_reads_overbought() {
        let mut rsi = Rsi::new(14);
        let mut last = None;
        for i in 0..60 {
            let dip = if i % 5 == 0 { 3.0 } else { 0.0 };
            last = rsi.push(100.0 + i as f64 * 2.0 - dip);
        }
        assert!(last.unwrap() > 70.0);
    }

    #[test]
    fn no_losses_is_neutral() {
        let mut rsi = Rsi::new(2);
        for p in [1.0, 2.0, 3.0, 4.0] {
            rsi.push(p);
        }
        assert_eq!(rsi.value(), Some(RSI_NEUTRAL));
    }
}
