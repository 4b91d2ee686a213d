/// Rolling window over the last `period` values: mean and sample std.
///
/// Ring buffer, O(1) push for the mean; std walks the window.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    buffer: Vec<f64>,
    head: usize,
    count: usize,
    sum: f64,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "SMA period must be > 0");
        Self {
            period,
            buffer: vec![0.0; period],
            head: 0,
            count: 0,
            sum: 0.0,
        }
    }

    /// Push a new value, return the current mean once the window is full.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        if self.count >= self.period {
            self.sum -= self.buffer[self.head];
        }
        self.buffer[self.head] = value;
        self.sum += value;
        self.head = (self.head + 1) % self.period;
        if self.count < self.period {
            self.count += 1;
        }
        self.value()
    }

    pub fn value(&self) -> Option<f64> {
        if self.is_ready() {
            Some(self.sum / self.period as f64)
        } else {
            None
        }
    }

    /// Sample standard deviation (n-1) of the full window.
    pub fn std(&self) -> Option<f64> {
        if !self.is_ready() || self.period < 2 {
            return None;
        }
        let mean = self.sum / self.period as f64;
        let ss: f64 = self.buffer.iter().map(|v| (v - mean) * (v - mean)).sum();
        Some((ss / (self.period - 1) as f64).sqrt())
    }

    pub fn is_ready(&self) -> bool {
        self.count >= self.period
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_std_matches_naive() {
        let mut sma = Sma::new(4);
        for v in [9.0, 1.0, 2.0, 4.0, 6.0] {
            sma.push(v);
        }
        // window [1, 2, 4, 6]: mean 3.25
        let naive = ((2.25f64.powi(2) + 1.25f64.powi(2) + 0.75f64.powi(2) + 2.75f64.powi(2))
            / 3.0)
            .sqrt();
        assert_eq!(sma.value(), Some(3.25));
        assert!((sma.std().unwrap() - naive).abs() < 1e-12);
    }

    #[test]
    fn std_needs_full_window() {
        let mut sma = Sma::new(3);
        sma.push(1.0);
        sma.push(2.0);
        assert_eq!(sma.std(), None);
        assert_eq!(Sma::new(1).std(), None);
    }

    #[test]
    fn return_shock_leaves_the_window() {
        let mut sma = Sma::new(5);
        sma.push(0.08);
        for _ in 0..4 {
            sma.push(0.001);
        }
        let with_shock = sma.std().unwrap();
        sma.push(0.001);
        assert!(with_shock > 0.03);
        assert!(sma.std().unwrap() < 1e-12);
        assert!((sma.value().unwrap() - 0.001).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "SMA period must be > 0")]
    fn zero_period_panics() {
        Sma::new(0);
    }
}
