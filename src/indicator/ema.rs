/// Span-based exponential moving average, seeded with the first value
/// (`alpha = 2 / (span + 1)`, no warm-up window).
#[derive(Debug, Clone)]
pub struct Ema {
    span: usize,
    alpha: f64,
    ema: Option<f64>,
}

impl Ema {
    pub fn new(span: usize) -> Self {
        assert!(span > 0, "EMA span must be > 0");
        Self::with_alpha(span, 2.0 / (span as f64 + 1.0))
    }

    /// Wilder-style smoothing uses `alpha = 1 / period`.
    pub fn wilder(period: usize) -> Self {
        assert!(period > 0, "EMA span must be > 0");
        Self::with_alpha(period, 1.0 / period as f64)
    }

    fn with_alpha(span: usize, alpha: f64) -> Self {
        Self {
            span,
            alpha,
            ema: None,
        }
    }

    pub fn push(&mut self, value: f64) -> f64 {
        let next = match self.ema {
            Some(prev) => prev + self.alpha * (value - prev),
            None => value,
        };
        self.ema = Some(next);
        next
    }

    pub fn value(&self) -> Option<f64> {
        self.ema
    }

    pub fn span(&self) -> usize {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_with_first_value() {
        let mut ema = Ema::new(3);
        assert_eq!(ema.value(), None);
        assert!((ema.push(10.0) - 10.0).abs() < f64::EPSILON);
        // alpha = 0.5
        assert!((ema.push(20.0) - 15.0).abs() < f64::EPSILON);
        assert!((ema.push(15.0) - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wilder_uses_reciprocal_period() {
        let mut ema = Ema::wilder(4);
        ema.push(0.0);
        assert!((ema.push(4.0) - 1.0).abs() < f64::EPSILON);
    }
}
