use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of standard-normal variates for the Monte Carlo paths.
pub trait NormalSampler {
    fn next_normal(&mut self) -> f64;
}

/// Box–Muller transform over two independent uniform(0,1) draws.
///
/// Only the cosine branch is used; the sine partner is discarded.
#[derive(Debug, Clone)]
pub struct BoxMuller<R = StdRng> {
    rng: R,
}

impl<R: Rng> BoxMuller<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn open_unit(&mut self) -> f64 {
        // gen::<f64>() is [0, 1); flip it to (0, 1] so ln() stays finite.
        1.0 - self.rng.gen::<f64>()
    }
}

impl BoxMuller<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> NormalSampler for BoxMuller<R> {
    fn next_normal(&mut self) -> f64 {
        let u1 = self.open_unit();
        let u2 = self.open_unit();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}

impl<S: NormalSampler + ?Sized> NormalSampler for &mut S {
    fn next_normal(&mut self) -> f64 {
        (**self).next_normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_streams_repeat() {
        let mut a = BoxMuller::seeded(7);
        let mut b = BoxMuller::seeded(7);
        for _ in 0..100 {
            assert_eq!(a.next_normal(), b.next_normal());
        }
    }

    #[test]
    fn draws_look_standard_normal() {
        let mut s = BoxMuller::seeded(11);
        let n = 50_000;
        let draws: Vec<f64> = (0..n).map(|_| s.next_normal()).collect();
        let mean = draws.iter().sum::<f64>() / n as f64;
        let var = draws.iter().map(|z| (z - mean) * (z - mean)).sum::<f64>() / n as f64;
        assert!(draws.iter().all(|z| z.is_finite()));
        assert!(mean.abs() < 0.03, "mean = {}", mean);
        assert!((var - 1.0).abs() < 0.05, "var = {}", var);
    }
}
