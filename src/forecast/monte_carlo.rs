use super::rng::NormalSampler;
use super::types::{DriftVol, Horizon, HorizonForecast};

pub const DEFAULT_HORIZON_PATHS: usize = 5_000;
pub const DEFAULT_TARGET_PATHS: usize = 10_000;
const STEPS_PER_DAY: f64 = 24.0;

/// Outcome of simulating one horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSummary {
    pub mean_terminal: f64,
    pub hit_fraction: f64,
}

/// Hourly step count for a horizon given in days.
pub fn steps_for_horizon(days: f64) -> usize {
    ((days * STEPS_PER_DAY).round() as usize).max(1)
}

/// A path "reaches" the target once a simulated price is at or above it.
fn reached(price: f64, target: f64) -> bool {
    price >= target
}

/// Simulate `paths` GBM paths of `steps` steps of length `dt` days each.
pub fn simulate_paths<S: NormalSampler>(
    s0: f64,
    params: DriftVol,
    target: f64,
    steps: usize,
    dt: f64,
    paths: usize,
    sampler: &mut S,
) -> PathSummary {
    if paths == 0 {
        return PathSummary {
            mean_terminal: s0,
            hit_fraction: 0.0,
        };
    }
    let drift = (params.mu - 0.5 * params.sigma * params.sigma) * dt;
    let shock = params.sigma * dt.sqrt();
    let log_s0 = s0.ln();

    let mut terminal_sum = 0.0;
    let mut hits = 0usize;
    for _ in 0..paths {
        let mut log_s = log_s0;
        let mut hit = false;
        for _ in 0..steps {
            log_s += drift + shock * sampler.next_normal();
            if !hit && reached(log_s.exp(), target) {
                hit = true;
            }
        }
        terminal_sum += log_s.exp();
        if hit {
            hits += 1;
        }
    }

    PathSummary {
        mean_terminal: terminal_sum / paths as f64,
        hit_fraction: hits as f64 / paths as f64,
    }
}

/// Monte Carlo forecast for each requested horizon with hourly steps.
pub fn simulate_horizons<S: NormalSampler>(
    s0: f64,
    params: DriftVol,
    target: f64,
    horizons: &[Horizon],
    paths: usize,
    sampler: &mut S,
) -> Vec<HorizonForecast> {
    horizons
        .iter()
        .map(|&horizon| {
            let days = horizon.days();
            let steps = steps_for_horizon(days);
            let dt = days / steps as f64;
            let summary = simulate_paths(s0, params, target, steps, dt, paths, sampler);
            tracing::debug!(
                horizon = %horizon,
                steps,
                paths,
                mean = summary.mean_terminal,
                hit = summary.hit_fraction,
                "Simulated horizon"
            );
            HorizonForecast {
                horizon,
                price: summary.mean_terminal,
                hit_probability: summary.hit_fraction,
            }
        })
        .collect()
}

/// Fraction of daily-step paths that reach `target` within `days` days.
pub fn hit_probability_within_days<S: NormalSampler>(
    s0: f64,
    params: DriftVol,
    target: f64,
    days: u32,
    paths: usize,
    sampler: &mut S,
) -> f64 {
    simulate_paths(s0, params, target, days as usize, 1.0, paths, sampler).hit_fraction
}
