use chrono::{DateTime, Duration, NaiveDate, Utc};

use super::monte_carlo::hit_probability_within_days;
use super::projection::first_day_reaching;
use super::rng::NormalSampler;
use super::types::{DriftVol, ProjectionPoint, TargetPrediction};

/// Locate the first projected day at or above `target` and estimate how often
/// simulated daily paths get there by then.
pub fn predict_target<S: NormalSampler>(
    s0: f64,
    params: DriftVol,
    projection: &[ProjectionPoint],
    target: f64,
    paths: usize,
    as_of: Option<DateTime<Utc>>,
    sampler: &mut S,
) -> TargetPrediction {
    let Some(day) = first_day_reaching(projection, target) else {
        return TargetPrediction {
            target_price: target,
            predicted_day: None,
            predicted_date: None,
            probability: 0.0,
        };
    };

    let probability = hit_probability_within_days(s0, params, target, day, paths, sampler);
    TargetPrediction {
        target_price: target,
        predicted_day: Some(day),
        predicted_date: as_of.map(|t| date_after(t, day)),
        probability,
    }
}

fn date_after(as_of: DateTime<Utc>, days: u32) -> NaiveDate {
    (as_of + Duration::days(days as i64)).date_naive()
}
