use super::types::{DriftVol, ProjectionPoint};

const Z_95: f64 = 1.96;

/// Closed-form log-normal projection for days `1..=days` with a 95% band.
///
/// Steps are treated as i.i.d.; there is no path dependence.
pub fn daily_projection(s0: f64, params: DriftVol, days: u32) -> Vec<ProjectionPoint> {
    let log_s0 = s0.ln();
    let sigma2 = params.sigma * params.sigma;
    let drift = params.mu - 0.5 * sigma2;

    (1..=days)
        .map(|day| {
            let d = day as f64;
            let expected_log = log_s0 + drift * d;
            let variance = sigma2 * d;
            let half_width = Z_95 * variance.sqrt();
            ProjectionPoint {
                day,
                price: (expected_log + 0.5 * variance).exp(),
                lower: (expected_log - half_width).exp(),
                upper: (expected_log + half_width).exp(),
            }
        })
        .collect()
}

/// First projected day whose expected price is at or above `target`.
pub fn first_day_reaching(projection: &[ProjectionPoint], target: f64) -> Option<u32> {
    projection.iter().find(|p| p.price >= target).map(|p| p.day)
}
