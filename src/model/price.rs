use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

const DAY_MS: i64 = 86_400_000;

/// One daily close from the market-chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp_ms: i64,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp_ms: i64, price: f64) -> Self {
        Self {
            timestamp_ms,
            price,
        }
    }

    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp_ms).single()
    }

    fn day_index(&self) -> i64 {
        self.timestamp_ms.div_euclid(DAY_MS)
    }
}

pub fn closes(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(|p| p.price).collect()
}

/// Append a spot price as today's close when the history ends on an earlier day.
///
/// Returns true when the point was appended.
pub fn append_spot_close(points: &mut Vec<PricePoint>, spot: f64, now_ms: i64) -> bool {
    if !spot.is_finite() {
        return false;
    }
    let today = PricePoint::new(now_ms, spot);
    match points.last() {
        Some(last) if last.day_index() >= today.day_index() => false,
        _ => {
            points.push(today);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_close_appended_only_on_new_day() {
        let mut points = vec![PricePoint::new(0, 100.0), PricePoint::new(DAY_MS, 101.0)];
        assert!(!append_spot_close(&mut points, 102.0, DAY_MS + 3_600_000));
        assert_eq!(points.len(), 2);

        assert!(append_spot_close(&mut points, 102.0, 2 * DAY_MS + 5));
        assert_eq!(points.len(), 3);
        assert!((points[2].price - 102.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_finite_spot_is_ignored() {
        let mut points = vec![PricePoint::new(0, 100.0)];
        assert!(!append_spot_close(&mut points, f64::NAN, 10 * DAY_MS));
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn closes_preserve_order() {
        let points = vec![PricePoint::new(0, 1.0), PricePoint::new(1, 2.0)];
        assert_eq!(closes(&points), vec![1.0, 2.0]);
    }
}
