use std::collections::HashMap;

use serde::Deserialize;

use crate::model::price::PricePoint;

/// `/simple/price` body, e.g. `{"bitcoin":{"usd":67000.5}}`.
pub type SimplePriceResponse = HashMap<String, HashMap<String, Option<f64>>>;

/// `/coins/{id}/market_chart` body. Only `prices` is read.
#[derive(Debug, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<(f64, Option<f64>)>,
}

impl MarketChartResponse {
    /// Daily closes in order, entries with missing or non-finite prices dropped.
    pub fn usable_points(&self) -> Vec<PricePoint> {
        self.prices
            .iter()
            .filter_map(|&(ts, price)| match price {
                Some(p) if p.is_finite() && ts.is_finite() => Some(PricePoint::new(ts as i64, p)),
                _ => None,
            })
            .collect()
    }
}

pub fn spot_from_simple_price(
    body: &SimplePriceResponse,
    coin_id: &str,
    vs_currency: &str,
) -> Option<f64> {
    body.get(coin_id)
        .and_then(|quotes| quotes.get(vs_currency))
        .copied()
        .flatten()
        .filter(|p| p.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_chart_drops_null_prices() {
        let body = r#"{"prices":[[1700000000000,35000.5],[1700086400000,null],[1700172800000,36000]],"market_caps":[]}"#;
        let resp: MarketChartResponse = serde_json::from_str(body).unwrap();
        let points = resp.usable_points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].timestamp_ms, 1_700_000_000_000);
        assert!((points[1].price - 36000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn simple_price_lookup() {
        let body: SimplePriceResponse =
            serde_json::from_str(r#"{"bitcoin":{"usd":67000.25}}"#).unwrap();
        assert_eq!(spot_from_simple_price(&body, "bitcoin", "usd"), Some(67000.25));
        assert_eq!(spot_from_simple_price(&body, "bitcoin", "eur"), None);
        assert_eq!(spot_from_simple_price(&body, "ethereum", "usd"), None);
    }
}
