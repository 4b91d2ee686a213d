use super::types::{BlendWeights, BlendedForecast, DailyHorizons, Regime};

/// Share of the way from the 1d ARIMA value toward the LSTM value used for 1h.
pub const ONE_HOUR_LSTM_FACTOR: f64 = 23.0 / 24.0;

pub fn regime_weights(regime: Regime) -> BlendWeights {
    match regime {
        Regime::Bull => BlendWeights {
            arima: 0.25,
            prophet: 0.35,
            lstm: 0.40,
        },
        Regime::Bear => BlendWeights {
            arima: 0.40,
            prophet: 0.35,
            lstm: 0.25,
        },
        Regime::Sideways => BlendWeights {
            arima: 0.35,
            prophet: 0.35,
            lstm: 0.30,
        },
    }
}

/// Weighted sum per horizon. The single LSTM value stands in for 1w and 1m too.
pub fn blend(
    regime: Regime,
    arima: &DailyHorizons,
    prophet: &DailyHorizons,
    lstm: f64,
) -> BlendedForecast {
    let w = regime_weights(regime);
    let mix = |a: f64, p: f64| w.arima * a + w.prophet * p + w.lstm * lstm;
    BlendedForecast {
        one_hour: arima.one_day + (lstm - arima.one_day) * ONE_HOUR_LSTM_FACTOR,
        one_day: mix(arima.one_day, prophet.one_day),
        one_week: mix(arima.one_week, prophet.one_week),
        one_month: mix(arima.one_month, prophet.one_month),
    }
}
