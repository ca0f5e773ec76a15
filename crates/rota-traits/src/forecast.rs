//! The forecast value produced by alpha models.
//!
//! The contract only promises that [`AlphaModel::forecast`] returns an
//! ordered sequence of these; how portfolio construction interprets them is
//! outside this crate.
//!
//! [`AlphaModel::forecast`]: crate::AlphaModel::forecast

use serde::{Deserialize, Serialize};

use crate::{ModelId, Symbol, Timestamp};

/// A directional/magnitude prediction for a single asset.
///
/// Forecasts flow from alpha models to the portfolio construction stage,
/// which turns them into orders. The `model_id` field attributes each
/// forecast to its originating model so that many concurrently active models
/// can be tracked through the pipeline.
///
/// # Value Convention
///
/// `value` is a signed score: positive predicts the asset up, negative down,
/// with magnitude expressing conviction. The scale is model-defined; a
/// portfolio constructor combining several models is expected to normalize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// The model that produced this forecast.
    pub model_id: ModelId,

    /// The asset the forecast applies to.
    pub symbol: Symbol,

    /// Signed direction/magnitude score.
    pub value: f64,

    /// The tick timestamp the forecast was generated for.
    pub dt: Timestamp,
}

impl Forecast {
    /// Creates a new forecast.
    pub fn new(
        model_id: impl Into<ModelId>,
        symbol: impl Into<Symbol>,
        value: f64,
        dt: Timestamp,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            symbol: symbol.into(),
            value,
            dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_forecast_new() {
        let dt = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let forecast = Forecast::new(1u64, "AAPL", 0.42, dt);

        assert_eq!(forecast.model_id, ModelId::from(1u64));
        assert_eq!(forecast.symbol, "AAPL");
        assert_eq!(forecast.value, 0.42);
        assert_eq!(forecast.dt, dt);
    }

    #[test]
    fn test_forecast_serde_round_trip() {
        let dt = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let forecast = Forecast::new("momentum-v1", "MSFT", -1.5, dt);

        let json = serde_json::to_string(&forecast).unwrap();
        let back: Forecast = serde_json::from_str(&json).unwrap();
        assert_eq!(back, forecast);
    }
}
