//! Common types used throughout the Rota framework.
//!
//! This module defines the identifiers and temporal types shared by alpha
//! models, the scheduler, and downstream portfolio construction.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// The timestamp of a scheduling tick.
///
/// The scheduler passes one of these to [`AlphaModel::update`] on every tick.
/// The contract treats it as opaque: models only promise that after `update`
/// returns, their state reflects information available as of this instant.
///
/// [`AlphaModel::update`]: crate::AlphaModel::update
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A market symbol identifier.
///
/// Symbols identify tradable assets across the Rota framework. Typically
/// these are ticker symbols like "AAPL" or "MSFT".
pub type Symbol = String;

/// An opaque, caller-supplied model identifier.
///
/// Assigned at construction and immutable thereafter; downstream components
/// use it to attribute forecasts to their originating model. The orchestrator
/// owns format and uniqueness; this layer performs no validation. Integer and
/// string ids both convert losslessly:
///
/// ```
/// use rota_traits::ModelId;
///
/// let a = ModelId::from(1u64);
/// let b = ModelId::from("momentum-v1");
/// assert_eq!(a.as_str(), "1");
/// assert_eq!(b.as_str(), "momentum-v1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for ModelId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_model_id_from_integer_and_string() {
        assert_eq!(ModelId::from(7u64), ModelId::from("7"));
        assert_eq!(ModelId::from("alpha_1").as_str(), "alpha_1");
        assert_eq!(ModelId::from(String::from("alpha_1")).to_string(), "alpha_1");
    }

    #[test]
    fn test_model_id_is_hashable() {
        use std::collections::HashMap;

        let mut by_id = HashMap::new();
        by_id.insert(ModelId::from(1u64), "momentum");
        by_id.insert(ModelId::from(2u64), "reversion");
        assert_eq!(by_id.get(&ModelId::from(1u64)), Some(&"momentum"));
    }

    #[test]
    fn test_model_id_serde_transparent() {
        let id = ModelId::from("momentum-v1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"momentum-v1\"");

        let back: ModelId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_timestamp_type() {
        let dt: Timestamp = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 14, 30, 0).unwrap();
        assert_eq!(dt.timestamp(), 1_704_205_800);
    }
}
