//! Declared-source configuration and its validation.
//!
//! An alpha model declares, at construction, exactly which external data
//! sources it is permitted to consume, as a mapping from registered source
//! name to source-specific parameters. [`SourcesConfig`] is that mapping,
//! constructible only through validation against a [`SourceRegistry`], so a
//! typo in a source name fails session setup instead of silently producing
//! forecasts from an empty feed.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AlphaModelError;

/// Membership test over the set of known data sources.
///
/// This is the only capability the contract layer needs from the source
/// registry; retrieval mechanics live elsewhere. Passing the registry in
/// explicitly keeps validation deterministic and testable with fake
/// registries. The registry is assumed stable for the duration of a session,
/// so validating the same configuration twice gives the same result.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use rota_traits::SourceRegistry;
///
/// let registry: HashSet<String> = ["momentum_factor", "earnings_calendar"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// assert!(registry.contains_source("momentum_factor"));
/// assert!(!registry.contains_source("bogus_source"));
/// ```
pub trait SourceRegistry {
    /// Returns whether `name` identifies a known data source.
    fn contains_source(&self, name: &str) -> bool;
}

impl SourceRegistry for HashSet<String> {
    fn contains_source(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl SourceRegistry for BTreeSet<String> {
    fn contains_source(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<T: SourceRegistry + ?Sized> SourceRegistry for &T {
    fn contains_source(&self, name: &str) -> bool {
        (**self).contains_source(name)
    }
}

/// A validated mapping from source name to source-specific parameters.
///
/// Every key is guaranteed to be a member of the [`SourceRegistry`] the
/// configuration was validated against; the only constructors are the
/// validating ones. After construction the mapping is immutable for the
/// model's lifetime, so it may be read concurrently without synchronization.
///
/// Parameters are arbitrary structured values ([`serde_json::Value`], an
/// object in practice); their meaning belongs to the source and the concrete
/// model, not to this layer.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use rota_traits::SourcesConfig;
/// use serde_json::json;
///
/// let registry: HashSet<String> = ["momentum_factor".to_string()].into_iter().collect();
/// let config = SourcesConfig::from_value(
///     json!({"momentum_factor": {"window": 20}}),
///     &registry,
/// )?;
///
/// assert!(config.contains("momentum_factor"));
/// assert_eq!(config.params("momentum_factor").unwrap()["window"], 20);
/// # Ok::<(), rota_traits::AlphaModelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourcesConfig(BTreeMap<String, Value>);

impl SourcesConfig {
    /// Validates a mapping of source names to parameters.
    ///
    /// On success the mapping is stored unchanged and becomes the model's
    /// source configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AlphaModelError::UnknownSource`] naming the offending key if
    /// any key is not a member of `registry`.
    pub fn new<R>(sources: BTreeMap<String, Value>, registry: &R) -> Result<Self, AlphaModelError>
    where
        R: SourceRegistry + ?Sized,
    {
        for name in sources.keys() {
            if !registry.contains_source(name) {
                return Err(AlphaModelError::UnknownSource(name.clone()));
            }
        }
        Ok(Self(sources))
    }

    /// Validates a raw JSON value as a source configuration.
    ///
    /// This is the dynamic-boundary constructor used when configuration
    /// arrives as untyped JSON (config files, wire messages). The value must
    /// be a JSON object; its entries are then key-checked as in
    /// [`SourcesConfig::new`].
    ///
    /// # Errors
    ///
    /// Returns [`AlphaModelError::SourceConfigNotAMapping`] naming the actual
    /// JSON type if `value` is not an object, or
    /// [`AlphaModelError::UnknownSource`] if a key is not registered.
    pub fn from_value<R>(value: Value, registry: &R) -> Result<Self, AlphaModelError>
    where
        R: SourceRegistry + ?Sized,
    {
        match value {
            Value::Object(map) => Self::new(map.into_iter().collect(), registry),
            other => Err(AlphaModelError::SourceConfigNotAMapping(
                json_type_name(&other).to_string(),
            )),
        }
    }

    /// An empty configuration, for models that consume no auxiliary sources.
    #[must_use]
    pub const fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the parameters declared for `source`, if present.
    #[must_use]
    pub fn params(&self, source: &str) -> Option<&Value> {
        self.0.get(source)
    }

    /// Returns whether `source` is declared in this configuration.
    #[must_use]
    pub fn contains(&self, source: &str) -> bool {
        self.0.contains_key(source)
    }

    /// Iterates over the declared source names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of declared sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no sources are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The JSON type name of a value, for error messages.
pub(crate) const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> HashSet<String> {
        ["momentum_factor", "earnings_calendar", "news_sentiment"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_valid_config_is_stored_unchanged() {
        let value = json!({
            "momentum_factor": {"window": 20},
            "news_sentiment": {"decay": 0.94, "lang": "en"},
        });
        let config = SourcesConfig::from_value(value.clone(), &registry()).unwrap();

        assert_eq!(config.len(), 2);
        assert_eq!(serde_json::to_value(&config).unwrap(), value);
        assert_eq!(config.params("momentum_factor"), Some(&json!({"window": 20})));
        assert_eq!(config.params("earnings_calendar"), None);
    }

    #[test]
    fn test_unknown_source_names_the_key() {
        let value = json!({
            "momentum_factor": {"window": 20},
            "bogus_source": {},
        });
        let err = SourcesConfig::from_value(value, &registry()).unwrap_err();
        assert_eq!(err, AlphaModelError::UnknownSource("bogus_source".to_string()));
    }

    #[test]
    fn test_non_mapping_config_is_rejected() {
        for (value, type_name) in [
            (json!(["momentum_factor"]), "an array"),
            (json!("momentum_factor"), "a string"),
            (json!(42), "a number"),
            (json!(null), "null"),
            (json!(true), "a boolean"),
        ] {
            let err = SourcesConfig::from_value(value, &registry()).unwrap_err();
            assert_eq!(
                err,
                AlphaModelError::SourceConfigNotAMapping(type_name.to_string())
            );
        }
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = SourcesConfig::from_value(json!({}), &registry()).unwrap();
        assert!(config.is_empty());

        let config = SourcesConfig::empty();
        assert_eq!(config.len(), 0);
        assert!(!config.contains("momentum_factor"));
    }

    #[test]
    fn test_validation_is_deterministic() {
        let value = json!({"momentum_factor": {"window": 20}});
        let reg = registry();

        let first = SourcesConfig::from_value(value.clone(), &reg).unwrap();
        let second = SourcesConfig::from_value(value, &reg).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_names_iterates_declared_sources() {
        let config = SourcesConfig::from_value(
            json!({"momentum_factor": {}, "news_sentiment": {}}),
            &registry(),
        )
        .unwrap();

        let names: Vec<_> = config.names().collect();
        assert_eq!(names, vec!["momentum_factor", "news_sentiment"]);
    }

    #[test]
    fn test_btree_set_registry() {
        let reg: BTreeSet<String> = ["momentum_factor".to_string()].into_iter().collect();
        assert!(reg.contains_source("momentum_factor"));

        let config =
            SourcesConfig::from_value(json!({"momentum_factor": {"window": 5}}), &reg).unwrap();
        assert!(config.contains("momentum_factor"));
    }
}
