//! In-memory source registry.

use std::collections::BTreeSet;

use rota_traits::SourceRegistry;
use serde::{Deserialize, Serialize};

use crate::catalog::builtin_sources;

/// An in-memory set of known data-source names.
///
/// This is the [`SourceRegistry`] implementation a backtest or live session
/// typically injects into alpha model construction. It is built once at
/// session setup and treated as immutable for the session's duration, so
/// validation against it is deterministic.
///
/// # Examples
///
/// ```
/// use rota_sources::SourceSet;
/// use rota_traits::SourceRegistry;
///
/// let registry: SourceSet = ["momentum_factor", "news_sentiment"]
///     .into_iter()
///     .collect();
///
/// assert!(registry.contains_source("momentum_factor"));
/// assert!(!registry.contains_source("bogus_source"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceSet(BTreeSet<String>);

impl SourceSet {
    /// Creates an empty source set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Creates a source set containing every built-in catalog source.
    #[must_use]
    pub fn builtin() -> Self {
        builtin_sources()
            .into_iter()
            .map(|info| info.name)
            .collect()
    }

    /// Registers a source name, returning whether it was newly added.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    /// Returns the number of registered sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no sources are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the registered source names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl SourceRegistry for SourceSet {
    fn contains_source(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for SourceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
