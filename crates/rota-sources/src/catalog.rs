//! Catalog of built-in data sources.
//!
//! This module provides metadata and discovery functionality for the data
//! sources shipped with the framework. The catalog is informational: what a
//! given session actually exposes is whatever [`SourceSet`](crate::SourceSet)
//! it was built with.

use serde::{Deserialize, Serialize};

/// Data-source category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SourceCategory {
    /// Price and volume feeds
    Pricing,
    /// Fundamental financial data
    Fundamental,
    /// Alternative data feeds
    Alternative,
    /// Signals derived from other sources
    Derived,
}

impl SourceCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Pricing => "End-of-day and intraday price/volume feeds",
            Self::Fundamental => "Financial statement and reference data",
            Self::Alternative => "Alternative data (sentiment, flow, events)",
            Self::Derived => "Signals computed from other registered sources",
        }
    }
}

/// Metadata about a data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Unique identifier for the source
    pub name: &'static str,

    /// Category classification
    pub category: SourceCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Whether the feed requires a paid subscription
    pub requires_subscription: bool,
}

/// Get information about all built-in sources.
#[must_use]
pub fn builtin_sources() -> Vec<SourceInfo> {
    vec![
        // Pricing sources
        SourceInfo {
            name: "eod_prices",
            category: SourceCategory::Pricing,
            description: "End-of-day OHLCV bars",
            requires_subscription: false,
        },
        SourceInfo {
            name: "intraday_prices",
            category: SourceCategory::Pricing,
            description: "Intraday OHLCV bars",
            requires_subscription: true,
        },
        // Fundamental sources
        SourceInfo {
            name: "fundamentals",
            category: SourceCategory::Fundamental,
            description: "Quarterly financial statements",
            requires_subscription: true,
        },
        SourceInfo {
            name: "earnings_calendar",
            category: SourceCategory::Fundamental,
            description: "Scheduled earnings announcement dates",
            requires_subscription: false,
        },
        // Alternative sources
        SourceInfo {
            name: "news_sentiment",
            category: SourceCategory::Alternative,
            description: "Per-symbol news sentiment scores",
            requires_subscription: true,
        },
        SourceInfo {
            name: "insider_transactions",
            category: SourceCategory::Alternative,
            description: "Reported insider buy/sell filings",
            requires_subscription: false,
        },
        // Derived sources
        SourceInfo {
            name: "momentum_factor",
            category: SourceCategory::Derived,
            description: "Cross-sectional momentum scores",
            requires_subscription: false,
        },
        SourceInfo {
            name: "volatility_surface",
            category: SourceCategory::Derived,
            description: "Fitted implied-volatility surfaces",
            requires_subscription: true,
        },
    ]
}

/// Get all built-in sources in a specific category.
#[must_use]
pub fn sources_by_category(category: &SourceCategory) -> Vec<SourceInfo> {
    builtin_sources()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific built-in source by name.
#[must_use]
pub fn get_source_info(name: &str) -> Option<SourceInfo> {
    builtin_sources().into_iter().find(|info| info.name == name)
}

/// Get all source categories with built-in sources.
#[must_use]
pub fn available_categories() -> Vec<SourceCategory> {
    let mut categories: Vec<_> = builtin_sources()
        .into_iter()
        .map(|info| info.category)
        .collect();
    categories.sort_unstable();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sources() {
        let sources = builtin_sources();
        assert!(!sources.is_empty());

        let categories: Vec<_> = sources.iter().map(|s| s.category).collect();
        assert!(categories.contains(&SourceCategory::Pricing));
        assert!(categories.contains(&SourceCategory::Fundamental));
        assert!(categories.contains(&SourceCategory::Alternative));
        assert!(categories.contains(&SourceCategory::Derived));
    }

    #[test]
    fn test_sources_by_category() {
        let pricing = sources_by_category(&SourceCategory::Pricing);
        assert_eq!(pricing.len(), 2);

        let derived = sources_by_category(&SourceCategory::Derived);
        assert_eq!(derived.len(), 2);
        assert!(derived.iter().all(|s| s.category == SourceCategory::Derived));
    }

    #[test]
    fn test_get_source_info() {
        let info = get_source_info("momentum_factor");
        assert!(info.is_some());

        let info = info.unwrap();
        assert_eq!(info.name, "momentum_factor");
        assert_eq!(info.category, SourceCategory::Derived);
        assert!(!info.requires_subscription);

        let missing = get_source_info("nonexistent_source");
        assert!(missing.is_none());
    }

    #[test]
    fn test_category_descriptions() {
        assert!(!SourceCategory::Pricing.description().is_empty());
        assert!(!SourceCategory::Fundamental.description().is_empty());
        assert!(!SourceCategory::Alternative.description().is_empty());
        assert!(!SourceCategory::Derived.description().is_empty());
    }

    #[test]
    fn test_available_categories() {
        let categories = available_categories();
        assert_eq!(
            categories,
            vec![
                SourceCategory::Pricing,
                SourceCategory::Fundamental,
                SourceCategory::Alternative,
                SourceCategory::Derived,
            ]
        );
    }

    #[test]
    fn test_source_names_are_unique() {
        let sources = builtin_sources();
        let mut names: Vec<_> = sources.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), sources.len());
    }
}
