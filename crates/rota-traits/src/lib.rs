#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/rota/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core trait definitions for the Rota algorithmic trading framework.
//!
//! This crate provides the foundational abstractions for plugging forecasting
//! strategies into a backtest or live session: the alpha model lifecycle,
//! declared-source validation, and the identity contract.

/// The version of the rota-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod alpha;
pub mod error;
pub mod forecast;
pub mod sources;
pub mod types;

// Re-exports
pub use alpha::{AlphaModel, ModelCore};
pub use error::{AlphaModelError, Result, RotaError};
pub use forecast::Forecast;
pub use sources::{SourceRegistry, SourcesConfig};
pub use types::{ModelId, Symbol, Timestamp};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
