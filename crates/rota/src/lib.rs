#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/rota/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # rota
//!
//! Alpha model contract layer for algorithmic trading research.
//!
//! rota is an umbrella crate that re-exports all rota sub-crates for
//! convenience. It provides a unified API for defining alpha models,
//! validating their declared data sources, and driving them through the
//! per-tick forecast lifecycle.
//!
//! ## Quick Start
//!
//! ```
//! use rota::prelude::*;
//! use serde_json::json;
//!
//! struct MomentumAlpha {
//!     core: ModelCore,
//!     last_tick: Option<Timestamp>,
//! }
//!
//! impl AlphaModel for MomentumAlpha {
//!     fn core(&self) -> &ModelCore {
//!         &self.core
//!     }
//!
//!     fn core_mut(&mut self) -> &mut ModelCore {
//!         &mut self.core
//!     }
//!
//!     fn update(&mut self, dt: Timestamp) -> Result<()> {
//!         // Refresh declared-source data as of `dt` here.
//!         self.last_tick = Some(dt);
//!         Ok(())
//!     }
//!
//!     fn forecast(&self) -> Result<Vec<Forecast>> {
//!         let Some(dt) = self.last_tick else {
//!             return Ok(Vec::new());
//!         };
//!         Ok(vec![Forecast::new(self.id().clone(), "AAPL", 0.8, dt)])
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! // Session setup: registry first, then models validated against it.
//! let registry = SourceSet::builtin();
//! let mut model = MomentumAlpha {
//!     core: ModelCore::new(1u64, json!({"momentum_factor": {"window": 20}}), &registry)?,
//!     last_tick: None,
//! };
//! model.set_name("MomentumV1");
//!
//! // One scheduling tick: update, then forecast.
//! model.update(chrono::Utc::now())?;
//! let forecasts = model.forecast()?;
//! assert_eq!(forecasts[0].symbol, "AAPL");
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core contract definitions ([`AlphaModel`], [`ModelCore`],
//!   [`SourcesConfig`], the error taxonomy)
//! - [`sources`] - Source registry implementations ([`SourceSet`], the
//!   built-in catalog)
//!
//! ## Architecture
//!
//! 1. A session builds a [`SourceSet`] naming every data feed it exposes
//! 2. Each alpha model is constructed with an id and a source configuration,
//!    validated against that registry before any tick runs
//! 3. The scheduler calls `update(dt)` then `forecast()` once per tick
//! 4. Forecasts flow to portfolio construction, attributed by model id

/// Version information for the rota crate.
///
/// This constant contains the current version of rota as specified in Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core contract definitions for rota.
///
/// This module re-exports the foundational items that define the rota API:
///
/// - [`AlphaModel`] - The capability every forecasting strategy implements
/// - [`ModelCore`] - Identity and source-configuration state models embed
/// - [`SourcesConfig`] / [`SourceRegistry`] - Declared-source validation
/// - [`AlphaModelError`] / [`RotaError`] - The error taxonomy
pub mod traits {
    pub use rota_traits::*;
}

/// Source registry implementations.
///
/// This module re-exports the [`rota_sources`] crate: the in-memory
/// [`SourceSet`] registry and the built-in source catalog with its discovery
/// helpers.
pub mod sources {
    pub use rota_sources::*;
}

// Re-export core items at top level for convenience
pub use rota_traits::{AlphaModel, AlphaModelError, ModelCore, Result, RotaError};

// Re-export common types
pub use rota_sources::SourceSet;
pub use rota_traits::{Forecast, ModelId, SourceRegistry, SourcesConfig, Symbol, Timestamp};

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and traits for
/// working with rota. Import it with:
///
/// ```
/// use rota::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{AlphaModel, AlphaModelError, ModelCore, Result, RotaError};
    pub use crate::{Forecast, ModelId, SourceRegistry, SourceSet, SourcesConfig};
    pub use crate::{Symbol, Timestamp};
}
