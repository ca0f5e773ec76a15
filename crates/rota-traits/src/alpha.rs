//! Alpha model contract: identity, declared sources, and the
//! `update`/`forecast` lifecycle.
//!
//! This module defines the [`AlphaModel`] trait, the seam across which
//! arbitrary forecasting strategies (trend-following, mean-reversion,
//! momentum, ML-derived signals) plug into the backtest/live pipeline, and
//! [`ModelCore`], the identity and source-configuration state every concrete
//! model embeds.

use serde_json::Value;

use crate::error::{AlphaModelError, Result};
use crate::sources::{json_type_name, SourceRegistry, SourcesConfig};
use crate::{Forecast, ModelId, Timestamp};

/// Identity and declared-source state shared by every alpha model.
///
/// Concrete models embed one of these and hand it back from
/// [`AlphaModel::core`]; the trait's provided accessors delegate to it.
///
/// The `id` is caller-supplied and immutable. The `name` starts unset and
/// must be assigned before it is read; reading it earlier is a contract
/// violation, which keeps anonymous models out of logs, reports, and
/// per-model configuration keyed by name. The source configuration is
/// validated at construction and immutable thereafter.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use rota_traits::{AlphaModelError, ModelCore};
/// use serde_json::json;
///
/// let registry: HashSet<String> = ["momentum_factor".to_string()].into_iter().collect();
/// let mut core = ModelCore::new(
///     1u64,
///     json!({"momentum_factor": {"window": 20}}),
///     &registry,
/// )?;
///
/// assert_eq!(core.name(), Err(AlphaModelError::NameNotSet));
/// core.set_name("MomentumV1");
/// assert_eq!(core.name(), Ok("MomentumV1"));
/// # Ok::<(), AlphaModelError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ModelCore {
    id: ModelId,
    name: Option<String>,
    sources: SourcesConfig,
}

impl ModelCore {
    /// Creates the core state for a model, validating its declared sources.
    ///
    /// `sources` is the raw configuration value, a JSON object mapping each
    /// source name to its parameters. Validation happens here, before the
    /// model can be used at all, so a misconfigured model fails session setup
    /// rather than its first tick.
    ///
    /// # Errors
    ///
    /// Returns [`AlphaModelError::SourceConfigNotAMapping`] if `sources` is
    /// not a JSON object, or [`AlphaModelError::UnknownSource`] if a key is
    /// not a member of `registry`.
    pub fn new<R>(
        id: impl Into<ModelId>,
        sources: Value,
        registry: &R,
    ) -> Result<Self, AlphaModelError>
    where
        R: SourceRegistry + ?Sized,
    {
        Ok(Self {
            id: id.into(),
            name: None,
            sources: SourcesConfig::from_value(sources, registry)?,
        })
    }

    /// Creates the core state from an already-validated source configuration.
    ///
    /// Useful when several models share one configuration, or when the
    /// configuration was built through [`SourcesConfig::new`].
    #[must_use]
    pub const fn with_sources(id: ModelId, sources: SourcesConfig) -> Self {
        Self {
            id,
            name: None,
            sources,
        }
    }

    /// The caller-supplied model identifier.
    #[must_use]
    pub const fn id(&self) -> &ModelId {
        &self.id
    }

    /// The human-readable model name.
    ///
    /// # Errors
    ///
    /// Returns [`AlphaModelError::NameNotSet`] if no name has ever been
    /// assigned.
    pub fn name(&self) -> Result<&str, AlphaModelError> {
        self.name.as_deref().ok_or(AlphaModelError::NameNotSet)
    }

    /// Assigns the human-readable model name.
    ///
    /// The type system already guarantees the name is text; for names
    /// arriving as untyped JSON use [`ModelCore::set_name_value`].
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Assigns the name from an untyped JSON value.
    ///
    /// This is the dynamic-boundary setter for names arriving from config
    /// files or wire messages, where a programmer error can supply a number
    /// or object instead of text.
    ///
    /// # Errors
    ///
    /// Returns [`AlphaModelError::InvalidNameType`] naming the rejected JSON
    /// type if `value` is not a string; the previous name state (unset or
    /// set) is left unchanged.
    pub fn set_name_value(&mut self, value: &Value) -> Result<(), AlphaModelError> {
        match value {
            Value::String(name) => {
                self.name = Some(name.clone());
                Ok(())
            }
            other => Err(AlphaModelError::InvalidNameType(
                json_type_name(other).to_string(),
            )),
        }
    }

    /// The validated source configuration.
    #[must_use]
    pub const fn sources(&self) -> &SourcesConfig {
        &self.sources
    }
}

/// An alpha model that produces trading forecasts.
///
/// A concrete implementation takes in a universe of assets plus its declared
/// external (non-pricing/fundamental) data sources and produces a list of
/// [`Forecast`] values. These forecasts are consumed by the portfolio
/// construction stage to generate orders.
///
/// The framework is generic enough to support many types of forecast model:
/// short- and long-term trend-following, mean-reversion, momentum, and so on.
///
/// # Lifecycle
///
/// The scheduler drives each model through a two-phase protocol, once per
/// tick, in increasing timestamp order:
///
/// 1. [`update`](AlphaModel::update) refreshes whatever pricing and
///    non-pricing source data the model needs for this tick. It performs no
///    forecasting; after it returns, the model's state reflects information
///    available as of the given timestamp.
/// 2. [`forecast`](AlphaModel::forecast) projects that state into the tick's
///    ordered forecast sequence. It must not refresh data.
///
/// Both methods are required, so a strategy that omits either does not
/// compile. Calling `forecast` before the first `update` is not policed at
/// this layer; implementations should return an empty sequence in that case
/// and may document a stricter policy. Strict alternation per tick is the
/// scheduler's discipline, not the model's.
///
/// `update` takes `&mut self`, so the borrow checker enforces the
/// single-logical-owner assumption; `&self` reads of the identity and source
/// configuration may be shared freely.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use rota_traits::{AlphaModel, Forecast, ModelCore, Result, Timestamp};
/// use serde_json::json;
///
/// struct ConstantAlpha {
///     core: ModelCore,
///     last_tick: Option<Timestamp>,
/// }
///
/// impl AlphaModel for ConstantAlpha {
///     fn core(&self) -> &ModelCore {
///         &self.core
///     }
///
///     fn core_mut(&mut self) -> &mut ModelCore {
///         &mut self.core
///     }
///
///     fn update(&mut self, dt: Timestamp) -> Result<()> {
///         self.last_tick = Some(dt);
///         Ok(())
///     }
///
///     fn forecast(&self) -> Result<Vec<Forecast>> {
///         let Some(dt) = self.last_tick else {
///             return Ok(Vec::new());
///         };
///         Ok(vec![Forecast::new(self.id().clone(), "AAPL", 1.0, dt)])
///     }
/// }
///
/// # fn main() -> Result<()> {
/// let registry: HashSet<String> = ["momentum_factor".to_string()].into_iter().collect();
/// let mut model = ConstantAlpha {
///     core: ModelCore::new(1u64, json!({"momentum_factor": {"window": 20}}), &registry)?,
///     last_tick: None,
/// };
///
/// model.set_name("ConstantV1");
/// model.update(chrono::Utc::now())?;
/// let forecasts = model.forecast()?;
/// assert_eq!(forecasts.len(), 1);
/// # Ok(())
/// # }
/// ```
pub trait AlphaModel: Send + Sync {
    /// The identity and source-configuration state of this model.
    fn core(&self) -> &ModelCore;

    /// Mutable access to the model's core state.
    fn core_mut(&mut self) -> &mut ModelCore;

    /// Refreshes the model's source data for the tick at `dt`.
    ///
    /// After this returns, the model's internal state reflects information
    /// available as of `dt`. No forecasting happens here.
    ///
    /// # Errors
    ///
    /// Implementations surface their own failures, typically
    /// [`RotaError::DataFetch`](crate::RotaError::DataFetch); the framework
    /// propagates them to the scheduler unchanged. Retry and timeout policy,
    /// if any, belongs to the implementation or the scheduler.
    fn update(&mut self, dt: Timestamp) -> Result<()>;

    /// Produces the ordered forecast sequence for the current tick.
    ///
    /// A pure projection of the state set up by the most recent
    /// [`update`](AlphaModel::update); must not refresh data. May return an
    /// empty sequence.
    ///
    /// # Errors
    ///
    /// Implementations surface their own computation failures; the framework
    /// propagates them unchanged.
    fn forecast(&self) -> Result<Vec<Forecast>>;

    /// The caller-supplied model identifier.
    fn id(&self) -> &ModelId {
        self.core().id()
    }

    /// The human-readable model name.
    ///
    /// # Errors
    ///
    /// Returns [`AlphaModelError::NameNotSet`] if no name has been assigned.
    fn name(&self) -> Result<&str, AlphaModelError> {
        self.core().name()
    }

    /// Assigns the human-readable model name.
    fn set_name(&mut self, name: impl Into<String>)
    where
        Self: Sized,
    {
        self.core_mut().set_name(name);
    }

    /// The validated source configuration this model may consume.
    fn sources(&self) -> &SourcesConfig {
        self.core().sources()
    }
}
