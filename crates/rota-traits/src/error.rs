//! Error types for the Rota framework.
//!
//! This module defines two layers of errors. [`AlphaModelError`] covers
//! violations of the alpha model contract itself: misconfigured sources and
//! identity misuse. These are programmer/configuration errors that should
//! surface at session setup, before any tick runs. [`RotaError`] is the wider
//! framework error that lifecycle methods return, so data-fetch and
//! computation failures from concrete models propagate alongside contract
//! errors without being wrapped out of recognition.

use thiserror::Error;

/// A violation of the alpha model contract.
///
/// All variants are configuration or programmer errors, not runtime data
/// errors. Callers that want to handle misconfiguration uniformly can match
/// on the enum; the variants carry enough detail to report the specific
/// violation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlphaModelError {
    /// The source configuration was not a mapping of source names to their
    /// parameters. Carries the JSON type that was supplied instead.
    #[error("alpha model needs a mapping of sources and their parameters, not {0}")]
    SourceConfigNotAMapping(String),

    /// A declared source identifier is not present in the source registry.
    /// Carries the offending key.
    #[error("source {0:?} does not exist")]
    UnknownSource(String),

    /// The model name was read before ever being assigned.
    #[error("name has not been set")]
    NameNotSet,

    /// The model name was assigned a non-text value. Carries the JSON type
    /// of the rejected value.
    #[error("name has to be a string, not {0}")]
    InvalidNameType(String),
}

/// The main error type for Rota operations.
///
/// This enum encompasses contract violations plus the failures a concrete
/// model's `update`/`forecast` may raise, such as data-fetch problems. The
/// framework never retries or swallows these; they propagate to the
/// orchestrator, which decides whether to abort setup or skip the model.
#[derive(Debug, Error)]
pub enum RotaError {
    /// A violation of the alpha model contract.
    #[error(transparent)]
    Contract(#[from] AlphaModelError),

    /// Error fetching data from an external source during `update`.
    #[error("data fetch error: {0}")]
    DataFetch(String),

    /// Error while computing forecasts.
    #[error("forecast computation failed: {0}")]
    Computation(String),

    /// Generic error for other cases.
    #[error("{0}")]
    Other(String),
}

impl From<String> for RotaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for RotaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Rota operations.
///
/// Defaults to [`RotaError`]; contract-layer constructors and accessors name
/// [`AlphaModelError`] explicitly so callers can match the specific
/// violation.
pub type Result<T, E = RotaError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_error_display() {
        let err = AlphaModelError::UnknownSource("bogus_source".to_string());
        assert_eq!(err.to_string(), "source \"bogus_source\" does not exist");

        let err = AlphaModelError::NameNotSet;
        assert_eq!(err.to_string(), "name has not been set");

        let err = AlphaModelError::InvalidNameType("number".to_string());
        assert_eq!(err.to_string(), "name has to be a string, not number");
    }

    #[test]
    fn test_contract_error_is_transparent() {
        let err: RotaError = AlphaModelError::NameNotSet.into();
        assert_eq!(err.to_string(), "name has not been set");
        assert!(matches!(
            err,
            RotaError::Contract(AlphaModelError::NameNotSet)
        ));
    }

    #[test]
    fn test_error_from_string() {
        let err: RotaError = "fetch timed out".into();
        assert!(matches!(err, RotaError::Other(_)));

        let err: RotaError = String::from("fetch timed out").into();
        assert_eq!(err.to_string(), "fetch timed out");
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert!(ok_result.is_ok());

        let err_result: Result<i32> = Err(RotaError::DataFetch("no quotes".to_string()));
        assert!(err_result.is_err());
    }
}
