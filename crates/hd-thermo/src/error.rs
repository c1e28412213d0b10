//! Thermodynamic model errors.

use hd_core::CoreError;
use thiserror::Error;

/// Result type for thermodynamic model operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors that can occur while resolving species or evaluating correlations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// Salt or gas key not present in the catalog.
    #[error("Unknown {kind} species: {key}")]
    UnknownSpecies { kind: &'static str, key: String },

    /// Shared numeric validation failure.
    #[error(transparent)]
    Core(#[from] CoreError),
}
