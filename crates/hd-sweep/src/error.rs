//! Engine-level error taxonomy.

use hd_core::CoreError;
use hd_fit::FitError;
use hd_thermo::ThermoError;
use thiserror::Error;

/// Result type for engine operations.
pub type SweepResult<T> = Result<T, SweepError>;

/// Errors surfaced to callers of the engine.
///
/// Point-level failures inside a sweep are filtered and never show up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    /// Salt or gas key not present in the catalog.
    #[error("Unknown species: {key}")]
    UnknownSpecies { key: String },

    /// A reference curve fit was requested with zero points.
    #[error("No reference data for gas {gas}")]
    NoReferenceData { gas: String },

    /// Non-finite, non-positive or otherwise unusable numeric input.
    #[error("Invalid range: {what}")]
    InvalidRange { what: &'static str },

    /// Every step of a sweep was infeasible.
    #[error("No feasible points among {requested} requested")]
    NoFeasiblePoints { requested: usize },
}

impl SweepError {
    /// Map a reference-curve fit failure for the named gas.
    pub fn from_fit(gas: &str, err: FitError) -> Self {
        match err {
            FitError::NoData => SweepError::NoReferenceData {
                gas: gas.to_string(),
            },
            FitError::InvalidInput { what } => SweepError::InvalidRange { what },
            FitError::DuplicateAbscissa { .. } => SweepError::InvalidRange {
                what: "reference curve has duplicate pressures",
            },
            FitError::Singular { .. } => SweepError::InvalidRange {
                what: "reference curve fit is singular",
            },
        }
    }
}

impl From<ThermoError> for SweepError {
    fn from(err: ThermoError) -> Self {
        match err {
            ThermoError::UnknownSpecies { key, .. } => SweepError::UnknownSpecies { key },
            ThermoError::Core(core) => core.into(),
        }
    }
}

impl From<CoreError> for SweepError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, .. }
            | CoreError::NonPositive { what, .. }
            | CoreError::InvalidArg { what } => SweepError::InvalidRange { what },
        }
    }
}
