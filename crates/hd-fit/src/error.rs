//! Curve fitting errors.

use thiserror::Error;

/// Result type for curve fitting.
pub type FitResult<T> = Result<T, FitError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// No samples were supplied.
    #[error("No data points to fit")]
    NoData,

    /// Invalid argument (mismatched lengths, non-finite samples).
    #[error("Invalid fit input: {what}")]
    InvalidInput { what: &'static str },

    /// Two samples share an abscissa where a function of x is required.
    #[error("Duplicate abscissa at x = {x}")]
    DuplicateAbscissa { x: f64 },

    /// The linear system has no unique solution.
    #[error("Singular linear system (pivot {pivot:e} in column {column})")]
    Singular { column: usize, pivot: f64 },
}
