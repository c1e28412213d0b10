//! hd-fit: closed-form curve fits for sampled reference curves.
//!
//! Two interchangeable strategies behind [`FitModel`]:
//! - [`PolynomialFit`]: least squares through the normal equations
//! - [`MonotoneSpline`]: shape-preserving cubic Hermite interpolation

pub mod error;
pub mod linalg;
pub mod model;
pub mod polynomial;
pub mod spline;

pub use error::{FitError, FitResult};
pub use model::{FitMethod, FitModel};
pub use polynomial::PolynomialFit;
pub use spline::MonotoneSpline;
