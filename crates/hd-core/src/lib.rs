//! hd-core: shared foundation for the hydrate desalination engine.
//!
//! Contains:
//! - units (uom SI types + MPa/K constructors)
//! - numeric (Real + validation helpers + grids + bisection)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
