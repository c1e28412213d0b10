//! hd-thermo: brine and hydrate thermodynamics for the desalination engine.
//!
//! Provides:
//! - Salt and hydrate-former species definitions (NaCl, CaCl₂, CH₄, ...)
//! - Pure-water dissociation curves for the built-in gases
//! - Electrolyte model: mass salinity ↔ effective ionic mole fraction
//! - HLS water-activity correlation and its bisection inverse
//! - Equilibrium shift: supercooling ↔ ln(aw) at a reference temperature
//!
//! # Example
//!
//! ```
//! use hd_thermo::{activity, electrolyte, equilibrium, Gas, GasSpecies, SaltSpecies};
//!
//! let x = electrolyte::x_from_salinity(3.5, SaltSpecies::NaCl);
//! let lnaw = activity::ln_aw(x);
//! let beta = equilibrium::beta_effective(&Gas::Builtin(GasSpecies::CH4), false);
//! let dt = equilibrium::delta_t(beta, lnaw, 282.2);
//! assert!(dt > 0.0);
//! ```

pub mod activity;
pub mod catalog;
pub mod electrolyte;
pub mod equilibrium;
pub mod error;
pub mod gas;
pub mod species;

// Re-exports for ergonomics
pub use activity::{ln_aw, solve_x_from_lnaw};
pub use catalog::CYCLOPENTANE_T0_K;
pub use electrolyte::{mole_percent_salinity, salinity_from_x, x_from_salinity};
pub use equilibrium::{beta_effective, delta_t, ln_aw_from_delta_t};
pub use error::{ThermoError, ThermoResult};
pub use gas::{CustomGas, Gas, ReferenceData, ReferencePoint};
pub use species::{GasSpecies, HydrateStructure, SaltSpecies};
