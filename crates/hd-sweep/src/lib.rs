//! hd-sweep: MAS and MWY sweeps for hydrate-based desalination.
//!
//! The [`HydrateEngine`] resolves the reference dissociation temperature of a
//! gas (fitting and caching its curve), then drives either a 1-D sweep over
//! extra supercooling or a 2-D grid over initial salinity and formation
//! temperature. Infeasible steps are dropped silently; only a sweep with no
//! usable point is an error.
//!
//! # Example
//!
//! ```
//! use hd_sweep::{HydrateEngine, ModelOptions, OperatingCondition};
//! use hd_thermo::{GasSpecies, SaltSpecies};
//!
//! let engine = HydrateEngine::new();
//! let condition = OperatingCondition::new(GasSpecies::CH4, SaltSpecies::NaCl, 6.65, 8.0)
//!     .with_supercooling(0.5, 5.0);
//! let sweep = engine.sweep(&condition, ModelOptions::default()).unwrap();
//! assert!(sweep.mas > 8.0);
//! ```

pub mod brine;
pub mod cache;
pub mod condition;
pub mod engine;
pub mod error;
pub mod grid;
pub mod mass_balance;
pub mod supercooling;

pub use cache::FitCache;
pub use condition::{DEFAULT_POINT_COUNT, ModelOptions, OperatingCondition, SupercoolingRange};
pub use engine::HydrateEngine;
pub use error::{SweepError, SweepResult};
pub use grid::{FieldRange, GridSpec, HeatmapCell, HeatmapGrid};
pub use mass_balance::{WaterPartition, max_water_yield};
pub use supercooling::{SupercoolingSweep, SweepPoint};
