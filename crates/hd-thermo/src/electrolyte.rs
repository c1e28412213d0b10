//! Mass salinity ↔ effective ionic mole fraction.
//!
//! Everything is computed on a 100 g solution basis:
//!
//! ```text
//! n_salt  = S / M_salt
//! n_water = (100 - S) / M_water
//! ```
//!
//! The HLS composition variable counts dissolved ions, weighted per
//! stoichiometry:
//!
//! ```text
//! 1:1 salt (2 ions):  X = 2 n_salt / (n_water + 2 n_salt)
//! 1:2 salt (3 ions):  X = 4 n_salt / (n_water + 3 n_salt)
//! ```
//!
//! Both forms invert in closed form, so no iteration is needed to recover
//! salinity from a solved X.

use crate::species::SaltSpecies;
use hd_core::constants::WATER_MOLAR_MASS;

/// Numerator weight and denominator ion count of the ionic mole fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
struct IonWeights {
    activity: f64,
    dissolved: f64,
}

fn ion_weights(salt: SaltSpecies) -> IonWeights {
    match salt.ion_count() {
        3 => IonWeights {
            activity: 4.0,
            dissolved: 3.0,
        },
        _ => IonWeights {
            activity: 2.0,
            dissolved: 2.0,
        },
    }
}

/// Effective ionic mole fraction X for a mass salinity [wt%].
pub fn x_from_salinity(salinity_wt_pct: f64, salt: SaltSpecies) -> f64 {
    let w = ion_weights(salt);
    let moles_salt = salinity_wt_pct / salt.molar_mass();
    let moles_water = (100.0 - salinity_wt_pct) / WATER_MOLAR_MASS;
    w.activity * moles_salt / (moles_water + w.dissolved * moles_salt)
}

/// Mass salinity [wt%] for an effective ionic mole fraction X.
pub fn salinity_from_x(x: f64, salt: SaltSpecies) -> f64 {
    let w = ion_weights(salt);
    let m = salt.molar_mass();
    m * x * 100.0 / ((w.activity - w.dissolved * x) * WATER_MOLAR_MASS + m * x)
}

/// Salt mole percent of the solution (undissociated basis).
pub fn mole_percent_salinity(salinity_wt_pct: f64, salt: SaltSpecies) -> f64 {
    let moles_salt = salinity_wt_pct / salt.molar_mass();
    let moles_water = (100.0 - salinity_wt_pct) / WATER_MOLAR_MASS;
    100.0 * moles_salt / (moles_salt + moles_water)
}
