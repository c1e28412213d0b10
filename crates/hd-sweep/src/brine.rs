//! Residual brine at a given total supercooling.
//!
//! Chains the inverse equilibrium shift, the activity root finder and the
//! inverse electrolyte model, then partitions the water.

use hd_thermo::{
    SaltSpecies, delta_t, ln_aw, ln_aw_from_delta_t, salinity_from_x, solve_x_from_lnaw,
    x_from_salinity,
};

use crate::mass_balance::WaterPartition;

/// Why a supercooling step produced no usable brine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Infeasible {
    /// Total supercooling at or above the reference temperature.
    PastReferenceTemperature,
    /// Inverse activity is non-finite or not below zero.
    ActivityNotBelowPureWater,
    /// Back-computed salinity is non-finite or outside (0, 100) wt%.
    SalinityOutOfRange,
}

/// Brine in equilibrium with hydrate at `T0 - total_supercooling_k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrineState {
    pub x: f64,
    pub ln_activity: f64,
    /// Maximum achievable salinity [wt%].
    pub mas: f64,
    pub partition: WaterPartition,
}

impl BrineState {
    pub fn mwy(&self) -> f64 {
        self.partition.mwy()
    }
}

/// Supercooling [K] of the initial brine itself.
pub fn initial_supercooling(
    beta: f64,
    t0_k: f64,
    salt: SaltSpecies,
    initial_salinity: f64,
) -> f64 {
    delta_t(beta, ln_aw(x_from_salinity(initial_salinity, salt)), t0_k)
}

/// Brine state reached after cooling `total_supercooling_k` below `t0_k`.
pub fn brine_at(
    beta: f64,
    t0_k: f64,
    total_supercooling_k: f64,
    salt: SaltSpecies,
    initial_salinity: f64,
) -> Result<BrineState, Infeasible> {
    if total_supercooling_k >= t0_k {
        return Err(Infeasible::PastReferenceTemperature);
    }

    let ln_activity = ln_aw_from_delta_t(beta, total_supercooling_k, t0_k);
    if !ln_activity.is_finite() || ln_activity >= 0.0 {
        return Err(Infeasible::ActivityNotBelowPureWater);
    }

    let x = solve_x_from_lnaw(ln_activity);
    let mas = salinity_from_x(x, salt);
    if !mas.is_finite() || mas <= 0.0 || mas >= 100.0 {
        return Err(Infeasible::SalinityOutOfRange);
    }

    Ok(BrineState {
        x,
        ln_activity,
        mas,
        partition: WaterPartition::new(initial_salinity, mas),
    })
}
