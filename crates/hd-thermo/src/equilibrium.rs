//! Salt-induced shift of the hydrate equilibrium (HLS).
//!
//! With `c = β·ln(aw)` the HLS relation `ΔT / (T0·T) = c`, `T = T0 - ΔT`
//! rearranges to the forward and inverse forms below. For a brine
//! (`ln(aw) < 0`) and a negative β, `c > 0` and the shift is a positive
//! supercooling.

use crate::gas::Gas;
use crate::species::HydrateStructure;

/// Empirical structure-II correction applied to β when enabled.
pub const SII_ALPHA: f64 = 0.927;

/// Supercooling [K] induced by a brine of activity `ln_aw` at reference `t0_k`.
#[inline]
pub fn delta_t(beta: f64, ln_aw: f64, t0_k: f64) -> f64 {
    let c = beta * ln_aw;
    c * t0_k * t0_k / (1.0 + c * t0_k)
}

/// ln(aw) at which the equilibrium sits `delta_t_k` below `t0_k`.
///
/// Not guarded: the result is non-finite or of the wrong sign when
/// `delta_t_k >= t0_k` or the denominator vanishes. Check finiteness and
/// require a negative value before using it.
#[inline]
pub fn ln_aw_from_delta_t(beta: f64, delta_t_k: f64, t0_k: f64) -> f64 {
    delta_t_k / (beta * t0_k * (t0_k - delta_t_k))
}

/// Effective β [K⁻¹] from a raw coefficient in 1e-3 K⁻¹.
pub fn beta_for(raw_beta: f64, structure: HydrateStructure, use_alpha: bool) -> f64 {
    let alpha = match structure {
        HydrateStructure::SII if use_alpha => SII_ALPHA,
        _ => 1.0,
    };
    raw_beta * 1e-3 * alpha
}

/// Effective β [K⁻¹] for a gas.
pub fn beta_effective(gas: &Gas, use_alpha: bool) -> f64 {
    beta_for(gas.raw_beta(), gas.structure(), use_alpha)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn forward_then_inverse(lnaw in -0.2_f64..-1e-6, t0 in 270.0_f64..300.0) {
            let beta = -1.07e-3;
            let dt = delta_t(beta, lnaw, t0);
            prop_assert!(dt > 0.0 && dt < t0);
            let back = ln_aw_from_delta_t(beta, dt, t0);
            prop_assert!((back - lnaw).abs() < 1e-9);
        }
    }
}
