//! HLS water-activity correlation and its numerical inverse.

use hd_core::numeric::bisect_decreasing;

/// Coefficients of `ln(aw) = B1·X + B2·X² + B3·X³`.
pub const B1: f64 = -1.061_52;
pub const B2: f64 = 3.257_26;
pub const B3: f64 = -37.226_3;

/// Halvings performed by [`solve_x_from_lnaw`].
pub const ROOT_ITERATIONS: usize = 50;

const INITIAL_HIGH: f64 = 0.2;
const HIGH_STEP: f64 = 0.1;
const HIGH_LIMIT: f64 = 1.0;

/// ln(water activity) of a brine with effective ionic mole fraction `x`.
///
/// Strictly decreasing in `x`; no range check is applied.
#[inline]
pub fn ln_aw(x: f64) -> f64 {
    x * (B1 + x * (B2 + x * B3))
}

/// Ionic mole fraction whose ln(aw) equals `target`.
///
/// Bisects `ln_aw(X) - target` starting from `[0, 0.2]`, widening the upper
/// bound in steps of 0.1 (never past 1.0) until it brackets the target. The
/// iteration count is fixed, so the result is deterministic to roughly
/// `bracket / 2^50`. There is no failure path: an unreachable target returns
/// the nearest bracket end and callers must sanity-check what they derive
/// from it.
pub fn solve_x_from_lnaw(target: f64) -> f64 {
    let residual = |x: f64| ln_aw(x) - target;

    let mut high = INITIAL_HIGH;
    while residual(high) > 0.0 && high < HIGH_LIMIT {
        high += HIGH_STEP;
    }

    bisect_decreasing(residual, 0.0, high, ROOT_ITERATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_water_has_unit_activity() {
        assert_eq!(ln_aw(0.0), 0.0);
    }

    #[test]
    fn strictly_decreasing_on_valid_range() {
        let mut previous = ln_aw(0.0);
        for i in 1..=3000 {
            let x = i as f64 * 1e-4;
            let current = ln_aw(x);
            assert!(current < previous, "not decreasing at x = {x}");
            previous = current;
        }
    }

    #[test]
    fn known_value() {
        let x: f64 = 0.1;
        let expected = B1 * x + B2 * x.powi(2) + B3 * x.powi(3);
        assert!((ln_aw(x) - expected).abs() < 1e-15);
    }

    #[test]
    fn inversion_recovers_mole_fraction() {
        for i in 1..300 {
            let x = i as f64 * 1e-3;
            let solved = solve_x_from_lnaw(ln_aw(x));
            assert!((solved - x).abs() < 1e-6, "x = {x}, solved = {solved}");
        }
    }

    #[test]
    fn bracket_widens_for_concentrated_brines() {
        // ln_aw(0.25) lies below ln_aw(0.2), so the initial bracket misses it
        let x = 0.25;
        assert!(ln_aw(x) < ln_aw(INITIAL_HIGH));
        let solved = solve_x_from_lnaw(ln_aw(x));
        assert!((solved - x).abs() < 1e-9);
    }

    #[test]
    fn unreachable_target_returns_bracket_end() {
        // Positive ln(aw) is never reached for X >= 0
        let solved = solve_x_from_lnaw(0.5);
        assert!(solved < 1e-12);
    }
}
