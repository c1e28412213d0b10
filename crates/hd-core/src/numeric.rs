use crate::{CoreError, CoreResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Slack applied when deciding whether a stepped grid reaches its upper bound.
pub const GRID_EPSILON: Real = 1e-9;

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> CoreResult<Real> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::NonPositive { what, value: v })
    }
}

/// `n` uniformly spaced points from `start` to `end`, both included.
///
/// The last point is pinned to `end` exactly.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    if n <= 1 {
        return vec![start];
    }

    let delta = (end - start) / (n - 1) as Real;
    let mut points: Vec<Real> = (0..n).map(|i| start + i as Real * delta).collect();
    points[n - 1] = end;
    points
}

/// Points `start, start + step, ...` up to and including `end`.
///
/// `end` is reached when it lies within [`GRID_EPSILON`] steps of the last
/// multiple, so `0..=15` by `0.3` yields 51 points despite rounding in `15/0.3`.
pub fn linspace_inclusive(start: Real, end: Real, step: Real) -> CoreResult<Vec<Real>> {
    let start = ensure_finite(start, "grid start")?;
    let end = ensure_finite(end, "grid end")?;
    let step = ensure_positive(step, "grid step")?;
    if end < start {
        return Err(CoreError::InvalidArg {
            what: "grid end lies below grid start",
        });
    }

    let intervals = ((end - start) / step + GRID_EPSILON).floor() as usize;
    Ok((0..=intervals)
        .map(|i| (start + i as Real * step).min(end))
        .collect())
}

/// Bisection for a root of a function that decreases across `[low, high]`.
///
/// Runs exactly `iterations` halvings and returns the midpoint of the final
/// bracket. The caller guarantees `f(low) > 0 >= f(high)`; no sign check is made.
pub fn bisect_decreasing<F>(f: F, mut low: Real, mut high: Real, iterations: usize) -> Real
where
    F: Fn(Real) -> Real,
{
    for _ in 0..iterations {
        let mid = 0.5 * (low + high);
        if f(mid) > 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }
    0.5 * (low + high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_infinity() {
        assert!(matches!(
            ensure_positive(0.0, "pressure"),
            Err(CoreError::NonPositive { .. })
        ));
        assert!(matches!(
            ensure_positive(Real::INFINITY, "pressure"),
            Err(CoreError::NonFinite { .. })
        ));
        assert_eq!(ensure_positive(6.65, "pressure").unwrap(), 6.65);
    }

    #[test]
    fn linspace_pins_endpoints() {
        let points = linspace(0.5, 5.0, 50);
        assert_eq!(points.len(), 50);
        assert_eq!(points[0], 0.5);
        assert_eq!(points[49], 5.0);
        assert!(points.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_single_point() {
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    }

    #[test]
    fn inclusive_grid_reaches_upper_bound() {
        let salinities = linspace_inclusive(0.0, 15.0, 0.3).unwrap();
        assert_eq!(salinities.len(), 51);
        assert!((salinities[50] - 15.0).abs() < 1e-12);
        assert!(salinities.iter().all(|&s| s <= 15.0));

        let temperatures = linspace_inclusive(271.0, 285.0, 0.3).unwrap();
        // 14 / 0.3 = 46.67 -> last point is 271 + 46 * 0.3
        assert_eq!(temperatures.len(), 47);
        assert!((temperatures[46] - 284.8).abs() < 1e-9);
    }

    #[test]
    fn inclusive_grid_rejects_bad_step() {
        assert!(linspace_inclusive(0.0, 1.0, 0.0).is_err());
        assert!(linspace_inclusive(0.0, 1.0, -0.1).is_err());
        assert!(linspace_inclusive(1.0, 0.0, 0.1).is_err());
        assert!(linspace_inclusive(Real::NAN, 1.0, 0.1).is_err());
    }

    #[test]
    fn inclusive_grid_degenerate_bounds() {
        assert_eq!(linspace_inclusive(2.0, 2.0, 0.5).unwrap(), vec![2.0]);
    }

    #[test]
    fn bisection_finds_decreasing_root() {
        // 2 - x^2 decreases on [0, 2]
        let root = bisect_decreasing(|x| 2.0 - x * x, 0.0, 2.0, 60);
        assert!((root - 2.0_f64.sqrt()).abs() < 1e-12);
    }
}
