//! Shape-preserving (monotone) cubic Hermite spline.
//!
//! Knot derivatives are limited so the interpolant never overshoots the
//! samples between knots. Outside the knot range the spline holds the nearest
//! endpoint value.

use crate::error::{FitError, FitResult};

#[derive(Debug, Clone, PartialEq)]
pub struct MonotoneSpline {
    knots: Vec<f64>,
    values: Vec<f64>,
    derivatives: Vec<f64>,
}

#[inline]
fn same_sign(a: f64, b: f64) -> bool {
    a * b > 0.0
}

/// One-sided three-point derivative at an end knot.
///
/// `h0`/`d0` belong to the segment touching the end, `h1`/`d1` to its neighbour.
fn end_derivative(h0: f64, h1: f64, d0: f64, d1: f64) -> f64 {
    let d = ((2.0 * h0 + h1) * d0 - h0 * d1) / (h0 + h1);
    if !same_sign(d, d0) {
        0.0
    } else if d.abs() > 3.0 * d0.abs() {
        3.0 * d0
    } else {
        d
    }
}

impl MonotoneSpline {
    /// Build the spline through `(xs[i], ys[i])`.
    ///
    /// `xs` must be strictly increasing.
    pub fn fit(xs: &[f64], ys: &[f64]) -> FitResult<Self> {
        if xs.is_empty() {
            return Err(FitError::NoData);
        }
        if xs.len() != ys.len() {
            return Err(FitError::InvalidInput {
                what: "x and y sample counts differ",
            });
        }
        if xs.iter().chain(ys).any(|v| !v.is_finite()) {
            return Err(FitError::InvalidInput {
                what: "non-finite sample",
            });
        }
        if let Some(w) = xs.windows(2).find(|w| w[1] <= w[0]) {
            return Err(FitError::DuplicateAbscissa { x: w[1] });
        }

        let n = xs.len();
        let derivatives = match n {
            1 => vec![0.0],
            2 => {
                let secant = (ys[1] - ys[0]) / (xs[1] - xs[0]);
                vec![secant, secant]
            }
            _ => {
                let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
                let secants: Vec<f64> = h
                    .iter()
                    .zip(ys.windows(2))
                    .map(|(h, w)| (w[1] - w[0]) / h)
                    .collect();

                let mut d = vec![0.0; n];
                d[0] = end_derivative(h[0], h[1], secants[0], secants[1]);
                d[n - 1] = end_derivative(h[n - 2], h[n - 3], secants[n - 2], secants[n - 3]);

                // Interior: weighted harmonic mean, flat at local extrema
                for k in 1..n - 1 {
                    let (s0, s1) = (secants[k - 1], secants[k]);
                    if same_sign(s0, s1) {
                        let w1 = 2.0 * h[k] + h[k - 1];
                        let w2 = h[k] + 2.0 * h[k - 1];
                        d[k] = (w1 + w2) / (w1 / s0 + w2 / s1);
                    }
                }
                d
            }
        };

        Ok(Self {
            knots: xs.to_vec(),
            values: ys.to_vec(),
            derivatives,
        })
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn derivatives(&self) -> &[f64] {
        &self.derivatives
    }

    /// Evaluate at `x`, clamping to the endpoint values outside the knots.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.knots.len();
        let last = n - 1;
        if n == 1 || x <= self.knots[0] {
            return self.values[0];
        }
        if x >= self.knots[last] {
            return self.values[last];
        }

        let i = (self.knots.partition_point(|&k| k <= x) - 1).min(last - 1);
        let h = self.knots[i + 1] - self.knots[i];
        let t = (x - self.knots[i]) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        h00 * self.values[i]
            + h10 * h * self.derivatives[i]
            + h01 * self.values[i + 1]
            + h11 * h * self.derivatives[i + 1]
    }
}
