//! Least-squares polynomial fit via the normal equations.
//!
//! Abscissas are centered and scaled to `u = (x - center) / scale` with
//! `|u| <= 1` before the power-sum moments are formed, and the coefficients
//! are stored against `u`.

use crate::error::{FitError, FitResult};
use crate::linalg::solve_dense;

/// Highest degree used by [`PolynomialFit::fit`].
pub const MAX_DEGREE: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialFit {
    center: f64,
    scale: f64,
    /// Ascending powers of the scaled abscissa.
    coefficients: Vec<f64>,
}

impl PolynomialFit {
    /// Fit with degree `min(3, n - 1)`.
    ///
    /// With four or fewer samples the polynomial interpolates them exactly.
    pub fn fit(xs: &[f64], ys: &[f64]) -> FitResult<Self> {
        if xs.is_empty() {
            return Err(FitError::NoData);
        }
        let degree = MAX_DEGREE.min(xs.len() - 1);
        Self::with_degree(xs, ys, degree)
    }

    /// Least-squares fit of a fixed degree.
    pub fn with_degree(xs: &[f64], ys: &[f64], degree: usize) -> FitResult<Self> {
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
        if degree >= xs.len() {
            return Err(FitError::InvalidInput {
                what: "degree must be below the sample count",
            });
        }

        let n = xs.len() as f64;
        let center = xs.iter().sum::<f64>() / n;
        let spread = xs.iter().fold(0.0_f64, |acc, x| acc.max((x - center).abs()));
        let scale = if spread > 0.0 { spread } else { 1.0 };

        // Power sums: moments[k] = Σ u^k, rhs[j] = Σ y·u^j
        let size = degree + 1;
        let mut moments = vec![0.0; 2 * degree + 1];
        let mut rhs = vec![0.0; size];
        for (&x, &y) in xs.iter().zip(ys) {
            let u = (x - center) / scale;
            let mut power = 1.0;
            for (k, moment) in moments.iter_mut().enumerate() {
                *moment += power;
                if k < size {
                    rhs[k] += y * power;
                }
                power *= u;
            }
        }

        let matrix: Vec<Vec<f64>> = (0..size)
            .map(|i| moments[i..i + size].to_vec())
            .collect();
        let coefficients = solve_dense(matrix, rhs)?;

        Ok(Self {
            center,
            scale,
            coefficients,
        })
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficients in ascending powers of `(x - center) / scale`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Evaluate by Horner's rule. Extrapolates outside the sample range.
    pub fn eval(&self, x: f64) -> f64 {
        let u = (x - self.center) / self.scale;
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * u + c)
    }
}
