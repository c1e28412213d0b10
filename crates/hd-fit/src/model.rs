//! Fit method selection and the fitted model wrapper.

use std::fmt;
use std::str::FromStr;

use crate::error::{FitError, FitResult};
use crate::polynomial::PolynomialFit;
use crate::spline::MonotoneSpline;

/// Strategy used to turn sampled points into a continuous curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FitMethod {
    /// Least-squares polynomial of degree `min(3, n - 1)`.
    #[default]
    Polynomial,
    /// Shape-preserving cubic Hermite spline.
    MonotoneSpline,
}

impl FitMethod {
    pub const ALL: [FitMethod; 2] = [FitMethod::Polynomial, FitMethod::MonotoneSpline];

    pub fn key(&self) -> &'static str {
        match self {
            FitMethod::Polynomial => "polynomial",
            FitMethod::MonotoneSpline => "spline",
        }
    }
}

impl FromStr for FitMethod {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "polynomial" | "poly" | "lsq" => Ok(FitMethod::Polynomial),
            "spline" | "monotone" | "monotone-spline" | "pchip" => Ok(FitMethod::MonotoneSpline),
            _ => Err(FitError::InvalidInput {
                what: "unknown fit method",
            }),
        }
    }
}

impl fmt::Display for FitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A fitted curve `y(x)`.
#[derive(Debug, Clone, PartialEq)]
pub enum FitModel {
    Polynomial(PolynomialFit),
    MonotoneSpline(MonotoneSpline),
}

impl FitModel {
    /// Fit `ys` against `xs` with the given method.
    ///
    /// Samples may come in any order; the spline sorts them by abscissa first.
    pub fn fit(method: FitMethod, xs: &[f64], ys: &[f64]) -> FitResult<Self> {
        match method {
            FitMethod::Polynomial => PolynomialFit::fit(xs, ys).map(FitModel::Polynomial),
            FitMethod::MonotoneSpline => {
                if xs.len() != ys.len() {
                    return Err(FitError::InvalidInput {
                        what: "x and y sample counts differ",
                    });
                }
                let mut pairs: Vec<(f64, f64)> =
                    xs.iter().copied().zip(ys.iter().copied()).collect();
                pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
                let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
                MonotoneSpline::fit(&xs, &ys).map(FitModel::MonotoneSpline)
            }
        }
    }

    pub fn method(&self) -> FitMethod {
        match self {
            FitModel::Polynomial(_) => FitMethod::Polynomial,
            FitModel::MonotoneSpline(_) => FitMethod::MonotoneSpline,
        }
    }

    pub fn eval(&self, x: f64) -> f64 {
        match self {
            FitModel::Polynomial(p) => p.eval(x),
            FitModel::MonotoneSpline(s) => s.eval(x),
        }
    }
}
