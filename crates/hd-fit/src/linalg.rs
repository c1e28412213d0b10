//! Small dense linear solves.

use crate::error::{FitError, FitResult};

/// Relative pivot magnitude below which a system is treated as singular.
const PIVOT_EPSILON: f64 = 1e-12;

/// Solve `A·x = b` by Gaussian elimination with partial pivoting.
///
/// `a` is row-major and square with `b.len()` rows. Both are consumed as
/// scratch space.
pub fn solve_dense(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> FitResult<Vec<f64>> {
    let n = b.len();
    if a.len() != n || a.iter().any(|row| row.len() != n) {
        return Err(FitError::InvalidInput {
            what: "matrix shape does not match right-hand side",
        });
    }

    let scale = a
        .iter()
        .flat_map(|row| row.iter())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let threshold = PIVOT_EPSILON * scale.max(f64::MIN_POSITIVE);

    for col in 0..n {
        // Partial pivot: largest magnitude in this column at or below the diagonal
        let mut pivot_row = col;
        for row in (col + 1)..n {
            if a[row][col].abs() > a[pivot_row][col].abs() {
                pivot_row = row;
            }
        }

        let pivot = a[pivot_row][col];
        if !pivot.is_finite() || pivot.abs() <= threshold {
            return Err(FitError::Singular { column: col, pivot });
        }

        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution
    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = ((row + 1)..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }

    Ok(x)
}
