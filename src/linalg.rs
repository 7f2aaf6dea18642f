//! Dense linear system solver
//!
//! Solves `A * x = b` for small square systems by Gaussian elimination with
//! partial pivoting. Regressions use it to solve their normal equations.
//!
//! <div class="warning">
//!
//! **Technical Details**
//!
//! For each pivot column `i`:
//! - The row in `i..n` with the largest `|A[r, i]|` is swapped into row `i`.
//! - Row `i` is divided by its pivot, leaving a unit diagonal.
//! - Column `i` is eliminated from every row below.
//!
//! Back-substitution then runs from the last row upward.
//!
//! A pivot whose magnitude does not exceed `ε · n · max|A|` is treated as
//! zero and the system is reported as singular.
//! </div>
//!
//! Elimination runs in `f64` whatever the input type; results are narrowed
//! back to `T` only once the solution is known.
use nalgebra::{SMatrix, SVector};

use crate::{
    error::{Error, Result},
    value::Value,
};

/// Solves the square linear system `a * x = b`.
///
/// # Errors
/// - [`Error::SingularMatrix`] if a pivot vanishes within floating tolerance,
///   or if the matrix contains NaN.
/// - [`Error::CastFailed`] if a value cannot cross the `f64` boundary.
///
/// # Example
/// ```
/// # use chartfit::linalg::solve;
/// # use chartfit::nalgebra::{Matrix2, Vector2};
/// let a = Matrix2::new(2.0_f64, 1.0, 1.0, 3.0);
/// let b = Vector2::new(3.0, 5.0);
/// let x = solve(&a, &b).unwrap();
/// assert!((x[0] - 0.8).abs() < 1e-12);
/// assert!((x[1] - 1.4).abs() < 1e-12);
/// ```
pub fn solve<T: Value, const N: usize>(
    a: &SMatrix<T, N, N>,
    b: &SVector<T, N>,
) -> Result<SVector<T, N>> {
    let mut m = SMatrix::<f64, N, N>::zeros();
    let mut rhs = SVector::<f64, N>::zeros();
    for i in 0..N {
        for j in 0..N {
            m[(i, j)] = a[(i, j)].widen()?;
        }
        rhs[i] = b[i].widen()?;
    }

    let tolerance = f64::EPSILON * N as f64 * m.amax();

    for i in 0..N {
        // First row holding the largest magnitude in column i
        let pivot_row = (i + 1..N).fold(i, |best, r| {
            if m[(r, i)].abs() > m[(best, i)].abs() {
                r
            } else {
                best
            }
        });

        // NaN in either operand fails the comparison
        let pivot = m[(pivot_row, i)];
        let usable = pivot.abs() > tolerance;
        if !usable {
            tracing::debug!(column = i, pivot, tolerance, "singular pivot");
            return Err(Error::SingularMatrix { n: N });
        }

        if pivot_row != i {
            tracing::trace!(from = pivot_row, to = i, "swapping pivot row");
            m.swap_rows(i, pivot_row);
            rhs.swap_rows(i, pivot_row);
        }

        for j in i..N {
            m[(i, j)] /= pivot;
        }
        rhs[i] /= pivot;

        for k in i + 1..N {
            let factor = m[(k, i)];
            for j in i..N {
                m[(k, j)] -= factor * m[(i, j)];
            }
            rhs[k] -= factor * rhs[i];
        }
    }

    for i in (0..N).rev() {
        for j in i + 1..N {
            rhs[i] -= m[(i, j)] * rhs[j];
        }
    }

    let mut x = SVector::<T, N>::zeros();
    for i in 0..N {
        x[i] = T::narrow(rhs[i])?;
    }
    Ok(x)
}
