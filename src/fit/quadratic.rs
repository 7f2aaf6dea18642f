use std::ops::RangeInclusive;

use nalgebra::{Matrix3, Vector3};

use crate::{
    display,
    error::{Error, Result},
    fit::{CurveModel, FitKind},
    linalg,
    value::{widen_samples, CoordExt, Value},
};

/// Least-squares parabola `y = a·x² + b·x + c`
///
/// # Example
/// ```
/// # use chartfit::{QuadraticFit, CurveModel};
/// let data: Vec<(f64, f64)> = (-2..=2).map(|x| (x as f64, (x * x) as f64)).collect();
/// let fit = QuadraticFit::new(&data).unwrap();
/// assert_eq!(fit.equation(), "y = x²");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticFit<T: Value = f64> {
    a: T,
    b: T,
    c: T,
    x_range: RangeInclusive<T>,
}
impl<T: Value> QuadraticFit<T> {
    /// Fits a parabola to the given `(x, y)` samples.
    ///
    /// <div class="warning">
    ///
    /// **Technical Details**
    ///
    /// x is first mapped onto `u = (x - x₀) / s`, where `x₀` is the midpoint and
    /// `s` the half-width of the x-range, so that `u` lies in `[-1, 1]`.
    /// The normal equations are then built from the power sums of u:
    ///
    /// ```math
    /// | Σu⁴ Σu³ Σu² |   |A|   | Σu²y |
    /// | Σu³ Σu² Σu  | · |B| = | Σuy  |
    /// | Σu² Σu  n   |   |C|   | Σy   |
    /// ```
    /// and solved with [`linalg::solve`]. Expanding `A·u² + B·u + C` back in x gives:
    /// ```math
    /// a = A / s²
    /// b = B / s - 2·a·x₀
    /// c = C - B·x₀ / s + a·x₀²
    /// ```
    /// </div>
    ///
    /// The data needs at least three distinct x values.
    ///
    /// # Errors
    /// - [`Error::NoData`] if `data` is empty.
    /// - [`Error::SingularMatrix`] if there are fewer than three distinct x values.
    /// - [`Error::CastFailed`] if a value cannot move to or from `f64`.
    pub fn new(data: &[(T, T)]) -> Result<Self> {
        let x_range = data.x_range().ok_or(Error::NoData)?;
        let (xs, ys) = widen_samples(data)?;

        let (lo, hi) = xs
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        let center = lo + (hi - lo) / 2.0;
        let scale = (hi - lo) / 2.0;
        if scale == 0.0 {
            tracing::debug!(points = xs.len(), "all x values identical");
            return Err(Error::SingularMatrix { n: 3 });
        }

        let mut s = [0.0; 5]; // Σuᵏ, k = 0..=4
        let mut t = [0.0; 3]; // Σuᵏy, k = 0..=2
        for (&x, &y) in xs.iter().zip(&ys) {
            let u = (x - center) / scale;
            let mut uk = 1.0;
            for k in 0..5 {
                s[k] += uk;
                if k < 3 {
                    t[k] += uk * y;
                }
                uk *= u;
            }
        }

        #[rustfmt::skip]
        let lhs = Matrix3::new(
            s[4], s[3], s[2],
            s[3], s[2], s[1],
            s[2], s[1], s[0],
        );
        let rhs = Vector3::new(t[2], t[1], t[0]);
        let solution = linalg::solve(&lhs, &rhs)?;

        let a = solution[0] / (scale * scale);
        let b = solution[1] / scale - 2.0 * a * center;
        let c = solution[2] - solution[1] * center / scale + a * center * center;
        Ok(Self {
            a: T::narrow(a)?,
            b: T::narrow(b)?,
            c: T::narrow(c)?,
            x_range,
        })
    }

    /// Vertex of the parabola, or `None` if it is degenerate (`a == 0`)
    ///
    /// # Example
    /// ```
    /// # use chartfit::QuadraticFit;
    /// let fit = QuadraticFit::new(&[(0.0_f64, 1.0), (1.0, 0.0), (2.0, 1.0)]).unwrap();
    /// let (x, y) = fit.vertex().unwrap();
    /// assert!((x - 1.0).abs() < 1e-12 && y.abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn vertex(&self) -> Option<(T, T)> {
        if self.a == T::zero() {
            return None;
        }

        let x = -self.b / (self.a + self.a);
        Some((x, self.y(x)))
    }
}

impl<T: Value> CurveModel<T> for QuadraticFit<T> {
    fn kind(&self) -> FitKind {
        FitKind::Quadratic
    }

    fn y(&self, x: T) -> T {
        (self.a * x + self.b) * x + self.c
    }

    fn coefficients(&self) -> Vec<T> {
        vec![self.a, self.b, self.c]
    }

    fn x_range(&self) -> RangeInclusive<T> {
        self.x_range.clone()
    }

    fn equation(&self) -> String {
        display::format_polynomial(&super::lossy_widen(&self.coefficients()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_all_close, fit_quadratic};

    fn parabola(x: f64) -> f64 {
        2.0 * x * x + 3.0 * x + 1.0
    }

    #[test]
    fn test_exact_parabola() {
        let xs = [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0];
        let ys: Vec<f64> = xs.iter().map(|&x| parabola(x)).collect();

        let fit = fit_quadratic(&xs, &ys).unwrap();
        assert_all_close!(&fit.coefficients(), &[2.0, 3.0, 1.0], 1e-9);
        assert_eq!(fit.equation(), "y = 2.00x² + 3.00x + 1.00");
    }

    #[test]
    fn test_three_points_interpolates() {
        let data = [(1.0, 6.0), (4.0, 45.0), (-3.0, 10.0)];
        let fit = QuadraticFit::new(&data).unwrap();
        for (x, y) in data {
            crate::assert_close!(fit.y(x), y, 1e-9);
        }
    }

    #[test]
    fn test_two_distinct_x_is_singular() {
        let err = fit_quadratic(&[1.0, 1.0, 2.0, 2.0], &[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert_eq!(err, Error::SingularMatrix { n: 3 });

        let err = fit_quadratic(&[5.0], &[1.0]).unwrap_err();
        assert_eq!(err, Error::SingularMatrix { n: 3 });
    }

    #[test]
    fn test_empty() {
        let empty: [f64; 0] = [];
        assert_eq!(fit_quadratic(&empty, &empty), Err(Error::NoData));
    }

    #[test]
    fn test_f32() {
        let xs = [-1.0f32, 0.0, 1.0, 2.0];
        let ys: Vec<f32> = xs.iter().map(|&x| 0.5 * x * x - x + 2.0).collect();
        let fit = fit_quadratic(&xs, &ys).unwrap();
        assert_all_close!(&fit.coefficients(), &[0.5f32, -1.0, 2.0], 1e-5);
    }

    #[test]
    fn test_collinear_data_has_no_curvature() {
        let fit: QuadraticFit = QuadraticFit::new(&[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]).unwrap();
        assert!(fit.a.abs() < 1e-12);
        assert_eq!(fit.kind(), FitKind::Quadratic);
    }

    #[test]
    fn test_offset_x_is_not_singular() {
        for base in [100.0_f64, 2000.0] {
            let xs: Vec<f64> = (0..6).map(|i| base + f64::from(i)).collect();
            let ys: Vec<f64> = xs.iter().map(|&x| 2.0 * (x - base).powi(2) + 1.0).collect();

            let fit = fit_quadratic(&xs, &ys).unwrap();
            let expected = [2.0, -4.0 * base, 2.0 * base * base + 1.0];
            for (got, want) in fit.coefficients().iter().zip(expected) {
                crate::assert_close!(*got, want, 1e-9 * want.abs().max(1.0));
            }
            for (&x, &y) in xs.iter().zip(&ys) {
                crate::assert_close!(fit.y(x), y, 1e-6);
            }
        }
    }

    #[test]
    fn test_large_x_range() {
        let xs: Vec<f64> = (1..=100_000).map(f64::from).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| 1.0 + 3.0 * x + 5.3 * x * x).collect();
        let fit = fit_quadratic(&xs, &ys).unwrap();
        crate::assert_close!(fit.coefficients()[0], 5.3, 1e-6);
    }

    #[test]
    fn test_idempotent() {
        let data = [(0.0, 1.0), (1.0, 0.5), (2.0, 2.5), (3.0, 7.0)];
        assert_eq!(QuadraticFit::new(&data), QuadraticFit::new(&data));
    }
}
