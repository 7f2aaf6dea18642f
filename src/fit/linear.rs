use std::ops::RangeInclusive;

use crate::{
    display,
    error::{Error, Result},
    fit::{CurveModel, FitKind},
    statistics,
    value::{widen_samples, CoordExt, Value},
};

/// Least-squares straight line `y = m·x + b`
///
/// # Example
/// ```
/// # use chartfit::{LinearFit, CurveModel};
/// let fit = LinearFit::new(&[(1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]).unwrap();
/// assert_eq!(fit.equation(), "y = 2.00x + 1.00");
/// assert_eq!(fit.y(10.0), 21.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit<T: Value = f64> {
    slope: T,
    intercept: T,
    x_range: RangeInclusive<T>,
}
impl<T: Value> LinearFit<T> {
    /// Fits a line to the given `(x, y)` samples.
    ///
    /// <div class="warning">
    ///
    /// **Technical Details**
    ///
    /// ```math
    /// m = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²
    /// b = ȳ - m·x̄
    /// ```
    /// </div>
    ///
    /// If every x is identical the slope is undefined; the result is then the
    /// horizontal line `y = ȳ`. This includes the single-point case.
    ///
    /// # Errors
    /// - [`Error::NoData`] if `data` is empty.
    /// - [`Error::CastFailed`] if a value cannot move to or from `f64`.
    pub fn new(data: &[(T, T)]) -> Result<Self> {
        let x_range = data.x_range().ok_or(Error::NoData)?;
        let (xs, ys) = widen_samples(data)?;
        let (slope, intercept) = least_squares_line(&xs, &ys);

        Ok(Self {
            slope: T::narrow(slope)?,
            intercept: T::narrow(intercept)?,
            x_range,
        })
    }

    /// Slope `m` of the line
    #[must_use]
    pub fn slope(&self) -> T {
        self.slope
    }

    /// Intercept `b` of the line
    #[must_use]
    pub fn intercept(&self) -> T {
        self.intercept
    }
}

impl<T: Value> CurveModel<T> for LinearFit<T> {
    fn kind(&self) -> FitKind {
        FitKind::Linear
    }

    fn y(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    fn coefficients(&self) -> Vec<T> {
        vec![self.slope, self.intercept]
    }

    fn x_range(&self) -> RangeInclusive<T> {
        self.x_range.clone()
    }

    fn equation(&self) -> String {
        display::format_polynomial(&super::lossy_widen(&self.coefficients()))
    }
}

/// Slope and intercept of the least-squares line through `(xs, ys)`.
///
/// Expects non-empty columns of equal length. Identical x values, or a
/// zero `Σ(x - x̄)²`, give `(0, ȳ)`.
pub(crate) fn least_squares_line(xs: &[f64], ys: &[f64]) -> (f64, f64) {
    let mean_x = statistics::mean(xs.iter().copied());
    let mean_y = statistics::mean(ys.iter().copied());

    // Compare the values themselves; x̄ may carry rounding error
    if xs.windows(2).all(|w| w[0] == w[1]) {
        tracing::debug!(
            points = xs.len(),
            "all x values identical, fitting a horizontal line"
        );
        return (0.0, mean_y);
    }

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        numerator += dx * (y - mean_y);
        denominator += dx * dx;
    }

    // Distinct x values can still underflow Σ(x - x̄)²
    if denominator == 0.0 {
        tracing::debug!(points = xs.len(), "x spread underflows, fitting a horizontal line");
        return (0.0, mean_y);
    }

    let slope = numerator / denominator;
    (slope, mean_y - slope * mean_x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_all_close, assert_close, fit_linear};

    #[test]
    fn test_exact_line() {
        let fit = fit_linear(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert_close!(fit.slope(), 2.0, 1e-12);
        assert_close!(fit.intercept(), 0.0, 1e-12);
        assert_eq!(fit.x_range(), 1.0..=3.0);
        assert_close!(fit.r_squared(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]), 1.0, 1e-12);
    }

    #[test]
    fn test_identical_x() {
        let fit = fit_linear(&[2.0, 2.0, 2.0], &[1.0, 5.0, 6.0]).unwrap();
        assert_eq!(fit.slope(), 0.0);
        assert_close!(fit.intercept(), 4.0, 1e-12);
    }

    #[test]
    fn test_identical_x_with_rounding_mean() {
        // x̄ of three 0.1s is not exactly 0.1
        let fit = fit_linear::<f64>(&[0.1, 0.1, 0.1], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(fit.slope(), 0.0);
        assert!(fit.intercept().is_finite());
    }

    #[test]
    fn test_underflowing_spread() {
        let fit = fit_linear::<f64>(&[0.0, 1e-170], &[1.0, 2.0]).unwrap();
        assert_eq!(fit.slope(), 0.0);
        assert_close!(fit.intercept(), 1.5, 1e-12);
    }

    #[test]
    fn test_single_point() {
        let fit = LinearFit::new(&[(4.0, -3.0)]).unwrap();
        assert_eq!(fit.coefficients(), vec![0.0, -3.0]);
        assert_eq!(fit.equation(), "y = -3.00");
    }

    #[test]
    fn test_empty() {
        let empty: [(f64, f64); 0] = [];
        assert_eq!(LinearFit::new(&empty), Err(Error::NoData));
        assert_eq!(
            fit_linear(&[1.0, 2.0], &[1.0]).unwrap_err(),
            Error::LengthMismatch { x: 2, y: 1 }
        );
    }

    #[test]
    fn test_least_squares_residual() {
        // Best fit of (0,0) (1,1) (2,1) is y = 0.5x + 1/6
        let (m, b) = least_squares_line(&[0.0, 1.0, 2.0], &[0.0, 1.0, 1.0]);
        assert_close!(m, 0.5, 1e-12);
        assert_close!(b, 1.0 / 6.0, 1e-12);
    }

    #[test]
    fn test_f32_matches_f64() {
        let xs = [0.5f32, 1.5, 2.5, 4.0];
        let ys = [1.2f32, 2.9, 5.1, 8.2];
        let narrow = fit_linear(&xs, &ys).unwrap();

        let xs: Vec<f64> = xs.iter().map(|&v| f64::from(v)).collect();
        let ys: Vec<f64> = ys.iter().map(|&v| f64::from(v)).collect();
        let wide = fit_linear(&xs, &ys).unwrap();

        let narrow: Vec<f64> = narrow.coefficients().into_iter().map(f64::from).collect();
        assert_all_close!(&narrow, &wide.coefficients(), 1e-5);
    }

    #[test]
    fn test_idempotent() {
        let xs = [0.3, 1.7, 2.2, 5.9];
        let ys = [1.0, -2.0, 0.5, 3.3];
        assert_eq!(fit_linear(&xs, &ys), fit_linear(&xs, &ys));
    }
}
