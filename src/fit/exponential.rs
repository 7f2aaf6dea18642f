use std::ops::RangeInclusive;

use crate::{
    display,
    error::{Error, Result},
    fit::{linear::least_squares_line, CurveModel, FitKind},
    value::{widen_samples, CoordExt, Value},
};

/// Exponential curve `y = a·e^(b·x)`, fitted by log-linearization
///
/// # Example
/// ```
/// # use chartfit::{ExponentialFit, CurveModel};
/// let data: Vec<(f64, f64)> = (0..5).map(|x| (x as f64, 2.0 * (x as f64).exp())).collect();
/// let fit = ExponentialFit::new(&data).unwrap();
/// assert_eq!(fit.equation(), "y = 2.00e^(x)");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExponentialFit<T: Value = f64> {
    a: T,
    b: T,
    x_range: RangeInclusive<T>,
}
impl<T: Value> ExponentialFit<T> {
    /// Fits `y = a·e^(b·x)` to the given samples.
    ///
    /// <div class="warning">
    ///
    /// **Technical Details**
    ///
    /// Taking the log of both sides gives a line, fitted by least squares:
    /// ```math
    /// ln y = b·x + ln a
    /// ```
    /// The fit minimizes error in `ln y`, not in `y`, so large values weigh less
    /// than in a direct nonlinear fit.
    /// </div>
    ///
    /// Identical x values give `b = 0` and `a` equal to the geometric mean of y.
    ///
    /// # Errors
    /// - [`Error::NoData`] if `data` is empty.
    /// - [`Error::InvalidDomain`] if any y is zero, negative or NaN.
    /// - [`Error::CastFailed`] if a value cannot move to or from `f64`.
    pub fn new(data: &[(T, T)]) -> Result<Self> {
        let x_range = data.x_range().ok_or(Error::NoData)?;
        let (xs, ys) = widen_samples(data)?;

        let mut ln_ys = Vec::with_capacity(ys.len());
        for y in ys {
            if y.is_nan() || y <= 0.0 {
                return Err(Error::InvalidDomain {
                    function: "ln".to_string(),
                    value: y,
                });
            }
            ln_ys.push(y.ln());
        }

        let (rate, ln_scale) = least_squares_line(&xs, &ln_ys);
        Ok(Self {
            a: T::narrow(ln_scale.exp())?,
            b: T::narrow(rate)?,
            x_range,
        })
    }

    /// Scale `a`: the value of the curve at `x = 0`
    #[must_use]
    pub fn scale(&self) -> T {
        self.a
    }

    /// Rate `b`: positive for growth, negative for decay
    #[must_use]
    pub fn rate(&self) -> T {
        self.b
    }
}

impl<T: Value> CurveModel<T> for ExponentialFit<T> {
    fn kind(&self) -> FitKind {
        FitKind::Exponential
    }

    fn y(&self, x: T) -> T {
        self.a * nalgebra::ComplexField::exp(self.b * x)
    }

    fn coefficients(&self) -> Vec<T> {
        vec![self.a, self.b]
    }

    fn x_range(&self) -> RangeInclusive<T> {
        self.x_range.clone()
    }

    fn equation(&self) -> String {
        let c = super::lossy_widen(&self.coefficients());
        display::format_exponential(c[0], c[1])
    }
}
