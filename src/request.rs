//! Request and response records for chart front-ends
//!
//! Each request carries the raw inputs of one chart, and `run` produces
//! everything needed to draw it: the sampled curve, the viewport, and any
//! derived values such as the fitted equation or the curve length.
//!
//! With the `serde` feature, all of these types are `Serialize` and `Deserialize`.
//!
//! ```rust
//! use chartfit::request::{RegressionRequest, FitKind};
//!
//! let request = RegressionRequest::new(FitKind::Linear, vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0]);
//! let response = request.run().unwrap();
//! assert_eq!(response.equation, "y = 2.00x");
//! ```
use crate::{
    curve::{Bounds, Curve2D},
    error::{Error, Result},
    fit::{CurveModel, Regression, OVERLAY_STEPS},
    sampling::{self, DEFAULT_STEPS},
    value::{zip_samples, Value},
};

pub use crate::fit::FitKind;

/// Half-width of the viewport of a function plot with nothing to draw
pub const FUNCTION_VIEWPORT_RADIUS: usize = 10;

/// Half-width of the viewport of a parametric curve with nothing to draw
pub const PARAMETRIC_VIEWPORT_RADIUS: usize = 1;

#[cfg(feature = "serde")]
fn default_overlay_steps() -> usize {
    OVERLAY_STEPS
}

#[cfg(feature = "serde")]
fn default_steps() -> usize {
    DEFAULT_STEPS
}

/// Fit a model to a dataset
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegressionRequest<T: Value = f64> {
    /// Model to fit
    pub kind: FitKind,

    /// x values of the dataset
    pub x: Vec<T>,

    /// y values of the dataset, paired with `x` by index
    pub y: Vec<T>,

    /// Steps used to sample the fitted curve
    #[cfg_attr(feature = "serde", serde(default = "default_overlay_steps"))]
    pub overlay_steps: usize,
}
impl<T: Value> RegressionRequest<T> {
    /// Creates a request with [`OVERLAY_STEPS`]
    #[must_use]
    pub fn new(kind: FitKind, x: Vec<T>, y: Vec<T>) -> Self {
        Self {
            kind,
            x,
            y,
            overlay_steps: OVERLAY_STEPS,
        }
    }

    /// Fits the model and samples it over the data.
    ///
    /// The response bounds cover the data and the fitted curve, extended to include the origin.
    ///
    /// # Errors
    /// - [`Error::LengthMismatch`] if `x` and `y` differ in length.
    /// - [`Error::NoData`] if they are empty.
    /// - [`Error::InvalidStepCount`] if `overlay_steps` is zero.
    /// - Any error of the chosen model; see [`Regression::fit`].
    pub fn run(&self) -> Result<RegressionResponse<T>> {
        let data = zip_samples(&self.x, &self.y)?;
        let fit = Regression::fit(self.kind, &data)?;
        let overlay = fit.overlay(self.overlay_steps)?;

        let mut bounds = Bounds::of(&data).ok_or(Error::NoData)?;
        if let Some(overlay_bounds) = overlay.bounds() {
            bounds = bounds.union(&overlay_bounds);
        }

        Ok(RegressionResponse {
            kind: self.kind,
            coefficients: fit.coefficients(),
            equation: fit.equation(),
            r_squared: fit.r_squared(&data),
            overlay,
            bounds: bounds.including_origin(),
        })
    }
}

/// A fitted model, ready to draw
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegressionResponse<T: Value = f64> {
    /// Model that was fitted
    pub kind: FitKind,

    /// Coefficients, highest order first; see [`CurveModel::coefficients`]
    pub coefficients: Vec<T>,

    /// Human-readable equation
    pub equation: String,

    /// Goodness of fit against the request data
    pub r_squared: T,

    /// The fitted curve sampled over the x-range of the data
    pub overlay: Curve2D<T>,

    /// Viewport covering data, overlay and origin
    pub bounds: Bounds<T>,
}

/// Plot `y = f(x)` from an expression in `x`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionPlotRequest<T: Value = f64> {
    /// Expression in `x`
    pub expression: String,

    /// Lower bound of x
    pub x_min: T,

    /// Upper bound of x
    pub x_max: T,

    /// Number of sampling intervals
    #[cfg_attr(feature = "serde", serde(default = "default_steps"))]
    pub steps: usize,
}
impl<T: Value> FunctionPlotRequest<T> {
    /// Creates a request with [`DEFAULT_STEPS`]
    #[must_use]
    pub fn new(expression: impl Into<String>, x_min: T, x_max: T) -> Self {
        Self {
            expression: expression.into(),
            x_min,
            x_max,
            steps: DEFAULT_STEPS,
        }
    }

    /// Samples the expression; see [`sampling::sample_function`].
    ///
    /// When every sample is dropped the bounds are `±`[`FUNCTION_VIEWPORT_RADIUS`].
    ///
    /// # Errors
    /// See [`sampling::sample_function`].
    pub fn run(&self) -> Result<FunctionPlotResponse<T>> {
        let curve = sampling::sample_function(&self.expression, self.x_min..=self.x_max, self.steps)?;
        let bounds = curve
            .bounds()
            .unwrap_or_else(|| Bounds::symmetric(T::from_positive_int(FUNCTION_VIEWPORT_RADIUS)));
        Ok(FunctionPlotResponse { curve, bounds })
    }
}

/// A sampled function, ready to draw
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionPlotResponse<T: Value = f64> {
    /// The finite samples, in increasing x
    pub curve: Curve2D<T>,

    /// Viewport of the curve
    pub bounds: Bounds<T>,
}

/// Plot `(x(t), y(t))` from two expressions in `t`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParametricCurveRequest<T: Value = f64> {
    /// Expression for x, in `t`
    pub x_expression: String,

    /// Expression for y, in `t`
    pub y_expression: String,

    /// Lower bound of t
    pub t_min: T,

    /// Upper bound of t
    pub t_max: T,

    /// Number of sampling intervals
    #[cfg_attr(feature = "serde", serde(default = "default_steps"))]
    pub steps: usize,
}
impl<T: Value> ParametricCurveRequest<T> {
    /// Creates a request with [`DEFAULT_STEPS`]
    #[must_use]
    pub fn new(
        x_expression: impl Into<String>,
        y_expression: impl Into<String>,
        t_min: T,
        t_max: T,
    ) -> Self {
        Self {
            x_expression: x_expression.into(),
            y_expression: y_expression.into(),
            t_min,
            t_max,
            steps: DEFAULT_STEPS,
        }
    }

    /// Samples the curve and measures it; see [`sampling::sample_parametric`].
    ///
    /// When every sample is dropped the bounds are `±`[`PARAMETRIC_VIEWPORT_RADIUS`].
    ///
    /// # Errors
    /// See [`sampling::sample_parametric`].
    pub fn run(&self) -> Result<ParametricCurveResponse<T>> {
        let curve = sampling::sample_parametric(
            &self.x_expression,
            &self.y_expression,
            self.t_min..=self.t_max,
            self.steps,
        )?;
        let bounds = curve
            .bounds()
            .unwrap_or_else(|| Bounds::symmetric(T::from_positive_int(PARAMETRIC_VIEWPORT_RADIUS)));
        let length = curve.length()?;
        Ok(ParametricCurveResponse {
            curve,
            bounds,
            length,
        })
    }
}

/// A sampled parametric curve, ready to draw
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParametricCurveResponse<T: Value = f64> {
    /// The finite samples, in increasing t
    pub curve: Curve2D<T>,

    /// Viewport of the curve
    pub bounds: Bounds<T>,

    /// Length of the polyline through the samples
    pub length: T,
}
impl<T: Value> ParametricCurveResponse<T> {
    /// The length formatted for display, e.g. `Curve Length: 6.2832`
    #[must_use]
    pub fn length_label(&self) -> String {
        let length = self.length.widen().unwrap_or(f64::NAN);
        format!("Curve Length: {length:.4}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;

    #[test]
    fn test_regression_request() {
        let request = RegressionRequest::new(
            FitKind::Quadratic,
            vec![1.0, 2.0, 3.0, 4.0],
            vec![3.0, 6.0, 11.0, 18.0],
        );
        let response = request.run().unwrap();

        assert_eq!(response.kind, FitKind::Quadratic);
        assert_eq!(response.equation, "y = x² + 2.00");
        assert_close!(response.r_squared, 1.0, 1e-12);
        assert_eq!(response.overlay.len(), OVERLAY_STEPS + 1);

        // Data starts at x = 1, y = 3; the viewport reaches back to the origin
        assert_eq!(*response.bounds.x.start(), 0.0);
        assert_eq!(*response.bounds.y.start(), 0.0);
        assert_close!(*response.bounds.y.end(), 18.0, 1e-9);
    }

    #[test]
    fn test_regression_bounds_cover_overlay() {
        let x = vec![0.0, 1.0, 2.0, 3.0];
        let y = vec![1.0, 3.0, 2.0, 5.0];
        let response = RegressionRequest::new(FitKind::Linear, x, y).run().unwrap();
        for &(x, y) in &response.overlay {
            assert!(response.bounds.contains(x, y));
        }
    }

    #[test]
    fn test_regression_request_errors() {
        let request = RegressionRequest::new(FitKind::Linear, vec![1.0, 2.0], vec![1.0]);
        assert_eq!(request.run(), Err(Error::LengthMismatch { x: 2, y: 1 }));

        let request = RegressionRequest::<f64>::new(FitKind::Linear, vec![], vec![]);
        assert_eq!(request.run(), Err(Error::NoData));

        let mut request = RegressionRequest::new(FitKind::Linear, vec![1.0, 2.0], vec![1.0, 2.0]);
        request.overlay_steps = 0;
        assert_eq!(request.run(), Err(Error::InvalidStepCount));
    }

    #[test]
    fn test_function_plot_empty_curve_bounds() {
        let response = FunctionPlotRequest::new("sqrt(x)", -5.0, -1.0).run().unwrap();
        assert!(response.curve.is_empty());
        assert_eq!(response.bounds, Bounds::symmetric(10.0));
    }

    #[test]
    fn test_function_plot() {
        let mut request = FunctionPlotRequest::new("x^2", -2.0, 2.0);
        request.steps = 4;
        let response = request.run().unwrap();
        assert_eq!(response.curve.len(), 5);
        assert_eq!(response.bounds, Bounds::new(-2.0..=2.0, 0.0..=4.0));
    }

    #[test]
    fn test_parametric_curve() {
        let request = ParametricCurveRequest::new("3*t", "4*t", 0.0, 1.0);
        let response = request.run().unwrap();
        assert_close!(response.length, 5.0, 1e-12);
        assert_eq!(response.length_label(), "Curve Length: 5.0000");
        assert_eq!(response.bounds, Bounds::new(0.0..=3.0, 0.0..=4.0));
    }

    #[test]
    fn test_parametric_empty_curve() {
        let response = ParametricCurveRequest::new("ln(t)", "t", -2.0, -1.0).run().unwrap();
        assert_eq!(response.length, 0.0);
        assert_eq!(response.bounds, Bounds::symmetric(1.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let json = r#"{"kind":"exponential","x":[0.0,1.0,2.0],"y":[1.0,2.0,4.0]}"#;
        let request: RegressionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.overlay_steps, OVERLAY_STEPS);

        let response = request.run().unwrap();
        let encoded = serde_json::to_string(&response).unwrap();
        let decoded: RegressionResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, response);

        let request = ParametricCurveRequest::new("cos(t)", "sin(t)", 0.0, 1.0);
        let encoded = serde_json::to_string(&request).unwrap();
        assert_eq!(serde_json::from_str::<ParametricCurveRequest>(&encoded).unwrap(), request);
    }
}
