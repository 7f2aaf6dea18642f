//! Sampling expressions into drawable curves
//!
//! - [`sample_function`]: `y = f(x)` over an x-range.
//! - [`sample_parametric`]: `(x(t), y(t))` over a parameter range.
//!
//! Both evaluate at `steps + 1` uniformly spaced points, endpoints included.
//! Points where the expression is not finite (NaN from a domain error, or an
//! infinity from a division by zero) are dropped; the remaining points keep
//! their order. A curve can therefore come back empty without an error.
//!
//! [`SampleOptions`] carries the step count and variable names; the free
//! functions use its defaults with a custom step count.
//!
//! ```rust
//! use chartfit::{sample_function, DEFAULT_STEPS};
//!
//! let curve = sample_function("x^2", -1.0..=1.0, DEFAULT_STEPS).unwrap();
//! assert_eq!(curve.len(), DEFAULT_STEPS + 1);
//! ```
use std::ops::RangeInclusive;

use crate::{
    curve::Curve2D,
    error::{Error, Result},
    expression::Expression,
    value::{checked_range, UniformSteps, Value},
};

/// Number of steps used to sample a curve when none is given
pub const DEFAULT_STEPS: usize = 500;

/// Options for sampling expressions
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SampleOptions {
    /// Number of intervals; `steps + 1` points are evaluated
    pub steps: usize,

    /// Variable of function plots, `x` by default
    pub function_variable: String,

    /// Parameter of parametric curves, `t` by default
    pub curve_parameter: String,
}
impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            function_variable: "x".to_string(),
            curve_parameter: "t".to_string(),
        }
    }
}
impl SampleOptions {
    /// Default options with the given step count
    #[must_use]
    pub fn with_steps(steps: usize) -> Self {
        Self {
            steps,
            ..Self::default()
        }
    }

    /// Samples `y = expression(x)` over `x_range`.
    ///
    /// See [`sample_function`].
    ///
    /// # Errors
    /// - [`Error::InvalidRange`] unless `x_range.start() < x_range.end()`.
    /// - [`Error::InvalidStepCount`] if `steps` is zero.
    /// - [`Error::Parse`] if the expression cannot be compiled.
    pub fn sample_function<T: Value>(
        &self,
        expression: &str,
        x_range: RangeInclusive<T>,
    ) -> Result<Curve2D<T>> {
        let (min, max) = self.validate(&x_range)?;
        let f = Expression::compile(expression, &self.function_variable)?;

        let mut dropped = 0;
        let mut points = Vec::with_capacity(self.steps + 1);
        for x in UniformSteps::new(min..=max, self.steps) {
            match finite_point(x, f.evaluate(x)?) {
                Some(point) => points.push(point),
                None => dropped += 1,
            }
        }

        log_dropped(dropped, self.steps, expression);
        Ok(Curve2D::new(points))
    }

    /// Samples `(x_expression(t), y_expression(t))` over `t_range`.
    ///
    /// See [`sample_parametric`].
    ///
    /// # Errors
    /// - [`Error::InvalidRange`] unless `t_range.start() < t_range.end()`.
    /// - [`Error::InvalidStepCount`] if `steps` is zero.
    /// - [`Error::Parse`] if either expression cannot be compiled.
    pub fn sample_parametric<T: Value>(
        &self,
        x_expression: &str,
        y_expression: &str,
        t_range: RangeInclusive<T>,
    ) -> Result<Curve2D<T>> {
        let (min, max) = self.validate(&t_range)?;
        let fx = Expression::compile(x_expression, &self.curve_parameter)?;
        let fy = Expression::compile(y_expression, &self.curve_parameter)?;

        let mut dropped = 0;
        let mut points = Vec::with_capacity(self.steps + 1);
        for t in UniformSteps::new(min..=max, self.steps) {
            match finite_point(fx.evaluate(t)?, fy.evaluate(t)?) {
                Some(point) => points.push(point),
                None => dropped += 1,
            }
        }

        log_dropped(dropped, self.steps, &format!("({x_expression}, {y_expression})"));
        Ok(Curve2D::new(points))
    }

    fn validate<T: Value>(&self, range: &RangeInclusive<T>) -> Result<(f64, f64)> {
        let bounds = checked_range(range)?;
        if self.steps == 0 {
            return Err(Error::InvalidStepCount);
        }
        Ok(bounds)
    }
}

/// Samples `y = expression(x)` at `steps + 1` uniformly spaced x values.
///
/// The variable is `x`. Points where the expression is NaN or infinite are dropped.
///
/// # Errors
/// - [`Error::InvalidRange`] unless `x_range.start() < x_range.end()`.
/// - [`Error::InvalidStepCount`] if `steps` is zero.
/// - [`Error::Parse`] if the expression cannot be compiled.
///
/// # Example
/// ```
/// # use chartfit::sample_function;
/// // x = 0 is dropped
/// let curve = sample_function("1/x", -1.0..=1.0, 10).unwrap();
/// assert_eq!(curve.len(), 10);
/// ```
pub fn sample_function<T: Value>(
    expression: &str,
    x_range: RangeInclusive<T>,
    steps: usize,
) -> Result<Curve2D<T>> {
    SampleOptions::with_steps(steps).sample_function(expression, x_range)
}

/// Samples `(x_expression(t), y_expression(t))` at `steps + 1` uniformly spaced t values.
///
/// The parameter is `t`. Points where either expression is NaN or infinite are dropped.
///
/// # Errors
/// - [`Error::InvalidRange`] unless `t_range.start() < t_range.end()`.
/// - [`Error::InvalidStepCount`] if `steps` is zero.
/// - [`Error::Parse`] if either expression cannot be compiled.
///
/// # Example
/// ```
/// # use chartfit::sample_parametric;
/// let circle = sample_parametric("cos(t)", "sin(t)", 0.0..=std::f64::consts::TAU, 500).unwrap();
/// let length = circle.length().unwrap();
/// assert!((length - std::f64::consts::TAU).abs() < 1e-3);
/// ```
pub fn sample_parametric<T: Value>(
    x_expression: &str,
    y_expression: &str,
    t_range: RangeInclusive<T>,
    steps: usize,
) -> Result<Curve2D<T>> {
    SampleOptions::with_steps(steps).sample_parametric(x_expression, y_expression, t_range)
}

/// Narrows a point, or `None` if either coordinate is not finite in `T`
fn finite_point<T: Value>(x: f64, y: f64) -> Option<(T, T)> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }

    let point = (T::narrow(x).ok()?, T::narrow(y).ok()?);
    let finite = |v: T| <T as num_traits::float::FloatCore>::is_finite(v);
    (finite(point.0) && finite(point.1)).then_some(point)
}

fn log_dropped(dropped: usize, steps: usize, expression: &str) {
    if dropped > 0 {
        tracing::debug!(
            dropped,
            samples = steps + 1,
            expression,
            "dropped non-finite samples"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_close, value::CoordExt};

    #[test]
    fn test_reciprocal_drops_pole() {
        let curve = sample_function("1/x", -1.0..=1.0, 10).unwrap();
        assert_eq!(curve.len(), 10);
        assert!(curve.x().windows(2).all(|w| w[0] < w[1]));
        assert!(!curve.x().contains(&0.0));
        assert_eq!(curve.points()[0], (-1.0, -1.0));
        assert_eq!(curve.points()[9], (1.0, 1.0));
    }

    #[test]
    fn test_domain_errors_dropped() {
        let curve = sample_function("sqrt(x)", -1.0..=1.0, 4).unwrap();
        assert_eq!(curve.x(), vec![0.0, 0.5, 1.0]);

        let curve = sample_function("ln(x)", -2.0..=-1.0, 8).unwrap();
        assert!(curve.is_empty());
    }

    #[test]
    fn test_function_endpoints() {
        let curve = sample_function("x", 0.1..=0.7, 3).unwrap();
        assert_eq!(curve.len(), 4);
        assert_eq!(curve.x_range(), Some(0.1..=0.7));
    }

    #[test]
    fn test_invalid_range() {
        assert_eq!(
            sample_function("x", 1.0..=1.0, 10),
            Err(Error::InvalidRange { min: 1.0, max: 1.0 })
        );
        assert!(matches!(
            sample_parametric("t", "t", 2.0..=-2.0, 10),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_zero_steps() {
        assert_eq!(sample_function("x", 0.0..=1.0, 0), Err(Error::InvalidStepCount));
    }

    #[test]
    fn test_parse_error_is_not_a_dropped_sample() {
        assert!(matches!(
            sample_function("sqrt(", 0.0..=1.0, 10),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(
            sample_function("", 0.0..=1.0, 10),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(
            sample_parametric("cos(t)", "sin(x)", 0.0..=1.0, 10),
            Err(Error::Parse { .. })
        ));

        // Only reached for x > 2, but still rejected before sampling
        assert!(matches!(
            sample_function("x > 2 && y", 0.0..=4.0, 4),
            Err(Error::Parse { ref reason, .. }) if reason == "unknown name `y`"
        ));
    }

    #[test]
    fn test_parametric_circle() {
        let circle = sample_parametric("cos(t)", "sin(t)", 0.0..=std::f64::consts::TAU, 500).unwrap();
        assert_eq!(circle.len(), 501);
        for &(x, y) in &circle {
            assert_close!(x.hypot(y), 1.0, 1e-12);
        }
        assert_close!(circle.length().unwrap(), std::f64::consts::TAU, 1e-4);
    }

    #[test]
    fn test_parametric_drops_either_coordinate() {
        // x is undefined for t < 0, y at t = 1
        let curve = sample_parametric("sqrt(t)", "1/(t-1)", -1.0..=2.0, 6).unwrap();
        assert_eq!(curve.len(), 4);
        assert_eq!(curve.points()[0], (0.0, -1.0));
    }

    #[test]
    fn test_custom_variable() {
        let options = SampleOptions {
            steps: 2,
            function_variable: "u".to_string(),
            ..SampleOptions::default()
        };
        let curve = options.sample_function("u * 10", 0.0..=1.0).unwrap();
        assert_eq!(curve.y(), vec![0.0, 5.0, 10.0]);
        assert!(options.sample_function("x", 0.0..=1.0).is_err());
    }

    #[test]
    fn test_f32() {
        let curve = sample_function("x^3", -2.0f32..=2.0, 4).unwrap();
        assert_eq!(curve.y(), vec![-8.0f32, -1.0, 0.0, 1.0, 8.0]);
    }

    #[test]
    fn test_overflow_in_f32_is_dropped() {
        // e^100 fits in f64 but not in f32
        let curve = sample_function("exp(x)", 0.0f32..=100.0, 2).unwrap();
        assert_eq!(curve.x(), vec![0.0, 50.0]);
    }

    #[test]
    fn test_idempotent() {
        let a = sample_parametric("t*cos(t)", "t*sin(t)", 0.0..=10.0, 100).unwrap();
        let b = sample_parametric("t*cos(t)", "t*sin(t)", 0.0..=10.0, 100).unwrap();
        assert_eq!(a, b);
    }
}
