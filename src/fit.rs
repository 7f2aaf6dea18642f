//! Least-squares regression models
//!
//! Three closed-form fits are provided, each a [`CurveModel`]:
//! - [`LinearFit`]: `y = m·x + b`
//! - [`QuadraticFit`]: `y = a·x² + b·x + c`, via the normal equations
//! - [`ExponentialFit`]: `y = a·e^(b·x)`, via log-linearization
//!
//! [`Regression`] wraps all three behind a [`FitKind`] for callers that pick
//! the model at runtime.
//!
//! # Example
//! ```rust
//! use chartfit::{fit_quadratic, CurveModel, OVERLAY_STEPS};
//!
//! let xs = [-1.0, 0.0, 1.0, 2.0];
//! let ys = [2.0, 1.0, 2.0, 5.0];
//! let fit = fit_quadratic(&xs, &ys).unwrap();
//!
//! let line = fit.overlay(OVERLAY_STEPS).unwrap();
//! assert_eq!(line.len(), OVERLAY_STEPS + 1);
//! ```
use std::ops::RangeInclusive;

use crate::{
    curve::Curve2D,
    error::{Error, Result},
    statistics,
    value::{zip_samples, UniformSteps, Value},
};

mod exponential;
mod linear;
mod quadratic;

pub use exponential::ExponentialFit;
pub use linear::LinearFit;
pub use quadratic::QuadraticFit;

/// Number of steps used to draw a fitted curve over its data
pub const OVERLAY_STEPS: usize = 100;

/// The regression models available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FitKind {
    /// `y = m·x + b`
    Linear,

    /// `y = a·x² + b·x + c`
    Quadratic,

    /// `y = a·e^(b·x)`
    Exponential,
}
impl FitKind {
    /// Every kind, in order of model complexity
    pub const ALL: [FitKind; 3] = [FitKind::Linear, FitKind::Quadratic, FitKind::Exponential];

    /// Lowercase name of the model
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FitKind::Linear => "linear",
            FitKind::Quadratic => "quadratic",
            FitKind::Exponential => "exponential",
        }
    }

    /// Number of coefficients the model produces
    #[must_use]
    pub fn coefficient_count(self) -> usize {
        match self {
            FitKind::Linear | FitKind::Exponential => 2,
            FitKind::Quadratic => 3,
        }
    }
}
impl std::fmt::Display for FitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fitted curve `y = f(x)` over the x-range of its source data.
pub trait CurveModel<T: Value> {
    /// Which model this is
    fn kind(&self) -> FitKind;

    /// Evaluates the curve at `x`
    fn y(&self, x: T) -> T;

    /// The coefficients of the curve, highest order first.
    ///
    /// - Linear: `[m, b]`
    /// - Quadratic: `[a, b, c]`
    /// - Exponential: `[a, b]`
    fn coefficients(&self) -> Vec<T>;

    /// Inclusive x-range of the data the curve was fitted to
    fn x_range(&self) -> RangeInclusive<T>;

    /// Human-readable equation, with two decimal places.
    ///
    /// For example `y = 2.00x + 1.00`, `y = 2.00x² - 3.00x + 1.00`, or `y = 3.00e^(0.50x)`.
    fn equation(&self) -> String;

    /// Evaluates the curve at each x, returning `(x, y)` pairs
    fn solve(&self, xs: impl IntoIterator<Item = T>) -> Vec<(T, T)> {
        xs.into_iter().map(|x| (x, self.y(x))).collect()
    }

    /// Samples the curve at `steps + 1` uniformly spaced points over [`CurveModel::x_range`].
    ///
    /// A curve fitted to a single distinct x yields a single point.
    ///
    /// # Errors
    /// Returns [`Error::InvalidStepCount`] if `steps` is zero.
    fn overlay(&self, steps: usize) -> Result<Curve2D<T>> {
        if steps == 0 {
            return Err(Error::InvalidStepCount);
        }

        let range = self.x_range();
        if range.start() == range.end() {
            return Ok(Curve2D::new(self.solve([*range.start()])));
        }

        Ok(Curve2D::new(self.solve(UniformSteps::new(range, steps))))
    }

    /// R² of the curve against `data`; see [`statistics::r_squared`]
    fn r_squared(&self, data: &[(T, T)]) -> T {
        let y = data.iter().map(|&(_, y)| lossy_widen_one(y));
        let y_fit = data.iter().map(|&(x, _)| lossy_widen_one(self.y(x)));
        lossy_narrow(statistics::r_squared(y, y_fit))
    }

    /// Root mean squared error of the curve against `data`; see [`statistics::root_mean_squared_error`]
    fn rmse(&self, data: &[(T, T)]) -> T {
        let y = data.iter().map(|&(_, y)| lossy_widen_one(y));
        let y_fit = data.iter().map(|&(x, _)| lossy_widen_one(self.y(x)));
        lossy_narrow(statistics::root_mean_squared_error(y, y_fit))
    }
}

/// One of the regression models, chosen at runtime
///
/// # Example
/// ```
/// # use chartfit::{Regression, FitKind, CurveModel};
/// let data = [(0.0_f64, 1.0), (1.0, 3.0), (2.0, 5.0)];
/// for kind in [FitKind::Linear, FitKind::Quadratic] {
///     let fit = Regression::fit(kind, &data).unwrap();
///     assert!((fit.y(3.0) - 7.0).abs() < 1e-9);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Regression<T: Value = f64> {
    /// See [`LinearFit`]
    Linear(LinearFit<T>),

    /// See [`QuadraticFit`]
    Quadratic(QuadraticFit<T>),

    /// See [`ExponentialFit`]
    Exponential(ExponentialFit<T>),
}
impl<T: Value> Regression<T> {
    /// Fits the given model to `data`.
    ///
    /// # Errors
    /// Returns whatever error the chosen model's constructor returns.
    pub fn fit(kind: FitKind, data: &[(T, T)]) -> Result<Self> {
        tracing::trace!(%kind, points = data.len(), "fitting regression");
        Ok(match kind {
            FitKind::Linear => Self::Linear(LinearFit::new(data)?),
            FitKind::Quadratic => Self::Quadratic(QuadraticFit::new(data)?),
            FitKind::Exponential => Self::Exponential(ExponentialFit::new(data)?),
        })
    }
}

macro_rules! dispatch {
    ($self:ident, $fit:ident => $body:expr) => {
        match $self {
            Regression::Linear($fit) => $body,
            Regression::Quadratic($fit) => $body,
            Regression::Exponential($fit) => $body,
        }
    };
}

impl<T: Value> CurveModel<T> for Regression<T> {
    fn kind(&self) -> FitKind {
        dispatch!(self, fit => fit.kind())
    }

    fn y(&self, x: T) -> T {
        dispatch!(self, fit => fit.y(x))
    }

    fn coefficients(&self) -> Vec<T> {
        dispatch!(self, fit => fit.coefficients())
    }

    fn x_range(&self) -> RangeInclusive<T> {
        dispatch!(self, fit => fit.x_range())
    }

    fn equation(&self) -> String {
        dispatch!(self, fit => fit.equation())
    }
}

impl<T: Value> From<LinearFit<T>> for Regression<T> {
    fn from(fit: LinearFit<T>) -> Self {
        Self::Linear(fit)
    }
}

impl<T: Value> From<QuadraticFit<T>> for Regression<T> {
    fn from(fit: QuadraticFit<T>) -> Self {
        Self::Quadratic(fit)
    }
}

impl<T: Value> From<ExponentialFit<T>> for Regression<T> {
    fn from(fit: ExponentialFit<T>) -> Self {
        Self::Exponential(fit)
    }
}

/// Fits `y = m·x + b` to paired x and y columns.
///
/// See [`LinearFit::new`].
///
/// # Errors
/// - [`Error::LengthMismatch`] if `xs` and `ys` differ in length.
/// - [`Error::NoData`] if they are empty.
///
/// # Example
/// ```
/// # use chartfit::fit_linear;
/// let fit = fit_linear(&[1.0_f64, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert!((fit.slope() - 2.0).abs() < 1e-12);
/// ```
pub fn fit_linear<T: Value>(xs: &[T], ys: &[T]) -> Result<LinearFit<T>> {
    LinearFit::new(&zip_samples(xs, ys)?)
}

/// Fits `y = a·x² + b·x + c` to paired x and y columns.
///
/// See [`QuadraticFit::new`].
///
/// # Errors
/// - [`Error::LengthMismatch`] if `xs` and `ys` differ in length.
/// - [`Error::NoData`] if they are empty.
/// - [`Error::SingularMatrix`] if there are fewer than three distinct x values.
pub fn fit_quadratic<T: Value>(xs: &[T], ys: &[T]) -> Result<QuadraticFit<T>> {
    QuadraticFit::new(&zip_samples(xs, ys)?)
}

/// Fits `y = a·e^(b·x)` to paired x and y columns.
///
/// See [`ExponentialFit::new`].
///
/// # Errors
/// - [`Error::LengthMismatch`] if `xs` and `ys` differ in length.
/// - [`Error::NoData`] if they are empty.
/// - [`Error::InvalidDomain`] if any y is not strictly positive.
pub fn fit_exponential<T: Value>(xs: &[T], ys: &[T]) -> Result<ExponentialFit<T>> {
    ExponentialFit::new(&zip_samples(xs, ys)?)
}

/// Widens coefficients for display; unrepresentable values become NaN
pub(crate) fn lossy_widen<T: Value>(values: &[T]) -> Vec<f64> {
    values.iter().map(|&v| lossy_widen_one(v)).collect()
}

fn lossy_widen_one<T: Value>(value: T) -> f64 {
    value.widen().unwrap_or(f64::NAN)
}

fn lossy_narrow<T: Value>(value: f64) -> T {
    T::narrow(value).unwrap_or(<T as num_traits::float::FloatCore>::nan())
}
