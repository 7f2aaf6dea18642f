//! # Chartfit
//! ## Fit a line, draw a curve
//!
//! The numeric core of a charting app: least-squares fits for scattered data,
//! and sampled curves for typed-in expressions, ready to hand to a renderer.
//!
//! This library is for developers who need the lines on a chart to be right,
//! without rederiving normal equations or chasing NaNs through a plot.
//!
//! It provides tools to:
//! - Fit linear, quadratic and exponential curves to a dataset, with a readable equation
//! - Sample `y = f(x)` and `(x(t), y(t))` expressions into drawable point lists
//! - Measure the length of a sampled curve
//! - Pick a viewport that fits everything on screen
//!
//! The simplest use-case is to fit a line to some measurements:
//! ```rust
//! use chartfit::{fit_linear, CurveModel, OVERLAY_STEPS};
//!
//! let fit = fit_linear(&[1.0, 2.0, 3.0, 4.0], &[3.1, 4.9, 7.2, 8.8]).unwrap();
//! println!("{}", fit.equation()); // y = 1.94x + 1.15
//!
//! // The regression line to draw over the scatter plot
//! let line = fit.overlay(OVERLAY_STEPS).unwrap();
//! assert_eq!(line.len(), OVERLAY_STEPS + 1);
//! ```
//!
//! Or to plot an expression:
//! ```rust
//! use chartfit::{sample_parametric, DEFAULT_STEPS};
//!
//! let spiral = sample_parametric("t*cos(t)", "t*sin(t)", 0.0..=10.0, DEFAULT_STEPS).unwrap();
//! println!("Curve Length: {:.4}", spiral.length().unwrap());
//! ```
//!
//! # Core Concepts
//! - A [`CurveModel`] is a fitted function `y = f(x)`, valid over the x-range of its data.
//!     - [`LinearFit`] is `y = m·x + b`. A dataset whose x values are all identical gets the horizontal line through the mean.
//!     - [`QuadraticFit`] is `y = a·x² + b·x + c`. It needs at least three distinct x values.
//!     - [`ExponentialFit`] is `y = a·e^(b·x)`. It needs every y to be positive.
//!     - [`Regression`] holds any of them, chosen by [`FitKind`] at runtime.
//! - A [`Curve2D`] is an ordered list of finite points, produced by [`CurveModel::overlay`],
//!   [`sample_function`] or [`sample_parametric`].
//!     - Samples where an expression is undefined or infinite are dropped, so a curve can have gaps or be empty.
//! - [`Bounds`] are the axis extents of one or more curves.
//! - The [`request`] module bundles all of this into one request and response per chart.
//!
//! # Implementation Details
//!
//! Fits and samples accept `f32` or `f64` (see [`value::Value`]), but all
//! arithmetic runs in `f64`. The quadratic fit solves its normal equations with
//! [`linalg::solve`], a Gaussian elimination with partial pivoting over
//! `nalgebra` matrices. Expressions are parsed and compiled by `fasteval`.
//!
//! Everything is synchronous and deterministic: the same input always gives the same output.
//!
//! # Testing utilities
//!
//! [`assert_close!`] and [`assert_all_close!`] compare floating-point results within a tolerance. See [`test`].
//!
//! With the `transforms` feature (on by default), [`transforms`] can add seeded noise to synthetic datasets.
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![cfg_attr(docsrs, feature(doc_cfg))]


#[cfg(feature = "transforms")]
#[cfg_attr(docsrs, doc(cfg(feature = "transforms")))]
pub mod transforms;

pub mod curve;
pub mod display;
pub mod error;
pub mod expression;
pub mod linalg;
pub mod request;
pub mod sampling;
pub mod statistics;
pub mod value;

mod fit;

pub use curve::{polyline_length, Bounds, Curve2D};
pub use error::{Error, Result};
pub use expression::Expression;
pub use fit::*;
pub use sampling::{sample_function, sample_parametric, SampleOptions, DEFAULT_STEPS};

pub use nalgebra;
