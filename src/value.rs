//! Numeric types and iteration utilities for fitting and sampling.
//!
//! This module defines the [`Value`] trait, which abstracts the floating-point
//! types accepted at the public boundary of the crate (`f32` and `f64`).
//!
//! All arithmetic inside the crate is carried out in `f64`; values are cast
//! in at the start of an operation and back out at the end, so an `f32`
//! caller gets double-precision intermediates for free.
//!
//! # Traits
//!
//! - [`Value`]: Extends `RealField` and `FloatCore` to provide:
//!   - `try_cast` for safe type conversion with error handling.
//!   - `widen` / `narrow` for moving across the precision boundary.
//! - [`CoordExt`]: Access to the x and y channels of a point sequence.
//!
//! # Iterators
//!
//! - [`UniformSteps`]: `steps + 1` evenly spaced values over an inclusive range.
//!
//! # Example
//!
//! ```rust
//! use chartfit::value::UniformSteps;
//!
//! // 0.0, 0.25, 0.5, 0.75, 1.0
//! let values: Vec<f64> = UniformSteps::new(0.0..=1.0, 4).collect();
//! assert_eq!(values.len(), 5);
//! assert_eq!(values[4], 1.0);
//! ```
use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Numeric type for samples, coefficients and curves
pub trait Value:
    nalgebra::Scalar
    + nalgebra::ComplexField<RealField = Self>
    + nalgebra::RealField
    + num_traits::float::FloatCore
    + std::fmt::LowerExp
{
    /// Tries to cast a value to the target type
    ///
    /// # Errors
    /// Returns an error if the cast fails
    fn try_cast<U: num_traits::NumCast>(n: U) -> Result<Self> {
        num_traits::cast(n).ok_or(Error::CastFailed)
    }

    /// Widens the value to `f64` for internal computation
    ///
    /// # Errors
    /// Returns an error if the value cannot be represented as `f64`
    fn widen(self) -> Result<f64> {
        num_traits::cast(self).ok_or(Error::CastFailed)
    }

    /// Narrows an internal `f64` result back to this type
    ///
    /// # Errors
    /// Returns an error if the value cannot be represented in this type
    fn narrow(n: f64) -> Result<Self> {
        Self::try_cast(n)
    }

    /// Converts a `usize` to the target numeric type.
    ///
    /// Results in `infinity` if the value is out of range.
    #[must_use]
    fn from_positive_int(n: usize) -> Self {
        Self::try_cast(n).unwrap_or(<Self as num_traits::float::FloatCore>::infinity())
    }
}

impl<T> Value for T where
    T: nalgebra::Scalar
        + nalgebra::ComplexField<RealField = Self>
        + nalgebra::RealField
        + num_traits::float::FloatCore
        + std::fmt::LowerExp
{
}

/// Converts a range to `f64` bounds, rejecting empty or reversed ranges.
///
/// # Errors
/// - [`Error::CastFailed`] if a bound cannot be widened.
/// - [`Error::InvalidRange`] unless `start < end` (NaN bounds included).
pub(crate) fn checked_range<T: Value>(range: &RangeInclusive<T>) -> Result<(f64, f64)> {
    let min = range.start().widen()?;
    let max = range.end().widen()?;
    if min < max {
        Ok((min, max))
    } else {
        Err(Error::InvalidRange { min, max })
    }
}

/// Iterator over `steps + 1` uniformly spaced values of an inclusive range.
///
/// Value `i` is computed as `start + (end - start) * i / steps` rather than
/// by accumulating a step, so rounding error does not build up and the last
/// value is exactly `end`.
#[derive(Debug, Clone)]
pub struct UniformSteps<T: Value> {
    start: T,
    end: T,
    steps: usize,
    index: usize,
}
impl<T: Value> UniformSteps<T> {
    /// Creates a new iterator over `steps + 1` values in `range`
    ///
    /// With `steps == 0` only `range.start` is yielded.
    pub fn new(range: RangeInclusive<T>, steps: usize) -> Self {
        let (start, end) = range.into_inner();
        Self {
            start,
            end,
            steps,
            index: 0,
        }
    }
}
impl<T: Value> Iterator for UniformSteps<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index > self.steps {
            return None;
        }

        let i = self.index;
        self.index += 1;

        if i == 0 {
            Some(self.start)
        } else if i == self.steps {
            Some(self.end)
        } else {
            let span = self.end - self.start;
            let i = T::from_positive_int(i);
            let n = T::from_positive_int(self.steps);
            Some(self.start + span * i / n)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}
impl<T: Value> ExactSizeIterator for UniformSteps<T> {}

/// Extension trait for accessing the `x` and `y` coordinates of a point sequence.
///
/// # Examples
///
/// ```
/// # use chartfit::value::CoordExt;
/// let data = vec![(1.5, -2.0), (2.0, 3.0), (0.0, 1.0)];
/// assert_eq!(data.y(), vec![-2.0, 3.0, 1.0]);
/// assert_eq!(data.x_range(), Some(0.0..=2.0));
/// ```
pub trait CoordExt<T: Value> {
    /// Returns an iterator over the x-coordinates.
    fn x_iter(&self) -> impl Iterator<Item = T>;

    /// Returns an iterator over the y-coordinates.
    fn y_iter(&self) -> impl Iterator<Item = T>;

    /// Returns the x-coordinates.
    fn x(&self) -> Vec<T> {
        self.x_iter().collect()
    }

    /// Returns the y-coordinates.
    fn y(&self) -> Vec<T> {
        self.y_iter().collect()
    }

    /// Returns the inclusive range of x-coordinates, or `None` if there are none.
    fn x_range(&self) -> Option<RangeInclusive<T>> {
        extent(self.x_iter())
    }

    /// Returns the inclusive range of y-coordinates, or `None` if there are none.
    fn y_range(&self) -> Option<RangeInclusive<T>> {
        extent(self.y_iter())
    }
}
impl<T: Value> CoordExt<T> for Vec<(T, T)> {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}
impl<T: Value> CoordExt<T> for &[(T, T)] {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}

/// Smallest and largest value of a sequence
fn extent<T: Value>(values: impl Iterator<Item = T>) -> Option<RangeInclusive<T>> {
    let bounds = values.fold(None, |acc: Option<(T, T)>, v| {
        Some(match acc {
            Some((min, max)) => (
                nalgebra::RealField::min(min, v),
                nalgebra::RealField::max(max, v),
            ),
            None => (v, v),
        })
    });
    bounds.map(|(start, end)| start..=end)
}

/// Pairs separate x and y columns into samples, preserving input order.
///
/// # Errors
/// Returns [`Error::LengthMismatch`] if the columns differ in length.
///
/// # Example
/// ```
/// # use chartfit::value::zip_samples;
/// let data = zip_samples(&[1.0, 2.0], &[3.0, 4.0]).unwrap();
/// assert_eq!(data, vec![(1.0, 3.0), (2.0, 4.0)]);
/// ```
pub fn zip_samples<T: Value>(xs: &[T], ys: &[T]) -> Result<Vec<(T, T)>> {
    if xs.len() != ys.len() {
        return Err(Error::LengthMismatch {
            x: xs.len(),
            y: ys.len(),
        });
    }

    Ok(xs.iter().copied().zip(ys.iter().copied()).collect())
}

/// Widens a dataset to `f64` columns.
pub(crate) fn widen_samples<T: Value>(data: &[(T, T)]) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut xs = Vec::with_capacity(data.len());
    let mut ys = Vec::with_capacity(data.len());
    for &(x, y) in data {
        xs.push(x.widen()?);
        ys.push(y.widen()?);
    }
    Ok((xs, ys))
}
