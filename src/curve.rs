//! Sampled curves and their extents
//!
//! A [`Curve2D`] is an ordered sequence of finite `(x, y)` points, produced by
//! sampling an expression or a fitted model. Order is meaningful: it is the
//! order in which a renderer connects the points, and the order used by
//! [`polyline_length`].
//!
//! [`Bounds`] describes the axis extents of one or more point sets, for
//! choosing a chart viewport.
use std::ops::RangeInclusive;

use crate::{
    error::Result,
    value::{CoordExt, Value},
};

/// Ordered sequence of sampled `(x, y)` points
///
/// # Example
/// ```
/// # use chartfit::Curve2D;
/// let curve = Curve2D::new(vec![(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]);
/// assert_eq!(curve.len(), 3);
/// assert_eq!(curve.length().unwrap(), 7.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Curve2D<T: Value = f64> {
    points: Vec<(T, T)>,
}
impl<T: Value> Curve2D<T> {
    /// Creates a curve from points, in drawing order
    #[must_use]
    pub fn new(points: Vec<(T, T)>) -> Self {
        Self { points }
    }

    /// The points of the curve, in drawing order
    #[must_use]
    pub fn points(&self) -> &[(T, T)] {
        &self.points
    }

    /// Number of points in the curve
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the curve has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the points of the curve
    pub fn iter(&self) -> std::slice::Iter<'_, (T, T)> {
        self.points.iter()
    }

    /// Consumes the curve, returning its points
    #[must_use]
    pub fn into_points(self) -> Vec<(T, T)> {
        self.points
    }

    /// Length of the polyline through the points.
    ///
    /// See [`polyline_length`].
    ///
    /// # Errors
    /// Returns an error if the length cannot be represented in `T`.
    pub fn length(&self) -> Result<T> {
        polyline_length(&self.points)
    }

    /// Axis extents of the curve, or `None` if it is empty
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds<T>> {
        Bounds::of(&self.points)
    }
}

impl<T: Value> From<Vec<(T, T)>> for Curve2D<T> {
    fn from(points: Vec<(T, T)>) -> Self {
        Self::new(points)
    }
}

impl<T: Value> FromIterator<(T, T)> for Curve2D<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Value> IntoIterator for Curve2D<T> {
    type Item = (T, T);
    type IntoIter = std::vec::IntoIter<(T, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, T: Value> IntoIterator for &'a Curve2D<T> {
    type Item = &'a (T, T);
    type IntoIter = std::slice::Iter<'a, (T, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T: Value> CoordExt<T> for Curve2D<T> {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.points.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.points.iter().map(|(_, y)| *y)
    }
}

/// Total length of the piecewise-linear path through `points`.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// L = Σ √((x_i - x_{i-1})² + (y_i - y_{i-1})²)
/// ```
/// Each segment is computed with `hypot` in `f64`.
/// </div>
///
/// Returns zero for fewer than two points.
///
/// # Errors
/// Returns an error if a point or the result cannot be converted to or from `f64`.
///
/// # Example
/// ```
/// # use chartfit::polyline_length;
/// let l = polyline_length(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]).unwrap();
/// assert_eq!(l, 7.0);
/// ```
pub fn polyline_length<T: Value>(points: &[(T, T)]) -> Result<T> {
    let mut length = 0.0;
    for pair in points.windows(2) {
        let (x0, y0) = (pair[0].0.widen()?, pair[0].1.widen()?);
        let (x1, y1) = (pair[1].0.widen()?, pair[1].1.widen()?);
        length += (x1 - x0).hypot(y1 - y0);
    }

    T::narrow(length)
}

/// Axis extents of a set of points
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<T: Value = f64> {
    /// Horizontal extent
    pub x: RangeInclusive<T>,

    /// Vertical extent
    pub y: RangeInclusive<T>,
}
impl<T: Value> Bounds<T> {
    /// Creates bounds from two axis ranges
    #[must_use]
    pub fn new(x: RangeInclusive<T>, y: RangeInclusive<T>) -> Self {
        Self { x, y }
    }

    /// Smallest bounds containing every point, or `None` for no points.
    ///
    /// # Example
    /// ```
    /// # use chartfit::Bounds;
    /// let b = Bounds::of(&[(1.0, -2.0), (4.0, 3.0)]).unwrap();
    /// assert_eq!(b.x, 1.0..=4.0);
    /// assert_eq!(b.y, -2.0..=3.0);
    /// ```
    #[must_use]
    pub fn of(points: &[(T, T)]) -> Option<Self> {
        Some(Self::new(points.x_range()?, points.y_range()?))
    }

    /// `-radius..=radius` on both axes.
    ///
    /// Used as the viewport when there is nothing to draw.
    #[must_use]
    pub fn symmetric(radius: T) -> Self {
        Self::new(-radius..=radius, -radius..=radius)
    }

    /// Extends each axis to contain zero
    ///
    /// # Example
    /// ```
    /// # use chartfit::Bounds;
    /// let b = Bounds::new(1.0..=4.0, -2.0..=-1.0).including_origin();
    /// assert_eq!(b.x, 0.0..=4.0);
    /// assert_eq!(b.y, -2.0..=0.0);
    /// ```
    #[must_use]
    pub fn including_origin(self) -> Self {
        let zero = T::zero();
        self.union(&Self::new(zero..=zero, zero..=zero))
    }

    /// Smallest bounds containing both `self` and `other`
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            span_union(&self.x, &other.x),
            span_union(&self.y, &other.y),
        )
    }

    /// True if the point lies within the bounds, edges included
    #[must_use]
    pub fn contains(&self, x: T, y: T) -> bool {
        self.x.contains(&x) && self.y.contains(&y)
    }
}

fn span_union<T: Value>(a: &RangeInclusive<T>, b: &RangeInclusive<T>) -> RangeInclusive<T> {
    let start = nalgebra::RealField::min(*a.start(), *b.start());
    let end = nalgebra::RealField::max(*a.end(), *b.end());
    start..=end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;

    #[test]
    fn test_polyline_length_short() {
        let empty: [(f64, f64); 0] = [];
        assert_eq!(polyline_length(&empty).unwrap(), 0.0);
        assert_eq!(polyline_length(&[(5.0, 5.0)]).unwrap(), 0.0);
    }

    #[test]
    fn test_polyline_length_right_angle() {
        let curve = Curve2D::new(vec![(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]);
        assert_eq!(curve.length().unwrap(), 7.0);
    }

    #[test]
    fn test_polyline_length_circle() {
        // 1000-gon inscribed in the unit circle
        let n = 1000;
        let points: Vec<(f64, f64)> = (0..=n)
            .map(|i| {
                let t = std::f64::consts::TAU * f64::from(i) / f64::from(n);
                (t.cos(), t.sin())
            })
            .collect();
        assert_close!(polyline_length(&points).unwrap(), std::f64::consts::TAU, 1e-4);
    }

    #[test]
    fn test_polyline_length_f32() {
        let l = polyline_length(&[(0.0f32, 0.0), (3.0, 4.0), (3.0, 5.0)]).unwrap();
        assert_eq!(l, 6.0f32);
    }

    #[test]
    fn test_curve_bounds() {
        let curve: Curve2D = vec![(-1.0, 2.0), (0.5, -3.0), (2.0, 1.0)].into();
        let bounds = curve.bounds().unwrap();
        assert_eq!(bounds, Bounds::new(-1.0..=2.0, -3.0..=2.0));
        assert!(bounds.contains(0.0, 0.0));
        assert!(!bounds.contains(2.5, 0.0));

        assert_eq!(Curve2D::<f64>::default().bounds(), None);
    }

    #[test]
    fn test_bounds_union() {
        let a = Bounds::new(0.0..=1.0, 0.0..=1.0);
        let b = Bounds::new(-2.0..=0.5, 0.5..=3.0);
        assert_eq!(a.union(&b), Bounds::new(-2.0..=1.0, 0.0..=3.0));
        assert_eq!(Bounds::symmetric(10.0), Bounds::new(-10.0..=10.0, -10.0..=10.0));
    }

    #[test]
    fn test_curve_iteration_order() {
        let points = vec![(3.0, 1.0), (1.0, 2.0), (2.0, 3.0)];
        let curve = Curve2D::new(points.clone());
        assert_eq!(curve.x(), vec![3.0, 1.0, 2.0]);
        assert_eq!(curve.iter().copied().collect::<Vec<_>>(), points);
        assert_eq!(curve.into_points(), points);
    }
}
