//! Functions for describing datasets and evaluating fits
//!
//! All functions here operate on `f64` iterators. The fit types widen their
//! data before calling in, keeping every intermediate in double precision.
//!
//! # Model Fit
//! - [`r_squared`]: Proportion of variance explained by the model. Higher is better (0 to 1).
//!
//! # Error Metrics
//! - [`mean_squared_error`]: Average squared difference between observed and predicted values. Lower is better.
//! - [`root_mean_squared_error`]: Square root of MSE, giving error in same units as observed values. Lower is better.
//!
//! # Descriptive Statistics
//! - [`mean`]: Arithmetic mean of a dataset.
//! - [`stddev_and_mean`]: Population standard deviation and mean of a dataset.
//!
//! # Examples
//!
//! ```rust
//! use chartfit::statistics::r_squared;
//!
//! let y = vec![1.0, 2.0, 3.0];
//! let y_fit = vec![1.1, 1.9, 3.05];
//!
//! let r2 = r_squared(y.into_iter(), y_fit.into_iter());
//! assert!(r2 > 0.9);
//! ```

/// Computes the arithmetic mean of a sequence of values.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// Mean = (Σ x_i) / N
/// ```
/// </div>
///
/// Returns zero if the iterator yields no elements.
///
/// # Examples
/// ```rust
/// let values = vec![1.0, 2.0, 3.0];
/// let m = chartfit::statistics::mean(values.into_iter());
/// assert_eq!(m, 2.0);
/// ```
pub fn mean(data: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0.0;
    for value in data {
        sum += value;
        count += 1.0;
    }

    if count == 0.0 {
        0.0
    } else {
        sum / count
    }
}

/// Computes the population standard deviation and mean of a dataset.
///
/// # Returns
/// `(standard_deviation, mean)`
///
/// # Examples
/// ```rust
/// let values = vec![1.0, 2.0, 3.0];
/// let (s, m) = chartfit::statistics::stddev_and_mean(values.into_iter());
/// assert_eq!(m, 2.0);
/// assert!((s - 0.816496580927726).abs() < 1e-12); // sqrt(2/3)
/// ```
pub fn stddev_and_mean(data: impl Iterator<Item = f64>) -> (f64, f64) {
    let data: Vec<_> = data.collect();
    let mean = mean(data.iter().copied());
    if data.is_empty() {
        return (0.0, mean);
    }

    let sum_sq_diff: f64 = data.iter().map(|v| (v - mean).powi(2)).sum();
    let dev = (sum_sq_diff / data.len() as f64).sqrt();

    (dev, mean)
}

/// Calculate the R-squared value for a set of data.
///
/// R-squared is a number between 0 and 1 that tells you how well the model explains the data:
/// - `0` means the model explains none of the variation.
/// - `1` means the model explains all the variation.
///
/// It can go negative for a model that does worse than the mean of `y`.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// R² = 1 - (SS_res / SS_tot)
/// where
///   SS_res = Σ (y_i - y_fit_i)²
///   SS_tot = Σ (y_i - y_mean)²
/// ```
///
/// When every `y` is identical `SS_tot` is zero; the result is then `1` for an
/// exact fit and `0` otherwise.
/// </div>
///
/// # Example
/// ```rust
/// # use chartfit::statistics::r_squared;
/// let y = vec![1.0, 2.0, 3.0];
/// let r2 = r_squared(y.clone().into_iter(), y.into_iter());
/// assert_eq!(r2, 1.0);
/// ```
pub fn r_squared(y: impl Iterator<Item = f64>, y_fit: impl Iterator<Item = f64>) -> f64 {
    let y: Vec<f64> = y.collect();
    let y_mean = mean(y.iter().copied());

    let mut ss_total = 0.0;
    let mut ss_residual = 0.0;
    for (y, y_fit) in y.into_iter().zip(y_fit) {
        ss_total += (y - y_mean).powi(2);
        ss_residual += (y - y_fit).powi(2);
    }

    if ss_total == 0.0 {
        return if ss_residual == 0.0 { 1.0 } else { 0.0 };
    }

    1.0 - ss_residual / ss_total
}

/// Computes the mean squared error (MSE) between two sets of values.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// MSE = (Σ (y_i - y_fit_i)²) / N
/// ```
/// </div>
///
/// Returns zero for empty input.
///
/// # Example
/// ```rust
/// # use chartfit::statistics::mean_squared_error;
/// let mse = mean_squared_error([1.0, 2.0].into_iter(), [2.0, 4.0].into_iter());
/// assert_eq!(mse, 2.5);
/// ```
pub fn mean_squared_error(y: impl Iterator<Item = f64>, y_fit: impl Iterator<Item = f64>) -> f64 {
    mean(y.zip(y_fit).map(|(y, y_fit)| (y - y_fit).powi(2)))
}

/// Computes the root mean squared error (RMSE) between two sets of values.
///
/// The square root of [`mean_squared_error`], in the same units as `y`.
///
/// # Example
/// ```rust
/// # use chartfit::statistics::root_mean_squared_error;
/// let rmse = root_mean_squared_error([0.0, 0.0].into_iter(), [3.0, 3.0].into_iter());
/// assert_eq!(rmse, 3.0);
/// ```
pub fn root_mean_squared_error(
    y: impl Iterator<Item = f64>,
    y_fit: impl Iterator<Item = f64>,
) -> f64 {
    mean_squared_error(y, y_fit).sqrt()
}
