//! Utilities for displaying fitted equations
//!
//! This module turns fitted coefficients into human-readable strings such as
//! `y = 2.00x² + 3.00x + 1.00` or `y = 3.00e^(0.50x)`.
//!
//! # Key Concepts
//! - **[`Term`]**: Represents a single polynomial term with a sign and body.
//! - **[`Sign`]**: Tracks whether a term is positive or negative.
//!
//! # Helpers
//! - [`format_coefficient`]: Formats a numeric coefficient, skipping those that round to zero.
//! - [`format_variable`]: Adds a superscript exponent to a variable.
//! - [`format_polynomial`]: Renders a full polynomial as `"y = ..."`.
//! - [`format_exponential`]: Renders `a·e^(b·x)` as `"y = ..."`.
#![allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]

pub mod unicode;

/// Default number of decimal places in rendered equations
pub const DEFAULT_PRECISION: usize = 2;

/// Magnitudes in this range are written in fixed notation, anything else in scientific notation
pub const FIXED_RANGE: std::ops::Range<f64> = 1e-3..1e3;

/// Represents the sign of a term.
///
/// Used when formatting expressions to determine how a term
/// should be connected to the rest of the equation (e.g., with `+` or `-`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Positive sign (`+` when displayed).
    Positive,

    /// Negative sign (`-` when displayed).
    Negative,
}

impl Sign {
    /// Determines the sign from a numeric coefficient.
    ///
    /// # Example
    /// ```
    /// # use chartfit::display::Sign;
    /// assert_eq!(Sign::from_coef(3.0), Sign::Positive);
    /// assert_eq!(Sign::from_coef(-2.0), Sign::Negative);
    /// ```
    #[must_use]
    pub fn from_coef(coef: f64) -> Self {
        if coef < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// Returns the character representation of the sign.
    #[must_use]
    pub fn char(&self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }
}

/// A single term of an equation, split into its sign and formatted body.
///
/// The body never carries the sign (e.g., `"2.00x²"`, `"3.14"`, `"x"`), so
/// terms can be joined with ` + ` / ` - ` by [`format_polynomial`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// The sign of the term (positive or negative).
    pub sign: Sign,

    /// The body of the term (e.g., `"2.00x²"`, `"3.14"`, `"x"`).
    pub body: String,
}

impl Term {
    /// Creates a new term with the given sign and body.
    #[must_use]
    pub fn new(sign: Sign, body: String) -> Self {
        Self { sign, body }
    }

    /// Builds the term `coef·xᵈᵉᵍʳᵉᵉ`, or `None` if the coefficient is zero.
    ///
    /// # Example
    /// ```
    /// # use chartfit::display::{Term, Sign};
    /// let term = Term::monomial(-3.0, 2, 2).unwrap();
    /// assert_eq!(term, Term::new(Sign::Negative, "3.00x²".to_string()));
    /// ```
    #[must_use]
    pub fn monomial(coef: f64, degree: i32, precision: usize) -> Option<Self> {
        let coef_str = format_coefficient(coef, degree, precision)?;
        let body = format!("{coef_str}{}", format_variable("x", degree));
        Some(Self::new(Sign::from_coef(coef), body))
    }
}

/// Formats a numeric coefficient for display in a term.
///
/// - Returns `None` if the coefficient rounds to zero at `precision` decimal places.
/// - Returns an empty string for a coefficient that rounds to ±1 on a non-constant term.
/// - Formats as a decimal if the absolute value is within [`FIXED_RANGE`].
/// - Formats in scientific notation otherwise.
///
/// The sign is dropped; see [`Sign::from_coef`].
///
/// # Example
/// ```
/// # use chartfit::display::format_coefficient;
/// assert_eq!(format_coefficient(0.0, 1, 2), None);
/// assert_eq!(format_coefficient(1e-9, 0, 2), None);
/// assert_eq!(format_coefficient(-2.5, 1, 2), Some("2.50".to_string()));
/// assert_eq!(format_coefficient(1.0, 1, 2), Some(String::new()));
/// assert_eq!(format_coefficient(1e5, 1, 2), Some("1.00e5".to_string()));
/// ```
#[must_use]
pub fn format_coefficient(coef: f64, degree: i32, precision: usize) -> Option<String> {
    let abs = coef.abs();
    let resolution = 0.5 * 10f64.powi(-(precision as i32));
    if abs < resolution {
        return None;
    }

    let body = unicode::float(abs, Some(FIXED_RANGE), precision);
    if degree != 0 && body == unicode::float(1.0, Some(FIXED_RANGE), precision) {
        return Some(String::new());
    }

    Some(body)
}

/// Formats the variable part of a term.
///
/// # Behavior
/// - If `exp == 0`, returns an empty string (`""`).
/// - If `exp == 1`, returns the base string unchanged.
/// - Otherwise, appends the Unicode superscript version of `exp` to `base`.
///
/// # Examples
/// ```
/// # use chartfit::display::format_variable;
/// assert_eq!(format_variable("x", 0), "");
/// assert_eq!(format_variable("x", 1), "x");
/// assert_eq!(format_variable("x", 2), "x²");
/// ```
#[must_use]
pub fn format_variable(base: &str, exp: i32) -> String {
    match exp {
        0 => String::new(),
        1 => base.to_string(),
        _ => format!("{base}{}", unicode::superscript(&exp.to_string())),
    }
}

/// Renders a polynomial as `"y = ..."`.
///
/// `coefficients[i]` is the coefficient of `x^(degree - i)`: highest order first.
/// Coefficients that round to zero are skipped; an all-zero polynomial renders as `y = 0`.
///
/// # Example
/// ```
/// # use chartfit::display::format_polynomial;
/// assert_eq!(format_polynomial(&[2.0, 3.0, 1.0]), "y = 2.00x² + 3.00x + 1.00");
/// assert_eq!(format_polynomial(&[2.0, -1.5]), "y = 2.00x - 1.50");
/// ```
#[must_use]
pub fn format_polynomial(coefficients: &[f64]) -> String {
    let degree = coefficients.len().saturating_sub(1);
    let terms: Vec<Term> = coefficients
        .iter()
        .enumerate()
        .filter_map(|(i, &coef)| Term::monomial(coef, (degree - i) as i32, DEFAULT_PRECISION))
        .collect();

    join_terms(terms)
}

/// Renders `a·e^(b·x)` as `"y = ..."`.
///
/// # Example
/// ```
/// # use chartfit::display::format_exponential;
/// assert_eq!(format_exponential(3.0, 0.5), "y = 3.00e^(0.50x)");
/// assert_eq!(format_exponential(3.0, -0.25), "y = 3.00e^(-0.25x)");
/// assert_eq!(format_exponential(2.0, 0.0), "y = 2.00");
/// ```
#[must_use]
pub fn format_exponential(a: f64, b: f64) -> String {
    let Some(rate) = format_coefficient(b, 1, DEFAULT_PRECISION) else {
        return join_terms(Term::monomial(a, 0, DEFAULT_PRECISION).into_iter().collect());
    };

    let Some(scale) = format_coefficient(a, 0, DEFAULT_PRECISION) else {
        return join_terms(Vec::new());
    };

    let rate_sign = match Sign::from_coef(b) {
        Sign::Positive => "",
        Sign::Negative => "-",
    };
    let body = format!("{scale}e^({rate_sign}{rate}x)");
    join_terms(vec![Term::new(Sign::from_coef(a), body)])
}

/// Joins terms into `"y = t0 ± t1 ± ..."`
fn join_terms(terms: Vec<Term>) -> String {
    let mut terms = terms.into_iter();
    let Some(first) = terms.next() else {
        return "y = 0".to_string();
    };

    let mut out = String::from("y = ");
    if first.sign == Sign::Negative {
        out.push(first.sign.char());
    }
    out.push_str(&first.body);

    for term in terms {
        out.push(' ');
        out.push(term.sign.char());
        out.push(' ');
        out.push_str(&term.body);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_from_coef() {
        assert_eq!(Sign::from_coef(1.0), Sign::Positive);
        assert_eq!(Sign::from_coef(-1.0), Sign::Negative);
        assert_eq!(Sign::from_coef(0.0), Sign::Positive);
    }

    #[test]
    fn test_format_coefficient_scientific() {
        assert_eq!(format_coefficient(1e5, 1, 2), Some("1.00e5".to_string()));
        assert_eq!(format_coefficient(-2.5e3, 2, 1), Some("2.5e3".to_string()));
    }

    #[test]
    fn test_format_coefficient_rounding() {
        assert_eq!(format_coefficient(0.004, 1, 2), None);
        assert_eq!(format_coefficient(0.006, 0, 2), Some("0.01".to_string()));
        assert_eq!(format_coefficient(0.999_999, 1, 2), Some(String::new()));
        assert_eq!(format_coefficient(0.999_999, 0, 2), Some("1.00".to_string()));
    }

    #[test]
    fn test_format_polynomial_skips_zero_terms() {
        assert_eq!(format_polynomial(&[4.0, 0.0, -3.0]), "y = 4.00x² - 3.00");
        assert_eq!(format_polynomial(&[0.0, 0.0, 5.0]), "y = 5.00");
        assert_eq!(format_polynomial(&[0.0, 0.0]), "y = 0");
    }

    #[test]
    fn test_format_polynomial_leading_negative() {
        assert_eq!(format_polynomial(&[-1.0, 2.0]), "y = -x + 2.00");
        assert_eq!(format_polynomial(&[-2.0, -1.0, -0.5]), "y = -2.00x² - x - 0.50");
    }

    #[test]
    fn test_format_polynomial_squared_is_unicode() {
        let eq = format_polynomial(&[2.0, 3.0, 1.0]);
        assert!(eq.contains('²'));
        assert!(!eq.contains('Â'));
    }

    #[test]
    fn test_format_exponential_negative_scale() {
        assert_eq!(format_exponential(-1.5, 1.0), "y = -1.50e^(x)");
        assert_eq!(format_exponential(0.0, 1.0), "y = 0");
    }
}
