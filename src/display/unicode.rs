//! Unicode formatting utilities
use std::ops::Range;

/// Format a floating point number as a string
///
/// # Parameters
/// - `n`: The number to format
/// - `fixed_range`: An optional range of magnitudes that will not be formatted in scientific notation
/// - `precision`: The number of decimal places to include
///
/// # Example
/// ```
/// # use chartfit::display::unicode::float;
/// assert_eq!(float(12.345, Some(1e-3..1e3), 2), "12.35");
/// assert_eq!(float(12345.0, Some(1e-3..1e3), 1), "1.2e4");
/// ```
#[must_use]
pub fn float(n: f64, fixed_range: Option<Range<f64>>, precision: usize) -> String {
    match fixed_range {
        Some(range) if range.contains(&n.abs()) => format!("{n:.precision$}"),
        _ => format!("{n:.precision$e}"),
    }
}

/// Convert a string into a superscript string, ignoring invalid characters
///
/// # Example
/// ```
/// # use chartfit::display::unicode::superscript;
/// assert_eq!(superscript("-12"), "⁻¹²");
/// ```
#[must_use]
pub fn superscript(s: &str) -> String {
    s.chars().filter_map(to_superscript).collect()
}

fn to_superscript(c: char) -> Option<char> {
    match c {
        '0' => Some('⁰'),
        '1' => Some('¹'),
        '2' => Some('²'),
        '3' => Some('³'),
        '4' => Some('⁴'),
        '5' => Some('⁵'),
        '6' => Some('⁶'),
        '7' => Some('⁷'),
        '8' => Some('⁸'),
        '9' => Some('⁹'),
        '+' => Some('⁺'),
        '-' => Some('⁻'),
        '(' => Some('⁽'),
        ')' => Some('⁾'),
        'x' | 'X' => Some('ˣ'),
        _ => None,
    }
}
