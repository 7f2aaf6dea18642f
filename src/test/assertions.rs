/// Asserts that two floating-point values are approximately equal.
///
/// This is useful for comparing computed values where exact equality is not expected due to rounding errors.
///
/// # Syntax
///
/// `assert_close!(<a>, <b> [, <tolerance> [, <custom message>, <args>...]])`
///
/// - `tolerance`: maximum absolute difference. Defaults to [`crate::test::default_tolerance`].
///
/// # Example
/// ```
/// # use chartfit::assert_close;
/// assert_close!(0.1 + 0.2, 0.3);
/// assert_close!(2.0f32, 2.001, 1e-2, "slope of {}", "the line");
/// ```
#[macro_export]
macro_rules! assert_close {
    ($a:expr, $b:expr, $tol:expr $(, $msg:literal $(, $args:expr)*)?) => { #[allow(clippy::float_cmp)] {
        #[allow(unused_mut, unused_assignments)] let mut msg = "Values not close".to_string();
        $( msg = format!($msg $(, $args)*); )?

        let (a, b, tolerance) = ($a, $b, $tol);
        assert!(
            $crate::test::is_close(a, b, tolerance),
            "{msg}: {a} != {b} (tolerance {tolerance})"
        );
    }};

    ($a:expr, $b:expr) => {{
        let (a, b) = ($a, $b);
        $crate::assert_close!(a, b, $crate::test::default_tolerance(a, b))
    }};
}

/// Asserts that two slices of floating-point values are approximately equal element-wise.
///
/// # Parameters
/// - `$src`: Actual values (anything with `len()` and `iter()`).
/// - `$dst`: Expected values, same length as `$src`.
/// - `$tol`: *(optional)* Maximum absolute difference per element.
///
/// # Panics
/// - If the lengths differ.
/// - If any pair of elements is not close.
///
/// # Examples
/// ```
/// # use chartfit::assert_all_close;
/// assert_all_close!(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0 + 1e-13], 1e-12);
/// ```
#[macro_export]
macro_rules! assert_all_close {
    ($src:expr, $dst:expr, $tol:expr) => {{
        let (src, dst, tolerance) = ($src, $dst, $tol);
        assert_eq!(src.len(), dst.len(), "Slices differ in length");
        for (i, (a, b)) in src.iter().zip(dst.iter()).enumerate() {
            $crate::assert_close!(*a, *b, tolerance, "Element {} not close", i);
        }
    }};

    ($src:expr, $dst:expr) => {{
        let (src, dst) = ($src, $dst);
        assert_eq!(src.len(), dst.len(), "Slices differ in length");
        for (i, (a, b)) in src.iter().zip(dst.iter()).enumerate() {
            $crate::assert_close!(
                *a,
                *b,
                $crate::test::default_tolerance(*a, *b),
                "Element {} not close",
                i
            );
        }
    }};
}
