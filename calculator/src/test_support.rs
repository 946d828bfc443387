//! Test-only helpers for comparing floating-point results.

use crate::core::number::Number;

/// Default tolerance for float comparisons in tests; see [`approx_eq`] for scaling.
pub const TOLERANCE: f64 = 1e-4;

/// True if `actual` is within `tolerance * max(|expected|, 1)` of `expected`.
///
/// The tolerance is absolute for expected values up to one in magnitude and
/// relative beyond that.
pub fn approx_eq(actual: f64, expected: f64, tolerance: f64) -> bool {
    if actual == expected {
        return true;
    }
    let scale = expected.abs().max(1.0);
    (actual - expected).abs() <= tolerance * scale
}

/// Assert that `actual` is within [`TOLERANCE`] of `expected`.
#[track_caller]
pub fn assert_close(actual: Number, expected: f64) {
    assert!(
        approx_eq(actual.as_f64(), expected, TOLERANCE),
        "expected {} to be within {} of {}",
        actual,
        TOLERANCE,
        expected
    );
}
