//! Pure arithmetic operations over [`Number`].
//!
//! Every function is deterministic and side-effect free. Integer inputs give
//! integer results while the result fits in `i64`; on overflow the result is
//! computed in `f64` instead. Only `divide` and `modulo` can fail.

use crate::core::error::ArithmeticError;
use crate::core::number::Number;

/// Apply `int_op` when both operands are integers and it does not overflow,
/// otherwise `float_op` on the `f64` values.
fn int_or_float(
    a: Number,
    b: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Number {
    let exact = match (a, b) {
        (Number::Int(x), Number::Int(y)) => int_op(x, y),
        _ => None,
    };
    exact.map_or_else(|| Number::Float(float_op(a.as_f64(), b.as_f64())), Number::Int)
}

/// Add two numbers.
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    int_or_float(a.into(), b.into(), i64::checked_add, |x, y| x + y)
}

/// Subtract `b` from `a`.
pub fn subtract(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    int_or_float(a.into(), b.into(), i64::checked_sub, |x, y| x - y)
}

/// Multiply two numbers.
pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    int_or_float(a.into(), b.into(), i64::checked_mul, |x, y| x * y)
}

/// Divide `a` by `b`.
///
/// The quotient is always a float, so `divide(7, 2)` is `3.5`.
///
/// # Errors
///
/// [`ArithmeticError::DivisionByZero`] when `b` is zero.
pub fn divide(a: impl Into<Number>, b: impl Into<Number>) -> Result<Number, ArithmeticError> {
    let (a, b) = (a.into(), b.into());
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(Number::Float(a.as_f64() / b.as_f64()))
}

/// Raise `base` to `exponent`.
///
/// Integer base with a non-negative integer exponent stays integral when the
/// result fits; everything else follows `f64::powf`. An exponent of zero
/// yields one for every base.
pub fn power(base: impl Into<Number>, exponent: impl Into<Number>) -> Number {
    let (base, exponent) = (base.into(), exponent.into());
    let exact = match (base, exponent) {
        (Number::Int(b), Number::Int(e)) => {
            u32::try_from(e).ok().and_then(|e| b.checked_pow(e))
        }
        _ => None,
    };
    exact.map_or_else(
        || Number::Float(base.as_f64().powf(exponent.as_f64())),
        Number::Int,
    )
}

/// Remainder of `a` divided by `b`; the sign follows the dividend.
///
/// # Errors
///
/// [`ArithmeticError::ModuloByZero`] when `b` is zero.
pub fn modulo(a: impl Into<Number>, b: impl Into<Number>) -> Result<Number, ArithmeticError> {
    let (a, b) = (a.into(), b.into());
    if b.is_zero() {
        return Err(ArithmeticError::ModuloByZero);
    }
    let remainder = match (a, b) {
        // i64::MIN % -1 overflows; its true remainder is zero.
        (Number::Int(x), Number::Int(y)) => Number::Int(x.wrapping_rem(y)),
        (x, y) => Number::Float(x.as_f64() % y.as_f64()),
    };
    Ok(remainder)
}

/// Absolute value.
pub fn absolute(a: impl Into<Number>) -> Number {
    match a.into() {
        Number::Int(value) => value
            .checked_abs()
            .map_or_else(|| Number::Float((value as f64).abs()), Number::Int),
        Number::Float(value) => Number::Float(value.abs()),
    }
}

/// Square root as a float. Negative input yields NaN.
pub fn square_root(a: impl Into<Number>) -> Number {
    Number::Float(a.into().as_f64().sqrt())
}
