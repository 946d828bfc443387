//! Typed failures produced by the arithmetic core.

use thiserror::Error;

/// Failure of an arithmetic operation.
///
/// Both kinds are deterministic functions of the input, so retrying the same
/// call always fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// `divide` was called with a zero divisor.
    #[error("Cannot divide by zero")]
    DivisionByZero,
    /// `modulo` was called with a zero divisor.
    #[error("Cannot modulo by zero")]
    ModuloByZero,
}

/// Text that is neither an integer nor a floating-point literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid number: {input}")]
pub struct ParseNumberError {
    pub input: String,
}
