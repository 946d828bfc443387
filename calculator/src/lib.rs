//! Pure arithmetic library with a small demo CLI.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic arithmetic over [`Number`]. No I/O, no
//!   logging; failures are returned as [`ArithmeticError`].
//! - **[`io`]**: Side-effecting helpers (the optional TOML config).
//!
//! [`demo`] combines both to implement the `calculator` binary's commands.

pub mod core;
pub mod demo;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::arith::{
    absolute, add, divide, modulo, multiply, power, square_root, subtract,
};
pub use crate::core::error::{ArithmeticError, ParseNumberError};
pub use crate::core::number::Number;
pub use crate::core::operation::Operation;
