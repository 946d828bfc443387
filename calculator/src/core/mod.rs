//! Deterministic, pure arithmetic shared by the library and the CLI.
//!
//! Core modules must be free of I/O side effects and must not log. Failures
//! are returned as typed errors for the caller to handle.

pub mod arith;
pub mod error;
pub mod number;
pub mod operation;
