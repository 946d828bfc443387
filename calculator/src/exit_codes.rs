//! Stable exit codes for calculator CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, I/O or other errors.
pub const INVALID: i32 = 1;
/// Usage error; emitted by clap when arguments do not parse.
pub const USAGE: i32 = 2;
/// `calculator eval` hit a division or modulo by zero.
pub const ARITHMETIC: i32 = 3;
