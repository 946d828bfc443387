//! Named binary operations, used by the demo and the `eval` command.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::arith;
use crate::core::error::ArithmeticError;
use crate::core::number::Number;

/// One of the six binary arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
}

impl Operation {
    /// All operations in demo order.
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Modulo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Modulo => "modulo",
        }
    }

    /// Infix symbol used when rendering `a <symbol> b = result`.
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
            Operation::Power => '^',
            Operation::Modulo => '%',
        }
    }

    /// Evaluate the operation on `a` and `b`.
    pub fn apply(self, a: Number, b: Number) -> Result<Number, ArithmeticError> {
        match self {
            Operation::Add => Ok(arith::add(a, b)),
            Operation::Subtract => Ok(arith::subtract(a, b)),
            Operation::Multiply => Ok(arith::multiply(a, b)),
            Operation::Divide => arith::divide(a, b),
            Operation::Power => Ok(arith::power(a, b)),
            Operation::Modulo => arith::modulo(a, b),
        }
    }

    /// True for operations that reject a zero right-hand operand.
    pub fn rejects_zero_divisor(self) -> bool {
        matches!(self, Operation::Divide | Operation::Modulo)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
