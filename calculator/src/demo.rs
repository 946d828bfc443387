//! Demo output and single evaluations for `calculator demo` and `calculator eval`.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::core::error::ArithmeticError;
use crate::core::number::Number;
use crate::core::operation::Operation;
use crate::io::config::{DemoConfig, Operands};

/// First line of the demo output.
pub const DEMO_HEADER: &str = "Calculator Demo";

/// One evaluated operation, rendered as `a <symbol> b = result`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub a: Number,
    pub b: Number,
    pub result: Number,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.a,
            self.operation.symbol(),
            self.b,
            self.result
        )
    }
}

/// Evaluate a single operation.
pub fn evaluate(op: Operation, a: Number, b: Number) -> Result<Evaluation, ArithmeticError> {
    debug!(operation = %op, %a, %b, "evaluate");
    let result = op.apply(a, b)?;
    Ok(Evaluation {
        operation: op,
        a,
        b,
        result,
    })
}

/// Build the demo output: the header, then one line per operation in
/// [`Operation::ALL`] order.
pub fn demo_lines(demo: &DemoConfig) -> Result<Vec<String>, ArithmeticError> {
    let mut lines = Vec::with_capacity(Operation::ALL.len() + 1);
    lines.push(DEMO_HEADER.to_string());
    for op in Operation::ALL {
        let Operands(a, b) = demo.operands(op);
        lines.push(evaluate(op, a, b)?.to_string());
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_demo_matches_reference_output() {
        let lines = demo_lines(&DemoConfig::default()).expect("demo");
        assert_eq!(
            lines,
            vec![
                "Calculator Demo",
                "5 + 3 = 8",
                "5 - 3 = 2",
                "5 * 3 = 15",
                "6 / 3 = 2.0",
                "2 ^ 3 = 8",
                "5 % 2 = 1",
            ]
        );
    }

    #[test]
    fn demo_renders_floats_and_negatives() {
        let demo = DemoConfig {
            add: Operands(Number::Int(-10), Number::Int(5)),
            divide: Operands(Number::Int(7), Number::Int(2)),
            ..DemoConfig::default()
        };
        let lines = demo_lines(&demo).expect("demo");
        assert_eq!(lines[1], "-10 + 5 = -5");
        assert_eq!(lines[4], "7 / 2 = 3.5");
    }

    #[test]
    fn demo_propagates_zero_divisor() {
        let demo = DemoConfig {
            divide: Operands(Number::Int(1), Number::Int(0)),
            ..DemoConfig::default()
        };
        assert_eq!(demo_lines(&demo), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn overflowing_sum_renders_as_float() {
        let evaluation =
            evaluate(Operation::Add, Number::Int(i64::MAX), Number::Int(1)).expect("evaluate");
        assert_eq!(
            evaluation.to_string(),
            "9223372036854775807 + 1 = 9223372036854775808.0"
        );
    }

    #[test]
    fn non_finite_result_serializes_as_label() {
        let evaluation =
            evaluate(Operation::Power, Number::Int(0), Number::Int(-1)).expect("evaluate");
        let json = serde_json::to_string(&evaluation).expect("serialize");
        assert_eq!(
            json,
            r#"{"operation":"power","a":0,"b":-1,"result":"inf"}"#
        );
    }

    #[test]
    fn evaluation_serializes_to_json() {
        let evaluation =
            evaluate(Operation::Divide, Number::Int(7), Number::Int(2)).expect("evaluate");
        let json = serde_json::to_string(&evaluation).expect("serialize");
        assert_eq!(
            json,
            r#"{"operation":"divide","a":7,"b":2,"result":3.5}"#
        );
    }
}
