//! Numeric operand and result type.
//!
//! A [`Number`] is either an exact integer or a floating-point value. Integer
//! arithmetic stays integral as long as the result fits in `i64`; the
//! operations in [`crate::core::arith`] fall back to `f64` otherwise.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::error::ParseNumberError;

/// An integer or floating-point value.
///
/// Equality and ordering are numeric, so `Number::Int(2) == Number::Float(2.0)`.
///
/// Non-finite floats serialize as the strings `"inf"`, `"-inf"` and `"NaN"`,
/// matching [`fmt::Display`], since JSON has no literal for them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    #[serde(
        serialize_with = "serialize_float",
        deserialize_with = "deserialize_float"
    )]
    Float(f64),
}

fn non_finite_label(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("inf")
    } else if value == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}

fn serialize_float<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    match non_finite_label(*value) {
        Some(label) => serializer.serialize_str(label),
        None => serializer.serialize_f64(*value),
    }
}

fn deserialize_float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FloatRepr {
        Number(f64),
        Label(String),
    }

    match FloatRepr::deserialize(deserializer)? {
        FloatRepr::Number(value) => Ok(value),
        FloatRepr::Label(label) => match label.as_str() {
            "inf" => Ok(f64::INFINITY),
            "-inf" => Ok(f64::NEG_INFINITY),
            "NaN" => Ok(f64::NAN),
            other => Err(D::Error::custom(format!("invalid float label: {other}"))),
        },
    }
}

impl Number {
    /// Value as `f64` (lossy for integers beyond 2^53).
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    /// True for integer zero and for both signed float zeros.
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(value) => value == 0,
            Number::Float(value) => value == 0.0,
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a.partial_cmp(&b),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// Integral floats keep one decimal (`2.0`) so they read differently from integers.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(value) => write!(f, "{value}"),
            Number::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value:.1}")
            }
            Number::Float(value) => write!(f, "{value}"),
        }
    }
}

/// Parse an integer literal first, then a float literal.
impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Number::Int(value));
        }
        trimmed
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| ParseNumberError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_prefers_integers() {
        assert!(matches!("42".parse::<Number>(), Ok(Number::Int(42))));
        assert!(matches!("-7".parse::<Number>(), Ok(Number::Int(-7))));
        assert!(matches!(" 3 ".parse::<Number>(), Ok(Number::Int(3))));
    }

    #[test]
    fn parse_falls_back_to_float() {
        let parsed: Number = "2.5".parse().expect("parse");
        assert!(matches!(parsed, Number::Float(v) if v == 2.5));
        let parsed: Number = "1e3".parse().expect("parse");
        assert!(matches!(parsed, Number::Float(v) if v == 1000.0));
    }

    #[test]
    fn parse_rejects_non_numeric_text() {
        let err = "five".parse::<Number>().unwrap_err();
        assert_eq!(err.input, "five");
        assert!("".parse::<Number>().is_err());
        assert!("1..2".parse::<Number>().is_err());
    }

    #[test]
    fn equality_is_numeric_across_variants() {
        assert_eq!(Number::Int(2), Number::Float(2.0));
        assert_ne!(Number::Int(2), Number::Float(2.5));
        assert_ne!(Number::Float(f64::NAN), Number::Float(f64::NAN));
    }

    #[test]
    fn ordering_is_numeric_across_variants() {
        assert!(Number::Int(2) < Number::Float(2.5));
        assert!(Number::Float(-0.5) < Number::Int(0));
    }

    #[test]
    fn display_distinguishes_integral_floats() {
        assert_eq!(Number::Int(8).to_string(), "8");
        assert_eq!(Number::Float(2.0).to_string(), "2.0");
        assert_eq!(Number::Float(3.5).to_string(), "3.5");
        assert_eq!(Number::Float(-0.0).to_string(), "-0.0");
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn display_keeps_decimal_for_large_integral_floats() {
        assert_eq!(
            Number::Float(1e17).to_string(),
            "100000000000000000.0"
        );
        assert_eq!(
            crate::core::arith::add(i64::MAX, 1).to_string(),
            "9223372036854775808.0"
        );
    }

    #[test]
    fn serde_round_trips_untagged_json() {
        let int: Number = serde_json::from_str("7").expect("int");
        assert!(int.is_int());
        let float: Number = serde_json::from_str("3.5").expect("float");
        assert!(!float.is_int());
        assert_eq!(serde_json::to_string(&Number::Float(3.5)).expect("ser"), "3.5");
        assert_eq!(serde_json::to_string(&Number::Int(7)).expect("ser"), "7");
    }

    #[test]
    fn serde_labels_non_finite_floats() {
        let cases = [
            (f64::INFINITY, "\"inf\""),
            (f64::NEG_INFINITY, "\"-inf\""),
            (f64::NAN, "\"NaN\""),
        ];
        for (value, json) in cases {
            let encoded = serde_json::to_string(&Number::Float(value)).expect("ser");
            assert_eq!(encoded, json);
            let decoded: Number = serde_json::from_str(&encoded).expect("de");
            assert!(!decoded.is_int());
            assert_eq!(decoded.to_string(), Number::Float(value).to_string());
        }
        assert!(serde_json::from_str::<Number>("\"infinity\"").is_err());
    }
}
