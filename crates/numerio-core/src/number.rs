// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The shared numeric value type.
//!
//! [`Number`] carries either an exact integer or a double-precision float.
//! Integer-valued expressions stay integers (`2 + 2` is `4`, not `4.0`);
//! anything touching a floating-point function becomes a float. The type
//! serializes untagged, so a `Number` is a bare JSON number in tool records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric value: exact 64-bit integer or IEEE 754 double.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Exact integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
}

impl Number {
    /// Returns the value widened to f64. Exact for integers up to 2^53.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Returns true if this value is the integer variant.
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(v) => {
                // Always show a decimal point so "12.0" stays visibly float.
                if v.fract() == 0.0 && v.is_finite() && v.abs() < 1e16 {
                    write!(f, "{v:.1}")
                } else {
                    write!(f, "{v}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_serializes_as_json_integer() {
        let json = serde_json::to_value(Number::Int(4)).unwrap();
        assert_eq!(json, serde_json::json!(4));
        assert!(json.is_i64());
    }

    #[test]
    fn float_serializes_as_json_float() {
        let json = serde_json::to_value(Number::Float(12.0)).unwrap();
        assert!(json.is_f64());
        assert_eq!(json.as_f64().unwrap(), 12.0);
    }

    #[test]
    fn deserialize_prefers_int_for_integral_literals() {
        let n: Number = serde_json::from_str("42").unwrap();
        assert_eq!(n, Number::Int(42));

        let f: Number = serde_json::from_str("42.5").unwrap();
        assert_eq!(f, Number::Float(42.5));
    }

    #[test]
    fn display_distinguishes_variants() {
        assert_eq!(Number::Int(4).to_string(), "4");
        assert_eq!(Number::Float(12.0).to_string(), "12.0");
        assert_eq!(Number::Float(0.5).to_string(), "0.5");
    }

    #[test]
    fn as_f64_widens() {
        assert_eq!(Number::Int(3).as_f64(), 3.0);
        assert_eq!(Number::Float(2.5).as_f64(), 2.5);
        assert!(Number::Int(3).is_int());
        assert!(!Number::Float(3.0).is_int());
    }
}
