// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Factorial tool.
//!
//! Computes n! exactly with big-integer arithmetic for 0 <= n <= max_n.
//! The default bound of 170 is a contract constant (the largest factorial
//! a double-precision float can hold, where the original drew the line);
//! deployments can move it via `limits.factorial_max`.

use async_trait::async_trait;
use num_bigint::BigUint;
use numerio_core::{limits, NumerioError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::tool::{Tool, ToolOutput};

/// Parameters for the `factorial` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct FactorialArgs {
    /// Non-negative integer.
    pub n: i64,
}

/// Result record for the `factorial` tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorialRecord {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<i64>,
    /// n!, a JSON number up to 20! and a decimal string beyond.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factorial: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FactorialRecord {
    fn failure(error: String) -> Self {
        Self {
            success: false,
            n: None,
            factorial: None,
            error: Some(error),
        }
    }
}

/// Compute n! with explicit range guards.
pub fn compute_factorial(n: i64, max_n: u32) -> FactorialRecord {
    if n < 0 {
        return FactorialRecord::failure(
            "Factorial not defined for negative numbers".to_string(),
        );
    }
    if n > i64::from(max_n) {
        return FactorialRecord::failure(format!("Number too large (max {max_n})"));
    }

    let mut product = BigUint::from(1u32);
    for factor in 2..=(n as u64) {
        product *= factor;
    }

    FactorialRecord {
        success: true,
        n: Some(n),
        factorial: Some(biguint_to_json(&product)),
        error: None,
    }
}

fn biguint_to_json(value: &BigUint) -> serde_json::Value {
    match u64::try_from(value) {
        Ok(small) => serde_json::Value::from(small),
        Err(_) => serde_json::Value::String(value.to_string()),
    }
}

/// Computes the factorial of a bounded non-negative integer.
pub struct FactorialTool {
    /// Largest accepted n, `limits.factorial_max` in config.
    pub max_n: u32,
}

impl Default for FactorialTool {
    fn default() -> Self {
        Self {
            max_n: limits::FACTORIAL_MAX,
        }
    }
}

#[async_trait]
impl Tool for FactorialTool {
    fn name(&self) -> &str {
        "factorial"
    }

    fn description(&self) -> &str {
        "Calculate the factorial of a non-negative integer (n!)."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "n": {
                    "type": "integer",
                    "description": "Non-negative integer",
                    "minimum": 0,
                    "maximum": self.max_n
                }
            },
            "required": ["n"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, NumerioError> {
        let args: FactorialArgs = serde_json::from_value(input).map_err(|e| {
            warn!(error = %e, "rejected 'factorial' parameters");
            NumerioError::Tool {
                message: format!("invalid 'factorial' parameters: {e}"),
                source: Some(Box::new(e)),
            }
        })?;

        debug!(n = args.n, "computing factorial");
        let record = compute_factorial(args.n, self.max_n);
        if let Some(error) = &record.error {
            warn!(n = args.n, error = %error, "factorial input rejected");
        }

        let content = serde_json::to_string(&record)
            .map_err(|e| NumerioError::Internal(format!("record serialization failed: {e}")))?;
        Ok(ToolOutput {
            content,
            is_error: !record.success,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numerio_core::limits::FACTORIAL_MAX;

    #[test]
    fn small_factorials_are_exact_numbers() {
        let record = compute_factorial(5, FACTORIAL_MAX);
        assert!(record.success);
        assert_eq!(record.n, Some(5));
        assert_eq!(record.factorial, Some(serde_json::json!(120)));

        let record = compute_factorial(0, FACTORIAL_MAX);
        assert_eq!(record.factorial, Some(serde_json::json!(1)));

        let record = compute_factorial(1, FACTORIAL_MAX);
        assert_eq!(record.factorial, Some(serde_json::json!(1)));
    }

    #[test]
    fn twenty_is_the_last_u64_factorial() {
        let record = compute_factorial(20, FACTORIAL_MAX);
        assert_eq!(
            record.factorial,
            Some(serde_json::json!(2_432_902_008_176_640_000u64))
        );

        let record = compute_factorial(21, FACTORIAL_MAX);
        let serde_json::Value::String(digits) = record.factorial.unwrap() else {
            panic!("21! should serialize as a decimal string");
        };
        assert_eq!(digits, "51090942171709440000");
    }

    #[test]
    fn factorial_170_is_exact_and_307_digits() {
        let record = compute_factorial(170, FACTORIAL_MAX);
        assert!(record.success);
        let serde_json::Value::String(digits) = record.factorial.unwrap() else {
            panic!("170! should serialize as a decimal string");
        };
        assert_eq!(digits.len(), 307);
        assert!(digits.starts_with("7257415615"));
    }

    #[test]
    fn negative_input_fails() {
        let record = compute_factorial(-1, FACTORIAL_MAX);
        assert!(!record.success);
        assert_eq!(
            record.error.as_deref(),
            Some("Factorial not defined for negative numbers")
        );
        assert_eq!(record.n, None);
        assert_eq!(record.factorial, None);
    }

    #[test]
    fn over_bound_input_fails_with_bound_in_message() {
        let record = compute_factorial(171, FACTORIAL_MAX);
        assert!(!record.success);
        assert_eq!(record.error.as_deref(), Some("Number too large (max 170)"));
    }

    #[test]
    fn configured_bound_is_respected() {
        let record = compute_factorial(21, 20);
        assert!(!record.success);
        assert_eq!(record.error.as_deref(), Some("Number too large (max 20)"));
        assert!(compute_factorial(20, 20).success);
    }

    #[test]
    fn record_json_shape() {
        let json = serde_json::to_value(compute_factorial(5, FACTORIAL_MAX)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": true, "n": 5, "factorial": 120})
        );

        let json = serde_json::to_value(compute_factorial(-1, FACTORIAL_MAX)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "error": "Factorial not defined for negative numbers"
            })
        );
    }

    #[tokio::test]
    async fn invoke_computes_and_flags_failures() {
        let tool = FactorialTool::default();
        let output = tool.invoke(serde_json::json!({"n": 5})).await.unwrap();
        assert!(!output.is_error);
        let record: serde_json::Value = serde_json::from_str(&output.content).unwrap();
        assert_eq!(record["factorial"], 120);

        let output = tool.invoke(serde_json::json!({"n": 171})).await.unwrap();
        assert!(output.is_error);
    }

    #[tokio::test]
    async fn invoke_missing_n_is_an_err() {
        let tool = FactorialTool::default();
        assert!(tool.invoke(serde_json::json!({})).await.is_err());
    }
}
