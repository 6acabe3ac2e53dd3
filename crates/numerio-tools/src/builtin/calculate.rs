// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Expression evaluation tool.
//!
//! Wraps [`numerio_expr::evaluate`]. Every evaluation failure -- syntax
//! error, disallowed name, domain error -- becomes a failure record with
//! the original expression preserved; nothing propagates as an `Err`.

use async_trait::async_trait;
use numerio_core::{Number, NumerioError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::tool::{Tool, ToolOutput};

/// Parameters for the `calculate` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateArgs {
    /// The expression to evaluate.
    pub expression: String,
}

/// Result record for the `calculate` tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculateRecord {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The original expression, echoed back on success and failure alike.
    pub expression: String,
}

/// Evaluate a mathematical expression against the fixed allow-list.
pub fn calculate(expression: &str) -> CalculateRecord {
    match numerio_expr::evaluate(expression) {
        Ok(result) => CalculateRecord {
            success: true,
            result: Some(result),
            error: None,
            expression: expression.to_string(),
        },
        Err(err) => CalculateRecord {
            success: false,
            result: None,
            error: Some(err.to_string()),
            expression: expression.to_string(),
        },
    }
}

/// Evaluates arithmetic expressions with a fixed set of math functions.
pub struct CalculateTool;

#[async_trait]
impl Tool for CalculateTool {
    fn name(&self) -> &str {
        "calculate"
    }

    fn description(&self) -> &str {
        "Evaluate a mathematical expression, e.g. '2 + 2' or 'sqrt(16) * 3'. \
         Supports +, -, *, /, //, %, **, parentheses, the functions abs, round, \
         min, max, sum, pow, sqrt, sin, cos, tan, log, log10, log2, exp, floor, \
         ceil, and the constants pi and e."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "expression": {
                    "type": "string",
                    "description": "Math expression to evaluate (e.g. '2 + 2', 'sin(pi / 2)', 'sqrt(16)')"
                }
            },
            "required": ["expression"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, NumerioError> {
        let args: CalculateArgs = serde_json::from_value(input).map_err(|e| {
            warn!(error = %e, "rejected 'calculate' parameters");
            NumerioError::Tool {
                message: format!("invalid 'calculate' parameters: {e}"),
                source: Some(Box::new(e)),
            }
        })?;

        debug!(expression = %args.expression, "evaluating expression");
        let record = calculate(&args.expression);
        if let Some(error) = &record.error {
            warn!(expression = %record.expression, error = %error, "expression rejected");
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

    #[test]
    fn integer_expression_yields_integer_result() {
        let record = calculate("2 + 2");
        assert!(record.success);
        assert_eq!(record.result, Some(Number::Int(4)));
        assert_eq!(record.expression, "2 + 2");
        assert_eq!(record.error, None);
    }

    #[test]
    fn float_function_yields_float_result() {
        let record = calculate("sqrt(16) * 3");
        assert!(record.success);
        assert_eq!(record.result, Some(Number::Float(12.0)));
    }

    #[test]
    fn undefined_name_yields_failure_with_expression_preserved() {
        let record = calculate("undefined_name + 1");
        assert!(!record.success);
        assert!(record.error.is_some());
        assert_eq!(record.expression, "undefined_name + 1");
        assert_eq!(record.result, None);
    }

    #[test]
    fn import_attempt_fails_without_executing() {
        let record = calculate("__import__('os')");
        assert!(!record.success);
        assert!(record.error.is_some());
    }

    #[test]
    fn record_json_shape() {
        let json = serde_json::to_value(calculate("2 + 2")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "result": 4,
                "expression": "2 + 2"
            })
        );

        let json = serde_json::to_value(calculate("1 / 0")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "division by zero");
        assert_eq!(json["expression"], "1 / 0");
        assert!(json.get("result").is_none());
    }

    #[test]
    fn calculation_is_idempotent() {
        assert_eq!(calculate("sin(1) + cos(1)"), calculate("sin(1) + cos(1)"));
    }

    #[tokio::test]
    async fn invoke_returns_record_in_content() {
        let tool = CalculateTool;
        let output = tool
            .invoke(serde_json::json!({"expression": "2 + 2"}))
            .await
            .unwrap();
        assert!(!output.is_error);
        let record: serde_json::Value = serde_json::from_str(&output.content).unwrap();
        assert_eq!(record["result"], 4);
    }

    #[tokio::test]
    async fn invoke_flags_failure_records() {
        let tool = CalculateTool;
        let output = tool
            .invoke(serde_json::json!({"expression": "nope + 1"}))
            .await
            .unwrap();
        assert!(output.is_error);
        let record: serde_json::Value = serde_json::from_str(&output.content).unwrap();
        assert_eq!(record["success"], false);
    }

    #[tokio::test]
    async fn invoke_missing_expression_is_an_err() {
        let tool = CalculateTool;
        let result = tool.invoke(serde_json::json!({})).await;
        assert!(result.is_err());
    }
}
