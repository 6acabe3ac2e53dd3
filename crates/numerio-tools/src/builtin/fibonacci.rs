// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fibonacci sequence tool.
//!
//! Generates the first n terms starting `0, 1, 1, 2, 3, ...` plus their
//! sum. Terms and the sum are computed in u128; config validation caps
//! the bound at 185 terms, the most that width can sum, so generation
//! cannot overflow under a validated configuration. An unvalidated
//! bound past the cap yields a failure record, never a panic.

use async_trait::async_trait;
use numerio_core::{limits, NumerioError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::builtin::json_u128;
use crate::tool::{Tool, ToolOutput};

/// Parameters for the `fibonacci` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct FibonacciArgs {
    /// Number of terms to generate.
    pub n: i64,
}

/// Result record for the `fibonacci` tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FibonacciRecord {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<i64>,
    /// The first n terms; each a JSON number up to u64, a decimal string beyond.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FibonacciRecord {
    fn failure(error: String) -> Self {
        Self {
            success: false,
            n: None,
            sequence: None,
            sum: None,
            error: Some(error),
        }
    }
}

/// Generate the first n Fibonacci terms and their sum, with range guards.
pub fn generate_fibonacci(n: i64, max_terms: u32) -> FibonacciRecord {
    if n <= 0 {
        return FibonacciRecord::failure("n must be positive".to_string());
    }
    if n > i64::from(max_terms) {
        return FibonacciRecord::failure(format!("n too large (max {max_terms})"));
    }

    let overflow =
        || FibonacciRecord::failure(format!("n too large (max {})", limits::FIBONACCI_HARD_MAX));

    let mut sequence = Vec::with_capacity(n as usize);
    let mut sum: u128 = 0;
    let (mut a, mut b): (u128, u128) = (0, 1);
    for i in 0..n {
        sequence.push(json_u128(a));
        // Both adds are unreachable under a validated config
        // (max_terms <= 185).
        sum = match sum.checked_add(a) {
            Some(sum) => sum,
            None => return overflow(),
        };
        if i + 1 < n {
            let next = match a.checked_add(b) {
                Some(next) => next,
                None => return overflow(),
            };
            a = b;
            b = next;
        }
    }

    FibonacciRecord {
        success: true,
        n: Some(n),
        sequence: Some(sequence),
        sum: Some(json_u128(sum)),
        error: None,
    }
}

/// Generates the first n terms of the Fibonacci sequence.
pub struct FibonacciTool {
    /// Largest accepted term count, `limits.fibonacci_max` in config.
    pub max_terms: u32,
}

impl Default for FibonacciTool {
    fn default() -> Self {
        Self {
            max_terms: limits::FIBONACCI_MAX,
        }
    }
}

#[async_trait]
impl Tool for FibonacciTool {
    fn name(&self) -> &str {
        "fibonacci"
    }

    fn description(&self) -> &str {
        "Generate the first n terms of the Fibonacci sequence and their sum."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "n": {
                    "type": "integer",
                    "description": "Number of terms to generate",
                    "minimum": 1,
                    "maximum": self.max_terms
                }
            },
            "required": ["n"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, NumerioError> {
        let args: FibonacciArgs = serde_json::from_value(input).map_err(|e| {
            warn!(error = %e, "rejected 'fibonacci' parameters");
            NumerioError::Tool {
                message: format!("invalid 'fibonacci' parameters: {e}"),
                source: Some(Box::new(e)),
            }
        })?;

        debug!(n = args.n, "generating fibonacci sequence");
        let record = generate_fibonacci(args.n, self.max_terms);
        if let Some(error) = &record.error {
            warn!(n = args.n, error = %error, "fibonacci input rejected");
        }

        let content = serde_json::to_string(&record)
            .map_err(|e| NumerioError::Internal(format!("record serialization failed: {e}")))?;
        Ok(ToolOutput {
            content,
            is_error: !record.success,
        })
    }
}
