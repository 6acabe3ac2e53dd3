// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Primality checking tool.
//!
//! Classifies a sequence of integers by trial division. The per-number
//! map deduplicates repeated inputs (first occurrence keeps its position)
//! and the `primes`/`not_primes` lists derive from that map, while
//! `count.total` is the raw input length. With duplicate inputs `total`
//! can therefore exceed `primes + not_primes`; this reproduces the
//! original contract's behavior deliberately (see DESIGN.md).

use async_trait::async_trait;
use indexmap::IndexMap;
use numerio_core::NumerioError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::tool::{Tool, ToolOutput};

/// Parameters for the `is_prime` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct PrimesArgs {
    /// The integers to classify.
    pub numbers: Vec<i64>,
}

/// Count aggregates over a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimeCounts {
    /// Raw input length, duplicates included.
    pub total: usize,
    /// Prime entries in the deduplicated map.
    pub primes: usize,
    /// Non-prime entries in the deduplicated map.
    pub not_primes: usize,
}

/// Result record for the `is_prime` tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimesRecord {
    /// Number -> primality, in first-occurrence input order.
    pub results: IndexMap<i64, bool>,
    /// Primes from the map, in map order.
    pub primes: Vec<i64>,
    /// Non-primes from the map, in map order.
    pub not_primes: Vec<i64>,
    pub count: PrimeCounts,
}

/// Trial-division primality test, total over all i64.
///
/// n < 2 is not prime (covers negatives and zero); 2 is prime; even n is
/// not; otherwise divide by odd candidates up to and including ⌊√n⌋.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3u64;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Classify a sequence of integers and aggregate the counts.
pub fn classify_primes(numbers: &[i64]) -> PrimesRecord {
    let mut results: IndexMap<i64, bool> = IndexMap::new();
    for &n in numbers {
        results.insert(n, is_prime(n));
    }

    let primes: Vec<i64> = results
        .iter()
        .filter_map(|(&n, &p)| p.then_some(n))
        .collect();
    let not_primes: Vec<i64> = results
        .iter()
        .filter_map(|(&n, &p)| (!p).then_some(n))
        .collect();
    let count = PrimeCounts {
        total: numbers.len(),
        primes: primes.len(),
        not_primes: not_primes.len(),
    };

    PrimesRecord {
        results,
        primes,
        not_primes,
        count,
    }
}

/// Classifies integers as prime or not prime.
pub struct PrimesTool;

#[async_trait]
impl Tool for PrimesTool {
    fn name(&self) -> &str {
        "is_prime"
    }

    fn description(&self) -> &str {
        "Check whether each of a list of integers is prime. Returns a per-number \
         classification, the primes and non-primes in input order, and counts."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "numbers": {
                    "type": "array",
                    "items": { "type": "integer" },
                    "description": "Integers to check for primality"
                }
            },
            "required": ["numbers"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, NumerioError> {
        let args: PrimesArgs = serde_json::from_value(input).map_err(|e| {
            warn!(error = %e, "rejected 'is_prime' parameters");
            NumerioError::Tool {
                message: format!("invalid 'is_prime' parameters: {e}"),
                source: Some(Box::new(e)),
            }
        })?;

        debug!(count = args.numbers.len(), "classifying primality");
        let record = classify_primes(&args.numbers);

        let content = serde_json::to_string(&record)
            .map_err(|e| NumerioError::Internal(format!("record serialization failed: {e}")))?;
        // Classification always succeeds; there is no failure shape.
        Ok(ToolOutput {
            content,
            is_error: false,
        })
    }
}
