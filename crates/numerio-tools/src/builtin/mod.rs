// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in math tools.
//!
//! Four independent, stateless tools: `calculate`, `is_prime`,
//! `factorial`, `fibonacci`. No data flows between them; each wraps one
//! pure function.

pub mod calculate;
pub mod factorial;
pub mod fibonacci;
pub mod primes;

use std::sync::Arc;

use numerio_core::limits;

use crate::tool::ToolRegistry;

pub use calculate::{calculate, CalculateRecord, CalculateTool};
pub use factorial::{compute_factorial, FactorialRecord, FactorialTool};
pub use fibonacci::{generate_fibonacci, FibonacciRecord, FibonacciTool};
pub use primes::{classify_primes, is_prime, PrimeCounts, PrimesRecord, PrimesTool};

/// Build a registry with all four built-in tools at the contract bounds.
pub fn default_registry() -> ToolRegistry {
    registry_with_limits(limits::FACTORIAL_MAX, limits::FIBONACCI_MAX)
}

/// Build a registry with configured numeric bounds.
pub fn registry_with_limits(factorial_max: u32, fibonacci_max: u32) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(CalculateTool));
    registry.register(Arc::new(PrimesTool));
    registry.register(Arc::new(FactorialTool { max_n: factorial_max }));
    registry.register(Arc::new(FibonacciTool { max_terms: fibonacci_max }));
    registry
}

/// Encode an exact unsigned integer for a JSON record. Values that fit
/// u64 stay JSON numbers; wider values become decimal strings, since JSON
/// numbers past 2^53 silently lose precision in most consumers.
pub(crate) fn json_u128(value: u128) -> serde_json::Value {
    match u64::try_from(value) {
        Ok(small) => serde_json::Value::from(small),
        Err(_) => serde_json::Value::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_u128_small_values_stay_numbers() {
        assert_eq!(json_u128(120), serde_json::json!(120));
        assert_eq!(json_u128(u64::MAX as u128), serde_json::json!(u64::MAX));
    }

    #[test]
    fn json_u128_wide_values_become_strings() {
        let wide = u64::MAX as u128 + 1;
        assert_eq!(
            json_u128(wide),
            serde_json::Value::String("18446744073709551616".to_string())
        );
    }
}
