// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::model::NumerioConfig;
use crate::ConfigError;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &NumerioConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.log.level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of: {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.limits.factorial_max == 0 {
        errors.push(ConfigError::Validation {
            message: "limits.factorial_max must be positive".to_string(),
        });
    }

    if config.limits.fibonacci_max == 0 {
        errors.push(ConfigError::Validation {
            message: "limits.fibonacci_max must be positive".to_string(),
        });
    }

    // 185 terms is the most the generator's u128 arithmetic can sum.
    if config.limits.fibonacci_max > numerio_core::limits::FIBONACCI_HARD_MAX {
        errors.push(ConfigError::Validation {
            message: format!(
                "limits.fibonacci_max must be at most {}, got {}",
                numerio_core::limits::FIBONACCI_HARD_MAX,
                config.limits.fibonacci_max
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
