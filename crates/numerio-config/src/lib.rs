// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Numerio math tools.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, and environment
//! variable overrides. The interesting knobs are the two policy bounds
//! (`limits.factorial_max`, `limits.fibonacci_max`): the defaults are
//! fixed contract values, but deployments with different numeric
//! expectations can move them here rather than forking the tools.
//!
//! # Usage
//!
//! ```no_run
//! use numerio_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("factorial max: {}", config.limits.factorial_max);
//! ```

pub mod loader;
pub mod model;
pub mod validation;

use thiserror::Error;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{LimitsConfig, LogConfig, NumerioConfig};

/// A configuration failure: either a parse/deserialize error from figment
/// or a semantic validation error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML parse or deserialization failure.
    #[error("{0}")]
    Parse(String),

    /// A value outside its valid range.
    #[error("{message}")]
    Validation { message: String },
}

/// Load configuration from the XDG hierarchy and validate it.
///
/// Returns either a valid [`NumerioConfig`] or every error found (parse
/// errors and all failed validations, not just the first).
pub fn load_and_validate() -> Result<NumerioConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError::Parse(err.to_string())]),
    }
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<NumerioConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError::Parse(err.to_string())]),
    }
}

/// Print configuration errors to stderr, one per line.
pub fn render_errors(errors: &[ConfigError]) {
    for error in errors {
        eprintln!("numerio: config error: {error}");
    }
}
