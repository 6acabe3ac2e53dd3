// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Default factorial input bound, re-exported from the contract constants.
pub const DEFAULT_FACTORIAL_MAX: u32 = numerio_core::limits::FACTORIAL_MAX;

/// Default Fibonacci term-count bound.
pub const DEFAULT_FIBONACCI_MAX: u32 = numerio_core::limits::FIBONACCI_MAX;

/// Top-level Numerio configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to the
/// contract values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NumerioConfig {
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Numeric policy bounds for the tools.
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Log level filter (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Numeric policy bounds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Largest n accepted by the factorial tool.
    #[serde(default = "default_factorial_max")]
    pub factorial_max: u32,

    /// Largest term count accepted by the Fibonacci tool.
    #[serde(default = "default_fibonacci_max")]
    pub fibonacci_max: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            factorial_max: default_factorial_max(),
            fibonacci_max: default_fibonacci_max(),
        }
    }
}

fn default_factorial_max() -> u32 {
    DEFAULT_FACTORIAL_MAX
}

fn default_fibonacci_max() -> u32 {
    DEFAULT_FIBONACCI_MAX
}
