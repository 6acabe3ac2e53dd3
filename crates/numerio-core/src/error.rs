// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Numerio math tools.

use thiserror::Error;

/// The primary error type used across the Numerio tool surface.
///
/// Note that in-domain computation failures (bad expressions, out-of-range
/// inputs) are *not* errors: every tool converts those into a structured
/// failure record. `NumerioError` covers caller mistakes (malformed input
/// JSON) and infrastructure faults only.
#[derive(Debug, Error)]
pub enum NumerioError {
    /// Configuration errors (invalid TOML, out-of-range limit values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Tool invocation errors (missing or ill-typed parameters).
    #[error("tool error: {message}")]
    Tool {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
