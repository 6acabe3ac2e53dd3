// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Numerio math tools.
//!
//! This crate provides the error type and the shared [`Number`] value type
//! used by the expression evaluator and the tool result records. It has no
//! behavior of its own beyond numeric conversion and serialization.

pub mod error;
pub mod limits;
pub mod number;

// Re-export key items at crate root for ergonomic imports.
pub use error::NumerioError;
pub use number::Number;
