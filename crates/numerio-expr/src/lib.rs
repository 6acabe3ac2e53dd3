// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Restricted arithmetic expression evaluator.
//!
//! Evaluates textual expressions such as `"2 + 2"` or `"sqrt(16) * 3"`
//! against a fixed allow-list of mathematical functions and constants.
//! The input is tokenized, parsed into a small AST, and interpreted
//! directly -- there is no dynamic evaluation facility to sandbox. The
//! grammar admits only numbers, identifiers, function calls, parentheses,
//! and arithmetic operators, so the allow-list is enforced structurally:
//! an identifier either resolves against the fixed table or evaluation
//! fails with an [`ExprError`].
//!
//! # Usage
//!
//! ```
//! use numerio_core::Number;
//! use numerio_expr::evaluate;
//!
//! assert_eq!(evaluate("2 + 2").unwrap(), Number::Int(4));
//! assert_eq!(evaluate("sqrt(16) * 3").unwrap(), Number::Float(12.0));
//! assert!(evaluate("__import__('os')").is_err());
//! ```

pub mod ast;
pub mod error;
pub mod eval;
pub mod functions;
pub mod parser;
pub mod token;

pub use error::ExprError;
pub use eval::evaluate;
pub use functions::{CONSTANT_NAMES, FUNCTION_NAMES};
