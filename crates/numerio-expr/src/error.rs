// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type for expression evaluation.
//!
//! Every failure mode of the evaluator -- lexing, parsing, name
//! resolution, arity, and runtime arithmetic faults -- is a variant here.
//! Callers (the `calculate` tool) convert these into a structured failure
//! record; nothing in this crate panics on user input.

use thiserror::Error;

/// Failure produced while tokenizing, parsing, or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    /// A character outside the arithmetic grammar (quotes, brackets, `.`
    /// used for attribute access, etc.).
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    /// A numeric literal that could not be parsed.
    #[error("invalid number literal '{literal}'")]
    InvalidNumber { literal: String },

    /// The expression ended where a value or operator was required.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// A well-formed token in a position the grammar does not allow.
    #[error("unexpected {found} at position {position}")]
    UnexpectedToken { found: String, position: usize },

    /// An identifier outside the allow-list.
    #[error("name '{0}' is not defined")]
    UndefinedName(String),

    /// A constant used with call syntax, e.g. `pi(2)`.
    #[error("'{0}' is not callable")]
    NotCallable(String),

    /// A function name used as a bare value, e.g. `sqrt + 1`.
    #[error("function '{0}' must be called")]
    FunctionNotCalled(String),

    /// Wrong number of arguments for an allow-listed function.
    #[error("{name}() expects {expected}, got {got}")]
    Arity {
        name: &'static str,
        expected: &'static str,
        got: usize,
    },

    /// An argument outside a function's accepted types.
    #[error("{name}(): {message}")]
    InvalidArgument {
        name: &'static str,
        message: String,
    },

    /// Input outside a function's mathematical domain (`sqrt(-1)`, `log(0)`).
    #[error("math domain error")]
    Domain,

    /// A finite input produced a result outside f64 range (`exp(1000)`).
    #[error("math range error")]
    Range,

    /// Division or modulo with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Integer floor-division or modulo with a zero divisor.
    #[error("integer division or modulo by zero")]
    IntegerDivisionByZero,

    /// Integer arithmetic exceeded i64 range.
    #[error("integer overflow")]
    Overflow,
}
