// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AST for the arithmetic grammar.
//!
//! The node set is deliberately closed: numbers, identifiers, unary and
//! binary operators, and function calls. There is no node for attribute
//! access, indexing, or any statement form, so the evaluator cannot be
//! reached with anything but plain arithmetic.

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal.
    Int(i64),
    /// Floating-point literal.
    Float(f64),
    /// Bare identifier (resolved against the constant table).
    Ident(String),
    /// Unary operator application.
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Binary operator application.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Function call (resolved against the function table).
    Call { name: String, args: Vec<Expr> },
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `+x`
    Pos,
}

/// Binary operators, in Python's arithmetic operator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/` (true division, always float)
    Div,
    /// `//` (floor division)
    FloorDiv,
    /// `%` (floored modulo)
    Mod,
    /// `**` (power, right-associative)
    Pow,
}
