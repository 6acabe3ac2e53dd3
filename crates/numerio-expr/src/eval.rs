// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tree-walking interpreter for the arithmetic AST.
//!
//! Arithmetic follows the original host semantics: integer operands stay
//! integers under `+ - * % //`, true division always produces a float,
//! and `%`/`//` are floored (the result sign follows the divisor).
//! Integer overflow is an evaluation error, never a wrap or a panic.

use numerio_core::Number;

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::ExprError;
use crate::functions::{self, lookup_constant, lookup_function};
use crate::parser::parse;

/// Parse and evaluate an expression string.
///
/// This is the crate's main entry point. All failures come back as
/// [`ExprError`]; no input can cause a panic.
pub fn evaluate(expression: &str) -> Result<Number, ExprError> {
    let ast = parse(expression)?;
    eval_node(&ast)
}

fn eval_node(expr: &Expr) -> Result<Number, ExprError> {
    match expr {
        Expr::Int(value) => Ok(Number::Int(*value)),
        Expr::Float(value) => Ok(Number::Float(*value)),
        Expr::Ident(name) => {
            if let Some(value) = lookup_constant(name) {
                Ok(Number::Float(value))
            } else if lookup_function(name).is_some() {
                Err(ExprError::FunctionNotCalled(name.clone()))
            } else {
                Err(ExprError::UndefinedName(name.clone()))
            }
        }
        Expr::Unary { op, operand } => {
            let value = eval_node(operand)?;
            match (op, value) {
                (UnaryOp::Pos, v) => Ok(v),
                (UnaryOp::Neg, Number::Int(i)) => {
                    i.checked_neg().map(Number::Int).ok_or(ExprError::Overflow)
                }
                (UnaryOp::Neg, Number::Float(f)) => Ok(Number::Float(-f)),
            }
        }
        Expr::Binary { op, lhs, rhs } => {
            let left = eval_node(lhs)?;
            let right = eval_node(rhs)?;
            match op {
                BinaryOp::Add => add(left, right),
                BinaryOp::Sub => sub(left, right),
                BinaryOp::Mul => mul(left, right),
                BinaryOp::Div => div(left, right),
                BinaryOp::FloorDiv => floor_div(left, right),
                BinaryOp::Mod => modulo(left, right),
                BinaryOp::Pow => pow(left, right),
            }
        }
        Expr::Call { name, args } => {
            let func = match lookup_function(name) {
                Some(func) => func,
                None if lookup_constant(name).is_some() => {
                    return Err(ExprError::NotCallable(name.clone()))
                }
                None => return Err(ExprError::UndefinedName(name.clone())),
            };
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(eval_node(arg)?);
            }
            functions::call(func, &values)
        }
    }
}

pub(crate) fn add(a: Number, b: Number) -> Result<Number, ExprError> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => {
            x.checked_add(y).map(Number::Int).ok_or(ExprError::Overflow)
        }
        _ => Ok(Number::Float(a.as_f64() + b.as_f64())),
    }
}

fn sub(a: Number, b: Number) -> Result<Number, ExprError> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => {
            x.checked_sub(y).map(Number::Int).ok_or(ExprError::Overflow)
        }
        _ => Ok(Number::Float(a.as_f64() - b.as_f64())),
    }
}

fn mul(a: Number, b: Number) -> Result<Number, ExprError> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => {
            x.checked_mul(y).map(Number::Int).ok_or(ExprError::Overflow)
        }
        _ => Ok(Number::Float(a.as_f64() * b.as_f64())),
    }
}

/// True division: always float, even for two integers.
fn div(a: Number, b: Number) -> Result<Number, ExprError> {
    if b.as_f64() == 0.0 {
        return Err(ExprError::DivisionByZero);
    }
    Ok(Number::Float(a.as_f64() / b.as_f64()))
}

/// Floored division. For integers the quotient rounds toward negative
/// infinity: `-7 // 2 == -4`, `7 // -2 == -4`.
fn floor_div(a: Number, b: Number) -> Result<Number, ExprError> {
    match (a, b) {
        (Number::Int(_), Number::Int(0)) => Err(ExprError::IntegerDivisionByZero),
        (Number::Int(x), Number::Int(y)) => {
            let quotient = x.checked_div(y).ok_or(ExprError::Overflow)?;
            let remainder = x % y;
            if remainder != 0 && (remainder < 0) != (y < 0) {
                Ok(Number::Int(quotient - 1))
            } else {
                Ok(Number::Int(quotient))
            }
        }
        _ => {
            if b.as_f64() == 0.0 {
                return Err(ExprError::DivisionByZero);
            }
            Ok(Number::Float((a.as_f64() / b.as_f64()).floor()))
        }
    }
}

/// Floored modulo: the result carries the divisor's sign, matching the
/// identity `a == (a // b) * b + a % b`.
fn modulo(a: Number, b: Number) -> Result<Number, ExprError> {
    match (a, b) {
        (Number::Int(_), Number::Int(0)) => Err(ExprError::IntegerDivisionByZero),
        (Number::Int(x), Number::Int(y)) => {
            let remainder = x.checked_rem(y).ok_or(ExprError::Overflow)?;
            if remainder != 0 && (remainder < 0) != (y < 0) {
                Ok(Number::Int(remainder + y))
            } else {
                Ok(Number::Int(remainder))
            }
        }
        _ => {
            let divisor = b.as_f64();
            if divisor == 0.0 {
                return Err(ExprError::DivisionByZero);
            }
            let remainder = a.as_f64() % divisor;
            if remainder != 0.0 && (remainder < 0.0) != (divisor < 0.0) {
                Ok(Number::Float(remainder + divisor))
            } else {
                Ok(Number::Float(remainder))
            }
        }
    }
}

/// Power. An integer base with a non-negative integer exponent stays
/// exact; a negative integer exponent or any float operand goes through
/// f64. A NaN out of a float power (negative base, fractional exponent)
/// is a domain error; an infinity out of finite operands is a range error.
pub(crate) fn pow(base: Number, exponent: Number) -> Result<Number, ExprError> {
    if let (Number::Int(b), Number::Int(e)) = (base, exponent) {
        if e >= 0 {
            let e = u32::try_from(e).map_err(|_| ExprError::Overflow)?;
            return b.checked_pow(e).map(Number::Int).ok_or(ExprError::Overflow);
        }
        if b == 0 {
            return Err(ExprError::DivisionByZero);
        }
    }
    let result = base.as_f64().powf(exponent.as_f64());
    if result.is_nan() && !base.as_f64().is_nan() && !exponent.as_f64().is_nan() {
        return Err(ExprError::Domain);
    }
    if result.is_infinite() && base.as_f64().is_finite() && exponent.as_f64().is_finite() {
        return Err(ExprError::Range);
    }
    Ok(Number::Float(result))
}
