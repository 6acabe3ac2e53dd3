// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed allow-list of functions and constants.
//!
//! Name resolution in the evaluator consults exactly these two tables;
//! there is no ambient namespace to fall through to. The set is a frozen
//! contract -- adding or removing a name changes the tool's public
//! behavior, so both tables are mirrored in `FUNCTION_NAMES` /
//! `CONSTANT_NAMES` for schema text and docs.

use numerio_core::Number;

use crate::error::ExprError;
use crate::eval;

/// Names of all allow-listed functions, for documentation and schemas.
pub const FUNCTION_NAMES: &[&str] = &[
    "abs", "round", "min", "max", "sum", "pow", "sqrt", "sin", "cos", "tan",
    "log", "log10", "log2", "exp", "floor", "ceil",
];

/// Names of all allow-listed constants.
pub const CONSTANT_NAMES: &[&str] = &["pi", "e"];

/// An allow-listed function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFn {
    Abs,
    Round,
    Min,
    Max,
    Sum,
    Pow,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Log,
    Log10,
    Log2,
    Exp,
    Floor,
    Ceil,
}

impl MathFn {
    /// The function's source-level name.
    pub fn name(&self) -> &'static str {
        match self {
            MathFn::Abs => "abs",
            MathFn::Round => "round",
            MathFn::Min => "min",
            MathFn::Max => "max",
            MathFn::Sum => "sum",
            MathFn::Pow => "pow",
            MathFn::Sqrt => "sqrt",
            MathFn::Sin => "sin",
            MathFn::Cos => "cos",
            MathFn::Tan => "tan",
            MathFn::Log => "log",
            MathFn::Log10 => "log10",
            MathFn::Log2 => "log2",
            MathFn::Exp => "exp",
            MathFn::Floor => "floor",
            MathFn::Ceil => "ceil",
        }
    }
}

/// Resolve a function name against the allow-list.
pub fn lookup_function(name: &str) -> Option<MathFn> {
    match name {
        "abs" => Some(MathFn::Abs),
        "round" => Some(MathFn::Round),
        "min" => Some(MathFn::Min),
        "max" => Some(MathFn::Max),
        "sum" => Some(MathFn::Sum),
        "pow" => Some(MathFn::Pow),
        "sqrt" => Some(MathFn::Sqrt),
        "sin" => Some(MathFn::Sin),
        "cos" => Some(MathFn::Cos),
        "tan" => Some(MathFn::Tan),
        "log" => Some(MathFn::Log),
        "log10" => Some(MathFn::Log10),
        "log2" => Some(MathFn::Log2),
        "exp" => Some(MathFn::Exp),
        "floor" => Some(MathFn::Floor),
        "ceil" => Some(MathFn::Ceil),
        _ => None,
    }
}

/// Resolve a constant name against the allow-list.
pub fn lookup_constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        _ => None,
    }
}

/// Apply an allow-listed function to already-evaluated arguments.
pub fn call(func: MathFn, args: &[Number]) -> Result<Number, ExprError> {
    match func {
        MathFn::Abs => {
            let [arg] = exact::<1>(func, args)?;
            match arg {
                Number::Int(i) => i
                    .checked_abs()
                    .map(Number::Int)
                    .ok_or(ExprError::Overflow),
                Number::Float(f) => Ok(Number::Float(f.abs())),
            }
        }
        MathFn::Round => round(args),
        MathFn::Min => fold_extremum(func, args, |candidate, best| candidate < best),
        MathFn::Max => fold_extremum(func, args, |candidate, best| candidate > best),
        MathFn::Sum => {
            if args.is_empty() {
                return Err(ExprError::Arity {
                    name: func.name(),
                    expected: "at least 1 argument",
                    got: 0,
                });
            }
            let mut total = Number::Int(0);
            for arg in args {
                total = eval::add(total, *arg)?;
            }
            Ok(total)
        }
        MathFn::Pow => {
            let [base, exponent] = exact::<2>(func, args)?;
            eval::pow(base, exponent)
        }
        MathFn::Sqrt => {
            let [arg] = exact::<1>(func, args)?;
            let value = arg.as_f64();
            if value < 0.0 {
                return Err(ExprError::Domain);
            }
            Ok(Number::Float(value.sqrt()))
        }
        MathFn::Sin => unary_float(func, args, f64::sin),
        MathFn::Cos => unary_float(func, args, f64::cos),
        MathFn::Tan => unary_float(func, args, f64::tan),
        MathFn::Log => log(args),
        MathFn::Log10 => positive_unary_float(func, args, f64::log10),
        MathFn::Log2 => positive_unary_float(func, args, f64::log2),
        MathFn::Exp => {
            let [arg] = exact::<1>(func, args)?;
            let result = arg.as_f64().exp();
            if result.is_infinite() && arg.as_f64().is_finite() {
                return Err(ExprError::Range);
            }
            Ok(Number::Float(result))
        }
        MathFn::Floor => rounding_to_int(func, args, f64::floor),
        MathFn::Ceil => rounding_to_int(func, args, f64::ceil),
    }
}

/// Exact-arity check returning a fixed-size view of the arguments.
fn exact<const N: usize>(func: MathFn, args: &[Number]) -> Result<[Number; N], ExprError> {
    <[Number; N]>::try_from(args).map_err(|_| ExprError::Arity {
        name: func.name(),
        expected: if N == 1 { "1 argument" } else { "2 arguments" },
        got: args.len(),
    })
}

fn unary_float(
    func: MathFn,
    args: &[Number],
    op: fn(f64) -> f64,
) -> Result<Number, ExprError> {
    let [arg] = exact::<1>(func, args)?;
    Ok(Number::Float(op(arg.as_f64())))
}

fn positive_unary_float(
    func: MathFn,
    args: &[Number],
    op: fn(f64) -> f64,
) -> Result<Number, ExprError> {
    let [arg] = exact::<1>(func, args)?;
    if arg.as_f64() <= 0.0 {
        return Err(ExprError::Domain);
    }
    Ok(Number::Float(op(arg.as_f64())))
}

/// `floor`/`ceil`: integers pass through, floats land on an integer.
fn rounding_to_int(
    func: MathFn,
    args: &[Number],
    op: fn(f64) -> f64,
) -> Result<Number, ExprError> {
    let [arg] = exact::<1>(func, args)?;
    match arg {
        Number::Int(i) => Ok(Number::Int(i)),
        Number::Float(f) => float_to_int(op(f)).map(Number::Int),
    }
}

/// `min`/`max` over one or more arguments; the winning element keeps its
/// own variant, so `max(1, 2)` is an integer and `max(1, 2.5)` a float.
fn fold_extremum(
    func: MathFn,
    args: &[Number],
    wins: fn(f64, f64) -> bool,
) -> Result<Number, ExprError> {
    let (first, rest) = args.split_first().ok_or(ExprError::Arity {
        name: func.name(),
        expected: "at least 1 argument",
        got: 0,
    })?;
    let mut best = *first;
    for candidate in rest {
        if wins(candidate.as_f64(), best.as_f64()) {
            best = *candidate;
        }
    }
    Ok(best)
}

/// `round` with one or two arguments, ties to even.
fn round(args: &[Number]) -> Result<Number, ExprError> {
    match args {
        [Number::Int(i)] => Ok(Number::Int(*i)),
        [Number::Float(f)] => float_to_int(f.round_ties_even()).map(Number::Int),
        [value, Number::Int(ndigits)] => {
            let digits = i32::try_from(*ndigits).map_err(|_| ExprError::Overflow)?;
            let scale = 10f64.powi(digits);
            let scaled = (value.as_f64() * scale).round_ties_even() / scale;
            match value {
                // Rounding an integer keeps it an integer.
                Number::Int(_) => float_to_int(scaled).map(Number::Int),
                Number::Float(_) => Ok(Number::Float(scaled)),
            }
        }
        [_, Number::Float(_)] => Err(ExprError::InvalidArgument {
            name: "round",
            message: "ndigits must be an integer".to_string(),
        }),
        _ => Err(ExprError::Arity {
            name: "round",
            expected: "1 or 2 arguments",
            got: args.len(),
        }),
    }
}

/// `log(x)` natural log, or `log(x, base)`.
fn log(args: &[Number]) -> Result<Number, ExprError> {
    match args {
        [x] => {
            if x.as_f64() <= 0.0 {
                return Err(ExprError::Domain);
            }
            Ok(Number::Float(x.as_f64().ln()))
        }
        [x, base] => {
            if x.as_f64() <= 0.0 || base.as_f64() <= 0.0 {
                return Err(ExprError::Domain);
            }
            let denominator = base.as_f64().ln();
            if denominator == 0.0 {
                return Err(ExprError::DivisionByZero);
            }
            Ok(Number::Float(x.as_f64().ln() / denominator))
        }
        _ => Err(ExprError::Arity {
            name: "log",
            expected: "1 or 2 arguments",
            got: args.len(),
        }),
    }
}

/// Convert a float that should be integral into i64, rejecting values
/// outside i64 range. 2^63 itself is out of range.
fn float_to_int(value: f64) -> Result<i64, ExprError> {
    if value.is_finite() && value >= -9.223_372_036_854_776e18 && value < 9.223_372_036_854_776e18
    {
        Ok(value as i64)
    } else {
        Err(ExprError::Overflow)
    }
}
