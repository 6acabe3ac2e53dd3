// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recursive-descent parser for the arithmetic grammar.
//!
//! Precedence levels, lowest to highest:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/' | '//' | '%') factor)*
//! factor := ('+' | '-') factor | power
//! power  := atom ('**' factor)?
//! atom   := INT | FLOAT | IDENT ['(' args ')'] | '(' expr ')'
//! ```
//!
//! `**` is right-associative and binds tighter than a unary sign on its
//! left, so `-2**2` parses as `-(2**2)` and `2**-3` is accepted -- the
//! same shape as the original host grammar.

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::ExprError;
use crate::token::{tokenize, Spanned, Token};

/// Parse an expression string into an AST.
pub fn parse(input: &str) -> Result<Expr, ExprError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_expr()?;
    if let Some(extra) = parser.peek() {
        return Err(ExprError::UnexpectedToken {
            found: extra.token.describe(),
            position: extra.position,
        });
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.get(self.pos).cloned();
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    fn expect(&mut self, expected: &Token) -> Result<(), ExprError> {
        match self.advance() {
            Some(spanned) if spanned.token == *expected => Ok(()),
            Some(spanned) => Err(ExprError::UnexpectedToken {
                found: spanned.token.describe(),
                position: spanned.position,
            }),
            None => Err(ExprError::UnexpectedEnd),
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.parse_term()?;
        while let Some(spanned) = self.peek() {
            let op = match spanned.token {
                Token::Plus => BinaryOp::Add,
                Token::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn parse_term(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.parse_factor()?;
        while let Some(spanned) = self.peek() {
            let op = match spanned.token {
                Token::Star => BinaryOp::Mul,
                Token::Slash => BinaryOp::Div,
                Token::SlashSlash => BinaryOp::FloorDiv,
                Token::Percent => BinaryOp::Mod,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_factor()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn parse_factor(&mut self) -> Result<Expr, ExprError> {
        match self.peek().map(|s| &s.token) {
            Some(Token::Minus) => {
                self.advance();
                let operand = self.parse_factor()?;
                Ok(Expr::Unary {
                    op: UnaryOp::Neg,
                    operand: Box::new(operand),
                })
            }
            Some(Token::Plus) => {
                self.advance();
                let operand = self.parse_factor()?;
                Ok(Expr::Unary {
                    op: UnaryOp::Pos,
                    operand: Box::new(operand),
                })
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> Result<Expr, ExprError> {
        let base = self.parse_atom()?;
        if self.peek().map(|s| &s.token) == Some(&Token::StarStar) {
            self.advance();
            // Right operand is a factor so the exponent may carry a sign
            // and chained powers associate to the right.
            let exponent = self.parse_factor()?;
            return Ok(Expr::Binary {
                op: BinaryOp::Pow,
                lhs: Box::new(base),
                rhs: Box::new(exponent),
            });
        }
        Ok(base)
    }

    fn parse_atom(&mut self) -> Result<Expr, ExprError> {
        let spanned = self.advance().ok_or(ExprError::UnexpectedEnd)?;
        match spanned.token {
            Token::Int(value) => Ok(Expr::Int(value)),
            Token::Float(value) => Ok(Expr::Float(value)),
            Token::Ident(name) => {
                if self.peek().map(|s| &s.token) == Some(&Token::LParen) {
                    self.advance();
                    let args = self.parse_args()?;
                    Ok(Expr::Call { name, args })
                } else {
                    Ok(Expr::Ident(name))
                }
            }
            Token::LParen => {
                let inner = self.parse_expr()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            other => Err(ExprError::UnexpectedToken {
                found: other.describe(),
                position: spanned.position,
            }),
        }
    }

    /// Parse a comma-separated argument list; the opening paren is already
    /// consumed. Accepts the empty list so arity checking can produce a
    /// clearer message than the grammar would.
    fn parse_args(&mut self) -> Result<Vec<Expr>, ExprError> {
        let mut args = Vec::new();
        if self.peek().map(|s| &s.token) == Some(&Token::RParen) {
            self.advance();
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr()?);
            match self.advance() {
                Some(Spanned { token: Token::Comma, .. }) => continue,
                Some(Spanned { token: Token::RParen, .. }) => return Ok(args),
                Some(spanned) => {
                    return Err(ExprError::UnexpectedToken {
                        found: spanned.token.describe(),
                        position: spanned.position,
                    })
                }
                None => return Err(ExprError::UnexpectedEnd),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_additive_left_associative() {
        // 1 - 2 + 3 parses as (1 - 2) + 3
        let expr = parse("1 - 2 + 3").unwrap();
        let Expr::Binary { op: BinaryOp::Add, lhs, .. } = expr else {
            panic!("expected top-level add");
        };
        assert!(matches!(*lhs, Expr::Binary { op: BinaryOp::Sub, .. }));
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        // 1 + 2 * 3 parses as 1 + (2 * 3)
        let expr = parse("1 + 2 * 3").unwrap();
        let Expr::Binary { op: BinaryOp::Add, rhs, .. } = expr else {
            panic!("expected top-level add");
        };
        assert!(matches!(*rhs, Expr::Binary { op: BinaryOp::Mul, .. }));
    }

    #[test]
    fn power_is_right_associative() {
        // 2 ** 3 ** 2 parses as 2 ** (3 ** 2)
        let expr = parse("2 ** 3 ** 2").unwrap();
        let Expr::Binary { op: BinaryOp::Pow, rhs, .. } = expr else {
            panic!("expected top-level pow");
        };
        assert!(matches!(*rhs, Expr::Binary { op: BinaryOp::Pow, .. }));
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        // -2 ** 2 parses as -(2 ** 2)
        let expr = parse("-2 ** 2").unwrap();
        let Expr::Unary { op: UnaryOp::Neg, operand } = expr else {
            panic!("expected top-level negation");
        };
        assert!(matches!(*operand, Expr::Binary { op: BinaryOp::Pow, .. }));
    }

    #[test]
    fn negative_exponent_is_accepted() {
        let expr = parse("2 ** -3").unwrap();
        let Expr::Binary { op: BinaryOp::Pow, rhs, .. } = expr else {
            panic!("expected pow");
        };
        assert!(matches!(*rhs, Expr::Unary { op: UnaryOp::Neg, .. }));
    }

    #[test]
    fn parses_nested_calls() {
        let expr = parse("max(1, min(2, 3))").unwrap();
        let Expr::Call { name, args } = expr else {
            panic!("expected call");
        };
        assert_eq!(name, "max");
        assert_eq!(args.len(), 2);
        assert!(matches!(&args[1], Expr::Call { name, .. } if name == "min"));
    }

    #[test]
    fn bare_identifier_is_an_ident_node() {
        assert_eq!(parse("pi").unwrap(), Expr::Ident("pi".into()));
    }

    #[test]
    fn rejects_unbalanced_parens() {
        assert_eq!(parse("(1 + 2").unwrap_err(), ExprError::UnexpectedEnd);
        assert!(matches!(
            parse("1 + 2)").unwrap_err(),
            ExprError::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn rejects_trailing_operator() {
        assert_eq!(parse("1 +").unwrap_err(), ExprError::UnexpectedEnd);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse("").unwrap_err(), ExprError::UnexpectedEnd);
        assert_eq!(parse("   ").unwrap_err(), ExprError::UnexpectedEnd);
    }

    #[test]
    fn rejects_adjacent_values() {
        assert!(matches!(
            parse("1 2").unwrap_err(),
            ExprError::UnexpectedToken { .. }
        ));
    }
}
