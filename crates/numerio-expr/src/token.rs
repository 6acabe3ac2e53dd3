// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tokenizer for the arithmetic grammar.
//!
//! Produces a flat token stream from the expression text. Anything outside
//! the grammar (string quotes, brackets, attribute dots) is rejected here,
//! which is the first layer of the structural allow-list: disallowed syntax
//! never reaches the parser.

use crate::error::ExprError;

/// A lexical token with its byte position in the source expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

/// Tokens of the arithmetic grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Integer literal (e.g. `42`).
    Int(i64),
    /// Floating-point literal (e.g. `3.14`, `1e9`, `.5`).
    Float(f64),
    /// Identifier (function or constant name).
    Ident(String),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `**`
    StarStar,
    /// `/`
    Slash,
    /// `//`
    SlashSlash,
    /// `%`
    Percent,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
}

impl Token {
    /// Short human-readable description used in parse error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Int(v) => format!("number {v}"),
            Token::Float(v) => format!("number {v}"),
            Token::Ident(name) => format!("identifier '{name}'"),
            Token::Plus => "'+'".to_string(),
            Token::Minus => "'-'".to_string(),
            Token::Star => "'*'".to_string(),
            Token::StarStar => "'**'".to_string(),
            Token::Slash => "'/'".to_string(),
            Token::SlashSlash => "'//'".to_string(),
            Token::Percent => "'%'".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::Comma => "','".to_string(),
        }
    }
}

/// Tokenize an expression into a flat token list.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, ExprError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        match b {
            b' ' | b'\t' | b'\r' | b'\n' => pos += 1,
            b'+' => {
                tokens.push(Spanned { token: Token::Plus, position: pos });
                pos += 1;
            }
            b'-' => {
                tokens.push(Spanned { token: Token::Minus, position: pos });
                pos += 1;
            }
            b'*' => {
                if bytes.get(pos + 1) == Some(&b'*') {
                    tokens.push(Spanned { token: Token::StarStar, position: pos });
                    pos += 2;
                } else {
                    tokens.push(Spanned { token: Token::Star, position: pos });
                    pos += 1;
                }
            }
            b'/' => {
                if bytes.get(pos + 1) == Some(&b'/') {
                    tokens.push(Spanned { token: Token::SlashSlash, position: pos });
                    pos += 2;
                } else {
                    tokens.push(Spanned { token: Token::Slash, position: pos });
                    pos += 1;
                }
            }
            b'%' => {
                tokens.push(Spanned { token: Token::Percent, position: pos });
                pos += 1;
            }
            b'(' => {
                tokens.push(Spanned { token: Token::LParen, position: pos });
                pos += 1;
            }
            b')' => {
                tokens.push(Spanned { token: Token::RParen, position: pos });
                pos += 1;
            }
            b',' => {
                tokens.push(Spanned { token: Token::Comma, position: pos });
                pos += 1;
            }
            b'0'..=b'9' => {
                let (token, next) = scan_number(input, pos)?;
                tokens.push(Spanned { token, position: pos });
                pos = next;
            }
            // A leading dot starts a float literal (`.5`); a dot anywhere
            // else is attribute-access syntax and is rejected.
            b'.' if bytes.get(pos + 1).is_some_and(u8::is_ascii_digit) => {
                let (token, next) = scan_number(input, pos)?;
                tokens.push(Spanned { token, position: pos });
                pos = next;
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                let start = pos;
                while pos < bytes.len()
                    && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                tokens.push(Spanned {
                    token: Token::Ident(input[start..pos].to_string()),
                    position: start,
                });
            }
            _ => {
                let ch = input[pos..].chars().next().unwrap_or('?');
                return Err(ExprError::UnexpectedChar { ch, position: pos });
            }
        }
    }

    Ok(tokens)
}

/// Scan a numeric literal starting at `start`. Returns the token and the
/// position just past the literal.
fn scan_number(input: &str, start: usize) -> Result<(Token, usize), ExprError> {
    let bytes = input.as_bytes();
    let mut pos = start;
    let mut is_float = false;

    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos < bytes.len() && bytes[pos] == b'.' && bytes.get(pos + 1) != Some(&b'.') {
        is_float = true;
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
    }
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp_pos = pos + 1;
        if exp_pos < bytes.len() && (bytes[exp_pos] == b'+' || bytes[exp_pos] == b'-') {
            exp_pos += 1;
        }
        if exp_pos < bytes.len() && bytes[exp_pos].is_ascii_digit() {
            is_float = true;
            pos = exp_pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }
    }

    let literal = &input[start..pos];
    if is_float {
        let value = literal.parse::<f64>().map_err(|_| ExprError::InvalidNumber {
            literal: literal.to_string(),
        })?;
        Ok((Token::Float(value), pos))
    } else {
        // Integer literals wider than i64 fall back to float rather than
        // failing; the original numeric tower had no integer width limit.
        match literal.parse::<i64>() {
            Ok(value) => Ok((Token::Int(value), pos)),
            Err(_) => {
                let value = literal.parse::<f64>().map_err(|_| ExprError::InvalidNumber {
                    literal: literal.to_string(),
                })?;
                Ok((Token::Float(value), pos))
            }
        }
    }
}
