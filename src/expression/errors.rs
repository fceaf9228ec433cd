//! Expression error types.
//!
//! ┌ [`ParseError`]      : malformed formula text, raised by [`Expression::parse`]
//! │   ├ unbalanced parentheses
//! │   ├ unknown function or identifier
//! │   ├ leftover / unexpected tokens
//! │   └ nesting deeper than the parser accepts
//! │
//! └ [`ArithmeticError`] : failure while evaluating a parsed formula at a point
//!     └ division by zero
//!
//! [`Expression::parse`]: super::Expression::parse

use thiserror::Error;


/// Parse-time errors. Positions are character offsets into the trimmed formula.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    EmptyExpression,

    #[error("missing closing parenthesis for '(' at position {pos}")]
    UnmatchedOpenParen { pos: usize },

    #[error("unexpected ')' at position {pos}")]
    UnmatchedCloseParen { pos: usize },

    #[error("unknown function `{name}` at position {pos}")]
    UnknownFunction { name: String, pos: usize },

    #[error("unknown identifier `{name}` at position {pos}; only `x`, `e` and `pi` are allowed")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("function `{name}` at position {pos} must be followed by a parenthesized argument")]
    MissingCallParen { name: String, pos: usize },

    #[error("invalid number literal `{literal}` at position {pos}")]
    InvalidNumber { literal: String, pos: usize },

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("unexpected token `{token}` at position {pos}")]
    UnexpectedToken { token: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("formula nests deeper than {limit} levels at position {pos}")]
    NestingTooDeep { pos: usize, limit: usize },
}


/// Evaluation-time errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArithmeticError {
    #[error("division by zero: {numerator} / 0")]
    DivisionByZero { numerator: f64 },
}
