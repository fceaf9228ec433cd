//! Tokenizer for formula text.
//!
//! Turns a formula into an immutable sequence of [`Token`]s. Identifiers are
//! matched case-insensitively and resolved here, so the parser only ever sees
//! the variable, a known constant or a known function.
//!
//! Number literals accept an optional fraction and a scientific exponent
//! (`1.5E-3`, `2e10`). An `e` right after digits is an exponent marker only
//! when a digit (optionally signed) follows it.

use super::ast::{Constant, Function};
use super::errors::ParseError;


#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Variable,
    Constant(Constant),
    Function(Function),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Number(v)   => write!(f, "{v}"),
            TokenKind::Variable    => write!(f, "x"),
            TokenKind::Constant(c) => write!(f, "{}", c.name()),
            TokenKind::Function(g) => write!(f, "{}", g.name()),
            TokenKind::Plus        => write!(f, "+"),
            TokenKind::Minus       => write!(f, "-"),
            TokenKind::Star        => write!(f, "*"),
            TokenKind::Slash       => write!(f, "/"),
            TokenKind::Caret       => write!(f, "^"),
            TokenKind::LParen      => write!(f, "("),
            TokenKind::RParen      => write!(f, ")"),
        }
    }
}


/// A token and the character offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos:  usize,
}


/// Splits `text` into tokens.
///
/// # Errors
/// ┌ [`ParseError::InvalidNumber`]     - malformed literal such as `1.2.3`
/// ├ [`ParseError::UnknownFunction`]   - a name followed by `(` that is not a supported function
/// ├ [`ParseError::UnknownIdentifier`] - any other name besides `x`, `e`, `pi`
/// └ [`ParseError::UnexpectedChar`]    - a character outside the formula alphabet
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let single = match c {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '^' => Some(TokenKind::Caret),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            _   => None,
        };
        if let Some(kind) = single {
            tokens.push(Token { kind, pos: i });
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let (kind, end) = lex_number(&chars, i)?;
            tokens.push(Token { kind, pos: i });
            i = end;
            continue;
        }

        if c.is_alphabetic() {
            let (kind, end) = lex_identifier(&chars, i)?;
            tokens.push(Token { kind, pos: i });
            i = end;
            continue;
        }

        return Err(ParseError::UnexpectedChar { ch: c, pos: i });
    }

    Ok(tokens)
}


/// Lexes a numeric literal starting at `start`; returns the token and the index after it.
fn lex_number(chars: &[char], start: usize) -> Result<(TokenKind, usize), ParseError> {
    let mut end = start;
    while end < chars.len() && (chars[end].is_ascii_digit() || chars[end] == '.') {
        end += 1;
    }

    if has_exponent(chars, end) {
        // marker, optional sign, digits
        end += 1;
        if matches!(chars[end], '+' | '-') {
            end += 1;
        }
        while end < chars.len() && chars[end].is_ascii_digit() {
            end += 1;
        }
    }

    let literal: String = chars[start..end].iter().collect();
    literal
        .parse::<f64>()
        .map(|v| (TokenKind::Number(v), end))
        .map_err(|_| ParseError::InvalidNumber { literal, pos: start })
}


/// `true` if `chars[at..]` begins a scientific exponent (`e5`, `E-3`, `e+12`).
fn has_exponent(chars: &[char], at: usize) -> bool {
    let is_digit_at = |k: usize| chars.get(k).is_some_and(|c| c.is_ascii_digit());

    match chars.get(at) {
        Some('e') | Some('E') => match chars.get(at + 1) {
            Some('+') | Some('-') => is_digit_at(at + 2),
            _                     => is_digit_at(at + 1),
        },
        _ => false,
    }
}


/// Lexes a name and resolves it to the variable, a constant or a function.
fn lex_identifier(chars: &[char], start: usize) -> Result<(TokenKind, usize), ParseError> {
    let mut end = start;
    while end < chars.len() && chars[end].is_alphabetic() {
        end += 1;
    }
    let name: String = chars[start..end].iter().collect::<String>().to_lowercase();

    let kind = if name == "x" {
        TokenKind::Variable
    } else if let Some(constant) = Constant::from_name(&name) {
        TokenKind::Constant(constant)
    } else if let Some(function) = Function::from_name(&name) {
        TokenKind::Function(function)
    } else if next_non_space(chars, end) == Some('(') {
        return Err(ParseError::UnknownFunction { name, pos: start });
    } else {
        return Err(ParseError::UnknownIdentifier { name, pos: start });
    };

    Ok((kind, end))
}


fn next_non_space(chars: &[char], from: usize) -> Option<char> {
    chars[from..].iter().copied().find(|c| !c.is_whitespace())
}
