//! Recursive-descent parser from tokens to a [`Node`] tree.
//!
//! Precedence, highest to lowest:
//!
//! ┌ primary : number, `x`, constant, `func(expr)`, `(expr)`
//! ├ unary   : leading `-` / `+`
//! ├ power   : `^`, left to right
//! ├ product : `*`, `/`, left to right
//! └ sum     : `+`, `-`, left to right
//!
//! A sign binds tighter than `^`, so `-x^2` is `(-x)^2` and `-2^2` is `4`.
//! The right operand of `^`, `*` and `/` may itself be signed: `x^-2`, `3*-x`.
//!
//! Nesting is capped at [`MAX_NESTING_DEPTH`] levels. Both the parser's own
//! recursion (parentheses, calls, signs) and the depth of the finished tree
//! (including long operator chains) count against it.

use super::ast::{BinaryOp, Node};
use super::errors::ParseError;
use super::token::{Token, TokenKind};


/// Deepest nesting a formula may have before it is rejected.
pub const MAX_NESTING_DEPTH: usize = 256;

/// A subtree and its depth (a leaf has depth 1).
type Parsed = (Node, usize);


/// Parses a full token sequence; every token must be consumed.
///
/// # Errors
/// ┌ [`ParseError::EmptyExpression`]     - no tokens
/// ├ [`ParseError::UnmatchedOpenParen`]  - a `(` is never closed
/// ├ [`ParseError::UnmatchedCloseParen`] - a `)` has no opener
/// ├ [`ParseError::MissingCallParen`]    - function name without `(`
/// ├ [`ParseError::UnexpectedToken`]     - token out of place or left over
/// ├ [`ParseError::UnexpectedEnd`]       - formula ends where an operand is expected
/// └ [`ParseError::NestingTooDeep`]      - more than [`MAX_NESTING_DEPTH`] levels
pub fn parse_tokens(tokens: &[Token]) -> Result<Node, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    check_parens(tokens)?;

    let mut parser = Parser { tokens, at: 0, nesting: 0 };
    let (tree, _) = parser.sum()?;

    match parser.peek() {
        None        => Ok(tree),
        Some(token) => Err(unexpected(token)),
    }
}


/// Reports the first unbalanced parenthesis before any parsing happens.
fn check_parens(tokens: &[Token]) -> Result<(), ParseError> {
    let mut open: Vec<usize> = Vec::new();
    for token in tokens {
        match token.kind {
            TokenKind::LParen => open.push(token.pos),
            TokenKind::RParen => {
                if open.pop().is_none() {
                    return Err(ParseError::UnmatchedCloseParen { pos: token.pos });
                }
            }
            _ => {}
        }
    }

    match open.first() {
        Some(&pos) => Err(ParseError::UnmatchedOpenParen { pos }),
        None       => Ok(()),
    }
}


fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken { token: token.kind.to_string(), pos: token.pos }
}


fn check_depth(depth: usize, pos: usize) -> Result<usize, ParseError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { pos, limit: MAX_NESTING_DEPTH });
    }
    Ok(depth)
}


fn join(op: BinaryOp, (lhs, l): Parsed, (rhs, r): Parsed, pos: usize) -> Result<Parsed, ParseError> {
    let depth = check_depth(1 + l.max(r), pos)?;
    Ok((Node::binary(op, lhs, rhs), depth))
}


struct Parser<'a> {
    tokens:  &'a [Token],
    at:      usize,
    nesting: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.at)
    }

    fn next(&mut self) -> Result<&'a Token, ParseError> {
        let token = self.tokens.get(self.at).ok_or(ParseError::UnexpectedEnd)?;
        self.at += 1;
        Ok(token)
    }

    /// Consumes the next token if it is one of the given binary operators.
    fn eat_op(&mut self, ops: &[(TokenKind, BinaryOp)]) -> Option<(BinaryOp, usize)> {
        let token = self.peek()?;
        let (_, op) = ops.iter().find(|(kind, _)| *kind == token.kind)?;
        self.at += 1;
        Some((*op, token.pos))
    }

    fn expect_rparen(&mut self) -> Result<(), ParseError> {
        let token = self.next()?;
        match token.kind {
            TokenKind::RParen => Ok(()),
            _                 => Err(unexpected(token)),
        }
    }

    /// Runs `inner` one nesting level down; `pos` is where the level opens.
    fn nested<T>(
        &mut self,
        pos: usize,
        inner: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.nesting = check_depth(self.nesting + 1, pos)?;
        let out = inner(self)?;
        self.nesting -= 1;
        Ok(out)
    }

    fn sum(&mut self) -> Result<Parsed, ParseError> {
        const OPS: [(TokenKind, BinaryOp); 2] = [
            (TokenKind::Plus,  BinaryOp::Add),
            (TokenKind::Minus, BinaryOp::Sub),
        ];
        let mut lhs = self.product()?;
        while let Some((op, pos)) = self.eat_op(&OPS) {
            let rhs = self.product()?;
            lhs = join(op, lhs, rhs, pos)?;
        }
        Ok(lhs)
    }

    fn product(&mut self) -> Result<Parsed, ParseError> {
        const OPS: [(TokenKind, BinaryOp); 2] = [
            (TokenKind::Star,  BinaryOp::Mul),
            (TokenKind::Slash, BinaryOp::Div),
        ];
        let mut lhs = self.power()?;
        while let Some((op, pos)) = self.eat_op(&OPS) {
            let rhs = self.power()?;
            lhs = join(op, lhs, rhs, pos)?;
        }
        Ok(lhs)
    }

    fn power(&mut self) -> Result<Parsed, ParseError> {
        const OPS: [(TokenKind, BinaryOp); 1] = [(TokenKind::Caret, BinaryOp::Pow)];
        let mut lhs = self.unary()?;
        while let Some((op, pos)) = self.eat_op(&OPS) {
            let rhs = self.unary()?;
            lhs = join(op, lhs, rhs, pos)?;
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Parsed, ParseError> {
        let Some(&Token { kind, pos }) = self.peek() else {
            return self.primary();
        };
        match kind {
            TokenKind::Minus => {
                self.at += 1;
                let (inner, depth) = self.nested(pos, Self::unary)?;
                Ok((Node::negate(inner), check_depth(depth + 1, pos)?))
            }
            TokenKind::Plus => {
                self.at += 1;
                self.nested(pos, Self::unary)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Parsed, ParseError> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Number(v)   => Ok((Node::Number(v), 1)),
            TokenKind::Variable    => Ok((Node::Variable, 1)),
            TokenKind::Constant(c) => Ok((Node::Number(c.value()), 1)),
            TokenKind::LParen      => self.nested(token.pos, |p| {
                let inner = p.sum()?;
                p.expect_rparen()?;
                Ok(inner)
            }),
            TokenKind::Function(func) => {
                match self.peek() {
                    Some(Token { kind: TokenKind::LParen, .. }) => self.at += 1,
                    _ => {
                        return Err(ParseError::MissingCallParen {
                            name: func.name().to_string(),
                            pos:  token.pos,
                        });
                    }
                }
                let (arg, depth) = self.nested(token.pos, |p| {
                    let arg = p.sum()?;
                    p.expect_rparen()?;
                    Ok(arg)
                })?;
                Ok((Node::call(func, arg), check_depth(depth + 1, token.pos)?))
            }
            _ => Err(unexpected(token)),
        }
    }
}
