//! [`Expression`]: a parsed formula in one variable with a private result cache.

use log::debug;

use crate::cache::MemoTable;
use super::ast::Node;
use super::errors::{ArithmeticError, ParseError};
use super::parser::parse_tokens;
use super::shortcuts::{normalize, Shortcut};
use super::token::tokenize;


/// Rounding granularity of the per-expression cache.
pub const EXPRESSION_CACHE_PRECISION: f64 = 1e-10;

const _: () = assert!(
    EXPRESSION_CACHE_PRECISION >= f64::MIN_POSITIVE && EXPRESSION_CACHE_PRECISION < f64::INFINITY
);


/// A formula in `x`, parsed once and evaluated many times.
///
/// Supported syntax
/// ├ numbers, including scientific notation (`1.5E-3`)
/// ├ variable `x`, constants `e` and `pi`
/// ├ functions `sin`, `cos`, `tan`, `sqrt`, `log`/`ln`, `exp` with a parenthesized argument
/// └ operators `+ - * / ^` and parentheses
///
/// Names are case-insensitive and whitespace is ignored.
///
/// # Caching
/// [`Expression::evaluate`] rounds `x` to a multiple of
/// [`EXPRESSION_CACHE_PRECISION`] and reuses the value computed for that
/// bucket. The first value computed in a bucket is the one every later call
/// in that bucket returns.
///
/// # Example
/// ```
/// use rootexpr::expression::Expression;
///
/// let mut f = Expression::parse("x^3 - x - 2")?;
/// assert_eq!(f.evaluate(2.0)?, 4.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    text:     String,
    tree:     Node,
    shortcut: Option<Shortcut>,
    memo:     MemoTable,
}

impl Expression {
    /// Parses `text` into an evaluable expression.
    ///
    /// # Errors
    /// Any [`ParseError`]; nothing is evaluated before parsing succeeds.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.trim();
        let tokens = tokenize(text)?;
        let tree = parse_tokens(&tokens)?;
        let shortcut = Shortcut::lookup(&normalize(text));

        debug!("parsed `{text}` as {tree} (shortcut: {shortcut:?})");

        Ok(Self {
            text: text.to_string(),
            tree,
            shortcut,
            memo: new_memo(),
        })
    }

    /// The trimmed source text.
    pub fn text(&self) -> &str { &self.text }

    pub fn tree(&self) -> &Node { &self.tree }

    /// `true` if evaluation takes a closed-form path instead of walking the tree.
    pub fn has_shortcut(&self) -> bool { self.shortcut.is_some() }

    /// Number of evaluations actually computed (cache misses).
    pub fn evaluations(&self) -> usize { self.memo.misses() }

    /// Number of evaluations answered from the cache.
    pub fn cache_hits(&self) -> usize { self.memo.hits() }

    /// Evaluates at `x`, memoized per rounded bucket.
    ///
    /// # Errors
    /// [`ArithmeticError::DivisionByZero`] if a divisor evaluates to zero.
    /// Errors are not cached; the next call in the same bucket recomputes.
    pub fn evaluate(&mut self, x: f64) -> Result<f64, ArithmeticError> {
        let tree = &self.tree;
        let shortcut = self.shortcut;
        self.memo.get_or_try_insert_with(x, |_rounded| compute(tree, shortcut, x))
    }

    /// Evaluates at `x` without consulting or filling the cache.
    pub fn evaluate_uncached(&self, x: f64) -> Result<f64, ArithmeticError> {
        compute(&self.tree, self.shortcut, x)
    }

    /// Drops every cached value and resets the counters.
    pub fn clear_cache(&mut self) {
        self.memo = new_memo();
    }
}

impl std::str::FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}


#[inline]
fn compute(tree: &Node, shortcut: Option<Shortcut>, x: f64) -> Result<f64, ArithmeticError> {
    match shortcut {
        Some(s) => Ok(s.apply(x)),
        None    => tree.eval(x),
    }
}

fn new_memo() -> MemoTable {
    MemoTable::with_fixed_step(EXPRESSION_CACHE_PRECISION)
}
