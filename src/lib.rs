//! Root finding for single-variable formulas given as text.
//!
//! ┌ [`expression`]   : tokenizer, parser and memoized evaluator for formulas in `x`
//! ├ [`cache`]        : rounded-input memo tables
//! └ [`root_finding`] : bisection and fixed-point iteration with iteration traces
//!
//! # Example
//! ```
//! use rootexpr::root_finding::config::BisectionCfg;
//!
//! let report = rootexpr::solve_bisection("x^2 - 4", 0.0, 3.0, BisectionCfg::new(1e-6)?)?;
//! assert!((report.root - 2.0).abs() < 1e-6);
//! assert_eq!(report.iterations, report.trace().len());
//! # Ok::<(), rootexpr::Error>(())
//! ```

pub mod cache;
pub mod errors;
pub mod expression;
pub mod root_finding;

pub use errors::{Error, ErrorKind};

use expression::Expression;
use root_finding::config::{BisectionCfg, FixedPointCfg};
use root_finding::report::{BisectionReport, FixedPointReport};


/// Parses `formula` as f(x) and runs [`bisection`](root_finding::bisection::bisection) on `[a, b]`.
///
/// # Errors
/// [`Error::Parse`] before any sampling, otherwise [`Error::RootFinding`].
pub fn solve_bisection(
    formula: &str,
    a: f64,
    b: f64,
    cfg: BisectionCfg,
) -> Result<BisectionReport, Error> {
    let mut f = Expression::parse(formula)?;
    let report = root_finding::bisection::bisection(|x| f.evaluate(x), a, b, cfg)?;
    Ok(report)
}


/// Parses `formula` as g(x) and runs [`fixed_point`](root_finding::fixed_point::fixed_point) from `x0`.
///
/// # Errors
/// [`Error::Parse`] before any sampling, otherwise [`Error::RootFinding`].
pub fn solve_fixed_point(
    formula: &str,
    x0: f64,
    cfg: FixedPointCfg,
) -> Result<FixedPointReport, Error> {
    let mut g = Expression::parse(formula)?;
    let report = root_finding::fixed_point::fixed_point(|x| g.evaluate(x), x0, cfg)?;
    Ok(report)
}
