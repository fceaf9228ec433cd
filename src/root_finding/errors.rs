//! Root-finding error types.
//!
//! ┌ invalid arguments
//! │  ├ tolerance not finite or <= 0
//! │  ├ max_iter == 0
//! │  ├ bounds not finite or lower >= upper
//! │  ├ no sign change across the bracket
//! │  └ cache rounding step degenerates for the tolerance
//! │
//! └ evaluation failures
//!    └ [`ArithmeticError`] raised by the function at a sample point

use thiserror::Error;

use crate::errors::ErrorKind;
use crate::expression::ArithmeticError;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFindingError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("cache step {step} (tolerance {tolerance} * 0.01) is not a usable rounding step")]
    DegenerateCacheStep { tolerance: f64, step: f64 },

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}


/// Which way to move a non-bracketing interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketHint {
    /// f(a) and f(b) both > 0: try a smaller lower bound.
    LowerTheLowerBound,
    /// f(a) and f(b) both < 0: try a larger upper bound.
    RaiseTheUpperBound,
    /// An endpoint value is zero or NaN; no direction can be suggested.
    Indeterminate,
}

impl RootFindingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RootFindingError::Arithmetic(_) => ErrorKind::Arithmetic,
            _                               => ErrorKind::InvalidArgument,
        }
    }

    /// For [`RootFindingError::NoSignChange`], suggests how to adjust the interval.
    pub fn hint(&self) -> Option<BracketHint> {
        match *self {
            RootFindingError::NoSignChange { fa, fb, .. } => Some(
                if fa > 0.0 && fb > 0.0 {
                    BracketHint::LowerTheLowerBound
                } else if fa < 0.0 && fb < 0.0 {
                    BracketHint::RaiseTheUpperBound
                } else {
                    BracketHint::Indeterminate
                }
            ),
            _ => None,
        }
    }
}
