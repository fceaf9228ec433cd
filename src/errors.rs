//! Crate-level error returned by the formula-driven entry points.
//!
//! ┌ [`Error::Parse`]       : formula text rejected before any sampling
//! └ [`Error::RootFinding`] : invalid arguments or a failed evaluation during the solve
//!
//! [`Error::kind`] collapses both into the three categories a caller
//! usually branches on.

use thiserror::Error;

use crate::expression::ParseError;
use crate::root_finding::errors::RootFindingError;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed formula text.
    Parse,
    /// Evaluation failed at a sample point (e.g. division by zero).
    Arithmetic,
    /// Bad tolerance, iteration cap, or bracket.
    InvalidArgument,
}


#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    RootFinding(#[from] RootFindingError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(_)       => ErrorKind::Parse,
            Error::RootFinding(e) => e.kind(),
        }
    }
}

impl From<crate::expression::ArithmeticError> for Error {
    fn from(e: crate::expression::ArithmeticError) -> Self {
        Error::RootFinding(RootFindingError::Arithmetic(e))
    }
}
