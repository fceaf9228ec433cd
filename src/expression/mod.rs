pub mod ast;
pub mod errors;
pub mod parser;
pub mod token;
pub(crate) mod shortcuts;

mod evaluator;
pub use evaluator::{Expression, EXPRESSION_CACHE_PRECISION};
pub use errors::{ArithmeticError, ParseError};
