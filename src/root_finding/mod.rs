// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod config;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod fixed_point;
