//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum and the bisection iteration bound.


/// Iterations added on top of the theoretical bisection count, so the loop
/// still terminates when rounding keeps the width just above the tolerance.
pub const BISECTION_SAFETY_MARGIN: usize = 10;


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    /// Bracketing: halves `[a, b]` while keeping a sign change.
    Bisection,
    /// Open: successive substitution `x_{n+1} = g(x_n)`.
    FixedPoint,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection  => "bisection",
            Algorithm::FixedPoint => "fixed_point",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}


/// Hard iteration cap for bisection on `[a, b]`:
/// `ceil(log2((b - a) / tolerance)) + margin`, never below 0.
///
/// The logarithm goes negative when the interval is already narrower than
/// the tolerance, e.g. `ceil(log2(0.25)) + 10 = 8`.
pub fn bisection_iteration_cap(a: f64, b: f64, tolerance: f64, margin: usize) -> usize {
    let halvings = ((b - a) / tolerance).log2().ceil();
    // `as` saturates: +inf -> i64::MAX, NaN -> 0
    let halvings = halvings as i64;
    let margin   = i64::try_from(margin).unwrap_or(i64::MAX);

    usize::try_from(halvings.saturating_add(margin).max(0)).unwrap_or(usize::MAX)
}
