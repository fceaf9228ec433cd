//! Defines the [`RootFindingReport`] returned by every solver, and the
//! per-iteration records that make up its trace.

/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - bisection
///     - |f(x)| < tol, at an endpoint or a midpoint
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - bisection
///     - right - left <= tol
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - fixed point
///     - |g(x_n) - x_n| < tol
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - all methods, alongside [`TerminationReason::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    StepSizeReached,
    ToleranceNotReached,
}


/// One bisection step.
///
/// `error` is the width of `[left, right]` *before* the step halves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionRecord {
    pub iteration: usize,
    pub left:      f64,
    pub right:     f64,
    pub midpoint:  f64,
    pub f_mid:     f64,
    pub error:     f64,
}


/// One fixed-point step: `next = g(current)`, `error = |next - current|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPointRecord {
    pub iteration: usize,
    pub current:   f64,
    pub next:      f64,
    pub error:     f64,
}


/// Final report returned by the root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`                : returned estimate
/// - `f_root`              : solver's function value at `root`
///                           (f for bisection, g for fixed point); NaN if never sampled
/// - `iterations`          : loop iterations performed (= trace length)
/// - `evaluations`         : calls that reached the underlying function
/// - `cache_hits`          : calls answered by the solver cache
/// - `termination_reason`  : why the solver stopped ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `algorithm_name`      : e.g. `"bisection"`
///
/// The iteration trace is only readable through [`RootFindingReport::trace`].
#[derive(Debug, Clone, PartialEq)]
pub struct RootFindingReport<R> {
    pub root                : f64,
    pub f_root              : f64,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub cache_hits          : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub algorithm_name      : &'static str,
    pub(crate) trace        : Vec<R>,
}

pub type BisectionReport  = RootFindingReport<BisectionRecord>;
pub type FixedPointReport = RootFindingReport<FixedPointRecord>;

impl<R> RootFindingReport<R> {
    /// Ordered iteration records, first step first.
    pub fn trace(&self) -> &[R] { &self.trace }

    pub fn converged(&self) -> bool {
        self.termination_reason == TerminationReason::ToleranceReached
    }
}

impl RootFindingReport<FixedPointRecord> {
    /// `|g(root) - root|` as observed in the last step, or `None` if no step ran.
    ///
    /// The returned root is the *input* of the last step, so this is exactly
    /// the error a caller would get by re-evaluating `g` at the root.
    pub fn final_error(&self) -> Option<f64> {
        self.trace.last().map(|r| r.error)
    }
}

impl RootFindingReport<BisectionRecord> {
    /// Final `[left, right]` of the last recorded step.
    pub fn last_bracket(&self) -> Option<(f64, f64)> {
        self.trace.last().map(|r| (r.left, r.right))
    }
}
