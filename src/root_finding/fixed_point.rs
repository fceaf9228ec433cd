//! Fixed-point iteration

use log::{debug, trace, warn};

use super::algorithms::Algorithm;
use super::config::FixedPointCfg;
use super::errors::RootFindingError;
use super::report::{
    FixedPointRecord, FixedPointReport, RootFindingReport, TerminationReason, ToleranceSatisfied
};
use crate::cache::EvaluationCache;
use crate::expression::ArithmeticError;

const ALGORITHM: &str = Algorithm::FixedPoint.algorithm_name();


/// Finds a fixed point `x = g(x)` by
/// [successive substitution](https://en.wikipedia.org/wiki/Fixed-point_iteration)
/// starting from `x0`.
///
/// # Arguments
///
/// ┌ `g`   - iteration function; may fail with [`ArithmeticError`]
/// ├ `x0`  - initial guess
/// └ `cfg` - [`FixedPointCfg`] (tolerance, max_iter)
///
/// # Algorithm
///
/// For `i = 1..=max_iter`: `next = g(current)`, `error = |next - current|`,
/// record `(i, current, next, error)`; stop if `error < tol`, otherwise
/// `current = next`.
///
/// # Returns
///
/// [`RootFindingReport`] whose `root` is `current` of the **last recorded
/// step**, i.e. the value `g` was last applied to, not the freshly computed
/// `next`. On convergence `next` is within `tol` of it; on iteration limit
/// it equals `next` of the second-to-last step. `f_root` is `g(root)` as
/// seen in that last step, and [`FixedPointReport::final_error`] gives
/// `|g(root) - root|`.
///
/// # Notes
/// - Convergence is not enforced. A divergent or cycling `g` runs to
///   `max_iter` and returns [`TerminationReason::IterationLimit`] without error;
///   check [`RootFindingReport::converged`].
/// - `g` is evaluated through an [`EvaluationCache`] rounding to `tolerance * 0.01`.
///
/// # Errors
///
/// ┌ [`RootFindingError::DegenerateCacheStep`] - tolerance too small to round by
/// └ [`RootFindingError::Arithmetic`]          - `g` failed at an iterate
pub fn fixed_point<G>(
    g: G,
    x0: f64,
    cfg: FixedPointCfg,
) -> Result<FixedPointReport, RootFindingError>
where G: FnMut(f64) -> Result<f64, ArithmeticError> {

    let tol      = cfg.tolerance();
    let max_iter = cfg.max_iter();
    let mut cache = EvaluationCache::new(g, tol)?;

    debug!("fixed point from x0={x0}, tol={tol}, max_iter={max_iter}");

    let mut trace: Vec<FixedPointRecord> = Vec::with_capacity(max_iter.min(128));
    let mut current = x0;
    let mut found   = false;

    for iteration in 1..=max_iter {
        let next  = cache.evaluate(current)?;
        let error = (next - current).abs();

        trace.push(FixedPointRecord { iteration, current, next, error });
        trace!("fixed point iter {iteration}: x={current} g(x)={next} err={error}");

        if error < tol {
            found = true;
            break;
        }

        if iteration < max_iter {
            current = next;
        }
    }

    // max_iter >= 1, so at least one step is recorded
    let (root, f_root) = trace
        .last()
        .map_or((x0, f64::NAN), |r| (r.current, r.next));

    let (termination_reason, tolerance_satisfied) = if found {
        (TerminationReason::ToleranceReached, ToleranceSatisfied::StepSizeReached)
    } else {
        warn!("fixed point did not converge within {max_iter} iterations; last x={root}");
        (TerminationReason::IterationLimit, ToleranceSatisfied::ToleranceNotReached)
    };

    debug!("fixed point finished after {} iterations: x={root}, g(x)={f_root}", trace.len());

    Ok(RootFindingReport {
        root,
        f_root,
        iterations  : trace.len(),
        evaluations : cache.evaluations(),
        cache_hits  : cache.hits(),
        termination_reason,
        tolerance_satisfied,
        algorithm_name : ALGORITHM,
        trace,
    })
}
