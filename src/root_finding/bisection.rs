//! Bisection method

use log::{debug, trace, warn};

use super::algorithms::{bisection_iteration_cap, Algorithm};
use super::config::BisectionCfg;
use super::errors::RootFindingError;
use super::report::{
    BisectionRecord, BisectionReport, RootFindingReport, TerminationReason, ToleranceSatisfied
};
use super::signs::brackets_root;
use crate::cache::EvaluationCache;
use crate::expression::ArithmeticError;

const ALGORITHM: &str = Algorithm::Bisection.algorithm_name();


/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    a + (b - a) / 2.0
}


/// Finds a root of `func` on `[a, b]` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Every evaluation goes through an [`EvaluationCache`] that rounds inputs
/// to `tolerance * 0.01`, so the endpoint carried over from one step is
/// never recomputed.
///
/// # Arguments
///
/// ┌ `func` - function whose root is sought; may fail with [`ArithmeticError`]
/// ├ `a`    - lower bound, finite
/// ├ `b`    - upper bound, finite and greater than `a`
/// └ `cfg`  - [`BisectionCfg`] (tolerance, safety margin)
///
/// # Algorithm
///
/// ┌ 1. evaluate f(a) and f(b); if either |f| < tol, return that endpoint (empty trace)
/// ├ 2. require a sign change, else [`RootFindingError::NoSignChange`]
/// ├ 3. cap = ceil(log2((b - a) / tol)) + safety_margin
/// ├ 4. while right - left > tol and fewer than cap iterations:
/// │      midpoint, f(midpoint), record, stop if |f(midpoint)| < tol,
/// │      otherwise keep the half that still changes sign
/// └ 5. return the last midpoint
///
/// If `b - a` is already within tolerance the loop never runs; the midpoint
/// of `[a, b]` is evaluated and returned with an empty trace.
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidBounds`]       - `a`/`b` non-finite, `a >= b`, or `b - a` overflows
/// ├ [`RootFindingError::DegenerateCacheStep`] - tolerance too small to round by
/// ├ [`RootFindingError::NoSignChange`]        - f(a) and f(b) do not change sign
/// └ [`RootFindingError::Arithmetic`]          - `func` failed at a sample point
///
/// No report is produced on error.
pub fn bisection<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: BisectionCfg,
) -> Result<BisectionReport, RootFindingError>
where F: FnMut(f64) -> Result<f64, ArithmeticError> {

    if !(a.is_finite() && b.is_finite()) || a >= b || !(b - a).is_finite() {
        return Err(RootFindingError::InvalidBounds { a, b });
    }

    let tol = cfg.tolerance();
    if tol < (b - a) * f64::EPSILON {
        warn!(
            "tolerance {tol} is below the float resolution of [{a}, {b}]; \
             the width criterion may never be met"
        );
    }

    let mut cache = EvaluationCache::new(func, tol)?;

    // immediate bounds are roots
    let fa = cache.evaluate(a)?;
    let fb = cache.evaluate(b)?;
    if fa.abs() < tol {
        return Ok(endpoint_report(a, fa, &cache));
    }
    if fb.abs() < tol {
        return Ok(endpoint_report(b, fb, &cache));
    }

    if !brackets_root(fa, fb) {
        return Err(RootFindingError::NoSignChange { a, b, fa, fb });
    }

    let cap = bisection_iteration_cap(a, b, tol, cfg.safety_margin());
    debug!("bisection on [{a}, {b}], tol={tol}, iteration cap={cap}");

    // immediate narrow width
    if b - a <= tol {
        let midpoint = calculate_bisection(a, b);
        let f_mid = cache.evaluate(midpoint)?;
        return Ok(RootFindingReport {
            root                : midpoint,
            f_root              : f_mid,
            iterations          : 0,
            evaluations         : cache.evaluations(),
            cache_hits          : cache.hits(),
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::WidthTolReached,
            algorithm_name      : ALGORITHM,
            trace               : Vec::new(),
        });
    }

    let mut left   = a;
    let mut right  = b;
    let mut f_left = fa;

    let mut trace: Vec<BisectionRecord> = Vec::with_capacity(cap.min(128));
    let mut midpoint = left;    // gets overwritten
    let mut f_mid    = f_left;  // gets overwritten
    let mut found    = false;

    while right - left > tol && trace.len() < cap {
        let iteration = trace.len() + 1;
        midpoint = calculate_bisection(left, right);
        f_mid    = cache.evaluate(midpoint)?;

        trace.push(BisectionRecord {
            iteration,
            left,
            right,
            midpoint,
            f_mid,
            error: right - left,
        });
        trace!("bisection iter {iteration}: [{left}, {right}] mid={midpoint} f(mid)={f_mid}");

        if f_mid.abs() < tol {
            found = true;
            break;
        }

        // shrink interval
        if brackets_root(f_left, f_mid) {
            right = midpoint;
        } else {
            left   = midpoint;
            f_left = f_mid;
        }
    }

    let (termination_reason, tolerance_satisfied) = if found {
        (TerminationReason::ToleranceReached, ToleranceSatisfied::AbsFxReached)
    } else if right - left <= tol {
        (TerminationReason::ToleranceReached, ToleranceSatisfied::WidthTolReached)
    } else {
        warn!(
            "bisection stopped at iteration cap {cap} with width {} > tol {tol}",
            right - left
        );
        (TerminationReason::IterationLimit, ToleranceSatisfied::ToleranceNotReached)
    };

    debug!(
        "bisection finished after {} iterations: root={midpoint}, f(root)={f_mid}, {:?}",
        trace.len(), tolerance_satisfied
    );

    Ok(RootFindingReport {
        root        : midpoint,
        f_root      : f_mid,
        iterations  : trace.len(),
        evaluations : cache.evaluations(),
        cache_hits  : cache.hits(),
        termination_reason,
        tolerance_satisfied,
        algorithm_name : ALGORITHM,
        trace,
    })
}


fn endpoint_report<F>(root: f64, f_root: f64, cache: &EvaluationCache<F>) -> BisectionReport {
    debug!("bisection: endpoint {root} is already a root (f={f_root})");
    RootFindingReport {
        root,
        f_root,
        iterations          : 0,
        evaluations         : cache.evaluations(),
        cache_hits          : cache.hits(),
        termination_reason  : TerminationReason::ToleranceReached,
        tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
        algorithm_name      : ALGORITHM,
        trace               : Vec::new(),
    }
}
