//! tests for the bisection root finding algorithm
use approx::assert_abs_diff_eq;

use rootexpr::expression::{ArithmeticError, Expression};
use rootexpr::root_finding::bisection::bisection;
use rootexpr::root_finding::config::BisectionCfg;
use rootexpr::root_finding::errors::{BracketHint, RootFindingError};
use rootexpr::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn finds_2_for_parsed_quadratic() -> TestResult {
    let mut f = Expression::parse("x^2 - 4")?;
    let tol   = 1e-6;
    let cfg   = BisectionCfg::new(tol)?;

    let res = bisection(|x| f.evaluate(x), 0.0, 3.0, cfg)?;

    let cap = (3.0_f64 / tol).log2().ceil() as usize + 10;
    assert!((res.root - 2.0).abs() <= tol);
    assert!(res.iterations <= cap);
    assert_eq!(res.iterations, res.trace().len());
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    Ok(())
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| Ok(x * x - 2.0);
    let tol = 1e-10;
    let res = bisection(f, 0.0, 2.0, BisectionCfg::new(tol)?)?;

    assert!(res.converged());
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = tol);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn no_sign_change() -> TestResult {
    let mut f = Expression::parse("x^2 - 4")?;
    let err = bisection(|x| f.evaluate(x), -1.0, 1.0, BisectionCfg::new(1e-6)?).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::NoSignChange { a, b, fa, fb }
        if a == -1.0 && b == 1.0 && fa == -3.0 && fb == -3.0
    ));
    assert_eq!(err.hint(), Some(BracketHint::RaiseTheUpperBound));
    Ok(())
}

#[test]
fn no_sign_change_both_positive_hints_lower_bound() -> TestResult {
    let f   = |x: f64| Ok(x * x + 1.0);
    let err = bisection(f, -1.0, 1.0, BisectionCfg::new(1e-8)?).unwrap_err();

    assert_eq!(err.hint(), Some(BracketHint::LowerTheLowerBound));
    Ok(())
}

#[test]
fn endpoint_a_is_root_empty_trace() -> TestResult {
    let mut f = Expression::parse("x - 2")?;
    let res = bisection(|x| f.evaluate(x), 2.0, 5.0, BisectionCfg::new(1e-6)?)?;

    assert_eq!(res.root, 2.0);
    assert_eq!(res.iterations, 0);
    assert!(res.trace().is_empty());
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    Ok(())
}

#[test]
fn endpoint_b_is_root_empty_trace() -> TestResult {
    let f   = |x: f64| Ok(x + 5.0);
    let res = bisection(f, -10.0, -5.0, BisectionCfg::new(1e-8)?)?;

    assert_eq!(res.root, -5.0);
    assert!(res.trace().is_empty());
    Ok(())
}

#[test]
fn both_endpoints_are_roots_picks_lower() -> TestResult {
    let f   = |_x: f64| Ok(0.0);
    let res = bisection(f, 1.0, 2.0, BisectionCfg::new(1e-12)?)?;

    assert_eq!(res.root, 1.0);
    assert_eq!(res.iterations, 0);
    Ok(())
}

#[test]
fn detects_invalid_bounds() -> TestResult {
    let cfg = BisectionCfg::new(1e-6)?;
    let f   = |x: f64| Ok(x);

    assert!(matches!(
        bisection(f, 2.0, 0.0, cfg), Err(RootFindingError::InvalidBounds { a, b }) if a == 2.0 && b == 0.0
    ));
    assert!(matches!(bisection(f, 1.0, 1.0, cfg), Err(RootFindingError::InvalidBounds { .. })));
    assert!(matches!(bisection(f, f64::NAN, 1.0, cfg), Err(RootFindingError::InvalidBounds { .. })));
    assert!(matches!(
        bisection(f, -f64::MAX, f64::MAX, cfg), Err(RootFindingError::InvalidBounds { .. })
    ));
    Ok(())
}

#[test]
fn rejects_non_positive_tolerance() {
    assert!(matches!(BisectionCfg::new(0.0),  Err(RootFindingError::InvalidTolerance { got }) if got == 0.0));
    assert!(matches!(BisectionCfg::new(-1e-3), Err(RootFindingError::InvalidTolerance { .. })));
    assert!(matches!(BisectionCfg::new(f64::NAN), Err(RootFindingError::InvalidTolerance { .. })));
}

#[test]
fn rejects_tolerance_too_small_to_round() -> TestResult {
    let cfg = BisectionCfg::new(1e-320)?;
    let err = bisection(|x: f64| Ok(x), -1.0, 1.0, cfg).unwrap_err();

    assert!(matches!(err, RootFindingError::DegenerateCacheStep { .. }));
    Ok(())
}

#[test]
fn division_by_zero_at_midpoint_is_fatal() -> TestResult {
    let mut f = Expression::parse("1/(x - 1.5)")?;
    let err = bisection(|x| f.evaluate(x), 0.0, 3.0, BisectionCfg::new(1e-6)?).unwrap_err();

    assert!(matches!(err, RootFindingError::Arithmetic(ArithmeticError::DivisionByZero { .. })));
    Ok(())
}

#[test]
fn trace_records_are_consistent() -> TestResult {
    let f   = |x: f64| Ok(x * x * x - x - 2.0);
    let res = bisection(f, 1.0, 2.0, BisectionCfg::new(1e-8)?)?;
    let trace = res.trace();

    assert!(!trace.is_empty());
    for (i, r) in trace.iter().enumerate() {
        assert_eq!(r.iteration, i + 1);
        assert_eq!(r.error, r.right - r.left);
        assert_eq!(r.midpoint, r.left + (r.right - r.left) / 2.0);
        assert!(r.left < r.midpoint && r.midpoint < r.right);
    }
    for pair in trace.windows(2) {
        assert_abs_diff_eq!(pair[1].error, pair[0].error / 2.0, epsilon = 1e-15);
    }

    let last = trace[trace.len() - 1];
    assert_eq!(res.root, last.midpoint);
    assert_eq!(res.f_root, last.f_mid);
    Ok(())
}

#[test]
fn stops_on_width_for_step_function() -> TestResult {
    // |f| never drops below tolerance, so only the width criterion can stop it
    let f   = |x: f64| Ok(if x < 0.3 { -1.0 } else { 1.0 });
    let tol = 1e-3;
    let cfg = BisectionCfg::new(tol)?.with_safety_margin(0);
    let res = bisection(f, -1.0, 2.0, cfg)?;

    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert_eq!(res.iterations, (3.0_f64 / tol).log2().ceil() as usize);
    assert!((res.root - 0.3).abs() <= tol);
    Ok(())
}

#[test]
fn narrow_interval_returns_midpoint_without_trace() -> TestResult {
    let f   = |x: f64| Ok(10.0 * (x - 1.0));
    let res = bisection(f, 0.5, 1.25, BisectionCfg::new(1.0)?)?;

    assert_eq!(res.iterations, 0);
    assert!(res.trace().is_empty());
    assert_eq!(res.root, 0.875);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    Ok(())
}

#[test]
fn underlying_function_called_once_per_bucket() -> TestResult {
    let mut calls = 0usize;
    let f = |x: f64| {
        calls += 1;
        Ok(x * x - 4.0)
    };
    let res = bisection(f, 0.0, 3.0, BisectionCfg::new(1e-6)?)?;

    assert_eq!(calls, res.evaluations);
    // two endpoints plus one midpoint per iteration, all distinct buckets
    assert_eq!(res.evaluations, res.iterations + 2);
    Ok(())
}

#[test]
fn single_halving_with_zero_safety_margin() -> TestResult {
    // width 1.1 > tol, so the cap is ceil(log2(1.1)) = 1
    let f   = |x: f64| Ok(100.0 * (x - 1.0));
    let cfg = BisectionCfg::new(1.0)?.with_safety_margin(0);
    let res = bisection(f, 0.5, 1.6, cfg)?;

    assert_eq!(res.iterations, 1);
    assert!(res.converged());
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert_eq!(res.last_bracket(), Some((0.5, 1.6)));
    Ok(())
}
