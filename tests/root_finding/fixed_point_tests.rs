//! tests for fixed-point iteration
use approx::assert_abs_diff_eq;

use rootexpr::expression::{ArithmeticError, Expression};
use rootexpr::root_finding::config::FixedPointCfg;
use rootexpr::root_finding::errors::RootFindingError;
use rootexpr::root_finding::fixed_point::fixed_point;
use rootexpr::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), Box<dyn std::error::Error>>;

const DOTTIE: f64 = 0.739_085_133_215_160_6;

#[test]
fn cos_converges_to_dottie_number() -> TestResult {
    let mut g = Expression::parse("cos(x)")?;
    let tol   = 1e-8;
    let res   = fixed_point(|x| g.evaluate(x), 0.0, FixedPointCfg::new(tol, 100)?)?;

    assert!(res.converged());
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert_abs_diff_eq!(res.root, DOTTIE, epsilon = 1e-6);
    assert!(res.final_error().is_some_and(|e| e < tol));
    assert!(res.iterations < 100);
    Ok(())
}

#[test]
fn divergent_map_runs_to_max_iter() -> TestResult {
    let g   = |x: f64| Ok(2.0 * x);
    let res = fixed_point(g, 1.0, FixedPointCfg::new(1e-8, 10)?)?;
    let trace = res.trace();

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert!(!res.converged());
    assert_eq!(res.iterations, 10);
    assert_eq!(trace.len(), 10);

    // input of the last step == output of the second-to-last step
    assert_eq!(res.root, 512.0);
    assert_eq!(res.root, trace[9].current);
    assert_eq!(res.root, trace[8].next);
    assert_eq!(res.f_root, 1024.0);
    Ok(())
}

#[test]
fn returns_value_before_the_converging_step() -> TestResult {
    // fixed point 2; errors halve every step
    let g   = |x: f64| Ok(x / 2.0 + 1.0);
    let tol = 1e-3;
    let res = fixed_point(g, 0.0, FixedPointCfg::new(tol, 50)?)?;
    let last = res.trace()[res.iterations - 1];

    assert!(res.converged());
    assert_eq!(res.root, last.current);
    assert_ne!(res.root, last.next);
    assert!(last.error < tol && last.error > 0.0);
    assert_eq!(res.final_error(), Some(last.error));
    Ok(())
}

#[test]
fn exact_fixed_point_at_initial_guess() -> TestResult {
    let g   = |x: f64| Ok(x);
    let res = fixed_point(g, 3.0, FixedPointCfg::new(1e-6, 20)?)?;

    assert_eq!(res.iterations, 1);
    assert_eq!(res.root, 3.0);
    assert_eq!(res.final_error(), Some(0.0));
    Ok(())
}

#[test]
fn trace_chains_current_to_previous_next() -> TestResult {
    let mut g = Expression::parse("(x^2 + 2)/3")?;
    let res   = fixed_point(|x| g.evaluate(x), 0.0, FixedPointCfg::new(1e-10, 200)?)?;
    let trace = res.trace();

    assert!(res.converged());
    assert_abs_diff_eq!(res.root, 1.0, epsilon = 1e-8);
    for (i, r) in trace.iter().enumerate() {
        assert_eq!(r.iteration, i + 1);
        assert_eq!(r.error, (r.next - r.current).abs());
    }
    for pair in trace.windows(2) {
        assert_eq!(pair[1].current, pair[0].next);
    }
    Ok(())
}

#[test]
fn rejects_invalid_config() {
    assert!(matches!(FixedPointCfg::new(1e-6, 0),  Err(RootFindingError::InvalidMaxIter { got: 0 })));
    assert!(matches!(FixedPointCfg::new(0.0, 10),  Err(RootFindingError::InvalidTolerance { .. })));
    assert!(matches!(FixedPointCfg::new(-1.0, 10), Err(RootFindingError::InvalidTolerance { .. })));
    assert!(matches!(FixedPointCfg::new(f64::INFINITY, 10), Err(RootFindingError::InvalidTolerance { .. })));
}

#[test]
fn setters_validate() -> TestResult {
    let cfg = FixedPointCfg::new(1e-6, 10)?;

    assert!(cfg.set_max_iter(0).is_err());
    assert!(cfg.set_tolerance(0.0).is_err());
    let cfg = cfg.set_max_iter(5)?.set_tolerance(1e-3)?;
    assert_eq!(cfg.max_iter(), 5);
    assert_eq!(cfg.tolerance(), 1e-3);
    Ok(())
}

#[test]
fn division_by_zero_is_fatal() -> TestResult {
    let mut g = Expression::parse("1/x")?;
    let err = fixed_point(|x| g.evaluate(x), 0.0, FixedPointCfg::new(1e-6, 10)?).unwrap_err();

    assert!(matches!(err, RootFindingError::Arithmetic(ArithmeticError::DivisionByZero { .. })));
    Ok(())
}

#[test]
fn oscillating_map_does_not_error() -> TestResult {
    // 1 -> -1 -> 1 -> ...
    let g   = |x: f64| Ok(-x);
    let res = fixed_point(g, 1.0, FixedPointCfg::new(1e-6, 7)?)?;

    assert_eq!(res.iterations, 7);
    assert_eq!(res.root, 1.0);
    // the cache answers every step after the first two
    assert_eq!(res.evaluations, 2);
    assert_eq!(res.cache_hits, 5);
    Ok(())
}
