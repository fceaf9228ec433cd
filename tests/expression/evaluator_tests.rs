//! tests for expression evaluation and its per-formula cache
use rootexpr::expression::{ArithmeticError, Expression, EXPRESSION_CACHE_PRECISION};

type TestResult = Result<(), Box<dyn std::error::Error>>;

const SAMPLES: [f64; 4] = [0.5, 1.3, 2.0, 3.7];

#[test]
fn equivalent_spellings_agree() -> TestResult {
    let mut pow  = Expression::parse("x^2 - 4")?;
    let mut mul  = Expression::parse("x*x-4")?;
    let mut tight = Expression::parse("x^2-4")?;

    for (x, want) in [(2.0, 0.0), (3.0, 5.0), (-3.0, 5.0)] {
        assert_eq!(pow.evaluate(x)?,   want);
        assert_eq!(mul.evaluate(x)?,   want);
        assert_eq!(tight.evaluate(x)?, want);
    }
    Ok(())
}

#[test]
fn closed_forms_match_tree_walk() -> TestResult {
    let formulas = [
        "sin(x)", "cos(x)", "tan(x)", "exp(x)", "e^x", "log(x)", "ln(x)", "sqrt(x)",
        "x^2", "x*x", "x^3", "x^2 - 4", "x*x - 4", "x^3 - x - 2", "cos(x) - x",
        "2*e^(x^2) - 5*x", "2*exp(x^2) - 5*x",
    ];

    for text in formulas {
        let f = Expression::parse(text)?;
        assert!(f.has_shortcut(), "{text} should take a closed-form path");
        for x in SAMPLES {
            let fast = f.evaluate_uncached(x)?;
            let slow = f.tree().eval(x)?;
            assert_eq!(fast.to_bits(), slow.to_bits(), "{text} at {x}");
        }
    }
    Ok(())
}

#[test]
fn general_formulas_walk_the_tree() -> TestResult {
    let f = Expression::parse("x^2 - 4*x + 1")?;

    assert!(!f.has_shortcut());
    assert_eq!(f.evaluate_uncached(2.0)?, -3.0);
    Ok(())
}

#[test]
fn division_by_zero_is_reported() -> TestResult {
    let mut f = Expression::parse("1/(x - x)")?;

    let err = f.evaluate(1.0).unwrap_err();
    assert!(matches!(err, ArithmeticError::DivisionByZero { numerator } if numerator == 1.0));

    // failures are recomputed, never served from the cache
    assert!(f.evaluate(1.0).is_err());
    assert_eq!(f.evaluations(), 2);
    assert_eq!(f.cache_hits(), 0);
    Ok(())
}

#[test]
fn zero_over_zero_is_division_by_zero() -> TestResult {
    let mut f = Expression::parse("x/x")?;

    assert!(matches!(f.evaluate(0.0), Err(ArithmeticError::DivisionByZero { .. })));
    assert_eq!(f.evaluate(2.0)?, 1.0);
    Ok(())
}

#[test]
fn memo_reuses_bucket_values() -> TestResult {
    let mut f = Expression::parse("x^3 - x - 2")?;

    let first = f.evaluate(1.5)?;
    assert_eq!(f.evaluate(1.5)?.to_bits(), first.to_bits());
    // well inside one 1e-10 bucket
    assert_eq!(f.evaluate(1.5 + EXPRESSION_CACHE_PRECISION / 100.0)?.to_bits(), first.to_bits());
    assert_eq!(f.evaluations(), 1);
    assert_eq!(f.cache_hits(), 2);

    // ten buckets away
    let other = f.evaluate(1.5 + 1e-9)?;
    assert_ne!(other.to_bits(), first.to_bits());
    assert_eq!(f.evaluations(), 2);
    Ok(())
}

#[test]
fn clear_cache_resets_counters() -> TestResult {
    let mut f = Expression::parse("cos(x) - x")?;

    f.evaluate(0.1)?;
    f.evaluate(0.1)?;
    f.clear_cache();
    assert_eq!(f.evaluations(), 0);
    assert_eq!(f.cache_hits(), 0);

    f.evaluate(0.1)?;
    assert_eq!(f.evaluations(), 1);
    Ok(())
}

#[test]
fn uncached_evaluation_leaves_counters_alone() -> TestResult {
    let f = Expression::parse("sqrt(x) + 1")?;

    assert_eq!(f.evaluate_uncached(9.0)?, 4.0);
    assert_eq!(f.evaluations(), 0);
    Ok(())
}

#[test]
fn text_is_trimmed_source() -> TestResult {
    let f = Expression::parse("   x^3 - x - 2 \n")?;

    assert_eq!(f.text(), "x^3 - x - 2");
    assert!(f.has_shortcut());
    Ok(())
}
