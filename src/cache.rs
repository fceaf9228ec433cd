//! Rounded-input memoization.
//!
//! [`MemoTable`] maps an input, rounded to the nearest multiple of a fixed
//! `step`, to a previously computed output. It backs both the per-formula
//! cache inside [`Expression`](crate::expression::Expression) and the
//! solver-level [`EvaluationCache`].
//!
//! Entries are never evicted; a table lives as long as its owner (one
//! expression, or one solve call).

use std::collections::HashMap;

use crate::root_finding::errors::RootFindingError;


/// Solver caches round to `tolerance * CACHE_STEP_FACTOR`.
pub const CACHE_STEP_FACTOR: f64 = 0.01;


#[derive(Debug, Clone)]
pub struct MemoTable {
    step:    f64,
    entries: HashMap<u64, f64>,
    hits:    usize,
    misses:  usize,
}

impl MemoTable {
    /// Creates a table with rounding granularity `step`.
    /// Returns `None` unless `step` is a positive normal float.
    pub fn new(step: f64) -> Option<Self> {
        if !(step.is_normal() && step > 0.0) {
            return None;
        }
        Some(Self::with_fixed_step(step))
    }

    /// Creates a table from a step already known to be a positive normal float.
    pub(crate) fn with_fixed_step(step: f64) -> Self {
        debug_assert!(step.is_normal() && step > 0.0);
        Self { step, entries: HashMap::new(), hits: 0, misses: 0 }
    }

    #[inline] pub fn step(&self)   -> f64   { self.step }
    #[inline] pub fn len(&self)    -> usize { self.entries.len() }
    #[inline] pub fn hits(&self)   -> usize { self.hits }
    #[inline] pub fn misses(&self) -> usize { self.misses }
    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Nearest multiple of `step` to `x`, or `None` if that is not finite.
    #[inline]
    pub fn round(&self, x: f64) -> Option<f64> {
        let rounded = (x / self.step).round() * self.step;
        if !rounded.is_finite() {
            return None;
        }
        // -0.0 and 0.0 share a bucket
        Some(if rounded == 0.0 { 0.0 } else { rounded })
    }

    /// Returns the stored value for `x`'s bucket, or computes and stores it.
    ///
    /// `compute` receives the rounded input. Inputs whose rounded value is
    /// not finite (NaN, or overflow of `x / step`) bypass the table and are
    /// computed at `x` itself. Failed computations are not stored.
    pub fn get_or_try_insert_with<E, C>(&mut self, x: f64, compute: C) -> Result<f64, E>
    where C: FnOnce(f64) -> Result<f64, E> {
        let Some(rounded) = self.round(x) else {
            self.misses += 1;
            return compute(x);
        };

        let key = rounded.to_bits();
        if let Some(&value) = self.entries.get(&key) {
            self.hits += 1;
            return Ok(value);
        }

        self.misses += 1;
        let value = compute(rounded)?;
        self.entries.insert(key, value);
        Ok(value)
    }
}


/// Memoizing wrapper around a fallible real function, keyed by rounded input.
///
/// Rounding granularity is `tolerance * 0.01`; the wrapped function is
/// called at the rounded point, so every input in a bucket sees the same
/// value.
///
/// # Example
/// ```
/// use rootexpr::cache::EvaluationCache;
/// use rootexpr::expression::ArithmeticError;
///
/// let mut cache = EvaluationCache::new(|x: f64| Ok::<_, ArithmeticError>(x * x), 1e-6)?;
/// let first  = cache.evaluate(3.0)?;
/// let second = cache.evaluate(3.0 + 1e-12)?;
/// assert_eq!(first.to_bits(), second.to_bits());
/// assert_eq!(cache.evaluations(), 1);
/// assert_eq!(cache.hits(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct EvaluationCache<F> {
    func:      F,
    tolerance: f64,
    table:     MemoTable,
}

impl<F> EvaluationCache<F> {
    /// # Errors
    /// ┌ [`RootFindingError::InvalidTolerance`]    - `tolerance` not finite or <= 0
    /// └ [`RootFindingError::DegenerateCacheStep`] - `tolerance * 0.01` underflows to
    ///                                               zero or a subnormal
    pub fn new(func: F, tolerance: f64) -> Result<Self, RootFindingError> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(RootFindingError::InvalidTolerance { got: tolerance });
        }
        let step  = tolerance * CACHE_STEP_FACTOR;
        let table = MemoTable::new(step)
            .ok_or(RootFindingError::DegenerateCacheStep { tolerance, step })?;

        Ok(Self { func, tolerance, table })
    }

    #[inline] pub fn tolerance(&self) -> f64 { self.tolerance }
    #[inline] pub fn step(&self) -> f64 { self.table.step() }

    /// Number of calls that reached the wrapped function.
    #[inline] pub fn evaluations(&self) -> usize { self.table.misses() }

    /// Number of calls answered from the table.
    #[inline] pub fn hits(&self) -> usize { self.table.hits() }

    /// Number of distinct buckets stored.
    #[inline] pub fn len(&self) -> usize { self.table.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.table.is_empty() }

    pub fn into_inner(self) -> F { self.func }
}

impl<F, E> EvaluationCache<F>
where F: FnMut(f64) -> Result<f64, E> {
    /// Evaluates the wrapped function at `x` rounded to the cache step.
    pub fn evaluate(&mut self, x: f64) -> Result<f64, E> {
        let func = &mut self.func;
        self.table.get_or_try_insert_with(x, |rounded| func(rounded))
    }
}
