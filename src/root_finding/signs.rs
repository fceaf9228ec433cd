//! Sign utilities for bracketing.
//! - `opposite_sign` : `true` if values have opposite sign
//! - `brackets_root` : `true` if `[f(a), f(b)]` is a usable sign change

/// Returns `true` if `x` and `y` have opposite signs.
///
/// Uses the sign bit rather than `x * y < 0`, which underflows to zero for
/// tiny magnitudes.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() != y.is_sign_positive()
}


/// Returns `true` if `fa` and `fb` are non-zero, not NaN, and of opposite sign.
#[inline]
pub(crate) fn brackets_root(fa: f64, fb: f64) -> bool {
    if fa.is_nan() || fb.is_nan() || fa == 0.0 || fb == 0.0 {
        return false;
    }
    opposite_sign(fa, fb)
}
