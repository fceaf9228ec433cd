//! Validated configuration for the root-finding algorithms.
//!
//! [`CommonCfg`] — fields shared by every solver
//! └ `tolerance` : stopping tolerance, finite and > 0
//!
//! [`BisectionCfg`]  adds `safety_margin` (extra iterations over the theoretical bound)
//! [`FixedPointCfg`] adds `max_iter`      (hard cap, >= 1)
//!
//! Every constructor and setter validates eagerly, so a config that exists
//! is always usable.

use super::algorithms::BISECTION_SAFETY_MARGIN;
use super::errors::RootFindingError;


/// Checks `tolerance` is finite and strictly positive.
pub(crate) fn validate_tolerance(tolerance: f64) -> Result<f64, RootFindingError> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(RootFindingError::InvalidTolerance { got: tolerance });
    }
    Ok(tolerance)
}

/// Checks `max_iter >= 1`.
pub(crate) fn validate_max_iter(max_iter: usize) -> Result<usize, RootFindingError> {
    if max_iter == 0 {
        return Err(RootFindingError::InvalidMaxIter { got: max_iter });
    }
    Ok(max_iter)
}


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    tolerance: f64,
}

impl CommonCfg {
    pub fn new(tolerance: f64) -> Result<Self, RootFindingError> {
        Ok(Self { tolerance: validate_tolerance(tolerance)? })
    }

    pub fn tolerance(&self) -> f64 { self.tolerance }

    pub(crate) fn with_tolerance(&mut self, v: f64) { self.tolerance = v; }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            #[inline]
            #[must_use]
            pub fn tolerance(&self) -> f64 { self.common.tolerance() }

            pub fn set_tolerance(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                let v = $crate::root_finding::config::validate_tolerance(v)?;
                self.common.with_tolerance(v);
                Ok(self)
            }
        }
    };
}


/// Bisection configuration.
///
/// # Defaults
/// └ `safety_margin` = [`BISECTION_SAFETY_MARGIN`] (10)
///
/// # Example
/// ```
/// use rootexpr::root_finding::config::BisectionCfg;
///
/// let cfg = BisectionCfg::new(1e-6)?;
/// assert_eq!(cfg.safety_margin(), 10);
/// assert!(BisectionCfg::new(0.0).is_err());
/// # Ok::<(), rootexpr::root_finding::errors::RootFindingError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BisectionCfg {
    common: CommonCfg,
    safety_margin: usize,
}

impl BisectionCfg {
    pub fn new(tolerance: f64) -> Result<Self, RootFindingError> {
        Ok(Self {
            common: CommonCfg::new(tolerance)?,
            safety_margin: BISECTION_SAFETY_MARGIN,
        })
    }

    #[inline] #[must_use] pub fn safety_margin(&self) -> usize { self.safety_margin }

    #[must_use]
    pub fn with_safety_margin(mut self, v: usize) -> Self {
        self.safety_margin = v;
        self
    }
}
impl_common_cfg!(BisectionCfg);


/// Fixed-point configuration.
///
/// Both fields are required; there is no default iteration cap because
/// the method has no convergence guarantee to derive one from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedPointCfg {
    common: CommonCfg,
    max_iter: usize,
}

impl FixedPointCfg {
    pub fn new(tolerance: f64, max_iter: usize) -> Result<Self, RootFindingError> {
        Ok(Self {
            common: CommonCfg::new(tolerance)?,
            max_iter: validate_max_iter(max_iter)?,
        })
    }

    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, RootFindingError> {
        self.max_iter = validate_max_iter(v)?;
        Ok(self)
    }
}
impl_common_cfg!(FixedPointCfg);
