//! Closeness configuration.

use serde::{Deserialize, Serialize};

/// Relative and absolute tolerances used by closeness checks.
///
/// Two values `expected` and `actual` are close when
/// `|expected - actual| <= atol + rtol * |actual|`. The relative term scales
/// by the actual value only, so the check is not symmetric in its operands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Relative tolerance, scaled by `|actual|`.
    pub rtol: f64,
    /// Absolute tolerance.
    pub atol: f64,
}

impl Tolerance {
    /// Default relative tolerance.
    pub const DEFAULT_RTOL: f64 = 1e-5;
    /// Default absolute tolerance.
    pub const DEFAULT_ATOL: f64 = 1e-3;

    /// Creates a tolerance from explicit bounds.
    pub const fn new(rtol: f64, atol: f64) -> Self {
        Self { rtol, atol }
    }

    /// Zero tolerance on both terms.
    pub const fn exact() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Replaces the relative tolerance.
    pub fn with_rtol(mut self, rtol: f64) -> Self {
        self.rtol = rtol;
        self
    }

    /// Replaces the absolute tolerance.
    pub fn with_atol(mut self, atol: f64) -> Self {
        self.atol = atol;
        self
    }

    /// Returns true when `actual` is within tolerance of `expected`.
    ///
    /// A NaN on either side makes the difference incomparable, which is
    /// treated as within tolerance.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn allows(&self, expected: f64, actual: f64) -> bool {
        !((expected - actual).abs() > self.atol + self.rtol * actual.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RTOL, Self::DEFAULT_ATOL)
    }
}
