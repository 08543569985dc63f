//! Tolerance defaults.
//!
//! Policy
//! - Predicates take an explicit `precision` (decimal digits) so call sites
//!   stay honest about how exact a comparison is.
//! - `GeomCfg` bundles the defaults for callers that want one knob.

use crate::point::Point;
use crate::util;

/// Default decimal precision for transform-kind predicates.
pub const DEFAULT_PRECISION: i32 = 5;
/// Threshold on `length_squared` below which a vector counts as zero.
pub const NON_ZERO_EPS: f64 = 1e-5;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Decimal digits kept when comparing coefficients.
    pub precision: i32,
    /// `length_squared` threshold for `Point::is_non_zero_eps`.
    pub eps_non_zero: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            eps_non_zero: NON_ZERO_EPS,
        }
    }
}

impl GeomCfg {
    /// Smallest difference that survives rounding: `10^-precision`.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        util::tolerance(self.precision)
    }

    /// `Point::is_non_zero_eps` at `eps_non_zero`.
    #[inline]
    pub fn is_non_zero(&self, p: Point) -> bool {
        p.is_non_zero_eps(self.eps_non_zero)
    }

    #[inline]
    pub fn with_eps_non_zero(self, eps_non_zero: f64) -> Self {
        Self {
            eps_non_zero,
            ..self
        }
    }

    #[inline]
    pub fn with_precision(self, precision: i32) -> Self {
        Self { precision, ..self }
    }
}
