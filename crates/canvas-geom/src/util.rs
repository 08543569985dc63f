//! Decimal rounding helpers shared by the value types.

#[inline]
fn scale_of(precision: i32) -> f64 {
    10f64.powi(precision)
}

/// Round half away from zero at `10^-precision` resolution.
#[inline]
pub(crate) fn round_to(v: f64, precision: i32) -> f64 {
    let s = scale_of(precision);
    (v * s).round() / s
}

/// Floor at `10^-precision` resolution.
#[inline]
pub(crate) fn floor_to(v: f64, precision: i32) -> f64 {
    let s = scale_of(precision);
    (v * s).floor() / s
}

/// Ceil at `10^-precision` resolution.
#[inline]
pub(crate) fn ceil_to(v: f64, precision: i32) -> f64 {
    let s = scale_of(precision);
    (v * s).ceil() / s
}

/// Smallest difference that survives rounding at `precision`: `10^-precision`.
#[inline]
pub(crate) fn tolerance(precision: i32) -> f64 {
    10f64.powi(-precision)
}

/// `|a - b| < 10^-precision`.
#[inline]
pub(crate) fn almost_eq(a: f64, b: f64, precision: i32) -> bool {
    (a - b).abs() < tolerance(precision)
}
