//! Tagged angle scalar.
//!
//! `Angle` stores radians. Degrees exist only at the construction/accessor
//! boundary (`from_degrees`, `degrees`), so a degree value can never be added
//! to a radian value by accident. There is no `From<f64>`.

use std::f64::consts::TAU;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

const DEGREES_PER_TURN: f64 = 360.0;

/// Reduce `v` into `[0, period)`.
///
/// Handles negative input; if `v % period + period` rounds up to exactly
/// `period` the result is 0.
#[inline]
pub(crate) fn normalize_period(v: f64, period: f64) -> f64 {
    let a = v % period;
    let a = if a >= 0.0 { a } else { a + period };
    if a >= period {
        0.0
    } else {
        a
    }
}

/// Angle in radians. Values outside `[0, 2π)` are valid until normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    #[inline]
    pub fn half_turn() -> Self {
        Self(std::f64::consts::PI)
    }

    #[inline]
    pub fn full_turn() -> Self {
        Self(TAU)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Canonical representative in `[0, 2π)`.
    #[inline]
    pub fn normalize(self) -> Self {
        Self(normalize_period(self.0, TAU))
    }

    /// Degrees reduced into `[0, 360)`.
    #[inline]
    pub fn normalized_degrees(self) -> f64 {
        normalize_period(self.degrees(), DEGREES_PER_TURN)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.0.sin_cos()
    }
}

/// Sum, normalized into `[0, 2π)`.
impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0).normalize()
    }
}

/// Difference, normalized into `[0, 2π)`.
impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0).normalize()
    }
}

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}
