//! Transform-kind detection between two matrices.
//!
//! Each predicate answers "does `other` differ from `self` by this kind of
//! transform?" at a decimal `precision`. Rotation and scaling are read off
//! the rows `(a, c)` and `(b, d)` of the linear part, so each predicate is
//! blind to the other two kinds as long as any non-uniform scale is applied
//! after the rotation (`rotate(..).scale(sx, sy)`). A non-uniform scale
//! applied before a rotation tilts the rows by different amounts and
//! reports both rotation and scaling.

use super::Matrix;
use crate::util::{round_to, tolerance};

/// Tangent of the angle from row `u` to row `v` (`cross / dot`).
///
/// `None` when both vanish (a zero row carries no direction).
#[inline]
fn row_tangent(u: (f64, f64), v: (f64, f64)) -> Option<f64> {
    let cross = u.0 * v.1 - u.1 * v.0;
    let dot = u.0 * v.0 + u.1 * v.1;
    if cross == 0.0 && dot == 0.0 {
        None
    } else {
        Some(cross / dot)
    }
}

impl Matrix {
    #[inline]
    fn rows(&self) -> [(f64, f64); 2] {
        [(self.a(), self.c()), (self.b(), self.d())]
    }

    /// Linear parts are exactly equal: `other` is `self` plus a translation.
    #[inline]
    pub fn is_translation_of(&self, other: &Matrix) -> bool {
        self.m == other.m
    }

    /// Translation components differ after rounding at `precision`.
    pub fn has_translation(&self, other: &Matrix, precision: i32) -> bool {
        round_to(self.e(), precision) != round_to(other.e(), precision)
            || round_to(self.f(), precision) != round_to(other.f(), precision)
    }

    /// Relative rotation between the linear parts, independent of scaling.
    ///
    /// A quarter turn gives an infinite tangent and counts as rotation.
    /// A half turn gives a zero tangent (`cross = 0`, `dot < 0`) and does
    /// not.
    pub fn has_rotation(&self, other: &Matrix, precision: i32) -> bool {
        if self.is_translation_of(other) {
            return false;
        }
        let [r1, r2] = self.rows();
        let [o1, o2] = other.rows();
        match row_tangent(r1, o1).or_else(|| row_tangent(r2, o2)) {
            Some(tan) => round_to(tan, precision) != 0.0,
            None => false,
        }
    }

    /// Row length ratio (`a²+c²`, `b²+d²`) differs from 1 by more than
    /// `10^-precision`.
    ///
    /// Row lengths are rotation-invariant only for uniform scale or scale
    /// applied after rotation; see the module docs.
    pub fn has_scaling(&self, other: &Matrix, precision: i32) -> bool {
        let tol = tolerance(precision);
        let [r1, r2] = self.rows();
        let [o1, o2] = other.rows();
        let sq = |r: (f64, f64)| r.0 * r.0 + r.1 * r.1;
        let k1 = sq(r1) / sq(o1);
        let k2 = sq(r2) / sq(o2);
        (k1 - 1.0).abs() > tol || (k2 - 1.0).abs() > tol
    }
}
