//! 2D point/vector value.
//!
//! - `Point` doubles as position and displacement.
//! - Free-standing operations are methods returning new values; the
//!   `*_in_place` variants mutate `self` and return it for chaining in hot loops.
//! - `normalize` divides by the length unchecked. Callers test `is_non_zero`
//!   first, or go through `NonZeroPoint` / `try_normalize`.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::cfg::{GeomCfg, NON_ZERO_EPS};
use crate::util::{almost_eq, round_to};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self - other).length()
    }

    #[inline]
    pub fn distance_squared(self, other: Point) -> f64 {
        (self - other).length_squared()
    }

    /// Component-wise product.
    #[inline]
    pub fn component_mul(self, other: Point) -> Point {
        Point::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise quotient.
    #[inline]
    pub fn component_div(self, other: Point) -> Point {
        Point::new(self.x / other.x, self.y / other.y)
    }

    #[inline]
    pub fn scale(self, sx: f64, sy: f64) -> Point {
        Point::new(self.x * sx, self.y * sy)
    }

    #[inline]
    pub fn scale_uniform(self, s: f64) -> Point {
        self.scale(s, s)
    }

    /// Unit vector. Zero input yields non-finite components.
    #[inline]
    pub fn normalize(self) -> Point {
        self / self.length()
    }

    /// Unit vector, or `None` if `self` is (near) zero.
    #[inline]
    pub fn try_normalize(self) -> Option<Point> {
        NonZeroPoint::new(self, NON_ZERO_EPS).map(NonZeroPoint::normalize)
    }

    /// `try_normalize` at `cfg.eps_non_zero`.
    #[inline]
    pub fn try_normalize_cfg(self, cfg: &GeomCfg) -> Option<Point> {
        NonZeroPoint::new(self, cfg.eps_non_zero).map(NonZeroPoint::normalize)
    }

    #[inline]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product; positive when `other` is
    /// counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Rotated by +90°.
    #[inline]
    pub fn perp(self) -> Point {
        Point::new(-self.y, self.x)
    }

    /// Rotated about the origin, counter-clockwise for positive angles.
    #[inline]
    pub fn rotate(self, angle: Angle) -> Point {
        let (s, c) = angle.sin_cos();
        Point::new(c * self.x - s * self.y, s * self.x + c * self.y)
    }

    /// Unclamped linear interpolation; `t` outside `[0, 1]` extrapolates.
    #[inline]
    pub fn lerp(a: Point, b: Point, t: f64) -> Point {
        Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }

    #[inline]
    pub fn is_non_zero(self) -> bool {
        self.is_non_zero_eps(NON_ZERO_EPS)
    }

    #[inline]
    pub fn is_non_zero_eps(self, eps: f64) -> bool {
        self.length_squared() > eps
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise `|Δ| < 10^-precision`.
    #[inline]
    pub fn almost_equals(self, other: Point, precision: i32) -> bool {
        almost_eq(self.x, other.x, precision) && almost_eq(self.y, other.y, precision)
    }

    /// Round half away from zero at `10^-precision`.
    #[inline]
    pub fn round(self, precision: i32) -> Point {
        Point::new(round_to(self.x, precision), round_to(self.y, precision))
    }

    /// Normalized angle from +X to `self`, via `atan2`.
    #[inline]
    pub fn azimuth(self) -> Angle {
        Angle::from_radians(self.y.atan2(self.x)).normalize()
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    // In-place variants.

    #[inline]
    pub fn add_in_place(&mut self, other: Point) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    #[inline]
    pub fn sub_in_place(&mut self, other: Point) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    #[inline]
    pub fn component_mul_in_place(&mut self, other: Point) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self
    }

    #[inline]
    pub fn component_div_in_place(&mut self, other: Point) -> &mut Self {
        self.x /= other.x;
        self.y /= other.y;
        self
    }

    #[inline]
    pub fn neg_in_place(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    #[inline]
    pub fn scale_in_place(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.x *= sx;
        self.y *= sy;
        self
    }

    #[inline]
    pub fn normalize_in_place(&mut self) -> &mut Self {
        let len = self.length();
        self.x /= len;
        self.y /= len;
        self
    }

    #[inline]
    pub fn round_in_place(&mut self, precision: i32) -> &mut Self {
        self.x = round_to(self.x, precision);
        self.y = round_to(self.y, precision);
        self
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        self.scale_uniform(rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Point) {
        self.add_in_place(rhs);
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Point) {
        self.sub_in_place(rhs);
    }
}

impl MulAssign<f64> for Point {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_in_place(rhs, rhs);
    }
}

impl DivAssign<f64> for Point {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl From<Point2<f64>> for Point {
    #[inline]
    fn from(p: Point2<f64>) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for Point2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

/// A vector known to be longer than a threshold.
///
/// Only `NonZeroPoint::new` attaches the capability, so `normalize` here is
/// total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NonZeroPoint(Point);

impl NonZeroPoint {
    /// `None` unless `length_squared > eps`.
    #[inline]
    pub fn new(p: Point, eps: f64) -> Option<Self> {
        if p.is_non_zero_eps(eps) {
            Some(Self(p))
        } else {
            None
        }
    }

    #[inline]
    pub fn get(self) -> Point {
        self.0
    }

    #[inline]
    pub fn normalize(self) -> Point {
        self.0.normalize()
    }
}
