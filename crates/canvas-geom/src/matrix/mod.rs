//! 2×3 affine transform (`x ↦ M x + t`).
//!
//! Coefficients follow the CSS `matrix(a, b, c, d, e, f)` convention:
//! `x' = a·x + c·y + e`, `y' = b·x + d·y + f`. Internally the linear part is a
//! `Matrix2` (`[[a, c], [b, d]]`) and the translation a `Vector2` (`[e, f]`).
//!
//! Composition order
//! - `a.multiply(b)` is `a × b`: applies `b` first, then `a`.
//! - `a.then(b)` reads left to right: applies `a`, then `b`.
//! - `translate`/`rotate`/`scale` append in reading order (`then`).
//!
//! Degenerate input
//! - `inverse()` of a singular matrix returns non-finite coefficients, which
//!   downstream code may test for. `try_inverse()` is the checked variant.

mod predicates;

use std::fmt;
use std::ops::Mul;

use nalgebra::{Matrix2, Matrix3, Vector2};
use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::point::Point;

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 6]", into = "[f64; 6]")]
pub struct Matrix {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Matrix {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self {
            m: Matrix2::new(a, c, b, d),
            t: Vector2::new(e, f),
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn translation(delta: Point) -> Self {
        Self {
            m: Matrix2::identity(),
            t: delta.to_vector(),
        }
    }

    /// Counter-clockwise rotation about the origin.
    #[inline]
    pub fn rotation(angle: Angle) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    #[inline]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    #[inline]
    pub fn scaling_uniform(s: f64) -> Self {
        Self::scaling(s, s)
    }

    #[inline]
    pub fn from_coeffs(c: [f64; 6]) -> Self {
        Self::new(c[0], c[1], c[2], c[3], c[4], c[5])
    }

    /// `[a, b, c, d, e, f]`.
    #[inline]
    pub fn coeffs(&self) -> [f64; 6] {
        [self.a(), self.b(), self.c(), self.d(), self.e(), self.f()]
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.m[(0, 0)]
    }
    #[inline]
    pub fn b(&self) -> f64 {
        self.m[(1, 0)]
    }
    #[inline]
    pub fn c(&self) -> f64 {
        self.m[(0, 1)]
    }
    #[inline]
    pub fn d(&self) -> f64 {
        self.m[(1, 1)]
    }
    #[inline]
    pub fn e(&self) -> f64 {
        self.t.x
    }
    #[inline]
    pub fn f(&self) -> f64 {
        self.t.y
    }

    /// `a·d − b·c`.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a() * self.d() - self.b() * self.c()
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    #[inline]
    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det != 0.0 && det.is_finite()
    }

    #[inline]
    pub fn transform(&self, p: Point) -> Point {
        (self.m * p.to_vector() + self.t).into()
    }

    /// Linear part only; displacement vectors ignore translation.
    #[inline]
    pub fn transform_vector(&self, v: Point) -> Point {
        (self.m * v.to_vector()).into()
    }

    /// `self × other`: applies `other` first, then `self`.
    #[inline]
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    /// Applies `self`, then `other`.
    #[inline]
    pub fn then(&self, other: &Matrix) -> Matrix {
        other.multiply(self)
    }

    pub fn translate(&self, delta: Point) -> Matrix {
        if delta == Point::zero() {
            return *self;
        }
        self.then(&Matrix::translation(delta))
    }

    pub fn rotate(&self, angle: Angle) -> Matrix {
        if angle.is_zero() {
            return *self;
        }
        self.then(&Matrix::rotation(angle))
    }

    pub fn scale(&self, sx: f64, sy: f64) -> Matrix {
        if sx == 1.0 && sy == 1.0 {
            return *self;
        }
        self.then(&Matrix::scaling(sx, sy))
    }

    #[inline]
    pub fn scale_uniform(&self, s: f64) -> Matrix {
        self.scale(s, s)
    }

    /// Rotation about `pivot` (global coordinates), appended after `self`.
    pub fn rotate_around(&self, angle: Angle, pivot: Point) -> Matrix {
        if angle.is_zero() {
            return *self;
        }
        if pivot == Point::zero() {
            return self.rotate(angle);
        }
        self.translate(-pivot).rotate(angle).translate(pivot)
    }

    /// Scaling about `pivot` (global coordinates), appended after `self`.
    pub fn scale_around(&self, sx: f64, sy: f64, pivot: Point) -> Matrix {
        if sx == 1.0 && sy == 1.0 {
            return *self;
        }
        if pivot == Point::zero() {
            return self.scale(sx, sy);
        }
        self.translate(-pivot).scale(sx, sy).translate(pivot)
    }

    /// Closed-form inverse via `det = a·d − b·c`.
    ///
    /// A zero determinant is not rejected: the result holds `±inf`/`NaN`.
    pub fn inverse(&self) -> Matrix {
        let (a, b, c, d) = (self.a(), self.b(), self.c(), self.d());
        let det = a * d - b * c;
        if det == 0.0 || !det.is_finite() {
            tracing::debug!(det, coeffs = ?self.coeffs(), "inverting degenerate matrix");
        }
        let minv = Matrix2::new(d / det, -c / det, -b / det, a / det);
        Matrix {
            m: minv,
            t: -(minv * self.t),
        }
    }

    /// Inverse map if the determinant is non-zero and finite.
    pub fn try_inverse(&self) -> Option<Matrix> {
        if self.is_invertible() {
            Some(self.inverse())
        } else {
            None
        }
    }

    /// 3×3 homogeneous form with bottom row `(0, 0, 1)`.
    pub fn to_homogeneous(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.a(), self.c(), self.e(), //
            self.b(), self.d(), self.f(), //
            0.0, 0.0, 1.0,
        )
    }

    /// Top two rows of a homogeneous matrix; the bottom row is ignored.
    pub fn from_homogeneous(h: &Matrix3<f64>) -> Matrix {
        Matrix::new(
            h[(0, 0)],
            h[(1, 0)],
            h[(0, 1)],
            h[(1, 1)],
            h[(0, 2)],
            h[(1, 2)],
        )
    }

    /// CSS `matrix(a, b, c, d, e, f)`.
    pub fn to_css(&self) -> String {
        let [a, b, c, d, e, f] = self.coeffs().map(css_number);
        format!("matrix({a}, {b}, {c}, {d}, {e}, {f})")
    }
}

/// `-0` prints as `0` in CSS output.
#[inline]
fn css_number(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f64; 6]> for Matrix {
    fn from(c: [f64; 6]) -> Self {
        Matrix::from_coeffs(c)
    }
}

impl From<Matrix> for [f64; 6] {
    fn from(m: Matrix) -> Self {
        m.coeffs()
    }
}

impl Mul for Matrix {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: Matrix) -> Matrix {
        self.multiply(&rhs)
    }
}

impl Mul<Point> for Matrix {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: Point) -> Point {
        self.transform(rhs)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
