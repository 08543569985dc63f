//! Axis-aligned bounding boxes in global space.
//!
//! Assumptions and conventions
//! - Stored as `(min_x, min_y, max_x, max_y)`.
//! - The empty sentinel is `(+inf, +inf, -inf, -inf)`; it is both `is_empty`
//!   and not `is_valid`, and it is the identity of `union`.
//! - `is_empty` (`min >= max` on some axis) and `is_valid` (`min <= max` on both)
//!   overlap for zero-width boxes.
//! - `PartialEq` treats any two invalid boxes as equal.
//! - `width`/`height` clamp to 0.

mod interop;

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::point::Point;
use crate::util::{ceil_to, floor_to};

pub use interop::{Bbox, Rect, Size};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Aabb {
    #[inline]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    #[inline]
    pub const fn empty() -> Self {
        Self::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        )
    }

    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Aabb {
        let mut out = Aabb::empty();
        for p in points {
            out.add_point_in_place(p);
        }
        out
    }

    #[inline]
    pub fn from_point(p: Point) -> Aabb {
        Aabb::new(p.x, p.y, p.x, p.y)
    }

    #[inline]
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Aabb {
        Aabb::new(left, top, right, bottom)
    }

    #[inline]
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Aabb {
        Aabb::new(left, top, left + width, top + height)
    }

    /// `[min_x, min_y, max_x, max_y]` snapshot.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }

    #[inline]
    pub fn from_array(a: [f64; 4]) -> Aabb {
        Aabb::new(a[0], a[1], a[2], a[3])
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Exact coordinates, except that two invalid boxes are always equal.
    pub fn equals(&self, other: &Aabb) -> bool {
        if !self.is_valid() && !other.is_valid() {
            return true;
        }
        self.to_array() == other.to_array()
    }

    #[inline]
    pub fn add_point(&self, p: Point) -> Aabb {
        let mut out = *self;
        out.add_point_in_place(p);
        out
    }

    #[inline]
    pub fn add_point_in_place(&mut self, p: Point) -> &mut Self {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
        self
    }

    /// Fold of `union_with` starting from `empty()`.
    pub fn union<'a, I: IntoIterator<Item = &'a Aabb>>(boxes: I) -> Aabb {
        boxes
            .into_iter()
            .fold(Aabb::empty(), |acc, b| acc.union_with(b))
    }

    #[inline]
    pub fn union_with(&self, other: &Aabb) -> Aabb {
        Aabb::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Component-wise max of mins and min of maxes; `empty()` for no boxes.
    pub fn intersection<'a, I: IntoIterator<Item = &'a Aabb>>(boxes: I) -> Aabb {
        let mut iter = boxes.into_iter();
        match iter.next() {
            Some(first) => iter.fold(*first, |acc, b| acc.intersection_with(b)),
            None => Aabb::empty(),
        }
    }

    #[inline]
    pub fn intersection_with(&self, other: &Aabb) -> Aabb {
        Aabb::new(
            self.min_x.max(other.min_x),
            self.min_y.max(other.min_y),
            self.max_x.min(other.max_x),
            self.max_y.min(other.max_y),
        )
    }

    /// Ranges overlap on both axes; touching edges count.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// Strict containment; points on the boundary are outside.
    #[inline]
    pub fn includes_point(&self, p: Point) -> bool {
        self.max_x > p.x && self.max_y > p.y && self.min_x < p.x && self.min_y < p.y
    }

    /// Inclusive containment of `child`.
    #[inline]
    pub fn includes(&self, child: &Aabb) -> bool {
        self.min_x <= child.min_x
            && self.min_y <= child.min_y
            && self.max_x >= child.max_x
            && self.max_y >= child.max_y
    }

    /// Outward rounding (floor mins, ceil maxes); never shrinks.
    pub fn round(&self, precision: i32) -> Aabb {
        Aabb::new(
            floor_to(self.min_x, precision),
            floor_to(self.min_y, precision),
            ceil_to(self.max_x, precision),
            ceil_to(self.max_y, precision),
        )
    }

    /// Grow every side by `amount`; negative shrinks.
    #[inline]
    pub fn expand(&self, amount: f64) -> Aabb {
        Aabb::new(
            self.min_x - amount,
            self.min_y - amount,
            self.max_x + amount,
            self.max_y + amount,
        )
    }

    #[inline]
    pub fn shrink(&self, amount: f64) -> Aabb {
        self.expand(-amount)
    }

    #[inline]
    pub fn translate(&self, delta: Point) -> Aabb {
        Aabb::new(
            self.min_x + delta.x,
            self.min_y + delta.y,
            self.max_x + delta.x,
            self.max_y + delta.y,
        )
    }

    /// Uniform scaling about the origin.
    #[inline]
    pub fn scale(&self, factor: f64) -> Aabb {
        self.scale_around(factor, Point::zero())
    }

    /// Uniform scaling about `origin`.
    pub fn scale_around(&self, factor: f64, origin: Point) -> Aabb {
        Aabb::new(
            origin.x + (self.min_x - origin.x) * factor,
            origin.y + (self.min_y - origin.y) * factor,
            origin.x + (self.max_x - origin.x) * factor,
            origin.y + (self.max_y - origin.y) * factor,
        )
    }

    /// `[(min_x, min_y), (max_x, min_y), (min_x, max_y), (max_x, max_y)]`.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.min_x, self.max_y),
            Point::new(self.max_x, self.max_y),
        ]
    }

    /// Bounding box of the transformed corners (loose for rotation/skew).
    pub fn transform(&self, m: &Matrix) -> Aabb {
        Aabb::from_points(self.corners().map(|p| m.transform(p)))
    }

    /// Bilinear position for normalized `[0, 1]` coordinates.
    #[inline]
    pub fn point_at(&self, normalized: Point) -> Point {
        Point::new(
            self.min_x + (self.max_x - self.min_x) * normalized.x,
            self.min_y + (self.max_y - self.min_y) * normalized.y,
        )
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    #[inline]
    pub fn min(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    #[inline]
    pub fn max(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        (self.max_x - self.min_x).max(0.0)
    }

    #[inline]
    pub fn height(&self) -> f64 {
        (self.max_y - self.min_y).max(0.0)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Aabb {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl From<[f64; 4]> for Aabb {
    fn from(a: [f64; 4]) -> Self {
        Aabb::from_array(a)
    }
}

impl From<Aabb> for [f64; 4] {
    fn from(b: Aabb) -> Self {
        b.to_array()
    }
}
