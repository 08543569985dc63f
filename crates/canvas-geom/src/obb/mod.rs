//! Oriented bounding box: a local rectangle embedded into global space.
//!
//! Model
//! - `size` is the local extent `(0, 0)`–`(width, height)`.
//! - `space` maps local → global. Global → local goes through
//!   `space.inverse()`, so a singular space yields non-finite local points.
//! - Conversions between two local frames always pass through global space
//!   (`map_to`).
//!
//! Padding (`expand`/`shrink`) grows the rectangle along its own rotated axes,
//! not the global ones.

use serde::{Deserialize, Serialize};

use crate::aabb::{Aabb, Size};
use crate::cfg::GeomCfg;
use crate::matrix::Matrix;
use crate::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obb {
    pub size: Size,
    pub space: Matrix,
}

/// Which kinds of transform separate two boxes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObbDelta {
    pub translation: bool,
    pub rotation: bool,
    pub scaling: bool,
}

impl ObbDelta {
    #[inline]
    pub fn is_unchanged(&self) -> bool {
        !(self.translation || self.rotation || self.scaling)
    }
}

impl Obb {
    #[inline]
    pub fn new(size: Size, space: Matrix) -> Self {
        Self { size, space }
    }

    /// Zero-size box at the global origin; the "no parent" frame.
    #[inline]
    pub fn root() -> Self {
        Self::new(Size::zero(), Matrix::identity())
    }

    /// Axis-aligned box covering `aabb`.
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self::new(aabb.size(), Matrix::translation(aabb.min()))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    #[inline]
    pub fn with_size(&self, size: Size) -> Obb {
        Obb::new(size, self.space)
    }

    #[inline]
    pub fn map_to_global(&self, local: Point) -> Point {
        self.space.transform(local)
    }

    #[inline]
    pub fn map_to_local(&self, global: Point) -> Point {
        self.space.inverse().transform(global)
    }

    /// `point` in this box's frame, expressed in `other`'s frame.
    #[inline]
    pub fn map_to(&self, other: &Obb, point: Point) -> Point {
        other.map_to_local(self.map_to_global(point))
    }

    #[inline]
    pub fn map_origin_to_global(&self) -> Point {
        self.map_to_global(Point::zero())
    }

    /// Local origin in `parent`'s frame, or in global space without a parent.
    pub fn map_origin_to(&self, parent: Option<&Obb>) -> Point {
        match parent {
            Some(p) => self.map_to(p, Point::zero()),
            None => self.map_origin_to_global(),
        }
    }

    #[inline]
    pub fn global_center(&self) -> Point {
        self.space
            .transform(Point::new(self.size.width / 2.0, self.size.height / 2.0))
    }

    /// Inclusive on all four edges, tested in local space.
    pub fn includes_point(&self, global: Point) -> bool {
        let p = self.map_to_local(global);
        p.x >= 0.0 && p.x <= self.size.width && p.y >= 0.0 && p.y <= self.size.height
    }

    #[inline]
    pub fn translate(&self, delta: Point) -> Obb {
        Obb::new(self.size, self.space.translate(delta))
    }

    /// Re-embed: apply `m` after the current space.
    #[inline]
    pub fn transform(&self, m: &Matrix) -> Obb {
        Obb::new(self.size, self.space.then(m))
    }

    /// Grow by `padding` on every side along the box's own axes.
    ///
    /// The new local origin lands where the old local `(-padding, -padding)`
    /// was in global space.
    pub fn expand(&self, padding: f64) -> Obb {
        let origin = self.map_origin_to_global();
        let corner = self.map_to_global(Point::new(-padding, -padding));
        let size = Size::new(
            self.size.width + 2.0 * padding,
            self.size.height + 2.0 * padding,
        );
        Obb::new(size, self.space.translate(corner - origin))
    }

    #[inline]
    pub fn shrink(&self, padding: f64) -> Obb {
        self.expand(-padding)
    }

    /// Local corners `(0,0)`, `(0,h)`, `(w,0)`, `(w,h)` in global space.
    pub fn corners(&self) -> [Point; 4] {
        let (w, h) = (self.size.width, self.size.height);
        [
            Point::new(0.0, 0.0),
            Point::new(0.0, h),
            Point::new(w, 0.0),
            Point::new(w, h),
        ]
        .map(|p| self.map_to_global(p))
    }

    /// Global bounds of the corners (loose for rotated boxes).
    #[inline]
    pub fn to_aabb(&self) -> Aabb {
        Aabb::from_points(self.corners())
    }

    #[inline]
    pub fn is_translation_of(&self, other: &Obb) -> bool {
        self.space.is_translation_of(&other.space)
    }

    #[inline]
    pub fn has_translation(&self, other: &Obb, precision: i32) -> bool {
        self.space.has_translation(&other.space, precision)
    }

    #[inline]
    pub fn has_rotation(&self, other: &Obb, precision: i32) -> bool {
        self.space.has_rotation(&other.space, precision)
    }

    /// Matrix scaling or any change of `size`.
    #[inline]
    pub fn has_scaling(&self, other: &Obb, precision: i32) -> bool {
        self.size != other.size || self.space.has_scaling(&other.space, precision)
    }

    /// All transform-kind predicates at `cfg.precision`.
    pub fn delta(&self, other: &Obb, cfg: GeomCfg) -> ObbDelta {
        ObbDelta {
            translation: self.has_translation(other, cfg.precision),
            rotation: self.has_rotation(other, cfg.precision),
            scaling: self.has_scaling(other, cfg.precision),
        }
    }

    /// Map a local point proportionally into `next`'s local rectangle.
    ///
    /// Zero extents on either box are replaced by 1 for that axis.
    pub fn scale_point(&self, point: Point, next: &Obb) -> Point {
        let extent = |v: f64| if v == 0.0 { 1.0 } else { v };
        let (w0, h0) = (extent(self.size.width), extent(self.size.height));
        let (w1, h1) = (extent(next.size.width), extent(next.size.height));
        if self.size.is_zero_area() || next.size.is_zero_area() {
            tracing::trace!(
                prev = ?self.size,
                next = ?next.size,
                "scale_point: zero extent replaced by 1"
            );
        }
        Point::new(point.x * w1 / w0, point.y * h1 / h0)
    }

    /// Exact size and space equality.
    #[inline]
    pub fn equals(&self, other: &Obb) -> bool {
        self == other
    }
}

impl Default for Obb {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
mod tests;
