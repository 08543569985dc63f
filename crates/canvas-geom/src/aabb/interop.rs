//! Plain interchange shapes used by the host widget layer.
//!
//! - `Size`: extent of a local rectangle (`Obb`, `Aabb::from_size`).
//! - `Rect`: `{left, top, width, height}`.
//! - `Bbox`: edge pairs `{x, x1, y, y1}` (left/right, top/bottom).
//!
//! Conversions to and from `Aabb` are exact for valid boxes.

use serde::{Deserialize, Serialize};

use super::Aabb;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub fn is_zero_area(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bbox {
    pub x: f64,
    pub x1: f64,
    pub y: f64,
    pub y1: f64,
}

impl Bbox {
    #[inline]
    pub const fn new(x: f64, x1: f64, y: f64, y1: f64) -> Self {
        Self { x, x1, y, y1 }
    }
}

impl Aabb {
    #[inline]
    pub fn from_rect(r: &Rect) -> Aabb {
        Aabb::from_ltwh(r.left, r.top, r.width, r.height)
    }

    #[inline]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.width(), self.height())
    }

    #[inline]
    pub fn from_bbox(b: &Bbox) -> Aabb {
        Aabb::new(b.x, b.y, b.x1, b.y1)
    }

    #[inline]
    pub fn to_bbox(&self) -> Bbox {
        Bbox::new(self.min_x, self.max_x, self.min_y, self.max_y)
    }

    /// `(0, 0)`–`(width, height)`.
    #[inline]
    pub fn from_size(s: Size) -> Aabb {
        Aabb::new(0.0, 0.0, s.width, s.height)
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

impl From<Rect> for Aabb {
    fn from(r: Rect) -> Self {
        Aabb::from_rect(&r)
    }
}

impl From<Aabb> for Rect {
    fn from(b: Aabb) -> Self {
        b.to_rect()
    }
}

impl From<Bbox> for Aabb {
    fn from(b: Bbox) -> Self {
        Aabb::from_bbox(&b)
    }
}

impl From<Aabb> for Bbox {
    fn from(b: Aabb) -> Self {
        b.to_bbox()
    }
}
