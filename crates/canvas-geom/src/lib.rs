//! 2D geometry primitives for canvas layout and hit-testing.
//!
//! Layers (leaves first)
//! - `point`: `Point` vector/position arithmetic, `NonZeroPoint` capability.
//! - `angle`: `Angle` tagged scalar (radians inside).
//! - `matrix`: `Matrix` 2×3 affine transform and transform-kind predicates.
//! - `aabb`: `Aabb` axis-aligned bounds plus `Rect`/`Bbox`/`Size` interchange shapes.
//! - `obb`: `Obb` oriented box, the local↔global coordinate mapper.
//!
//! Conventions
//! - Every type is a `Copy` value; operations return new values. The only
//!   mutating entry points are the explicit `*_in_place` methods.
//! - Degenerate input (zero vectors, singular matrices, empty boxes) never
//!   panics. Non-finite results propagate; checked variants return `Option`.
//! - `precision` arguments are decimal digits: a difference counts when it
//!   survives rounding at `10^-precision`.

pub mod aabb;
pub mod angle;
pub mod cfg;
pub mod matrix;
pub mod obb;
pub mod point;
mod util;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use aabb::{Aabb, Bbox, Rect, Size};
pub use angle::Angle;
pub use cfg::GeomCfg;
pub use matrix::Matrix;
pub use obb::{Obb, ObbDelta};
pub use point::{NonZeroPoint, Point};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::aabb::{Aabb, Bbox, Rect, Size};
    pub use crate::angle::Angle;
    pub use crate::cfg::GeomCfg;
    pub use crate::matrix::Matrix;
    pub use crate::obb::{Obb, ObbDelta};
    pub use crate::point::{NonZeroPoint, Point};
}
