//! Coordinate-mapping tests: nested frames, padding along rotated axes,
//! proportional rescaling, and transform-kind deltas.

use super::*;
use crate::angle::Angle;
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

fn close(a: Point, b: Point) -> bool {
    a.almost_equals(b, 9)
}

fn aabb_close(a: &Aabb, b: &Aabb, eps: f64) -> bool {
    a.to_array()
        .iter()
        .zip(b.to_array().iter())
        .all(|(x, y)| (x - y).abs() < eps)
}

fn quarter() -> Angle {
    Angle::from_radians(FRAC_PI_2)
}

#[test]
fn identity_box_projects_to_its_rect() {
    let o = Obb::new(Size::new(100.0, 200.0), Matrix::identity());
    assert_eq!(o.to_aabb(), Aabb::new(0.0, 0.0, 100.0, 200.0));
    assert_eq!(o.global_center(), Point::new(50.0, 100.0));
    assert_eq!(o.width(), 100.0);
    assert_eq!(o.height(), 200.0);
}

#[test]
fn scale_point_is_proportional() {
    let prev = Obb::new(Size::new(100.0, 200.0), Matrix::identity());
    let next = Obb::new(Size::new(200.0, 400.0), Matrix::translation(Point::new(9.0, 9.0)));
    assert_eq!(
        prev.scale_point(Point::new(50.0, 100.0), &next),
        Point::new(100.0, 200.0)
    );
}

#[test]
fn scale_point_substitutes_one_for_zero_extent() {
    let zero = Obb::root();
    let next = Obb::new(Size::new(200.0, 400.0), Matrix::identity());
    assert_eq!(zero.scale_point(Point::new(1.0, 1.0), &next), Point::new(200.0, 400.0));
    let prev = Obb::new(Size::new(100.0, 200.0), Matrix::identity());
    assert_eq!(prev.scale_point(Point::new(50.0, 100.0), &zero), Point::new(0.5, 0.5));
    // One axis collapsed, the other scales normally.
    let flat = Obb::new(Size::new(0.0, 50.0), Matrix::identity());
    assert_eq!(flat.scale_point(Point::new(3.0, 25.0), &next), Point::new(600.0, 200.0));
    assert!(zero.scale_point(Point::new(1.0, 1.0), &zero).is_finite());
}

#[test]
fn local_global_round_trip() {
    let o = Obb::new(
        Size::new(10.0, 20.0),
        Matrix::identity()
            .scale(2.0, 3.0)
            .rotate(Angle::from_radians(0.7))
            .translate(Point::new(-4.0, 11.0)),
    );
    let p = Point::new(3.5, -8.25);
    assert!(close(o.map_to_local(o.map_to_global(p)), p));
    assert!(close(o.map_to_global(o.map_to_local(p)), p));
}

#[test]
fn map_between_frames_goes_through_global() {
    let a = Obb::new(Size::new(1.0, 1.0), Matrix::translation(Point::new(10.0, 0.0)));
    let b = Obb::new(Size::new(1.0, 1.0), Matrix::rotation(quarter()));
    assert!(close(a.map_to(&b, Point::new(1.0, 0.0)), Point::new(0.0, -11.0)));
    assert!(close(b.map_to(&a, a.map_to(&b, Point::new(1.0, 0.0))), Point::new(1.0, 0.0)));
}

#[test]
fn nested_origin_relative_to_parent() {
    let parent = Obb::new(
        Size::new(300.0, 300.0),
        Matrix::rotation(quarter()).translate(Point::new(100.0, 50.0)),
    );
    let child = Obb::new(
        Size::new(10.0, 10.0),
        Matrix::translation(Point::new(10.0, 20.0)).then(&parent.space),
    );
    assert!(close(child.map_origin_to(Some(&parent)), Point::new(10.0, 20.0)));
    assert!(close(child.map_origin_to(None), Point::new(80.0, 60.0)));
    assert!(close(child.map_origin_to(Some(&Obb::root())), Point::new(80.0, 60.0)));
    assert!(close(child.map_origin_to_global(), Point::new(80.0, 60.0)));
}

#[test]
fn includes_point_in_local_space() {
    let o = Obb::new(Size::new(10.0, 10.0), Matrix::identity());
    assert!(o.includes_point(Point::new(0.0, 0.0)));
    assert!(o.includes_point(Point::new(10.0, 10.0)));
    assert!(!o.includes_point(Point::new(10.01, 5.0)));

    let diamond = Obb::new(
        Size::new(10.0, 10.0),
        Matrix::rotation(Angle::from_radians(FRAC_PI_4)),
    );
    assert!(diamond.includes_point(Point::new(0.0, 5.0)));
    assert!(!diamond.includes_point(Point::new(5.0, 0.0)));
}

#[test]
fn singular_space_contains_nothing() {
    let flat = Obb::new(Size::new(10.0, 10.0), Matrix::scaling(0.0, 1.0));
    assert!(!flat.map_to_local(Point::new(1.0, 1.0)).is_finite());
    assert!(!flat.includes_point(Point::new(0.0, 1.0)));
}

#[test]
fn expand_follows_rotated_axes() {
    let o = Obb::new(
        Size::new(10.0, 20.0),
        Matrix::rotation(quarter()).translate(Point::new(100.0, 0.0)),
    );
    assert!(aabb_close(&o.to_aabb(), &Aabb::new(80.0, 0.0, 100.0, 10.0), 1e-9));
    let e = o.expand(5.0);
    assert_eq!(e.size, Size::new(20.0, 30.0));
    assert!(close(e.map_origin_to_global(), Point::new(105.0, -5.0)));
    assert!(aabb_close(&e.to_aabb(), &Aabb::new(75.0, -5.0, 105.0, 15.0), 1e-9));
    assert!(o.has_scaling(&e, 5));
    assert!(!o.has_rotation(&e, 5));
}

#[test]
fn expand_on_scaled_space_pads_in_local_units() {
    let o = Obb::new(Size::new(10.0, 10.0), Matrix::scaling(2.0, 2.0));
    let e = o.expand(1.0);
    assert!(aabb_close(&e.to_aabb(), &Aabb::new(-2.0, -2.0, 22.0, 22.0), 1e-9));
    assert!(aabb_close(&e.shrink(1.0).to_aabb(), &o.to_aabb(), 1e-9));
}

#[test]
fn translate_and_transform() {
    let o = Obb::new(Size::new(4.0, 4.0), Matrix::rotation(quarter()));
    let t = o.translate(Point::new(5.0, 5.0));
    assert_eq!(t.size, o.size);
    assert!(close(t.map_origin_to_global(), Point::new(5.0, 5.0)));
    assert!(t.is_translation_of(&o));
    let moved = o.transform(&Matrix::translation(Point::new(5.0, 5.0)));
    assert_eq!(moved, t);
}

#[test]
fn transform_kind_predicates() {
    let base = Obb::new(Size::new(10.0, 10.0), Matrix::translation(Point::new(1.0, 2.0)));
    let moved = base.translate(Point::new(3.0, 0.0));
    assert!(base.is_translation_of(&moved));
    assert!(base.has_translation(&moved, 5));
    assert!(!base.has_rotation(&moved, 5));
    assert!(!base.has_scaling(&moved, 5));

    let resized = base.with_size(Size::new(12.0, 10.0));
    assert!(base.is_translation_of(&resized));
    assert!(base.has_scaling(&resized, 5));
    assert!(!base.has_translation(&resized, 5));

    let turned = Obb::new(base.size, base.space.rotate(Angle::from_radians(0.2)));
    let d = base.delta(&turned, GeomCfg::default());
    assert!(d.rotation);
    assert!(!d.scaling);
    assert!(base.delta(&base, GeomCfg::default()).is_unchanged());
    assert_eq!(
        base.delta(&resized, GeomCfg::default()),
        ObbDelta {
            translation: false,
            rotation: false,
            scaling: true,
        }
    );
}

#[test]
fn equality_root_and_default() {
    let a = Obb::new(Size::new(1.0, 2.0), Matrix::translation(Point::new(3.0, 4.0)));
    assert!(a.equals(&a));
    assert!(!a.equals(&a.with_size(Size::new(1.0, 3.0))));
    assert!(!a.equals(&a.translate(Point::new(0.0, 1.0))));
    assert_eq!(Obb::default(), Obb::root());
    assert_eq!(Obb::root().size, Size::zero());
    assert!(Obb::root().space.is_identity());
}

#[test]
fn from_aabb_round_trips() {
    let b = Aabb::new(1.0, 2.0, 5.0, 10.0);
    let o = Obb::from_aabb(&b);
    assert_eq!(o.to_aabb(), b);
    assert_eq!(o.map_origin_to_global(), b.min());
}

#[test]
fn serde_snapshot() {
    let o = Obb::new(Size::new(2.0, 3.0), Matrix::translation(Point::new(1.0, -1.0)));
    let json = serde_json::to_string(&o).unwrap();
    assert_eq!(
        json,
        r#"{"size":{"width":2.0,"height":3.0},"space":[1.0,0.0,0.0,1.0,1.0,-1.0]}"#
    );
    let back: Obb = serde_json::from_str(&json).unwrap();
    assert_eq!(back, o);
}

fn arb_obb() -> impl Strategy<Value = Obb> {
    (
        1.0f64..500.0,
        1.0f64..500.0,
        0.1f64..10.0,
        0.1f64..10.0,
        -3.2f64..3.2,
        -1e3f64..1e3,
        -1e3f64..1e3,
    )
        .prop_map(|(w, h, sx, sy, th, tx, ty)| {
            Obb::new(
                Size::new(w, h),
                Matrix::identity()
                    .scale(sx, sy)
                    .rotate(Angle::from_radians(th))
                    .translate(Point::new(tx, ty)),
            )
        })
}

proptest! {
    #[test]
    fn padding_round_trips(o in arb_obb(), p in -0.5f64..50.0) {
        let back = o.expand(p).shrink(p);
        prop_assert!(aabb_close(&back.to_aabb(), &o.to_aabb(), 1e-6));
        prop_assert!((back.size.width - o.size.width).abs() < 1e-9);
        prop_assert!((back.size.height - o.size.height).abs() < 1e-9);
    }

    #[test]
    fn center_is_inside(o in arb_obb()) {
        prop_assert!(o.includes_point(o.global_center()));
    }
}
