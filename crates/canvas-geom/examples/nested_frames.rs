//! Walk a small widget tree through nested oriented frames.
//!
//! Usage:
//!   RUST_LOG=trace cargo run -p canvas-geom --example nested_frames
//!
//! Prints each widget's origin relative to its parent and in global space,
//! its global bounds, and the CSS transform of its space.

use canvas_geom::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::TRACE)
        .init();

    let canvas = Obb::new(
        Size::new(800.0, 600.0),
        Matrix::identity().translate(Point::new(40.0, 40.0)),
    );
    let card = Obb::new(
        Size::new(200.0, 120.0),
        Matrix::identity()
            .rotate(Angle::from_degrees(30.0))
            .translate(Point::new(100.0, 80.0))
            .then(&canvas.space),
    );
    let button = Obb::new(
        Size::new(60.0, 24.0),
        Matrix::translation(Point::new(20.0, 80.0)).then(&card.space),
    );

    for (name, obb, parent) in [
        ("canvas", canvas, None),
        ("card", card, Some(&canvas)),
        ("button", button, Some(&card)),
    ] {
        let local = obb.map_origin_to(parent);
        let global = obb.map_origin_to(None);
        let bounds = obb.to_aabb().round(2);
        println!(
            "{name}: local=({:.2}, {:.2}) global=({:.2}, {:.2}) bounds={:?} transform={}",
            local.x,
            local.y,
            global.x,
            global.y,
            bounds.to_array(),
            obb.space
        );
    }

    let click = button.global_center();
    println!(
        "click at ({:.2}, {:.2}) hits button={} card={}",
        click.x,
        click.y,
        button.includes_point(click),
        card.includes_point(click)
    );

    // Collapsed card during a resize gesture: zero extent is replaced by 1.
    let collapsed = card.with_size(Size::new(0.0, 120.0));
    let moved = collapsed.scale_point(Point::new(20.0, 80.0), &card);
    println!("rescaled child origin: ({:.2}, {:.2})", moved.x, moved.y);

    let cfg = GeomCfg::default();
    let delta = card.delta(&card.expand(8.0), cfg);
    println!("expand(8) delta: {delta:?}");

    // Flipping the card upside down is not detected as rotation.
    let flip = Matrix::identity().rotate_around(Angle::half_turn(), card.global_center());
    let flipped = card.transform(&flip);
    println!("half-turn delta: {:?}", card.delta(&flipped, cfg));

    let drag = click - button.map_origin_to_global();
    match drag.try_normalize_cfg(&cfg) {
        Some(dir) => println!("drag direction: ({:.3}, {:.3})", dir.x, dir.y),
        None => println!("drag too short (eps {})", cfg.eps_non_zero),
    }
}
