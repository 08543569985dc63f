//! Criterion benchmarks for oriented-box mapping and projection.

use canvas_geom::{Aabb, Angle, Matrix, Obb, Point, Size};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_obbs(n: usize, seed: u64) -> Vec<Obb> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let space = Matrix::identity()
                .rotate(Angle::from_radians(rng.gen::<f64>() * std::f64::consts::TAU))
                .translate(Point::new(
                    rng.gen_range(-500.0..500.0),
                    rng.gen_range(-500.0..500.0),
                ));
            Obb::new(
                Size::new(rng.gen_range(1.0..200.0), rng.gen_range(1.0..200.0)),
                space,
            )
        })
        .collect()
}

fn bench_obb(c: &mut Criterion) {
    let mut group = c.benchmark_group("obb");
    for &n in &[16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("union_of_aabbs", n), &n, |b, &n| {
            b.iter_batched(
                || random_obbs(n, 7),
                |obbs| {
                    let boxes: Vec<Aabb> = obbs.iter().map(Obb::to_aabb).collect();
                    let _u = Aabb::union(boxes.iter());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("hit_test", n), &n, |b, &n| {
            let probe = Point::new(10.0, -20.0);
            b.iter_batched(
                || random_obbs(n, 8),
                |obbs| {
                    let _hits = obbs.iter().filter(|o| o.includes_point(probe)).count();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("expand", n), &n, |b, &n| {
            b.iter_batched(
                || random_obbs(n, 9),
                |obbs| {
                    let _out: Vec<Obb> = obbs.iter().map(|o| o.expand(4.0)).collect();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_obb);
criterion_main!(benches);
