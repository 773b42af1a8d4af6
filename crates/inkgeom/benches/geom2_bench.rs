//! Criterion benchmarks for the segment algebra.
//! Results live under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inkgeom::geom2::{
    closest_approach, distance_point_to_segment, distance_segment_to_segment, intersect, Point,
    Segment,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_segments(m: usize, seed: u64) -> Vec<Segment> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|_| {
            Segment::from_coords(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            )
        })
        .collect()
}

fn bench_geom2(c: &mut Criterion) {
    let segs = random_segments(256, 43);
    let query = Point::new(3.0, -7.0);
    let mut group = c.benchmark_group("geom2");
    group.bench_function("intersect_pairs", |b| {
        b.iter(|| {
            segs.windows(2)
                .filter_map(|w| intersect(black_box(&w[0]), black_box(&w[1])))
                .count()
        })
    });
    group.bench_function("point_to_segment", |b| {
        b.iter(|| {
            segs.iter()
                .map(|s| distance_point_to_segment(black_box(&query), s))
                .fold(f64::INFINITY, f64::min)
        })
    });
    group.bench_function("segment_to_segment_heuristic", |b| {
        b.iter(|| {
            segs.windows(2)
                .map(|w| distance_segment_to_segment(&w[0], &w[1]))
                .sum::<f64>()
        })
    });
    group.bench_function("segment_to_segment_exact", |b| {
        b.iter(|| {
            segs.windows(2)
                .map(|w| closest_approach(&w[0], &w[1]))
                .sum::<f64>()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_geom2);
criterion_main!(benches);
