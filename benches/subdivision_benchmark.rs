// benches/subdivision_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use koch_snowflake::geometry::{Point2, Segment};
use koch_snowflake::snowflake::{SnowflakeGenerator, DEFAULT_MIN_LENGTH};
use rand::Rng;

fn create_test_segment(rng: &mut impl Rng) -> Segment {
    let start = Point2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
    let end = Point2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
    Segment::new(start, end)
}

fn subdivision_benchmark_fn(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    const NUM_BENCH_SEGMENTS: usize = 100;
    let mut segments: Vec<Segment> = Vec::with_capacity(NUM_BENCH_SEGMENTS);
    for _ in 0..NUM_BENCH_SEGMENTS {
        segments.push(create_test_segment(&mut rng));
    }

    let mut group = c.benchmark_group("SubdivisionOperations");

    group.bench_function("subdivide_into_100_segments_reused_buffer", |b| {
        let mut terminals: Vec<Segment> = Vec::new();
        let mut segment_iter = segments.iter().cycle();

        b.iter(|| {
            let segment = segment_iter.next().unwrap();
            terminals.clear();
            black_box(segment).subdivide_into(black_box(DEFAULT_MIN_LENGTH), &mut terminals);
            black_box(terminals.len())
        })
    });

    group.bench_function("generate_snowflake_circumradius_80", |b| {
        b.iter(|| {
            SnowflakeGenerator::generate(black_box(80.0), black_box(DEFAULT_MIN_LENGTH)).unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, subdivision_benchmark_fn);
criterion_main!(benches);
