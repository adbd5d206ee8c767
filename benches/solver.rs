//! Benchmarks for the region packing solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use regionpack::geometry::all_variants;
use regionpack::parse::Puzzle;
use regionpack::solver::{build_placements, count_packable};

static EXAMPLE: &str = "0:
###
##.
##.

1:
###
##.
.##

2:
.##
###
##.

3:
##.
###
##.

4:
###
#..
###

5:
###
.#.
###

4x4: 0 0 0 0 2 0
12x5: 1 0 1 0 2 2
12x5: 1 0 1 0 3 2
";

/// Benchmark generating all orientations of one heptomino.
fn bench_variants(c: &mut Criterion) {
    let puzzle = Puzzle::parse(EXAMPLE).expect("example parses");
    let base = &puzzle.shapes[0].variants[0].cells;

    c.bench_function("all_variants", |b| {
        b.iter(|| all_variants(black_box(base)))
    });
}

/// Benchmark building the placement table for a 12x5 region.
fn bench_build_placements(c: &mut Criterion) {
    let puzzle = Puzzle::parse(EXAMPLE).expect("example parses");

    c.bench_function("build_placements_12x5", |b| {
        b.iter(|| build_placements(black_box(12), black_box(5), &puzzle.shapes))
    });
}

/// Benchmark deciding the whole example with a modest node budget.
fn bench_count_packable(c: &mut Criterion) {
    let puzzle = Puzzle::parse(EXAMPLE).expect("example parses");

    let mut group = c.benchmark_group("example");
    group.sample_size(10);
    group.bench_function("count_packable", |b| {
        b.iter(|| count_packable(black_box(&puzzle), 100_000))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_variants,
    bench_build_placements,
    bench_count_packable
);
criterion_main!(benches);
