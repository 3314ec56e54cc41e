//! Criterion micro-benchmarks for connection search, clearing, gravity and
//! whole-chain resolution.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tsumo_bench::{chain_game, reference_game, stress_game};
use tsumo_core::{Dimension, FieldObject};
use tsumo_field::algorithm::{
    clearing_diff, diff, find_connections, flatten_connections, gravitational_diff,
};
use tsumo_field::Visibility;
use tsumo_test_utils::random_field;

/// Benchmark: Find every color group on the classic board.
fn bench_find_connections_reference(c: &mut Criterion) {
    let game = reference_game(42);

    c.bench_function("find_connections_6x13", |b| {
        b.iter(|| {
            let found = find_connections(
                game.field(),
                &FieldObject::COLORS,
                1,
                Visibility::VisibleOnly,
            );
            black_box(&found);
        });
    });
}

/// Benchmark: Same search on the stress board.
fn bench_find_connections_stress(c: &mut Criterion) {
    let game = stress_game(42);

    c.bench_function("find_connections_64x132", |b| {
        b.iter(|| {
            let found = find_connections(
                game.field(),
                &FieldObject::COLORS,
                1,
                Visibility::IncludeHidden,
            );
            black_box(&found);
        });
    });
}

/// Benchmark: Clear every group of two or more on the stress board.
fn bench_clearing_diff_stress(c: &mut Criterion) {
    let game = stress_game(7);
    let found = find_connections(game.field(), &FieldObject::COLORS, 2, Visibility::VisibleOnly);
    let positions = flatten_connections(&found);

    c.bench_function("clearing_diff_64x132", |b| {
        b.iter(|| {
            let diffs = clearing_diff(game.field(), positions.iter().copied());
            black_box(&diffs);
        });
    });
}

/// Benchmark: Gravity on a field full of floating objects.
fn bench_gravity_unsettled(c: &mut Criterion) {
    let field = random_field(Dimension::new(64, 128, 4), 42);

    c.bench_function("gravitational_diff_64x132", |b| {
        b.iter(|| {
            let diffs = gravitational_diff(&field);
            black_box(&diffs);
        });
    });
}

/// Benchmark: Structural diff between two unrelated boards.
fn bench_field_diff(c: &mut Criterion) {
    let a = random_field(Dimension::new(64, 128, 4), 1);
    let b_field = random_field(Dimension::new(64, 128, 4), 2);

    c.bench_function("field_diff_64x132", |b| {
        b.iter(|| {
            let diffs = diff(&a, &b_field).unwrap();
            black_box(&diffs);
        });
    });
}

/// Benchmark: Resolve a 19-link chain from scratch.
fn bench_resolve_chain(c: &mut Criterion) {
    let template = chain_game(19);

    c.bench_function("resolve_chain_19", |b| {
        b.iter(|| {
            let mut game = template.clone();
            let report = game.resolve();
            black_box(&report);
        });
    });
}

criterion_group!(
    benches,
    bench_find_connections_reference,
    bench_find_connections_stress,
    bench_clearing_diff_stress,
    bench_gravity_unsettled,
    bench_field_diff,
    bench_resolve_chain,
);
criterion_main!(benches);
