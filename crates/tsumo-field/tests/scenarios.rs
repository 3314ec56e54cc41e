//! End-to-end field scenarios built from shared fixtures.

use tsumo_core::{Dimension, FieldObject, Position};
use tsumo_field::algorithm::{
    clearing_diff, diff, find_connections, flatten_connections, gravitate, gravitational_diff,
};
use tsumo_field::ascii::{from_ascii_art, to_ascii_art};
use tsumo_field::{Diff, Visibility};
use tsumo_test_utils::{
    floating_objects, nuisance_pocket, random_field, random_settled_field, staircase_chain,
    two_link_chain, vertical_run,
};

fn p(r: i32, c: i32) -> Position {
    Position::new(r, c)
}

/// Clear and drop until nothing connects; returns the number of links.
fn run_chain(field: &mut tsumo_field::Field) -> u32 {
    gravitate(field);
    let mut chain = 0;
    loop {
        let found = find_connections(field, &FieldObject::COLORS, 4, Visibility::VisibleOnly);
        let cleared = clearing_diff(field, flatten_connections(&found));
        if cleared.is_empty() {
            return chain;
        }
        chain += 1;
        cleared.apply(field);
        gravitate(field);
    }
}

#[test]
fn vertical_run_clears_to_four_empties() {
    let field = vertical_run();
    let found = find_connections(&field, &[FieldObject::Red], 4, Visibility::VisibleOnly);
    assert_eq!(found[&FieldObject::Red].len(), 1);
    assert_eq!(found[&FieldObject::Red][0].len(), 4);

    let cleared = clearing_diff(&field, flatten_connections(&found));
    assert_eq!(cleared.len(), 4);
    for d in &cleared {
        match *d {
            Diff::Transform { position, from, to } => {
                assert_eq!(position.column, 2);
                assert_eq!(from, FieldObject::Red);
                assert_eq!(to, FieldObject::Empty);
            }
            Diff::Exchange { .. } => panic!("clearing produced an exchange"),
        }
    }
}

#[test]
fn nuisance_pocket_transforms_neighbours() {
    let mut field = nuisance_pocket();
    let found = find_connections(&field, &FieldObject::COLORS, 4, Visibility::VisibleOnly);
    let cleared = clearing_diff(&field, flatten_connections(&found));
    // 4 reds, 2 nuisance, 2 hard nuisance.
    assert_eq!(cleared.len(), 8);

    cleared.apply(&mut field);
    assert_eq!(field.get(p(0, 0)), Some(FieldObject::Empty));
    assert_eq!(field.get(p(2, 0)), Some(FieldObject::Empty));
    assert_eq!(field.get(p(0, 1)), Some(FieldObject::Nuisance));
    assert_eq!(field.get(p(2, 1)), Some(FieldObject::Nuisance));
    assert_eq!(field.get(p(0, 2)), Some(FieldObject::Iron));
    assert_eq!(field.get(p(2, 3)), Some(FieldObject::Block));

    gravitate(&mut field);
    assert_eq!(field.get(p(1, 1)), Some(FieldObject::Nuisance));
    assert_eq!(field.get(p(1, 2)), Some(FieldObject::Iron));
    // Blocks never fall.
    assert_eq!(field.get(p(2, 3)), Some(FieldObject::Block));
    assert_eq!(field.get(p(1, 3)), Some(FieldObject::Empty));
}

#[test]
fn floating_objects_settle_around_block() {
    let mut field = floating_objects();
    let batch = gravitate(&mut field);
    assert_eq!(batch.len(), 2);
    assert_eq!(field.get(p(1, 0)), Some(FieldObject::Blue));
    assert_eq!(field.get(p(3, 1)), Some(FieldObject::Block));
    assert_eq!(field.get(p(4, 1)), Some(FieldObject::Red));
    assert_eq!(field.get(p(0, 2)), Some(FieldObject::Green));
    assert!(gravitational_diff(&field).is_empty());
}

#[test]
fn fixtures_chain_lengths() {
    let mut two = two_link_chain();
    assert_eq!(run_chain(&mut two), 2);
    assert!(two.is_empty());

    let mut stairs = staircase_chain();
    assert_eq!(run_chain(&mut stairs), 5);
    assert!(stairs.is_empty());
}

#[test]
fn random_fields_survive_ascii() {
    for seed in 0..16 {
        let field = random_field(Dimension::new(6, 12, 2), seed);
        assert_eq!(from_ascii_art(&to_ascii_art(&field)).unwrap(), field);
    }
}

#[test]
fn diff_between_random_fields_is_exact() {
    let dim = Dimension::default();
    for seed in 0..8 {
        let a = random_settled_field(dim, seed, 70);
        let b = random_field(dim, seed + 100);
        let batch = diff(&a, &b).unwrap();
        let mut patched = a.clone();
        batch.apply(&mut patched);
        assert_eq!(patched, b);
        batch.inverse().apply(&mut patched);
        assert_eq!(patched, a);
    }
}

#[test]
fn settled_fields_need_no_gravity() {
    for seed in 0..8 {
        let field = random_settled_field(Dimension::default(), seed, 90);
        assert!(gravitational_diff(&field).is_empty());
    }
}
