//! Fields through the full byte path: bit stream, prefix codes, transport.

use proptest::prelude::*;
use tsumo_codec::field::{read_field, write_field};
use tsumo_codec::header::{read_header, write_header};
use tsumo_codec::{transport, BitReader, BitWriter, ParameterSpec, PrefixTree};
use tsumo_core::Dimension;
use tsumo_field::Field;
use tsumo_test_utils::{random_field, random_settled_field, staircase_chain};

fn through_transport(field: &Field) -> Field {
    let mut writer = BitWriter::new();
    write_field(&mut writer, field).unwrap();
    let text = writer.finalize();
    let bytes = transport::decode(&text).unwrap();
    read_field(&mut BitReader::new(&bytes), field.dimension()).unwrap()
}

#[test]
fn fixture_survives_transport() {
    let field = staircase_chain();
    assert_eq!(through_transport(&field), field);
}

#[test]
fn cell_codes_never_exceed_fixed_width() {
    // Eight kinds fit in three bits; an optimal prefix code can only do better.
    let dimension = Dimension::default();
    for seed in 0..16 {
        let field = random_settled_field(dimension, seed, 40);
        let tree = PrefixTree::from_frequencies(&field.symbol_counts()).unwrap();
        let mut tree_only = BitWriter::new();
        tree.write_to(&mut tree_only).unwrap();

        let mut writer = BitWriter::new();
        write_field(&mut writer, &field).unwrap();
        let cell_bits = writer.bit_len() - tree_only.bit_len();
        assert!(cell_bits <= dimension.cell_count() * 3, "seed {seed}");
    }
}

#[test]
fn cell_codes_match_tree_code_lengths() {
    let field = random_settled_field(Dimension::default(), 3, 60);
    let tree = PrefixTree::from_frequencies(&field.symbol_counts()).unwrap();
    let lengths = tree.code_lengths();
    let expected: usize = field
        .cells()
        .map(|(_, object)| lengths[&object.symbol()])
        .sum();

    let mut tree_only = BitWriter::new();
    tree.write_to(&mut tree_only).unwrap();

    let mut writer = BitWriter::new();
    write_field(&mut writer, &field).unwrap();
    assert_eq!(writer.bit_len(), tree_only.bit_len() + expected);
}

#[test]
fn header_and_field_share_a_stream() {
    let specs = [ParameterSpec::new(Some(4), 3), ParameterSpec::new(None, 5)];
    let values = [Some(9), None];
    let field = random_field(Dimension::new(4, 6, 1), 11);

    let mut writer = BitWriter::new();
    write_header(&mut writer, &specs, &values).unwrap();
    write_field(&mut writer, &field).unwrap();
    let bytes = writer.finish();

    let mut reader = BitReader::new(&bytes);
    assert_eq!(read_header(&mut reader, &specs).unwrap(), values.to_vec());
    assert_eq!(read_field(&mut reader, field.dimension()).unwrap(), field);
    assert!(reader.bits_remaining() < 8);
}

proptest! {
    #[test]
    fn random_fields_round_trip(
        columns in 0u32..10,
        visible in 0u32..16,
        hidden in 0u32..3,
        seed in any::<u64>(),
    ) {
        let field = random_field(Dimension::new(columns, visible, hidden), seed);
        prop_assert_eq!(through_transport(&field), field);
    }
}
