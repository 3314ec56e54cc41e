//! Field payloads: prefix tree shape followed by one code per cell.
//!
//! The dimension is not part of the payload; the reader must already know
//! it. A field without cells writes nothing at all.

use tsumo_core::{Dimension, FieldObject};
use tsumo_field::Field;

use crate::bitstream::{BitReader, BitWriter};
use crate::error::CodecError;
use crate::prefix_tree::PrefixTree;

/// Write `field`'s cells, column-major, bottom to top.
pub fn write_field(writer: &mut BitWriter, field: &Field) -> Result<(), CodecError> {
    if field.dimension().cell_count() == 0 {
        return Ok(());
    }
    let start = writer.bit_len();
    let tree = PrefixTree::from_frequencies(&field.symbol_counts())?;
    tree.write_to(writer)?;
    let encoding = tree.encoding();
    for (_, object) in field.cells() {
        encoding.write_symbol(object.symbol(), writer)?;
    }
    tracing::debug!(
        dimension = ?field.dimension(),
        symbols = tree.symbol_count(),
        bits = writer.bit_len() - start,
        "encoded field"
    );
    Ok(())
}

/// Read a field of `dimension` written by [`write_field`].
///
/// # Errors
///
/// Any tree or stream error, or [`CodecError::UnknownSymbol`] when a leaf
/// names no cell kind.
pub fn read_field(reader: &mut BitReader<'_>, dimension: Dimension) -> Result<Field, CodecError> {
    let mut field = Field::new(dimension);
    if dimension.cell_count() == 0 {
        return Ok(field);
    }
    let tree = PrefixTree::read_from(reader)?;
    for position in dimension.positions() {
        let symbol = tree.symbol_from_stream(reader)?;
        let object =
            FieldObject::from_symbol(symbol).ok_or(CodecError::UnknownSymbol { symbol })?;
        field.set(position, object);
    }
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsumo_core::Position;

    fn round_trip(field: &Field) -> Field {
        let mut w = BitWriter::new();
        write_field(&mut w, field).unwrap();
        let bytes = w.finish();
        read_field(&mut BitReader::new(&bytes), field.dimension()).unwrap()
    }

    #[test]
    fn empty_field_is_one_leaf_and_no_codes() {
        let field = Field::new(Dimension::default());
        let mut w = BitWriter::new();
        write_field(&mut w, &field).unwrap();
        assert_eq!(w.bit_len(), 9);
        assert_eq!(round_trip(&field), field);
    }

    #[test]
    fn zero_cell_field_writes_nothing() {
        let field = Field::new(Dimension::new(0, 12, 1));
        let mut w = BitWriter::new();
        write_field(&mut w, &field).unwrap();
        assert_eq!(w.bit_len(), 0);
        assert_eq!(
            read_field(&mut BitReader::new(&[]), field.dimension()).unwrap(),
            field
        );
    }

    #[test]
    fn mixed_field_round_trips() {
        let mut field = Field::new(Dimension::new(3, 4, 1));
        field.set(Position::new(0, 0), FieldObject::Red);
        field.set(Position::new(1, 0), FieldObject::HardNuisance);
        field.set(Position::new(0, 2), FieldObject::Block);
        field.set(Position::new(4, 1), FieldObject::Iron);
        assert_eq!(round_trip(&field), field);
    }

    #[test]
    fn leaf_with_unknown_kind_fails() {
        let mut w = BitWriter::new();
        w.write_bit(true);
        w.write(u64::from(b'X'), 8).unwrap();
        let bytes = w.finish();
        assert_eq!(
            read_field(&mut BitReader::new(&bytes), Dimension::new(1, 1, 0)),
            Err(CodecError::UnknownSymbol { symbol: 'X' })
        );
    }

    #[test]
    fn truncated_cells_fail() {
        let mut field = Field::new(Dimension::new(6, 12, 1));
        field.set(Position::new(0, 0), FieldObject::Red);
        let mut w = BitWriter::new();
        write_field(&mut w, &field).unwrap();
        let mut bytes = w.finish();
        bytes.truncate(bytes.len() / 2);
        assert!(matches!(
            read_field(&mut BitReader::new(&bytes), field.dimension()),
            Err(CodecError::UnexpectedEof { .. })
        ));
    }
}
