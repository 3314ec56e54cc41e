//! Named field scenarios.
//!
//! Most fixtures parse an ASCII art literal, so the layout is visible in
//! the source. Fixtures panic on malformed art; they are test-only.

use tsumo_core::{Dimension, FieldObject, Position};
use tsumo_field::ascii::from_ascii_art;
use tsumo_field::Field;

fn parse(art: &str) -> Field {
    match from_ascii_art(art) {
        Ok(field) => field,
        Err(e) => panic!("fixture art is malformed: {e}"),
    }
}

/// Default 6x12+1 field with four reds stacked in column 2, rows 0-3.
pub fn vertical_run() -> Field {
    let mut field = Field::new(Dimension::default());
    for row in 0..4 {
        field.set(Position::new(row, 2), FieldObject::Red);
    }
    field
}

/// Blues clear, a red drops onto a red pair, the reds clear.
///
/// Resolves as a two-link chain and leaves the field empty.
pub fn two_link_chain() -> Field {
    parse(
        "\
||   R   ||
||   B   ||
||   B   ||
|| R B   ||
|| R B R ||
++=======++",
    )
}

/// Five-link staircase: each color's clear drops the next color into
/// place. The field is empty afterwards.
pub fn staircase_chain() -> Field {
    parse(
        "\
|| G Y B P     ||
|| R G Y B P   ||
|| R G Y B P   ||
|| R R G Y B P ||
++=============++",
    )
}

/// A red group walled in by nuisance, hard nuisance, iron and a block.
///
/// Clearing the reds turns adjacent nuisance to empty and adjacent hard
/// nuisance to nuisance. Iron and the block are untouched.
pub fn nuisance_pocket() -> Field {
    parse(
        "\
|| o O - = ||
|| R R R R ||
|| o O - = ||
++=========++",
    )
}

/// Objects floating over gaps. The block in column 1 stays put and holds
/// up the red resting on it.
pub fn floating_objects() -> Field {
    parse(
        "\
||   R   ||
|| B =   ||
||       ||
||     G ||
|| - Y   ||
++=======++",
    )
}
