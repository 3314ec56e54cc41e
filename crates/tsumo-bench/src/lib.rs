//! Benchmark profiles for the Tsumo puzzle engine.
//!
//! - [`reference_game`]: the classic 6x12+1 board, settled and 70% full
//! - [`stress_game`]: a 64x128+4 board for scaling checks
//! - [`chain_game`]: a field that resolves as a long chain

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tsumo_core::{Dimension, FieldObject, Position};
use tsumo_field::Field;
use tsumo_game::{Rule, TsuGame};
use tsumo_test_utils::random_settled_field;

/// Classic board, columns filled to at most 70% height.
pub fn reference_game(seed: u64) -> TsuGame {
    game(random_settled_field(Dimension::default(), seed, 70))
}

/// 64 columns, 128 visible rows, 4 hidden rows, 70% fill.
pub fn stress_game(seed: u64) -> TsuGame {
    game(random_settled_field(Dimension::new(64, 128, 4), seed, 70))
}

/// A staircase of `links` four-cell groups that resolves as a
/// `links`-long chain and leaves the field empty.
///
/// Link 0 is an L in column 0. Link `k` sits on top of column `k - 1`,
/// in rows 1-2 of column `k` and at the foot of column `k + 1`; clearing
/// link `k - 1` drops its top cell into place. Colors cycle through
/// [`FieldObject::COLORS`].
pub fn chain_game(links: u32) -> TsuGame {
    let links = links.max(1);
    let mut field = Field::new(Dimension::new(links + 1, 4, 1));
    for k in 0..links {
        let color = FieldObject::COLORS[k as usize % FieldObject::COLORS.len()];
        let c = k as i32;
        let cells = if k == 0 {
            [(0, 0), (1, 0), (2, 0), (0, 1)]
        } else {
            [(3, c - 1), (1, c), (2, c), (0, c + 1)]
        };
        for (row, column) in cells {
            field.set(Position::new(row, column), color);
        }
    }
    game(field)
}

fn game(field: Field) -> TsuGame {
    match TsuGame::with_field(Rule::default(), field) {
        Ok(game) => game,
        Err(e) => panic!("default rule rejected: {e}"),
    }
}
