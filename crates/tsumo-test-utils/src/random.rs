//! Deterministic random fields.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tsumo_core::{Dimension, FieldObject, Position};
use tsumo_field::Field;

fn pick(rng: &mut ChaCha8Rng, kinds: &[FieldObject]) -> FieldObject {
    kinds[rng.next_u32() as usize % kinds.len()]
}

/// Every cell drawn uniformly from all kinds, floating objects included.
pub fn random_field(dimension: Dimension, seed: u64) -> Field {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut field = Field::new(dimension);
    for position in dimension.positions() {
        field.set(position, pick(&mut rng, &FieldObject::ALL));
    }
    field
}

/// Columns filled from the floor to a random height with colors and the
/// occasional nuisance, so the field is already at rest.
///
/// `fill_percent` caps column height as a share of the total rows.
pub fn random_settled_field(dimension: Dimension, seed: u64, fill_percent: u32) -> Field {
    const KINDS: [FieldObject; 7] = [
        FieldObject::Red,
        FieldObject::Yellow,
        FieldObject::Blue,
        FieldObject::Green,
        FieldObject::Purple,
        FieldObject::Nuisance,
        FieldObject::HardNuisance,
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut field = Field::new(dimension);
    let cap = (u64::from(dimension.rows()) * u64::from(fill_percent.min(100)) / 100) as u32;
    for column in 0..dimension.columns() {
        let height = rng.next_u32() % (cap + 1);
        for row in 0..height {
            let position = Position::new(row as i32, column as i32);
            field.set(position, pick(&mut rng, &KINDS));
        }
    }
    field
}
