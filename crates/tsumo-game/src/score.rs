//! Tsu scoring.
//!
//! A clear scores `base × bonus`. The base is ten points per colored cell
//! transformed, plus nuisance transform points, times the level. The bonus
//! sums the chain, color and group bonuses and is clamped to `1..=999`.

use tsumo_core::FieldObject;
use tsumo_field::{Connections, Diff, DiffBatch};

use crate::rule::Rule;

/// Points for transforming one colored cell.
pub const COLOR_TRANSFORM_POINT: u64 = 10;
/// Hard nuisance cleared outright is worth this many nuisance transforms.
pub const HARD_NUISANCE_FACTOR: u64 = 6;
/// Lowest bonus a clear can have.
pub const MIN_BONUS: u32 = 1;
/// Highest bonus a clear can have.
pub const MAX_BONUS: u32 = 999;

/// The two factors of a clear's score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    /// Transform points times the level.
    pub base: u64,
    /// Clamped sum of chain, color and group bonuses.
    pub bonus: u32,
}

impl Score {
    /// `base × bonus`, saturating.
    pub fn total(&self) -> u64 {
        self.base.saturating_mul(u64::from(self.bonus))
    }
}

/// Bonus for the `chain`-th clear in a chain (1-based).
///
/// | chain | 1 | 2 | 3  | 4  | 5  | 6  |
/// |-------|---|---|----|----|----|----|
/// | bonus | 0 | 8 | 16 | 32 | 64 | 96 |
pub fn chain_bonus(chain: u32) -> u32 {
    if chain < 4 {
        chain.saturating_sub(1) * 8
    } else {
        (chain - 3).saturating_mul(32)
    }
}

/// Bonus for clearing `color_count` distinct colors at once: 0, 0, 3, 6,
/// 12, 24, doubling from two colors on.
pub fn color_bonus(color_count: usize) -> u32 {
    match color_count {
        0 | 1 => 0,
        n => 3u32.saturating_mul(1u32 << (n - 2).min(30)),
    }
}

impl Rule {
    /// Bonus for one group of `group_size` cells.
    ///
    /// Counts cells beyond `min(min_clear_connection, 4)`: none scores 0,
    /// one to six score one more than the excess, seven or more score 10.
    pub fn group_bonus(&self, group_size: usize) -> u32 {
        let threshold = self.min_clear_connection.min(4) as usize;
        match group_size.saturating_sub(threshold) {
            0 => 0,
            excess @ 1..=6 => excess as u32 + 1,
            _ => 10,
        }
    }

    /// Points for one diff of a clear. Exchanges score nothing.
    pub fn transform_point(&self, diff: &Diff) -> u64 {
        let Diff::Transform { from, to, .. } = *diff else {
            return 0;
        };
        let nuisance = u64::from(self.nuisance_transform_point);
        match from {
            f if f.is_color() => COLOR_TRANSFORM_POINT,
            FieldObject::HardNuisance if to == FieldObject::Empty => {
                nuisance * HARD_NUISANCE_FACTOR
            }
            FieldObject::HardNuisance | FieldObject::Nuisance => nuisance,
            _ => 0,
        }
    }

    /// Score the clear of `connections` as the `chain`-th link, given the
    /// transforms it caused.
    ///
    /// ```
    /// use tsumo_core::{Dimension, FieldObject, Position};
    /// use tsumo_field::algorithm::{clearing_diff, find_connections, flatten_connections};
    /// use tsumo_field::{Field, Visibility};
    /// use tsumo_game::{Rule, Score};
    ///
    /// let mut field = Field::new(Dimension::default());
    /// for row in 0..4 {
    ///     field.set(Position::new(row, 0), FieldObject::Red);
    /// }
    /// let rule = Rule::default();
    /// let found = find_connections(&field, &FieldObject::COLORS, 4, Visibility::VisibleOnly);
    /// let cleared = clearing_diff(&field, flatten_connections(&found));
    /// assert_eq!(rule.points(1, &found, &cleared), Score { base: 40, bonus: 1 });
    /// ```
    pub fn points(&self, chain: u32, connections: &Connections, transforms: &DiffBatch) -> Score {
        let color_count = connections.values().filter(|g| !g.is_empty()).count();
        let group_bonus: u32 = connections
            .values()
            .flatten()
            .map(|group| self.group_bonus(group.len()))
            .sum();
        let bonus = chain_bonus(chain)
            .saturating_add(color_bonus(color_count))
            .saturating_add(group_bonus)
            .clamp(MIN_BONUS, MAX_BONUS);
        let transform_sum: u64 = transforms.iter().map(|d| self.transform_point(d)).sum();
        Score {
            base: u64::from(self.level).saturating_mul(transform_sum),
            bonus,
        }
    }
}
