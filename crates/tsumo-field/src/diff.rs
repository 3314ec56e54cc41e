//! Reversible mutation records and ordered diff batches.

use tsumo_core::{FieldObject, Position};

use crate::field::Field;

/// One atomic, reversible mutation against a field.
///
/// A diff never borrows the field it targets; it is applied with an
/// explicit `&mut Field`. Diffs whose positions are out of bounds for the
/// target field are skipped when applied.
#[derive(Clone, Copy, Debug)]
pub enum Diff {
    /// The cell at `position` becomes `to`. `from` records the kind it
    /// held when the diff was computed, which makes the diff invertible.
    Transform {
        /// The cell being transformed.
        position: Position,
        /// Kind before the transform.
        from: FieldObject,
        /// Kind after the transform.
        to: FieldObject,
    },
    /// The contents of two cells swap. `Exchange(a, b)` equals `Exchange(b, a)`.
    Exchange {
        /// First cell.
        a: Position,
        /// Second cell.
        b: Position,
    },
}

impl Diff {
    /// Build a transform diff.
    pub const fn transform(position: Position, from: FieldObject, to: FieldObject) -> Self {
        Self::Transform { position, from, to }
    }

    /// Build an exchange diff.
    pub const fn exchange(a: Position, b: Position) -> Self {
        Self::Exchange { a, b }
    }

    /// Whether every position this diff touches lies inside `field`.
    pub fn is_valid_for(&self, field: &Field) -> bool {
        match *self {
            Self::Transform { position, .. } => field.contains(position),
            Self::Exchange { a, b } => field.contains(a) && field.contains(b),
        }
    }

    /// Apply this diff to `field`.
    ///
    /// Returns `false` without touching the field if any position is out of
    /// bounds.
    pub fn apply(&self, field: &mut Field) -> bool {
        if !self.is_valid_for(field) {
            tracing::trace!(diff = ?self, "skipping diff outside field");
            return false;
        }
        match *self {
            Self::Transform { position, to, .. } => field.set(position, to),
            Self::Exchange { a, b } => field.swap(a, b),
        }
    }

    /// The diff that undoes this one.
    pub const fn inverse(&self) -> Self {
        match *self {
            Self::Transform { position, from, to } => Self::Transform {
                position,
                from: to,
                to: from,
            },
            Self::Exchange { a, b } => Self::Exchange { a: b, b: a },
        }
    }

    /// The positions this diff touches.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (first, second) = match *self {
            Self::Transform { position, .. } => (position, None),
            Self::Exchange { a, b } => (a, Some(b)),
        };
        std::iter::once(first).chain(second)
    }
}

impl PartialEq for Diff {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (
                Self::Transform { position, from, to },
                Self::Transform {
                    position: p2,
                    from: f2,
                    to: t2,
                },
            ) => position == p2 && from == f2 && to == t2,
            (Self::Exchange { a, b }, Self::Exchange { a: a2, b: b2 }) => {
                (a == a2 && b == b2) || (a == b2 && b == a2)
            }
            _ => false,
        }
    }
}

impl Eq for Diff {}

/// An ordered sequence of diffs applied as one logical step.
///
/// # Examples
///
/// ```
/// use tsumo_core::{Dimension, FieldObject, Position};
/// use tsumo_field::{Diff, DiffBatch, Field};
///
/// let mut field = Field::new(Dimension::new(2, 2, 0));
/// let top = Position::new(1, 0);
/// let bottom = Position::new(0, 0);
/// let batch: DiffBatch = vec![
///     Diff::transform(top, FieldObject::Empty, FieldObject::Red),
///     Diff::exchange(top, bottom),
/// ]
/// .into_iter()
/// .collect();
///
/// let before = field.clone();
/// batch.apply(&mut field);
/// assert_eq!(field.get(bottom), Some(FieldObject::Red));
///
/// batch.inverse().apply(&mut field);
/// assert_eq!(field, before);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffBatch {
    diffs: Vec<Diff>,
}

impl DiffBatch {
    /// An empty batch.
    pub fn new() -> Self {
        Self { diffs: Vec::new() }
    }

    /// Append a diff.
    pub fn push(&mut self, diff: Diff) {
        self.diffs.push(diff);
    }

    /// Number of diffs.
    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    /// Whether the batch holds no diffs.
    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    /// Iterate over diffs in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diff> {
        self.diffs.iter()
    }

    /// The diffs as a slice.
    pub fn as_slice(&self) -> &[Diff] {
        &self.diffs
    }

    /// Apply every diff in order. Returns the number actually applied.
    pub fn apply(&self, field: &mut Field) -> usize {
        self.diffs.iter().filter(|d| d.apply(field)).count()
    }

    /// The batch that undoes this one: inverted diffs in reverse order.
    pub fn inverse(&self) -> Self {
        self.diffs.iter().rev().map(Diff::inverse).collect()
    }

    /// Append every diff from `other`.
    pub fn extend_from(&mut self, other: &DiffBatch) {
        self.diffs.extend_from_slice(&other.diffs);
    }
}

impl FromIterator<Diff> for DiffBatch {
    fn from_iter<I: IntoIterator<Item = Diff>>(iter: I) -> Self {
        Self {
            diffs: iter.into_iter().collect(),
        }
    }
}

impl Extend<Diff> for DiffBatch {
    fn extend<I: IntoIterator<Item = Diff>>(&mut self, iter: I) {
        self.diffs.extend(iter);
    }
}

impl IntoIterator for DiffBatch {
    type Item = Diff;
    type IntoIter = std::vec::IntoIter<Diff>;

    fn into_iter(self) -> Self::IntoIter {
        self.diffs.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiffBatch {
    type Item = &'a Diff;
    type IntoIter = std::slice::Iter<'a, Diff>;

    fn into_iter(self) -> Self::IntoIter {
        self.diffs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsumo_core::Dimension;

    fn p(r: i32, c: i32) -> Position {
        Position::new(r, c)
    }

    #[test]
    fn exchange_is_symmetric() {
        assert_eq!(Diff::exchange(p(0, 0), p(1, 0)), Diff::exchange(p(1, 0), p(0, 0)));
        assert_ne!(Diff::exchange(p(0, 0), p(1, 0)), Diff::exchange(p(0, 0), p(2, 0)));
    }

    #[test]
    fn transform_equality_is_structural() {
        let a = Diff::transform(p(0, 0), FieldObject::Red, FieldObject::Empty);
        assert_eq!(a, Diff::transform(p(0, 0), FieldObject::Red, FieldObject::Empty));
        assert_ne!(a, Diff::transform(p(0, 0), FieldObject::Blue, FieldObject::Empty));
        assert_ne!(a, Diff::exchange(p(0, 0), p(0, 0)));
    }

    #[test]
    fn invalid_diffs_are_noops() {
        let mut field = Field::new(Dimension::new(2, 2, 0));
        field.set(p(0, 0), FieldObject::Red);
        let before = field.clone();
        assert!(!Diff::transform(p(5, 0), FieldObject::Empty, FieldObject::Red).apply(&mut field));
        assert!(!Diff::exchange(p(0, 0), p(0, 7)).apply(&mut field));
        assert_eq!(field, before);
    }

    #[test]
    fn batch_applies_in_order_and_counts() {
        let mut field = Field::new(Dimension::new(1, 3, 0));
        let batch: DiffBatch = [
            Diff::transform(p(2, 0), FieldObject::Empty, FieldObject::Blue),
            Diff::exchange(p(2, 0), p(1, 0)),
            Diff::exchange(p(1, 0), p(0, 0)),
            Diff::transform(p(9, 0), FieldObject::Empty, FieldObject::Red),
        ]
        .into_iter()
        .collect();
        assert_eq!(batch.apply(&mut field), 3);
        assert_eq!(field.get(p(0, 0)), Some(FieldObject::Blue));
        assert_eq!(field.get(p(2, 0)), Some(FieldObject::Empty));
    }

    #[test]
    fn inverse_restores_field() {
        let mut field = Field::new(Dimension::new(2, 3, 0));
        field.set(p(2, 1), FieldObject::Green);
        let before = field.clone();
        let batch: DiffBatch = [
            Diff::exchange(p(2, 1), p(0, 1)),
            Diff::transform(p(0, 1), FieldObject::Green, FieldObject::Empty),
            Diff::transform(p(1, 0), FieldObject::Empty, FieldObject::Nuisance),
        ]
        .into_iter()
        .collect();
        batch.apply(&mut field);
        assert_ne!(field, before);
        batch.inverse().apply(&mut field);
        assert_eq!(field, before);
    }

    #[test]
    fn positions_lists_touched_cells() {
        let t: Vec<_> = Diff::transform(p(1, 2), FieldObject::Red, FieldObject::Empty)
            .positions()
            .collect();
        assert_eq!(t, vec![p(1, 2)]);
        let e: Vec<_> = Diff::exchange(p(0, 0), p(3, 0)).positions().collect();
        assert_eq!(e, vec![p(0, 0), p(3, 0)]);
    }
}
