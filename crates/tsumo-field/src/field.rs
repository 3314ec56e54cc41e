//! Sparse column-major cell storage.

use std::collections::BTreeMap;

use tsumo_core::{ConnectionMask, Dimension, FieldObject, Position};

/// A 2D grid of [`FieldObject`]s.
///
/// Storage is sparse and column-major: each column holds objects only up
/// to its highest non-empty row, and every unaddressed cell reads as
/// [`FieldObject::Empty`]. Trailing empties are trimmed on every write, so
/// two fields with equal contents always compare equal.
///
/// A field exclusively owns its storage. `Clone` is a deep copy; clones
/// are fully independent.
///
/// # Examples
///
/// ```
/// use tsumo_core::{Dimension, FieldObject, Position};
/// use tsumo_field::Field;
///
/// let mut field = Field::new(Dimension::default());
/// let p = Position::new(0, 2);
/// assert_eq!(field.get(p), Some(FieldObject::Empty));
///
/// assert!(field.set(p, FieldObject::Red));
/// assert_eq!(field.get(p), Some(FieldObject::Red));
///
/// // Out-of-bounds reads are explicit, writes are ignored.
/// assert_eq!(field.get(Position::new(-1, 0)), None);
/// assert!(!field.set(Position::new(0, 99), FieldObject::Red));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    dimension: Dimension,
    columns: Vec<Vec<FieldObject>>,
}

impl Field {
    /// Create an all-empty field.
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            columns: vec![Vec::new(); dimension.columns() as usize],
        }
    }

    /// Create a field from initial column contents, bottom row first.
    ///
    /// Columns beyond `dimension.columns()` and rows beyond
    /// `dimension.rows()` are dropped.
    pub fn with_columns(dimension: Dimension, columns: Vec<Vec<FieldObject>>) -> Self {
        let mut field = Self::new(dimension);
        for (c, column) in columns.into_iter().enumerate() {
            for (r, obj) in column.into_iter().enumerate() {
                field.set(Position::new(r as i32, c as i32), obj);
            }
        }
        field
    }

    /// The immutable dimension of this field.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Whether `position` lies inside this field.
    pub fn contains(&self, position: Position) -> bool {
        self.dimension.contains(position)
    }

    /// The object at `position`, or `None` if the position is out of bounds.
    pub fn get(&self, position: Position) -> Option<FieldObject> {
        if !self.dimension.contains(position) {
            return None;
        }
        let column = &self.columns[position.column as usize];
        Some(
            column
                .get(position.row as usize)
                .copied()
                .unwrap_or(FieldObject::Empty),
        )
    }

    /// Store `object` at `position`.
    ///
    /// Returns `false` (and leaves the field untouched) when the position
    /// is out of bounds.
    pub fn set(&mut self, position: Position, object: FieldObject) -> bool {
        if !self.dimension.contains(position) {
            tracing::trace!(%position, %object, "ignoring write outside field");
            return false;
        }
        let row = position.row as usize;
        let column = &mut self.columns[position.column as usize];
        if object == FieldObject::Empty {
            if row < column.len() {
                column[row] = FieldObject::Empty;
                while column.last() == Some(&FieldObject::Empty) {
                    column.pop();
                }
            }
        } else {
            if row >= column.len() {
                column.resize(row + 1, FieldObject::Empty);
            }
            column[row] = object;
        }
        true
    }

    /// Exchange the contents of two cells.
    ///
    /// Returns `false` (and does nothing) if either position is out of bounds.
    pub fn swap(&mut self, a: Position, b: Position) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(oa), Some(ob)) => {
                self.set(a, ob);
                self.set(b, oa);
                true
            }
            _ => false,
        }
    }

    /// Every valid position, column-major, bottom to top.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.dimension.positions()
    }

    /// Every `(position, object)` pair in [`positions`](Self::positions) order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, FieldObject)> + '_ {
        self.positions().map(move |p| (p, self.get(p).unwrap_or_default()))
    }

    /// Which 4-neighbours of `position` hold the same kind.
    ///
    /// Out-of-bounds neighbours never match. Returns an empty mask for an
    /// out-of-bounds `position`.
    pub fn connections(&self, position: Position) -> ConnectionMask {
        let Some(object) = self.get(position) else {
            return ConnectionMask::NONE;
        };
        let mut mask = ConnectionMask::NONE;
        for (neighbour, bit) in [
            (position.below(), ConnectionMask::BELOW),
            (position.above(), ConnectionMask::ABOVE),
            (position.right(), ConnectionMask::RIGHT),
            (position.left(), ConnectionMask::LEFT),
        ] {
            if self.get(neighbour) == Some(object) {
                mask |= bit;
            }
        }
        mask
    }

    /// Number of cells holding each symbol, empties included.
    pub fn symbol_counts(&self) -> BTreeMap<char, u64> {
        let mut counts = BTreeMap::new();
        for (_, object) in self.cells() {
            *counts.entry(object.symbol()).or_insert(0) += 1;
        }
        counts
    }

    /// Whether every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(Dimension::default())
    }
}
