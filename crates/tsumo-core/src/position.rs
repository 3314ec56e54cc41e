//! Ephemeral grid coordinates and neighbour connection masks.

use crate::dimension::Dimension;
use smallvec::SmallVec;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A `{row, column}` coordinate on a field.
///
/// `Position` carries no reference to the field it addresses: the field
/// is the arena, a position is an index into it. Row 0 is the bottom row
/// and column 0 is the leftmost column.
///
/// Navigation (`above`, `left`, `top`, ...) is pure arithmetic and may
/// produce positions outside the grid; check [`Dimension::contains`]
/// before using a derived position.
///
/// Ordering is column-major then row, which agrees with the primitive
/// index `column * rows + row` for any fixed dimension.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    // Field order drives the derived `Ord`.
    /// Column index, 0 = leftmost.
    pub column: i32,
    /// Row index, 0 = bottom.
    pub row: i32,
}

impl Position {
    /// Create a position at `(row, column)`.
    pub const fn new(row: i32, column: i32) -> Self {
        Self { column, row }
    }

    /// The slot one row up.
    pub const fn above(self) -> Self {
        Self::new(self.row + 1, self.column)
    }

    /// The slot one row down.
    pub const fn below(self) -> Self {
        Self::new(self.row - 1, self.column)
    }

    /// The slot one column to the left.
    pub const fn left(self) -> Self {
        Self::new(self.row, self.column - 1)
    }

    /// The slot one column to the right.
    pub const fn right(self) -> Self {
        Self::new(self.row, self.column + 1)
    }

    /// The four cardinal neighbours in `[above, below, left, right]` order.
    pub const fn adjacent(self) -> [Position; 4] {
        [self.above(), self.below(), self.left(), self.right()]
    }

    /// The cardinal neighbours that lie inside `dimension`.
    pub fn neighbours(self, dimension: &Dimension) -> SmallVec<[Position; 4]> {
        self.adjacent()
            .into_iter()
            .filter(|p| dimension.contains(*p))
            .collect()
    }

    /// The topmost slot (including hidden rows) in this column.
    pub fn top(self, dimension: &Dimension) -> Self {
        Self::new(dimension.rows() as i32 - 1, self.column)
    }

    /// The bottom slot in this column.
    pub const fn bottom(self) -> Self {
        Self::new(0, self.column)
    }

    /// The leftmost slot in this row.
    pub const fn far_left(self) -> Self {
        Self::new(self.row, 0)
    }

    /// The rightmost slot in this row.
    pub fn far_right(self, dimension: &Dimension) -> Self {
        Self::new(self.row, dimension.columns() as i32 - 1)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A 4-bit mask recording which neighbours hold the same kind as a cell.
///
/// Used by renderers to pick connector sprites. For logical checks,
/// compare kinds directly instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConnectionMask(u8);

impl ConnectionMask {
    /// No same-kind neighbours.
    pub const NONE: Self = Self(0);
    /// Same kind in the slot below.
    pub const BELOW: Self = Self(1 << 0);
    /// Same kind in the slot above.
    pub const ABOVE: Self = Self(1 << 1);
    /// Same kind in the slot to the right.
    pub const RIGHT: Self = Self(1 << 2);
    /// Same kind in the slot to the left.
    pub const LEFT: Self = Self(1 << 3);

    /// Raw bit pattern.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no bit is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ConnectionMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ConnectionMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
