//! Field dimensions and the position ⇄ primitive bijection.

use crate::position::Position;
use std::fmt;

/// The immutable size of a field.
///
/// `rows()` is always `visible_rows + hidden_rows`; it is derived, never
/// stored. Hidden rows sit above the visible ones.
///
/// # Examples
///
/// ```
/// use tsumo_core::{Dimension, Position};
///
/// let dim = Dimension::default();
/// assert_eq!((dim.columns(), dim.visible_rows(), dim.hidden_rows()), (6, 12, 1));
/// assert_eq!(dim.rows(), 13);
///
/// let p = Position::new(12, 2);
/// assert!(dim.contains(p));
/// assert!(dim.is_hidden(p));
/// assert_eq!(dim.primitive(p), Some(2 * 13 + 12));
/// assert_eq!(dim.position(38), Some(p));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    columns: u32,
    visible_rows: u32,
    hidden_rows: u32,
}

impl Dimension {
    /// Default column count.
    pub const DEFAULT_COLUMNS: u32 = 6;
    /// Default visible row count.
    pub const DEFAULT_VISIBLE_ROWS: u32 = 12;
    /// Default hidden row count.
    pub const DEFAULT_HIDDEN_ROWS: u32 = 1;

    /// Create a dimension.
    pub const fn new(columns: u32, visible_rows: u32, hidden_rows: u32) -> Self {
        Self {
            columns,
            visible_rows,
            hidden_rows,
        }
    }

    /// Number of columns.
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of visible rows.
    pub const fn visible_rows(&self) -> u32 {
        self.visible_rows
    }

    /// Number of hidden rows above the visible area.
    pub const fn hidden_rows(&self) -> u32 {
        self.hidden_rows
    }

    /// Total rows, visible plus hidden, saturating at `u32::MAX`.
    pub const fn rows(&self) -> u32 {
        self.visible_rows.saturating_add(self.hidden_rows)
    }

    /// Total number of cells, saturating at `usize::MAX`.
    pub const fn cell_count(&self) -> usize {
        (self.columns as usize).saturating_mul(self.rows() as usize)
    }

    /// Whether `position` lies inside the grid.
    pub const fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && (position.row as u32) < self.rows()
            && position.column >= 0
            && (position.column as u32) < self.columns
    }

    /// Whether `position` is inside the grid and in a hidden row.
    pub const fn is_hidden(&self, position: Position) -> bool {
        self.contains(position) && position.row as u32 >= self.visible_rows
    }

    /// The primitive index `column * rows + row`, or `None` if out of bounds
    /// or not representable as `usize`.
    pub const fn primitive(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        match (position.column as usize).checked_mul(self.rows() as usize) {
            Some(base) => base.checked_add(position.row as usize),
            None => None,
        }
    }

    /// Inverse of [`primitive`](Self::primitive).
    pub const fn position(&self, primitive: usize) -> Option<Position> {
        if primitive >= self.cell_count() {
            return None;
        }
        let rows = self.rows() as usize;
        Some(Position::new(
            (primitive % rows) as i32,
            (primitive / rows) as i32,
        ))
    }

    /// Every valid position in column-major, bottom-to-top order.
    ///
    /// Column 0 bottom to top, then column 1, and so on. Serializers depend
    /// on this order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let rows = self.rows() as i32;
        (0..self.columns as i32).flat_map(move |c| (0..rows).map(move |r| Position::new(r, c)))
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_COLUMNS,
            Self::DEFAULT_VISIBLE_ROWS,
            Self::DEFAULT_HIDDEN_ROWS,
        )
    }
}

impl fmt::Debug for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}+{}",
            self.columns, self.visible_rows, self.hidden_rows
        )
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} columns x {} rows ({} hidden)",
            self.columns,
            self.rows(),
            self.hidden_rows
        )
    }
}
