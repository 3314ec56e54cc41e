//! Error types for field parsing.

use std::error::Error;
use std::fmt;

/// Errors from parsing the ASCII art format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AsciiError {
    /// The input has no bottom border line.
    MissingBorder,
    /// The bottom border is not of the form `++===...++`.
    MalformedBorder {
        /// The offending line.
        line: String,
    },
    /// A cell holds a symbol that names no registered kind.
    UnknownSymbol {
        /// The unrecognized symbol.
        symbol: char,
        /// Row of the cell (0 = bottom).
        row: u32,
        /// Column of the cell.
        column: u32,
    },
    /// A row holds more cells than the border allows.
    RowTooWide {
        /// Row index (0 = bottom).
        row: u32,
        /// Width of the row line in characters.
        width: usize,
        /// Maximum width implied by the border.
        expected: usize,
    },
}

impl fmt::Display for AsciiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBorder => write!(f, "missing bottom border"),
            Self::MalformedBorder { line } => write!(f, "malformed bottom border {line:?}"),
            Self::UnknownSymbol {
                symbol,
                row,
                column,
            } => write!(f, "unknown symbol {symbol:?} at row {row}, column {column}"),
            Self::RowTooWide {
                row,
                width,
                expected,
            } => write!(
                f,
                "row {row} is {width} characters wide, expected at most {expected}"
            ),
        }
    }
}

impl Error for AsciiError {}
