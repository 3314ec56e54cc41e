//! The wall-bordered ASCII art format.
//!
//! ```text
//!    R        <- hidden row: two-space walls
//! || R B   || <- visible rows: `||` walls
//! || G G B ||
//! ++=======++
//! ```
//!
//! Each cell is its kind's symbol followed by a space, and every row starts
//! with one space after the left wall. Rows run top to bottom. The column
//! count comes from the width of the bottom border and the hidden row count
//! from the leading rows that do not start with a `|` wall.

use tsumo_core::{Dimension, FieldObject, Position};

use crate::error::AsciiError;
use crate::field::Field;

const VISIBLE_WALL: &str = "||";
const HIDDEN_WALL: &str = "  ";
const CORNER: &str = "++";
const FLOOR: char = '=';

/// Offset of the first cell symbol within a row line.
const FIRST_CELL: usize = 3;

/// Render `field` as ASCII art. Lines are joined by `\n` with no trailing
/// newline.
///
/// # Examples
///
/// ```
/// use tsumo_core::{Dimension, FieldObject, Position};
/// use tsumo_field::ascii::to_ascii_art;
/// use tsumo_field::Field;
///
/// let mut field = Field::new(Dimension::new(2, 1, 1));
/// field.set(Position::new(0, 1), FieldObject::Red);
/// assert_eq!(to_ascii_art(&field), "         \n||   R ||\n++=====++");
/// ```
pub fn to_ascii_art(field: &Field) -> String {
    let dimension = field.dimension();
    let columns = dimension.columns() as i32;
    let mut lines = Vec::with_capacity(dimension.rows() as usize + 1);

    for row in (0..dimension.rows() as i32).rev() {
        let wall = if row as u32 >= dimension.visible_rows() {
            HIDDEN_WALL
        } else {
            VISIBLE_WALL
        };
        let mut line = String::with_capacity(columns as usize * 2 + 5);
        line.push_str(wall);
        line.push(' ');
        for column in 0..columns {
            let object = field.get(Position::new(row, column)).unwrap_or_default();
            line.push(object.symbol());
            line.push(' ');
        }
        line.push_str(wall);
        lines.push(line);
    }

    let mut border = String::from(CORNER);
    border.extend(std::iter::repeat_n(FLOOR, columns as usize * 2 + 1));
    border.push_str(CORNER);
    lines.push(border);

    lines.join("\n")
}

/// Parse ASCII art back into a field.
///
/// Blank lines after the border are ignored. A row line shorter than the
/// border is padded with empty cells, so stripped trailing whitespace is
/// tolerated.
///
/// # Errors
///
/// - [`AsciiError::MissingBorder`] when there is no non-blank line.
/// - [`AsciiError::MalformedBorder`] when the last line is not `++=..=++`
///   with an odd number of `=`.
/// - [`AsciiError::RowTooWide`] when a row is wider than the border.
/// - [`AsciiError::UnknownSymbol`] when a cell names no registered kind.
pub fn from_ascii_art(art: &str) -> Result<Field, AsciiError> {
    let mut lines: Vec<&str> = art.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    let border = lines.pop().ok_or(AsciiError::MissingBorder)?;
    let columns = parse_border(border)?;

    let hidden_rows = lines
        .iter()
        .take_while(|l| !l.starts_with(VISIBLE_WALL))
        .count() as u32;
    let visible_rows = lines.len() as u32 - hidden_rows;
    let dimension = Dimension::new(columns, visible_rows, hidden_rows);
    let expected_width = border.chars().count();

    let mut field = Field::new(dimension);
    for (i, line) in lines.iter().enumerate() {
        let row = dimension.rows() - 1 - i as u32;
        let chars: Vec<char> = line.chars().collect();
        if chars.len() > expected_width {
            return Err(AsciiError::RowTooWide {
                row,
                width: chars.len(),
                expected: expected_width,
            });
        }
        for column in 0..columns {
            let symbol = chars
                .get(FIRST_CELL + 2 * column as usize)
                .copied()
                .unwrap_or(FieldObject::Empty.symbol());
            let object = FieldObject::from_symbol(symbol).ok_or(AsciiError::UnknownSymbol {
                symbol,
                row,
                column,
            })?;
            field.set(Position::new(row as i32, column as i32), object);
        }
    }

    Ok(field)
}

/// Column count encoded by a `++===++` border.
fn parse_border(line: &str) -> Result<u32, AsciiError> {
    let malformed = || AsciiError::MalformedBorder {
        line: line.to_string(),
    };
    let floor = line
        .strip_prefix(CORNER)
        .and_then(|rest| rest.strip_suffix(CORNER))
        .ok_or_else(malformed)?;
    let width = floor.chars().count();
    if width == 0 || width % 2 == 0 || floor.chars().any(|c| c != FLOOR) {
        return Err(malformed());
    }
    Ok((width / 2) as u32)
}
