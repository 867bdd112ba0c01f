use derive_more::{Display, Error, IsVariant};

/// An error produced while parsing a [`Grid`](super::Grid) from text.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error, IsVariant)]
pub enum GridParseError {
    /// The text contained no rows.
    #[display("grid contains no rows")]
    Empty,
    /// A row didn't have the same number of cells as the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// The index of the offending row.
        row: usize,
        /// The width of the first row.
        expected: usize,
        /// The width of the offending row.
        found: usize,
    },
    /// A cell wasn't a wall (`#`), a unit cell (`.`) or a weight digit (`1` to `9`).
    #[display("unknown cell {glyph:?} at row {row}, column {column}")]
    UnknownCell {
        /// The index of the offending row.
        row: usize,
        /// The index of the offending column.
        column: usize,
        /// The character found.
        glyph: char,
    },
}
