//! Structured error types for tabgrid.

/// All errors that can occur editing tables or building themes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TabgridError {
    /// Removal target was not present in the grid.
    #[error("no cell stored at column {column}, row {row}")]
    CellNotFound {
        /// Column component of the missing coordinate.
        column: i64,
        /// Row component of the missing coordinate.
        row: i64,
    },

    /// A theme glyph string had the wrong number of characters.
    #[error("theme glyph set needs {expected} characters, found {found}")]
    BadGlyphSet {
        /// Characters a complete palette requires.
        expected: usize,
        /// Characters actually supplied.
        found: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TabgridError>;
