//! Sparse table storage and cell access.

use std::collections::HashMap;

use crate::coord::{self, Coord};
use crate::error::{Result, TabgridError};
use crate::types::Theme;

/// A sparse two-dimensional grid of display strings.
///
/// Cells live in a map keyed by `(column, row)`; any coordinate not
/// stored reads back as the empty string. Dimensions track the extent
/// of the stored keys: they grow with every insert and are recomputed
/// when a cell is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Sparse representation: (column, row) to display string.
    pub(crate) cells: HashMap<Coord, String>,
    /// Cached `(width, height)`, never negative.
    pub(crate) dimensions: (i64, i64),
    /// Border palette used when rendering.
    pub(crate) theme: Theme,
}

impl Table {
    /// Create an empty table with the default heavy border theme.
    #[must_use]
    pub fn new() -> Self {
        Self::with_theme(Theme::HEAVY)
    }

    /// Create an empty table with a specific border theme.
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            cells: HashMap::new(),
            dimensions: (0, 0),
            theme,
        }
    }

    /// Build a table from rows of cell values.
    ///
    /// The value at `rows[y][x]` lands at coordinate `(x, y)`.
    pub fn from_rows<R, C, V>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = V>,
        V: ToString,
    {
        let mut table = Self::new();
        let mut y = 0_i64;
        for row in rows {
            let mut x = 0_i64;
            for value in row {
                table.set((x, y), value);
                x += 1;
            }
            y += 1;
        }
        table
    }

    /// Store `value`'s display string at `coord` and return the string
    /// previously stored there, if any.
    ///
    /// Negative components wrap the same way [`Table::cell`] resolves
    /// them. Dimensions grow to cover the stored coordinate and never
    /// shrink on insert.
    pub fn set<V: ToString>(&mut self, coord: Coord, value: V) -> Option<String> {
        let (x, y) = coord::normalize(coord, self.dimensions);
        let previous = self.cells.insert((x, y), value.to_string());
        self.dimensions = (self.dimensions.0.max(x + 1), self.dimensions.1.max(y + 1));
        previous
    }

    /// Display string stored at `coord`, or `""` when the cell is empty.
    ///
    /// Negative components count from the far edge of a populated axis
    /// (`-1` is the last column or row). While an axis has zero extent
    /// the raw value is used instead, so negative keys stored into an
    /// empty table read back unchanged.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> String {
        let key = coord::normalize(coord, self.dimensions);
        self.cells.get(&key).cloned().unwrap_or_default()
    }

    /// Remove and return the display string at `coord`.
    ///
    /// The coordinate is matched as stored, with no negative-index
    /// wrapping. Dimensions are recomputed from the remaining cells.
    ///
    /// # Errors
    /// Returns [`TabgridError::CellNotFound`] when nothing is stored at
    /// `coord`.
    pub fn remove(&mut self, coord: Coord) -> Result<String> {
        let value = self
            .cells
            .remove(&coord)
            .ok_or(TabgridError::CellNotFound {
                column: coord.0,
                row: coord.1,
            })?;
        self.rebuild_dimensions();
        Ok(value)
    }

    /// Cached `(width, height)` of the stored extent.
    #[must_use]
    pub fn dimensions(&self) -> (i64, i64) {
        self.dimensions
    }

    /// Number of columns covered by stored cells.
    #[must_use]
    pub fn width(&self) -> i64 {
        self.dimensions.0
    }

    /// Number of rows covered by stored cells.
    #[must_use]
    pub fn height(&self) -> i64 {
        self.dimensions.1
    }

    /// Number of stored cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// True when no cells are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Border palette used when rendering.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Replace the border palette.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Iterate stored cells as `((column, row), display string)`.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &str)> + '_ {
        self.cells
            .iter()
            .map(|(&coord, value)| (coord, value.as_str()))
    }

    /// Recompute cached dimensions from the stored keys: per-axis
    /// maximum plus one, clamped at zero.
    pub(crate) fn rebuild_dimensions(&mut self) {
        let mut width = 0_i64;
        let mut height = 0_i64;
        for &(x, y) in self.cells.keys() {
            width = width.max(x + 1);
            height = height.max(y + 1);
        }
        self.dimensions = (width, height);
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect `(coordinate, value)` pairs into a table.
///
/// Coordinates are stored as given, with no negative-index wrapping;
/// dimensions are computed once from the full key set.
impl<V: ToString> FromIterator<(Coord, V)> for Table {
    fn from_iter<I: IntoIterator<Item = (Coord, V)>>(entries: I) -> Self {
        let mut table = Self::new();
        for (coord, value) in entries {
            table.cells.insert(coord, value.to_string());
        }
        table.rebuild_dimensions();
        table
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Table;
    use crate::types::Theme;

    /// Cell with position.
    #[derive(Serialize, Deserialize)]
    struct CellEntry {
        x: i64, // column (0-indexed)
        y: i64, // row (0-indexed)
        value: String,
    }

    /// Wire shape: sorted cell list plus the theme. Dimensions are
    /// recomputed on deserialize rather than trusted from input.
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct TableRepr {
        cells: Vec<CellEntry>,
        theme: Theme,
    }

    impl Serialize for Table {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut cells: Vec<CellEntry> = self
                .cells
                .iter()
                .map(|(&(x, y), value)| CellEntry {
                    x,
                    y,
                    value: value.clone(),
                })
                .collect();
            cells.sort_by_key(|entry| (entry.y, entry.x));
            TableRepr {
                cells,
                theme: self.theme,
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Table {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = TableRepr::deserialize(deserializer)?;
            let mut table = Table::with_theme(repr.theme);
            for entry in repr.cells {
                table.cells.insert((entry.x, entry.y), entry.value);
            }
            table.rebuild_dimensions();
            Ok(table)
        }
    }
}
