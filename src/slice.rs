//! Sub-table extraction and axis reversal.

use crate::types::{GridRange, Table};

impl Table {
    /// Copy of the table with the chosen axes mirrored.
    ///
    /// Every cell inside the `0..width` by `0..height` extent is
    /// re-keyed to `width - 1 - column` and `height - 1 - row` on the
    /// flipped axes. Cells stored at raw negative keys lie outside the
    /// mirrored extent and are dropped. The theme carries over.
    #[must_use]
    pub fn reverse(&self, flip_columns: bool, flip_rows: bool) -> Self {
        let (width, height) = self.dimensions;
        let mut reversed = Self::with_theme(self.theme);
        for (&(x, y), value) in &self.cells {
            if x < 0 || y < 0 {
                continue;
            }
            let key = (
                if flip_columns { width - 1 - x } else { x },
                if flip_rows { height - 1 - y } else { y },
            );
            reversed.set(key, value);
        }
        reversed
    }

    /// Copy of the cells selected by `range`, keyed at their original
    /// coordinates.
    ///
    /// Unset range components default to the full extent with unit
    /// steps; a step component of 0 is treated as 1. A negative step
    /// mirrors that axis first, then selects with the start and stop
    /// pairs swapped and the steps' absolute values, so a full-range
    /// negative step is equivalent to [`Table::reverse`]. The theme
    /// carries over.
    #[must_use]
    pub fn slice(&self, range: GridRange) -> Self {
        let raw_step = range.step.unwrap_or((1, 1));
        let step = (unit_default(raw_step.0), unit_default(raw_step.1));
        if step.0 < 0 || step.1 < 0 {
            let mirrored = self.reverse(step.0 < 0, step.1 < 0);
            return mirrored.slice(GridRange {
                start: range.stop,
                stop: range.start,
                step: Some((step.0.saturating_abs(), step.1.saturating_abs())),
            });
        }

        let start = range.start.unwrap_or((0, 0));
        let stop = range.stop.unwrap_or(self.dimensions);
        let mut sliced = Self::with_theme(self.theme);
        for x in stepped(start.0, stop.0, step.0) {
            for y in stepped(start.1, stop.1, step.1) {
                if let Some(value) = self.cells.get(&(x, y)) {
                    sliced.set((x, y), value);
                }
            }
        }
        sliced
    }
}

/// Steps of 0 select nothing useful; treat them as unit strides.
fn unit_default(step: i64) -> i64 {
    if step == 0 {
        1
    } else {
        step
    }
}

/// Half-open range walked with a strictly positive stride.
fn stepped(start: i64, stop: i64, step: i64) -> impl Iterator<Item = i64> {
    debug_assert!(step > 0);
    (start..stop).step_by(usize::try_from(step).unwrap_or(usize::MAX))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::types::Theme;

    fn sample() -> Table {
        Table::from_rows([["a", "b", "c"], ["d", "e", "f"]])
    }

    #[test]
    fn test_reverse_columns() {
        let reversed = sample().reverse(true, false);
        assert_eq!(reversed.cell((0, 0)), "c");
        assert_eq!(reversed.cell((2, 0)), "a");
        assert_eq!(reversed.cell((1, 1)), "e");
        assert_eq!(reversed.dimensions(), (3, 2));
    }

    #[test]
    fn test_reverse_rows() {
        let reversed = sample().reverse(false, true);
        assert_eq!(reversed.cell((0, 0)), "d");
        assert_eq!(reversed.cell((0, 1)), "a");
    }

    #[test]
    fn test_reverse_both_is_involution() {
        let table = sample();
        assert_eq!(table.reverse(true, true).reverse(true, true), table);
    }

    #[test]
    fn test_reverse_neither_copies() {
        let table = sample();
        assert_eq!(table.reverse(false, false), table);
    }

    #[test]
    fn test_reverse_skips_holes() {
        let mut table = Table::new();
        table.set((0, 0), "a");
        table.set((2, 0), "c");
        let reversed = table.reverse(true, false);
        assert_eq!(reversed.cell_count(), 2);
        assert_eq!(reversed.cell((0, 0)), "c");
        assert_eq!(reversed.cell((1, 0)), "");
        assert_eq!(reversed.cell((2, 0)), "a");
    }

    #[test]
    fn test_reverse_drops_raw_negative_keys() {
        let mut table = Table::new();
        table.set((-2, 0), "hidden");
        table.set((1, 0), "kept");
        let reversed = table.reverse(true, false);
        assert_eq!(reversed.cell_count(), 1);
        assert_eq!(reversed.cell((0, 0)), "kept");
    }

    #[test]
    fn test_reverse_carries_theme() {
        let table = Table::with_theme(Theme::DOUBLE);
        assert_eq!(table.reverse(true, true).theme(), Theme::DOUBLE);
    }

    #[test]
    fn test_slice_full_range_copies() {
        let table = sample();
        assert_eq!(table.slice(GridRange::full()), table);
    }

    #[test]
    fn test_slice_keeps_original_coordinates() {
        let sliced = sample().slice(GridRange::bounded((1, 0), (3, 2)));
        assert_eq!(sliced.cell((1, 0)), "b");
        assert_eq!(sliced.cell((2, 1)), "f");
        // Nothing is re-numbered to start at zero.
        assert_eq!(sliced.cell((0, 0)), "");
        assert_eq!(sliced.dimensions(), (3, 2));
    }

    #[test]
    fn test_slice_with_stride() {
        let table = Table::from_rows([["0", "1", "2", "3", "4"]]);
        let sliced = table.slice(GridRange::full().with_step((2, 1)));
        assert_eq!(sliced.cell_count(), 3);
        assert_eq!(sliced.cell((0, 0)), "0");
        assert_eq!(sliced.cell((2, 0)), "2");
        assert_eq!(sliced.cell((4, 0)), "4");
    }

    #[test]
    fn test_slice_zero_step_acts_as_unit() {
        let table = sample();
        assert_eq!(
            table.slice(GridRange::full().with_step((0, 0))),
            table.slice(GridRange::full())
        );
    }

    #[test]
    fn test_slice_negative_step_reverses() {
        let table = sample();
        assert_eq!(
            table.slice(GridRange::full().with_step((-1, -1))),
            table.reverse(true, true)
        );
        assert_eq!(
            table.slice(GridRange::full().with_step((-1, 1))),
            table.reverse(true, false)
        );
    }

    #[test]
    fn test_slice_negative_step_swaps_explicit_bounds() {
        let table = Table::from_rows([["0", "1", "2", "3"]]);
        // Mirror first, then select from stop (inclusive) to start
        // (exclusive) on the mirrored table.
        let sliced = table.slice(GridRange::bounded((3, 1), (0, 0)).with_step((-1, 1)));
        assert_eq!(sliced.cell_count(), 3);
        assert_eq!(sliced.cell((0, 0)), "3");
        assert_eq!(sliced.cell((1, 0)), "2");
        assert_eq!(sliced.cell((2, 0)), "1");
    }

    #[test]
    fn test_slice_negative_step_with_mixed_bounds_selects_nothing() {
        let table = Table::from_rows([["0", "1", "2", "3"]]);
        // Swapped whole, the stop pair's row lands above the start
        // pair's row and the row range collapses.
        let sliced = table.slice(GridRange::bounded((3, 0), (1, 1)).with_step((-1, 1)));
        assert!(sliced.is_empty());
    }

    #[test]
    fn test_slice_empty_when_start_beyond_stop() {
        let table = sample();
        let sliced = table.slice(GridRange::bounded((2, 0), (1, 1)));
        assert!(sliced.is_empty());
        assert_eq!(sliced.dimensions(), (0, 0));
    }

    #[test]
    fn test_slice_carries_theme() {
        let mut table = Table::with_theme(Theme::SIMPLE);
        table.set((0, 0), "a");
        assert_eq!(table.slice(GridRange::full()).theme(), Theme::SIMPLE);
    }

    #[test]
    fn test_stepped_matches_half_open_semantics() {
        let collected: Vec<i64> = stepped(0, 5, 2).collect();
        assert_eq!(collected, vec![0, 2, 4]);
        assert_eq!(stepped(3, 3, 1).count(), 0);
        assert_eq!(stepped(4, 2, 1).count(), 0);
    }
}
