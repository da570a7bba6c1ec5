//! Content-driven sizing for rendered tables.
//!
//! Natural column widths and row heights are measured from cell text
//! in display columns and lines, with even and stretched variants
//! layered on top for the renderer.

use unicode_width::UnicodeWidthStr;

use crate::render::RenderOptions;
use crate::types::Table;

/// Pre-computed sizing for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Width of every rendered column, in display columns.
    pub column_widths: Vec<i64>,
    /// Height of every rendered row, in lines.
    pub row_heights: Vec<i64>,
}

impl TableLayout {
    /// Measure a table under the given sizing options.
    #[must_use]
    pub fn measure(table: &Table, options: RenderOptions) -> Self {
        Self {
            column_widths: table.column_widths(options.even_columns, options.stretch_width),
            row_heights: table.row_heights(options.even_rows, options.stretch_height),
        }
    }

    /// Total rendered width, border glyphs included.
    #[must_use]
    pub fn total_width(&self) -> i64 {
        span(&self.column_widths)
    }

    /// Total rendered height, rule lines included.
    #[must_use]
    pub fn total_height(&self) -> i64 {
        span(&self.row_heights)
    }
}

impl Table {
    /// Width of `column` in display columns: the widest line of any
    /// cell in it. Missing cells measure as empty, so out-of-range
    /// columns and empty tables measure 0.
    ///
    /// Negative column values resolve the way [`Table::cell`] resolves
    /// them.
    #[must_use]
    pub fn column_width(&self, column: i64) -> i64 {
        (0..self.height())
            .map(|y| max_line_width(&self.cell((column, y))))
            .max()
            .unwrap_or(0)
    }

    /// Height of `row` in lines: the line count of the tallest cell in
    /// it. Out-of-range rows on a populated table measure 1, since
    /// every missing cell still occupies one blank line.
    #[must_use]
    pub fn row_height(&self, row: i64) -> i64 {
        (0..self.width())
            .map(|x| line_count(&self.cell((x, row))))
            .max()
            .unwrap_or(0)
    }

    /// Widest natural column width of the table.
    #[must_use]
    pub fn max_column_width(&self) -> i64 {
        (0..self.width())
            .map(|x| self.column_width(x))
            .max()
            .unwrap_or(0)
    }

    /// Tallest natural row height of the table.
    #[must_use]
    pub fn max_row_height(&self) -> i64 {
        (0..self.height())
            .map(|y| self.row_height(y))
            .max()
            .unwrap_or(0)
    }

    /// Per-column widths used for rendering.
    ///
    /// `even` gives every column the width of the widest. `stretch_to`
    /// scales widths so the rendered table, borders included, spans the
    /// target when that needs no shrinking; an unsatisfiable target
    /// falls back to the unstretched (or even) widths.
    #[must_use]
    pub fn column_widths(&self, even: bool, stretch_to: Option<i64>) -> Vec<i64> {
        let natural = (0..self.width()).map(|x| self.column_width(x)).collect();
        sized(natural, even, stretch_to)
    }

    /// Per-row heights used for rendering, under the same policy as
    /// [`Table::column_widths`] on the vertical axis.
    #[must_use]
    pub fn row_heights(&self, even: bool, stretch_to: Option<i64>) -> Vec<i64> {
        let natural = (0..self.height()).map(|y| self.row_height(y)).collect();
        sized(natural, even, stretch_to)
    }
}

/// Apply the stretch and evenness policy to a natural size vector.
fn sized(natural: Vec<i64>, even: bool, stretch_to: Option<i64>) -> Vec<i64> {
    if let Some(target) = stretch_to {
        if let Some(stretched) = stretch(target, &natural, even) {
            return stretched;
        }
    }
    if even {
        let largest = natural.iter().copied().max().unwrap_or(0);
        return vec![largest; natural.len()];
    }
    natural
}

/// Scale a size vector so content plus borders spans `target`.
///
/// `target` counts every border line, so the distributable span is
/// `target - len - 1`. Returns None when the target cannot be met
/// without shrinking an entry.
fn stretch(target: i64, sizes: &[i64], even: bool) -> Option<Vec<i64>> {
    let count = i64::try_from(sizes.len()).ok()?;
    let available = target - count - 1;

    if even {
        let largest = sizes.iter().copied().max()?;
        if largest.checked_mul(count).map_or(true, |span| span >= available) {
            return None;
        }
        let base = available / count;
        let extra = usize::try_from(available - base * count).unwrap_or(0);
        return Some(
            (0..sizes.len())
                .map(|index| if index < extra { base + 1 } else { base })
                .collect(),
        );
    }

    let total: i64 = sizes.iter().sum();
    if total > 0 && available > total {
        return Some(
            sizes
                .iter()
                .map(|&size| size.checked_mul(available).unwrap_or(i64::MAX) / total)
                .collect(),
        );
    }
    None
}

/// Display width of the widest line in a cell's text.
pub(crate) fn max_line_width(text: &str) -> i64 {
    text.split('\n')
        .map(|line| i64::try_from(line.width()).unwrap_or(i64::MAX))
        .max()
        .unwrap_or(0)
}

/// Number of lines in a cell's text. The text splits on `'\n'`
/// exactly, so a trailing newline yields a final empty line.
pub(crate) fn line_count(text: &str) -> i64 {
    i64::try_from(text.split('\n').count()).unwrap_or(i64::MAX)
}

/// Content sizes plus one border line around and between entries.
fn span(sizes: &[i64]) -> i64 {
    let content: i64 = sizes.iter().sum();
    let borders = i64::try_from(sizes.len())
        .unwrap_or(i64::MAX)
        .saturating_add(1);
    content.saturating_add(borders)
}
