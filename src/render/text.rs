//! Text assembly for bordered tables.
//!
//! Cells are centered in both directions inside their measured box,
//! rows are joined with the theme's vertical edge, and horizontal
//! rules carry the matching corner and junction glyphs.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::coord::Coord;
use crate::layout::TableLayout;
use crate::types::Table;

/// Sizing options for [`Table::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Give every column the width of the widest.
    pub even_columns: bool,
    /// Give every row the height of the tallest.
    pub even_rows: bool,
    /// Stretch the rendered width to this many display columns when
    /// possible.
    pub stretch_width: Option<i64>,
    /// Stretch the rendered height to this many lines when possible.
    pub stretch_height: Option<i64>,
}

impl RenderOptions {
    /// Options for a natural-size render.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether every column takes the width of the widest.
    #[must_use]
    pub fn even_columns(mut self, even: bool) -> Self {
        self.even_columns = even;
        self
    }

    /// Set whether every row takes the height of the tallest.
    #[must_use]
    pub fn even_rows(mut self, even: bool) -> Self {
        self.even_rows = even;
        self
    }

    /// Stretch the rendered width to `target` display columns.
    #[must_use]
    pub fn stretch_width(mut self, target: i64) -> Self {
        self.stretch_width = Some(target);
        self
    }

    /// Stretch the rendered height to `target` lines.
    #[must_use]
    pub fn stretch_height(mut self, target: i64) -> Self {
        self.stretch_height = Some(target);
        self
    }
}

/// Which horizontal rule of the frame is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RulePosition {
    Top,
    Middle,
    Bottom,
}

impl Table {
    /// Render the table as a bordered string.
    ///
    /// A table with no cells renders as a single blank cell so the
    /// frame stays visible; stretch targets do not apply to that
    /// placeholder.
    #[must_use]
    pub fn render(&self, options: RenderOptions) -> String {
        if self.cells.is_empty() {
            let mut placeholder = Self::with_theme(self.theme);
            placeholder.set((0, 0), " ");
            return placeholder.render(RenderOptions {
                even_columns: options.even_columns,
                even_rows: options.even_rows,
                stretch_width: None,
                stretch_height: None,
            });
        }

        let layout = TableLayout::measure(self, options);
        let mut sections = Vec::new();
        sections.push(self.horizontal_rule(&layout.column_widths, RulePosition::Top));
        let mut y = 0_i64;
        for &height in &layout.row_heights {
            sections.push(self.build_row(y, height, &layout.column_widths).join("\n"));
            y += 1;
            if y != self.height() {
                sections.push(self.horizontal_rule(&layout.column_widths, RulePosition::Middle));
            }
        }
        sections.push(self.horizontal_rule(&layout.column_widths, RulePosition::Bottom));
        sections.join("\n")
    }

    /// Build the physical lines of one cell, centered both ways.
    ///
    /// Horizontal centering leaves the extra display column on the
    /// right; vertical centering leaves the extra blank line at the
    /// bottom.
    fn build_cell(&self, coord: Coord, height: i64, width: i64) -> Vec<String> {
        let text = self.cell(coord);
        let lines: Vec<String> = text.split('\n').map(|line| center(line, width)).collect();

        let height = usize::try_from(height).unwrap_or(0);
        let top = height.saturating_sub(lines.len()) / 2;
        let bottom = height.saturating_sub(lines.len() + top);
        let blank = " ".repeat(usize::try_from(width).unwrap_or(0));

        let mut cell = Vec::with_capacity(height.max(lines.len()));
        for _ in 0..top {
            cell.push(blank.clone());
        }
        cell.extend(lines);
        for _ in 0..bottom {
            cell.push(blank.clone());
        }
        cell
    }

    /// Assemble the physical lines of one table row, cells joined by
    /// the vertical edge glyph.
    fn build_row(&self, y: i64, height: i64, widths: &[i64]) -> Vec<String> {
        let line_count = usize::try_from(height).unwrap_or(0);
        let mut cells = Vec::with_capacity(widths.len());
        let mut x = 0_i64;
        for &width in widths {
            cells.push(self.build_cell((x, y), height, width));
            x += 1;
        }

        let edge = self.theme.vertical;
        (0..line_count)
            .map(|line_index| {
                let mut line = String::new();
                line.push(edge);
                for (cell_index, cell) in cells.iter().enumerate() {
                    if cell_index > 0 {
                        line.push(edge);
                    }
                    if let Some(fragment) = cell.get(line_index) {
                        line.push_str(fragment);
                    }
                }
                line.push(edge);
                line
            })
            .collect()
    }

    /// One full-width horizontal rule of the frame.
    fn horizontal_rule(&self, widths: &[i64], position: RulePosition) -> String {
        let (left, joint, right) = match position {
            RulePosition::Top => (
                self.theme.top_left,
                self.theme.top_junction,
                self.theme.top_right,
            ),
            RulePosition::Middle => (
                self.theme.left_junction,
                self.theme.cross,
                self.theme.right_junction,
            ),
            RulePosition::Bottom => (
                self.theme.bottom_left,
                self.theme.bottom_junction,
                self.theme.bottom_right,
            ),
        };

        let mut rule = String::new();
        rule.push(left);
        for (index, &width) in widths.iter().enumerate() {
            if index > 0 {
                rule.push(joint);
            }
            let fill = usize::try_from(width).unwrap_or(0);
            rule.extend(std::iter::repeat(self.theme.horizontal).take(fill));
        }
        rule.push(right);
        rule
    }
}

impl fmt::Display for Table {
    /// Natural-size render with the table's theme.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderOptions::default()))
    }
}

/// Center `line` in `width` display columns, extra space going right.
fn center(line: &str, width: i64) -> String {
    let width = usize::try_from(width).unwrap_or(0);
    let pad = width.saturating_sub(line.width());
    let left = pad / 2;
    let mut centered = String::with_capacity(line.len() + pad);
    centered.extend(std::iter::repeat(' ').take(left));
    centered.push_str(line);
    centered.extend(std::iter::repeat(' ').take(pad - left));
    centered
}
