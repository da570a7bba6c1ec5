//! Box-drawing glyph palettes for table borders.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TabgridError};

/// Characters in a complete palette.
const GLYPH_COUNT: usize = 11;

/// Border glyph palette used when rendering a table.
///
/// Glyph-string order for [`Theme::from_glyphs`] and [`Theme::glyphs`]:
/// the four corners (top-left, top-right, bottom-left, bottom-right),
/// the vertical and horizontal edges, then the left, right, top, and
/// bottom junctions, and finally the four-way cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Theme {
    /// Top-left corner of the frame.
    pub top_left: char,
    /// Top-right corner of the frame.
    pub top_right: char,
    /// Bottom-left corner of the frame.
    pub bottom_left: char,
    /// Bottom-right corner of the frame.
    pub bottom_right: char,
    /// Vertical edge between and around cells.
    pub vertical: char,
    /// Horizontal rule fill.
    pub horizontal: char,
    /// Junction where a middle rule meets the left edge.
    pub left_junction: char,
    /// Junction where a middle rule meets the right edge.
    pub right_junction: char,
    /// Junction where a column boundary meets the top rule.
    pub top_junction: char,
    /// Junction where a column boundary meets the bottom rule.
    pub bottom_junction: char,
    /// Four-way crossing inside the table body.
    pub cross: char,
}

impl Theme {
    /// Heavy box-drawing lines (the default).
    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        vertical: '┃',
        horizontal: '━',
        left_junction: '┣',
        right_junction: '┫',
        top_junction: '┳',
        bottom_junction: '┻',
        cross: '╋',
    };

    /// Double box-drawing lines.
    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        vertical: '║',
        horizontal: '═',
        left_junction: '╠',
        right_junction: '╣',
        top_junction: '╦',
        bottom_junction: '╩',
        cross: '╬',
    };

    /// Middle dots at corners and junctions, open edges.
    pub const DOTS: Self = Self {
        top_left: '·',
        top_right: '·',
        bottom_left: '·',
        bottom_right: '·',
        vertical: ' ',
        horizontal: ' ',
        left_junction: '·',
        right_junction: '·',
        top_junction: '·',
        bottom_junction: '·',
        cross: '·',
    };

    /// ASCII pipes and dashes with open corners.
    pub const SIMPLE: Self = Self {
        top_left: ' ',
        top_right: ' ',
        bottom_left: ' ',
        bottom_right: ' ',
        vertical: '|',
        horizontal: '-',
        left_junction: ' ',
        right_junction: ' ',
        top_junction: ' ',
        bottom_junction: ' ',
        cross: ' ',
    };

    /// Middle-dot corners and junctions with ASCII edges.
    pub const DOTS_DASHED: Self = Self {
        top_left: '·',
        top_right: '·',
        bottom_left: '·',
        bottom_right: '·',
        vertical: '|',
        horizontal: '-',
        left_junction: '·',
        right_junction: '·',
        top_junction: '·',
        bottom_junction: '·',
        cross: '·',
    };

    /// Invisible borders, cell spacing preserved.
    pub const BLANK: Self = Self {
        top_left: ' ',
        top_right: ' ',
        bottom_left: ' ',
        bottom_right: ' ',
        vertical: ' ',
        horizontal: ' ',
        left_junction: ' ',
        right_junction: ' ',
        top_junction: ' ',
        bottom_junction: ' ',
        cross: ' ',
    };

    /// Build a theme from an 11-character glyph string in palette order.
    ///
    /// # Errors
    /// Returns [`TabgridError::BadGlyphSet`] when the string does not
    /// hold exactly 11 characters.
    pub fn from_glyphs(glyphs: &str) -> Result<Self> {
        let found = glyphs.chars().count();
        if found != GLYPH_COUNT {
            return Err(TabgridError::BadGlyphSet {
                expected: GLYPH_COUNT,
                found,
            });
        }

        let mut chars = glyphs.chars();
        let mut take = || chars.next().unwrap_or(' ');
        Ok(Self {
            top_left: take(),
            top_right: take(),
            bottom_left: take(),
            bottom_right: take(),
            vertical: take(),
            horizontal: take(),
            left_junction: take(),
            right_junction: take(),
            top_junction: take(),
            bottom_junction: take(),
            cross: take(),
        })
    }

    /// The palette as an 11-character string in palette order.
    #[must_use]
    pub fn glyphs(&self) -> String {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
            self.vertical,
            self.horizontal,
            self.left_junction,
            self.right_junction,
            self.top_junction,
            self.bottom_junction,
            self.cross,
        ]
        .iter()
        .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::HEAVY
    }
}
