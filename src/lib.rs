//! tabgrid - sparse grids rendered as bordered text tables
//!
//! Stores cell values in a sparse `(column, row)` map and renders them
//! with box-drawing borders:
//! - Multi-line cell content, centered both ways
//! - Natural, even, and stretched column/row sizing
//! - Negative indices counting from the far edge
//! - Sub-table slicing with per-axis strides, including reversal
//! - Six border palettes plus custom glyph sets
//!
//! # Usage
//!
//! ```
//! use tabgrid::{RenderOptions, Table, Theme};
//!
//! let mut table = Table::from_rows([["a", "bb"], ["ccc", "d"]]);
//! table.set((1, 1), "dd");
//! assert_eq!(table.cell((-1, -1)), "dd");
//!
//! table.set_theme(Theme::DOUBLE);
//! println!("{}", table.render(RenderOptions::default().even_columns(true)));
//! ```

// Data and access modules
pub mod coord;
pub mod error;
pub mod types;

// Sizing and rendering modules
pub mod layout;
pub mod render;

mod slice;

pub use coord::Coord;
pub use error::{Result, TabgridError};
pub use layout::TableLayout;
pub use render::RenderOptions;

pub use types::*;

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
