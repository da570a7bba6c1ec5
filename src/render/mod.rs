//! Text rendering of tables with box-drawing borders.

mod text;

pub use text::RenderOptions;
