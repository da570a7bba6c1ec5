//! Data types for tables, slices, and border themes.

mod range;
mod table;
mod theme;

pub use range::*;
pub use table::*;
pub use theme::*;
