//! Sizing engine for rendered tables.
//!
//! This module handles:
//! - Measuring natural column widths and row heights from cell text
//! - Even sizing, where every column or row takes the largest size
//! - Stretching a table to a target rendered width or height

mod sizing;

pub use sizing::TableLayout;
