//! Slice parameters for extracting a sub-table.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Start, stop, and step pairs describing a rectangular slice.
///
/// Each pair is `(column, row)`. Unset components are resolved at slice
/// time: `start` to `(0, 0)`, `stop` to the table dimensions, `step` to
/// `(1, 1)`. A step component of 0 is treated as 1; a negative step
/// walks that axis from the far edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GridRange {
    /// Inclusive slice origin.
    pub start: Option<(i64, i64)>,
    /// Exclusive slice end.
    pub stop: Option<(i64, i64)>,
    /// Per-axis stride.
    pub step: Option<(i64, i64)>,
}

impl GridRange {
    /// Range covering the whole table.
    #[must_use]
    pub fn full() -> Self {
        Self::default()
    }

    /// Range from `start` (inclusive) to `stop` (exclusive).
    #[must_use]
    pub fn bounded(start: (i64, i64), stop: (i64, i64)) -> Self {
        Self {
            start: Some(start),
            stop: Some(stop),
            step: None,
        }
    }

    /// Set the slice origin.
    #[must_use]
    pub fn with_start(mut self, start: (i64, i64)) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the exclusive slice end.
    #[must_use]
    pub fn with_stop(mut self, stop: (i64, i64)) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Set the per-axis stride.
    #[must_use]
    pub fn with_step(mut self, step: (i64, i64)) -> Self {
        self.step = Some(step);
        self
    }
}
