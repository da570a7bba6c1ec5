//! Grid coordinates and negative-index handling.

/// A `(column, row)` position in a table.
pub type Coord = (i64, i64);

/// Wrap a negative axis value into `0..len` (`-1` becomes `len - 1`).
///
/// A zero-length axis leaves the value untouched, so literal negative
/// keys stay addressable while that axis is empty.
pub(crate) fn normalize_axis(value: i64, len: i64) -> i64 {
    if value < 0 && len > 0 {
        value.rem_euclid(len)
    } else {
        value
    }
}

/// Normalize both components of a coordinate against `(width, height)`.
pub(crate) fn normalize(coord: Coord, dimensions: (i64, i64)) -> Coord {
    (
        normalize_axis(coord.0, dimensions.0),
        normalize_axis(coord.1, dimensions.1),
    )
}
