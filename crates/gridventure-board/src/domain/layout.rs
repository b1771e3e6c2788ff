//! Boustrophedon layout.

use serde::{Deserialize, Serialize};

/// A cell's position on the grid. Row 0 is the start row; column 0 is the
/// left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    /// Zero-based row counted from the start row.
    pub row: u32,
    /// Zero-based column counted from the left edge.
    pub col: u32,
}

impl GridCoord {
    /// Chebyshev (king-move) distance between two coordinates.
    #[must_use]
    pub const fn chebyshev(self, other: Self) -> u32 {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        if dr > dc { dr } else { dc }
    }
}

/// Maps a 1-based cell number to its coordinate on a `columns`-wide grid.
/// Even rows run left-to-right, odd rows right-to-left.
///
/// The caller guarantees `cell >= 1` and `columns >= 1`.
pub(crate) const fn snake_coord(cell: u32, columns: u32) -> GridCoord {
    let index = cell - 1;
    let row = index / columns;
    let col = index % columns;
    let col = if row.is_multiple_of(2) { col } else { columns - 1 - col };
    GridCoord { row, col }
}

/// Inverse of [`snake_coord`].
pub(crate) const fn snake_cell(coord: GridCoord, columns: u32) -> u32 {
    let offset = if coord.row.is_multiple_of(2) {
        coord.col
    } else {
        columns - 1 - coord.col
    };
    coord.row * columns + offset + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_runs_left_to_right() {
        assert_eq!(snake_coord(1, 10), GridCoord { row: 0, col: 0 });
        assert_eq!(snake_coord(10, 10), GridCoord { row: 0, col: 9 });
    }

    #[test]
    fn test_second_row_is_mirrored() {
        assert_eq!(snake_coord(11, 10), GridCoord { row: 1, col: 9 });
        assert_eq!(snake_coord(20, 10), GridCoord { row: 1, col: 0 });
        assert_eq!(snake_coord(21, 10), GridCoord { row: 2, col: 0 });
    }

    #[test]
    fn test_last_cell_lands_top_left_on_ten_by_ten() {
        assert_eq!(snake_coord(100, 10), GridCoord { row: 9, col: 0 });
    }

    #[test]
    fn test_snake_cell_inverts_snake_coord() {
        for cell in 1..=100 {
            assert_eq!(snake_cell(snake_coord(cell, 10), 10), cell);
        }
    }

    #[test]
    fn test_chebyshev_distance() {
        let a = GridCoord { row: 0, col: 9 };
        let b = GridCoord { row: 1, col: 9 };
        let c = GridCoord { row: 3, col: 5 };
        assert_eq!(a.chebyshev(b), 1);
        assert_eq!(a.chebyshev(c), 4);
        assert_eq!(c.chebyshev(c), 0);
    }
}
