//! Query handlers for the Board Model.
//!
//! Read-only projections a presentation layer needs to draw the grid.

use serde::Serialize;

use crate::domain::board::{Board, Transition};
use crate::domain::layout::GridCoord;

/// One cell of the rendered grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Cell number.
    pub cell: u32,
    /// Grid coordinate.
    pub coord: GridCoord,
    /// Transition starting here, if any.
    pub transition: Option<Transition>,
}

/// The whole board in cell order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Number of cells.
    pub cell_count: u32,
    /// Grid width.
    pub columns: u32,
    /// Grid height.
    pub rows: u32,
    /// Every cell from 1 to `cell_count`.
    pub cells: Vec<CellView>,
}

/// Projects `board` into a [`BoardView`].
#[must_use]
pub fn board_view(board: &Board) -> BoardView {
    let cells = (1..=board.cell_count())
        .filter_map(|cell| {
            let coord = board.layout(cell).ok()?;
            let transition = board.classify(cell).ok()?;
            Some(CellView {
                cell,
                coord,
                transition,
            })
        })
        .collect();

    BoardView {
        cell_count: board.cell_count(),
        columns: board.columns(),
        rows: board.rows(),
        cells,
    }
}
