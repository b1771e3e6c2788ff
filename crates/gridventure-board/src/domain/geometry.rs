//! Overlay geometry for drawing a transition line.
//!
//! Coordinates are percentages of the board's width and height with the
//! origin in the top-left corner, so the start row sits at the bottom.

use gridventure_core::error::DomainError;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::layout::GridCoord;

/// A point in percentage space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the left edge, in percent.
    pub x: f64,
    /// Vertical offset from the top edge, in percent.
    pub y: f64,
}

/// Where to draw the line for one transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayGeometry {
    /// Centre of the source cell.
    pub from: Point,
    /// Centre of the destination cell.
    pub to: Point,
    /// Straight-line distance between the two centres.
    pub length: f64,
    /// Direction of travel in degrees, measured like `atan2(dy, dx)`.
    pub angle_degrees: f64,
}

impl Board {
    /// Centre of `cell` in percentage space.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CellOutOfRange` for cells outside the board.
    pub fn cell_center(&self, cell: u32) -> Result<Point, DomainError> {
        let GridCoord { row, col } = self.layout(cell)?;
        let cell_width = 100.0 / f64::from(self.columns());
        let cell_height = 100.0 / f64::from(self.rows());
        Ok(Point {
            x: (f64::from(col) + 0.5) * cell_width,
            y: 100.0 - (f64::from(row) + 0.5) * cell_height,
        })
    }

    /// Geometry of the line from `origin` to `destination`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CellOutOfRange` if either cell is off the board.
    pub fn overlay_geometry(
        &self,
        origin: u32,
        destination: u32,
    ) -> Result<OverlayGeometry, DomainError> {
        let from = self.cell_center(origin)?;
        let to = self.cell_center(destination)?;
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        Ok(OverlayGeometry {
            from,
            to,
            length: dx.hypot(dy),
            angle_degrees: dy.atan2(dx).to_degrees(),
        })
    }
}
