//! Authored board configuration.

use std::collections::BTreeMap;

use gridventure_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Cells on the standard board.
pub const STANDARD_CELL_COUNT: u32 = 100;

/// Columns on the standard board.
pub const STANDARD_COLUMNS: u32 = 10;

/// Largest board a theme may declare.
pub const MAX_CELL_COUNT: u32 = 10_000;

/// Board dimensions and the two transition tables, as authored.
///
/// Nothing here is trusted until [`BoardConfig::validate`] has run;
/// [`crate::domain::board::Board::new`] does that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Total number of cells. The last cell is the goal.
    #[serde(default = "default_cell_count")]
    pub cell_count: u32,
    /// Grid width.
    #[serde(default = "default_columns")]
    pub columns: u32,
    /// Boost sources and where they lead.
    #[serde(default)]
    pub boosts: BTreeMap<u32, u32>,
    /// Setback sources and where they lead.
    #[serde(default)]
    pub setbacks: BTreeMap<u32, u32>,
}

const fn default_cell_count() -> u32 {
    STANDARD_CELL_COUNT
}

const fn default_columns() -> u32 {
    STANDARD_COLUMNS
}

impl BoardConfig {
    /// The standard 10×10 board with its boost and setback tables.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cell_count: STANDARD_CELL_COUNT,
            columns: STANDARD_COLUMNS,
            boosts: BTreeMap::from([
                (4, 14),
                (9, 21),
                (16, 26),
                (20, 42),
                (28, 84),
                (40, 59),
                (51, 67),
                (63, 81),
                (71, 91),
            ]),
            setbacks: BTreeMap::from([
                (98, 78),
                (95, 75),
                (93, 73),
                (87, 24),
                (62, 19),
                (54, 34),
                (49, 11),
                (64, 43),
                (56, 53),
                (88, 67),
            ]),
        }
    }

    /// Validates dimensions and both tables.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBoard` describing the first violation:
    /// bad or oversized dimensions, a cell outside the board, a source on the first or
    /// last cell, a cell that is both a boost and a setback source, a
    /// source mapping to itself, or two sources mapping onto each other.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.columns == 0 || self.cell_count == 0 {
            return Err(DomainError::InvalidBoard(
                "cell_count and columns must be positive".to_owned(),
            ));
        }
        if self.cell_count > MAX_CELL_COUNT {
            return Err(DomainError::InvalidBoard(format!(
                "cell_count {} exceeds the maximum of {MAX_CELL_COUNT}",
                self.cell_count
            )));
        }
        if !self.cell_count.is_multiple_of(self.columns) {
            return Err(DomainError::InvalidBoard(format!(
                "cell_count {} is not a multiple of columns {}",
                self.cell_count, self.columns
            )));
        }
        if self.cell_count < 2 {
            return Err(DomainError::InvalidBoard(
                "board needs at least a start and a goal cell".to_owned(),
            ));
        }

        for (name, table) in [("boost", &self.boosts), ("setback", &self.setbacks)] {
            for (&source, &destination) in table {
                for cell in [source, destination] {
                    if !(1..=self.cell_count).contains(&cell) {
                        return Err(DomainError::InvalidBoard(format!(
                            "{name} {source}->{destination} references cell {cell} outside [1, {}]",
                            self.cell_count
                        )));
                    }
                }
                if source == 1 || source == self.cell_count {
                    return Err(DomainError::InvalidBoard(format!(
                        "{name} source {source} sits on a board edge"
                    )));
                }
                if source == destination {
                    return Err(DomainError::InvalidBoard(format!(
                        "{name} source {source} maps to itself"
                    )));
                }
            }
        }

        if let Some(cell) = self.boosts.keys().find(|k| self.setbacks.contains_key(*k)) {
            return Err(DomainError::InvalidBoard(format!(
                "cell {cell} is both a boost and a setback source"
            )));
        }

        for (&source, &destination) in self.all_transitions() {
            if self.destination_of(destination) == Some(source) {
                return Err(DomainError::InvalidBoard(format!(
                    "cells {source} and {destination} form a transition cycle"
                )));
            }
        }

        Ok(())
    }

    /// Transitions whose destination is itself a source. These are legal
    /// but only the first hop is ever applied.
    #[must_use]
    pub fn chained_transitions(&self) -> Vec<(u32, u32)> {
        self.all_transitions()
            .filter(|(_, destination)| self.destination_of(**destination).is_some())
            .map(|(&source, &destination)| (source, destination))
            .collect()
    }

    fn all_transitions(&self) -> impl Iterator<Item = (&u32, &u32)> {
        self.boosts.iter().chain(self.setbacks.iter())
    }

    fn destination_of(&self, cell: u32) -> Option<u32> {
        self.boosts
            .get(&cell)
            .or_else(|| self.setbacks.get(&cell))
            .copied()
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}
