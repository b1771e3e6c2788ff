//! The validated, immutable board.

use gridventure_core::error::DomainError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::BoardConfig;
use super::layout::{GridCoord, snake_cell, snake_coord};

/// Whether a transition moves the player forward or back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// A boost (ladder).
    Boost,
    /// A setback (snake).
    Setback,
}

/// Result of classifying a transition source cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Boost or setback.
    pub kind: TransitionKind,
    /// Cell the player is moved to.
    pub destination: u32,
}

impl Transition {
    /// Whether this is a boost.
    #[must_use]
    pub const fn is_boost(self) -> bool {
        matches!(self.kind, TransitionKind::Boost)
    }
}

/// A validated board. Cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    /// `lookup[cell]` for cells `1..=cell_count`; index 0 is unused.
    lookup: Vec<Option<Transition>>,
}

impl Board {
    /// Validates `config` and builds the lookup table.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBoard` if validation fails.
    pub fn new(config: BoardConfig) -> Result<Self, DomainError> {
        config.validate()?;

        for (source, destination) in config.chained_transitions() {
            warn!(
                source,
                destination,
                "transition destination is itself a source; only the first hop applies"
            );
        }

        let mut lookup = vec![None; config.cell_count as usize + 1];
        let tables = [
            (TransitionKind::Boost, &config.boosts),
            (TransitionKind::Setback, &config.setbacks),
        ];
        for (kind, table) in tables {
            for (&source, &destination) in table {
                if let Some(slot) = lookup.get_mut(source as usize) {
                    *slot = Some(Transition { kind, destination });
                }
            }
        }

        debug!(
            cell_count = config.cell_count,
            boosts = config.boosts.len(),
            setbacks = config.setbacks.len(),
            "board loaded"
        );

        Ok(Self { config, lookup })
    }

    /// The standard 10×10 board.
    ///
    /// # Errors
    ///
    /// Never in practice; the standard tables are valid.
    pub fn standard() -> Result<Self, DomainError> {
        Self::new(BoardConfig::standard())
    }

    /// The configuration this board was built from.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> u32 {
        self.config.cell_count
    }

    /// Grid width.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.config.columns
    }

    /// Grid height.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.config.cell_count / self.config.columns
    }

    /// The cell every game starts on.
    #[must_use]
    pub const fn start_cell(&self) -> u32 {
        1
    }

    /// The goal cell.
    #[must_use]
    pub const fn final_cell(&self) -> u32 {
        self.config.cell_count
    }

    fn check(&self, cell: u32) -> Result<(), DomainError> {
        if (1..=self.config.cell_count).contains(&cell) {
            Ok(())
        } else {
            Err(DomainError::CellOutOfRange {
                cell,
                cell_count: self.config.cell_count,
            })
        }
    }

    /// Grid coordinate of `cell` in the boustrophedon layout.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CellOutOfRange` for cells outside the board.
    pub fn layout(&self, cell: u32) -> Result<GridCoord, DomainError> {
        self.check(cell)?;
        Ok(snake_coord(cell, self.config.columns))
    }

    /// Cell at `coord`, if the coordinate is on the grid.
    #[must_use]
    pub fn cell_at(&self, coord: GridCoord) -> Option<u32> {
        (coord.row < self.rows() && coord.col < self.config.columns)
            .then(|| snake_cell(coord, self.config.columns))
    }

    /// Looks up whether `cell` is a boost or setback source.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CellOutOfRange` for cells outside the board.
    pub fn classify(&self, cell: u32) -> Result<Option<Transition>, DomainError> {
        self.check(cell)?;
        Ok(self.lookup.get(cell as usize).copied().flatten())
    }

    /// Every transition as `(source, transition)`, in cell order.
    pub fn transitions(&self) -> impl Iterator<Item = (u32, Transition)> + '_ {
        (1..=self.config.cell_count).filter_map(|cell| {
            self.lookup
                .get(cell as usize)
                .copied()
                .flatten()
                .map(|transition| (cell, transition))
        })
    }
}
