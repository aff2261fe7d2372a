//! Rules module for Conway's Game of Life simulation
//!
//! This module contains the cell state representation, the transition rule and
//! the fixture patterns that can be placed on a grid.

mod patterns;

pub use patterns::Pattern;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// Outcome of evaluating the rule for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Dead cell with exactly `birth_count` live neighbors.
    Born,
    /// Live cell outside the survival range (under- or overpopulation).
    Dies,
    Unchanged,
}

/// Game of Life standard rules:
/// 1. Any live cell with fewer than two live neighbors dies (underpopulation)
/// 2. Any live cell with two or three live neighbors lives (survival)
/// 3. Any live cell with more than three live neighbors dies (overpopulation)
/// 4. Any dead cell with exactly three live neighbors becomes alive (reproduction)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Minimum neighbors for a live cell to survive
    pub survival_min: u8,
    /// Maximum neighbors for a live cell to survive
    pub survival_max: u8,
    /// Number of neighbors for a dead cell to become alive
    pub birth_count: u8,
}

impl Default for GameRules {
    fn default() -> Self {
        // Classic Conway's Game of Life rules
        Self {
            survival_min: 2,
            survival_max: 3,
            birth_count: 3,
        }
    }
}

impl GameRules {
    /// Preset for Conway's classic Game of Life (B3/S23)
    pub fn conway() -> Self {
        Self::default()
    }

    /// Classify a cell given its current state and live neighbor count.
    ///
    /// Death is checked before birth; anything else leaves the cell as is.
    pub fn transition(&self, current: CellState, live_neighbors: u8) -> Transition {
        match current {
            CellState::Alive
                if live_neighbors < self.survival_min || live_neighbors > self.survival_max =>
            {
                Transition::Dies
            }
            CellState::Dead if live_neighbors == self.birth_count => Transition::Born,
            _ => Transition::Unchanged,
        }
    }
}
