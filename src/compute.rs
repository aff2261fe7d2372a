//! Generation advance.
//!
//! A tick runs in two phases: every interior cell is classified against the
//! current generation, and only then are the collected transitions written
//! back. No write is visible to a neighbor count within the same tick.

use crate::grid::Grid;
use crate::rules::{CellState, GameRules, Transition};

/// Cells that change state this tick. The two lists are disjoint since each
/// cell is classified once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transitions {
    pub born: Vec<(usize, usize)>,
    pub died: Vec<(usize, usize)>,
}

/// Per-tick counts reported back to the driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub born: usize,
    pub died: usize,
}

impl Transitions {
    pub fn is_empty(&self) -> bool {
        self.born.is_empty() && self.died.is_empty()
    }

    /// Apply the collected transitions to `grid`.
    pub fn commit(self, grid: &mut Grid) -> TickStats {
        let stats = TickStats {
            born: self.born.len(),
            died: self.died.len(),
        };

        for (row, col) in self.born {
            grid.set(row, col, CellState::Alive);
        }
        for (row, col) in self.died {
            grid.set(row, col, CellState::Dead);
        }

        stats
    }
}

/// Classify every interior cell of `grid` without modifying it.
pub fn classify(grid: &Grid, rules: &GameRules) -> Transitions {
    let mut transitions = Transitions::default();

    for (row, col, state) in grid.printable() {
        let live_neighbors = grid.count_live_neighbors(row, col);
        match rules.transition(state, live_neighbors) {
            Transition::Born => transitions.born.push((row, col)),
            Transition::Dies => transitions.died.push((row, col)),
            Transition::Unchanged => {}
        }
    }

    transitions
}

/// Advance `grid` by one generation in place.
pub fn advance(grid: &mut Grid, rules: &GameRules) -> TickStats {
    let transitions = classify(grid, rules);
    let stats = transitions.commit(grid);
    log::trace!("Tick applied: {} born, {} died", stats.born, stats.died);
    stats
}

/// Next generation of `grid`, leaving `grid` untouched.
pub fn successor(grid: &Grid, rules: &GameRules) -> Grid {
    let mut next = grid.clone();
    advance(&mut next, rules);
    next
}
