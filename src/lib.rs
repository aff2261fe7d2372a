//! Conway's Game of Life core: the grid, the transition rule and the
//! two-phase generation advance. The terminal driver lives in `main.rs`.

pub mod grid;
pub mod rules;
pub mod compute;

pub use compute::{advance, classify, successor, TickStats, Transitions};
pub use grid::{Boundary, Grid, GridError, SeedPolicy};
pub use rules::{CellState, GameRules, Pattern, Transition};
