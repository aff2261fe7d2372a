use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use crate::rules::{CellState, Pattern};

/// How neighbor lookups past the edge of the grid resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Coordinates wrap around both axes.
    #[default]
    Toroidal,
    /// The outermost ring is a permanently dead frame that is never evaluated
    /// or drawn; lookups outside the grid read as dead.
    BoundedWithFrame,
}

impl Boundary {
    fn frame_width(self) -> usize {
        match self {
            Boundary::Toroidal => 0,
            Boundary::BoundedWithFrame => 1,
        }
    }
}

impl FromStr for Boundary {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toroidal" | "torus" | "wrap" => Ok(Boundary::Toroidal),
            "bounded" | "framed" | "bounded-with-frame" => Ok(Boundary::BoundedWithFrame),
            _ => Err(GridError::UnknownBoundary(s.to_string())),
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Toroidal => f.write_str("toroidal"),
            Boundary::BoundedWithFrame => f.write_str("bounded"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {height}x{width}")]
    EmptyDimension { height: usize, width: usize },
    #[error("a framed grid needs at least 3x3 cells, got {height}x{width}")]
    FrameTooSmall { height: usize, width: usize },
    #[error("live probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),
    #[error("unknown boundary policy `{0}` (expected `toroidal` or `bounded`)")]
    UnknownBoundary(String),
}

/// Initial seeding policy: each interior cell is alive with `live_probability`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedPolicy {
    live_probability: f64,
}

impl SeedPolicy {
    pub fn new(live_probability: f64) -> Result<Self, GridError> {
        // NaN fails the range check as well
        if !(0.0..=1.0).contains(&live_probability) {
            return Err(GridError::InvalidProbability(live_probability));
        }
        Ok(Self { live_probability })
    }

    pub fn live_probability(&self) -> f64 {
        self.live_probability
    }
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self { live_probability: 0.5 }
    }
}

/// A rectangular, row-major array of cell states with a boundary policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    boundary: Boundary,
    cells: Vec<CellState>,
}

impl Grid {
    /// Allocate a `height` x `width` grid and seed its interior from `rng`.
    ///
    /// Under [`Boundary::BoundedWithFrame`] the frame ring is always dead.
    pub fn create<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        boundary: Boundary,
        seed: &SeedPolicy,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Self::empty(height, width, boundary)?;
        let (rows, cols) = grid.interior();
        for row in rows {
            for col in cols.clone() {
                let idx = grid.index(row, col);
                grid.cells[idx] = rng.gen_bool(seed.live_probability).into();
            }
        }
        Ok(grid)
    }

    /// Allocate a grid with every cell dead.
    pub fn empty(height: usize, width: usize, boundary: Boundary) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::EmptyDimension { height, width });
        }
        if boundary == Boundary::BoundedWithFrame && (height < 3 || width < 3) {
            return Err(GridError::FrameTooSmall { height, width });
        }
        Ok(Self {
            height,
            width,
            boundary,
            cells: vec![CellState::Dead; height * width],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Map a logical coordinate onto storage, or `None` when it lies outside
    /// a bounded grid.
    fn resolve(&self, row: i64, col: i64) -> Option<(usize, usize)> {
        let (height, width) = (self.height as i64, self.width as i64);
        match self.boundary {
            Boundary::Toroidal => Some((
                row.rem_euclid(height) as usize,
                col.rem_euclid(width) as usize,
            )),
            Boundary::BoundedWithFrame => {
                if (0..height).contains(&row) && (0..width).contains(&col) {
                    Some((row as usize, col as usize))
                } else {
                    None
                }
            }
        }
    }

    /// State at a logical coordinate under the active boundary policy.
    pub fn get(&self, row: i64, col: i64) -> CellState {
        match self.resolve(row, col) {
            Some((row, col)) => self.cells[self.index(row, col)],
            None => CellState::Dead,
        }
    }

    /// Write one interior cell. Writes onto the frame ring or outside the
    /// grid are dropped.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        if !self.is_interior(row, col) {
            log::debug!("Ignoring write outside the interior at ({}, {})", row, col);
            return;
        }
        let idx = self.index(row, col);
        self.cells[idx] = state;
    }

    /// Rows and columns the engine evaluates and the renderer draws.
    pub fn interior(&self) -> (Range<usize>, Range<usize>) {
        let frame = self.boundary.frame_width();
        (frame..self.height - frame, frame..self.width - frame)
    }

    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        let (rows, cols) = self.interior();
        rows.contains(&row) && cols.contains(&col)
    }

    /// Count live cells in the Moore neighborhood of `(row, col)`.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let (row, col) = (row as i64, col as i64);
        let mut count = 0;

        for dr in -1..=1 {
            for dc in -1..=1 {
                // Skip the cell itself
                if dr == 0 && dc == 0 {
                    continue;
                }
                if self.get(row + dr, col + dc).is_alive() {
                    count += 1;
                }
            }
        }

        count
    }

    /// Every interior coordinate with its current state, row by row.
    pub fn printable(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let (rows, cols) = self.interior();
        rows.flat_map(move |row| {
            cols.clone()
                .map(move |col| (row, col, self.cells[self.index(row, col)]))
        })
    }

    pub fn live_cells(&self) -> usize {
        self.printable().filter(|(_, _, state)| state.is_alive()).count()
    }

    /// Set every cell of `pattern` alive, anchored at `(row, col)`.
    pub fn place(&mut self, pattern: &Pattern, row: i64, col: i64) {
        for (cell_row, cell_col) in pattern.cells(row, col) {
            match self.resolve(cell_row, cell_col) {
                Some((r, c)) => self.set(r, c, CellState::Alive),
                None => log::debug!(
                    "Pattern {:?} cell ({}, {}) falls outside the grid",
                    pattern,
                    cell_row,
                    cell_col
                ),
            }
        }
    }
}
