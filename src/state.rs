use rand::rngs::StdRng;
use rand::SeedableRng;
use term_life::{advance, GameRules, Grid, GridError};

use crate::config::Config;

/// Terminal rows reserved below the field for the status lines.
pub const STATUS_ROWS: u16 = 2;

pub struct State {
    pub config: Config,
    pub rules: GameRules,
    /// `None` while the terminal is too small for the selected boundary.
    pub grid: Option<Grid>,
    /// Terminal size as `(columns, rows)`.
    pub size: (u16, u16),
    pub generation: u64,
    pub paused: bool,
    rng: StdRng,
}

impl State {
    pub fn new(config: Config, size: (u16, u16)) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut state = Self {
            config,
            rules: GameRules::conway(),
            grid: None,
            size,
            generation: 1,
            paused: false,
            rng,
        };
        state.reseed();
        state
    }

    /// Field dimensions as `(height, width)` for the current terminal size.
    pub fn field_size(&self) -> (usize, usize) {
        let (cols, rows) = self.size;
        (rows.saturating_sub(STATUS_ROWS) as usize, cols as usize)
    }

    /// Replace the grid with a freshly seeded one sized to the terminal.
    fn reseed(&mut self) {
        let (height, width) = self.field_size();
        match Grid::create(
            height,
            width,
            self.config.boundary,
            &self.config.seed_policy,
            &mut self.rng,
        ) {
            Ok(grid) => {
                log::info!(
                    "Seeded {}x{} {} grid ({} live cells)",
                    width,
                    height,
                    self.config.boundary,
                    grid.live_cells()
                );
                self.grid = Some(grid);
            }
            Err(err @ (GridError::EmptyDimension { .. } | GridError::FrameTooSmall { .. })) => {
                log::warn!("Terminal too small for a grid: {}", err);
                self.grid = None;
            }
            Err(err) => {
                log::error!("Failed to create grid: {}", err);
                self.grid = None;
            }
        }
        self.generation = 1;
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
        self.reseed();
        log::info!("Resized field to terminal {}x{}", cols, rows);
    }

    /// Advance one generation unless paused or there is no grid.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        if let Some(grid) = self.grid.as_mut() {
            advance(grid, &self.rules);
            self.generation += 1;
        }
    }

    pub fn live_cells(&self) -> usize {
        self.grid.as_ref().map_or(0, Grid::live_cells)
    }
}
