// Driver modules declared directly in the binary crate root
pub mod config;
pub mod input;
pub mod render;
pub mod state;

use std::io::{self, Stdout, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor, event, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::config::{Args, Config};
use crate::input::Action;
use crate::state::State;

/// Raw mode, alternate screen and hidden cursor for as long as it lives.
struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        execute!(out, EnterAlternateScreen, cursor::Hide)
            .context("failed to enter the alternate screen")?;
        Ok(Self { out })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, cursor::Show, LeaveAlternateScreen) {
            log::error!("Failed to leave the alternate screen: {}", err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            log::error!("Failed to disable raw mode: {}", err);
        }
        let _ = self.out.flush();
    }
}

fn run(out: &mut Stdout, state: &mut State) -> Result<()> {
    let mut next_tick = Instant::now() + state.config.tick_interval;

    loop {
        render::draw(out, state).context("failed to draw frame")?;

        // Wait for input until the next tick is due
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if input::handle_event(state, event::read()?) == Action::Quit {
                log::info!("Quit at generation {}", state.generation);
                return Ok(());
            }
            // Redraw promptly after a key or resize, keep the tick schedule
            if Instant::now() < next_tick {
                continue;
            }
        }

        state.tick();
        next_tick = Instant::now() + state.config.tick_interval;
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_args(Args::parse())?;
    log::info!(
        "Starting with {} boundary, density {}, tick {:?}",
        config.boundary,
        config.seed_policy.live_probability(),
        config.tick_interval
    );

    let size = terminal::size().context("failed to read the terminal size")?;
    let mut guard = TerminalGuard::enter()?;
    let mut state = State::new(config, size);

    run(&mut guard.out, &mut state)
}
