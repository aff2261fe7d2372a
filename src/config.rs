use std::time::Duration;

use clap::Parser;
use term_life::{Boundary, GridError, SeedPolicy};

/// Conway's Game of Life in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Edge handling: `toroidal` wraps around, `bounded` keeps a dead frame.
    #[arg(short, long, value_name = "POLICY", default_value_t = Boundary::Toroidal)]
    pub boundary: Boundary,

    /// Probability that a cell starts alive.
    #[arg(short, long, value_name = "P", default_value_t = 0.5)]
    pub density: f64,

    /// Delay between generations in milliseconds.
    #[arg(
        short,
        long = "tick-ms",
        value_name = "MS",
        default_value_t = 150,
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    pub tick_ms: u64,

    /// Seed for the random source; a fresh seed is drawn when omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Validated driver configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub boundary: Boundary,
    pub seed_policy: SeedPolicy,
    pub tick_interval: Duration,
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, GridError> {
        Ok(Self {
            boundary: args.boundary,
            seed_policy: SeedPolicy::new(args.density)?,
            tick_interval: Duration::from_millis(args.tick_ms),
            rng_seed: args.seed,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            boundary: Boundary::default(),
            seed_policy: SeedPolicy::default(),
            tick_interval: Duration::from_millis(150),
            rng_seed: None,
        }
    }
}
