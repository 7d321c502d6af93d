//! esweep - exponential sine-sweep generator
//!
//! Run with: cargo run -- generate --duration 5 --repetitions 4 --output sweep.wav

mod app;
mod cli;
mod playback;
mod ui;

use clap::Parser;
use cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    app::run(cli.command)
}
