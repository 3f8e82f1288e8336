#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod market;
pub mod ui;
mod utils;

// Re-export commonly used types outside of crate
pub use app::App;
pub use market::{MarketSnapshot, Sparkline, TrendSeries};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed the random source for a reproducible dashboard (demo screenshots).
    /// Unseeded runs draw fresh entropy, so every refresh differs.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
