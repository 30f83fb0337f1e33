//! Command-line interface for strictly_minimax.

use clap::Parser;
use strictly_minimax::{Difficulty, Starter};

/// Strictly Minimax - play tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config (optional)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Opponent strength: easy, medium or hard (overrides config)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Who moves first: human or ai (overrides config)
    #[arg(short, long)]
    pub starter: Option<Starter>,

    /// Seed for the easy opponent (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay before the computer replies, in milliseconds
    #[arg(long, default_value = "500")]
    pub delay_ms: u64,
}
