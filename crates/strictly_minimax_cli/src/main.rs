//! Strictly Minimax - terminal front end
//!
//! Reads cell choices from stdin and hands them to the engine.

#![warn(missing_docs)]

mod cli;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use render::TerminalRenderer;
use std::io::{BufRead, Write};
use std::time::Duration;
use strictly_minimax::{GameConfig, GameController, Phase, Position};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let delay = Duration::from_millis(cli.delay_ms);

    let mut game = GameController::new(config).with_observer(TerminalRenderer);
    println!(
        "You are {}. Enter a cell number (1-9) or a name like 'center'.",
        game.human_player()
    );
    println!("\n{}\n", game.board());

    run(&mut game, delay)
}

/// Main loop: computer replies when it is its turn, otherwise read a command.
#[instrument(skip(game))]
fn run(game: &mut GameController, delay: Duration) -> Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if game.phase() == Phase::AwaitingComputerMove {
            // Pacing is a presentation concern; the engine call itself is blocking.
            std::thread::sleep(delay);
            let difficulty = *game.config().difficulty();
            let index = game.run_computer_move(difficulty)?;
            if let Some(pos) = Position::from_index(index) {
                println!("Computer plays {}.", pos);
            }
            continue;
        }

        if !game.phase().is_over() {
            print!("Your move: ");
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            info!("Input closed");
            return Ok(());
        };
        let line = line?;
        let input = line.trim();

        match input.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Ok(()),
            "n" | "new" | "reset" => {
                game.reset();
                continue;
            }
            _ => {}
        }

        let Some(pos) = Position::from_label_or_number(input) else {
            println!("Unrecognized input: {:?}", input);
            continue;
        };
        debug!(%pos, "Human input");

        if let Err(e) = game.apply_human_move(pos.to_index()) {
            warn!(error = %e, "Move rejected");
            println!("{}", e);
        }
    }
}

/// Builds the game config from the optional file and CLI overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(difficulty) = cli.difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(starter) = cli.starter {
        config = config.with_starter(starter);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    info!(
        starter = %config.starter(),
        difficulty = %config.difficulty(),
        "Configuration ready"
    );
    Ok(config)
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,strictly_minimax=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
