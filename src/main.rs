//! Strictly Timeline - CLI
//!
//! A text front end over the game history: it shows the current board
//! and move list, and forwards "play" and "jump" intents to the core.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, BufRead, Write};
use strictly_timeline::{GameHistory, Intent, MoveOutcome, Report, TimelineConfig, HELP};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = TimelineConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { cells, jump, json } => run_replay(&config, &cells, jump, json),
    }
}

#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,strictly_timeline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Interactive loop: one intent per stdin line.
#[instrument(skip(config))]
fn run_play(config: &TimelineConfig) -> Result<()> {
    info!(jump_policy = %config.jump_policy(), "Starting interactive game");

    let mut history = GameHistory::with_policy(*config.jump_policy());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}\n", HELP);
    print!("{}", Report::from_history(&history).render(*config.show_history()));

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let intent = match Intent::parse(&line) {
            Ok(intent) => intent,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match intent {
            Intent::Play(cell) => {
                if let MoveOutcome::Rejected(reason) = history.apply_move(cell) {
                    println!("{}", reason);
                }
            }
            Intent::Jump(index) => {
                if let Err(e) = history.jump_to(index) {
                    println!("{}", e);
                }
            }
            Intent::Reset => history.reset(),
            Intent::Help => {
                println!("{}", HELP);
                continue;
            }
            Intent::Quit => break,
        }

        print!("{}", Report::from_history(&history).render(*config.show_history()));
    }

    info!(moves = history.snapshot_count() - 1, "Leaving game");
    Ok(())
}

/// Plays `cells` from a fresh game and prints the result.
#[instrument(skip(config))]
fn run_replay(config: &TimelineConfig, cells: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    let (mut history, outcomes) = GameHistory::replay(*config.jump_policy(), cells);

    for (cell, outcome) in cells.iter().zip(&outcomes) {
        if let MoveOutcome::Rejected(reason) = outcome {
            warn!(cell, %reason, "Move ignored during replay");
        }
    }

    if let Some(index) = jump {
        history.jump_to(index)?;
    }

    let report = Report::from_history(&history);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render(*config.show_history()));
    }

    Ok(())
}
