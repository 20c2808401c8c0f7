//! Perfect Play - Unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use perfect_play::{Cli, Command, PlayConfig, Session, analyze, infer_to_move, logging, self_play};
use perfect_tictactoe::{Board, Player};
use std::io::{self, Write};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load_or_default(&cli.config)?;
    logging::init_tracing(config.log_filter());

    match cli.command.unwrap_or_default() {
        Command::Play {
            delay_ms,
            show_scores,
        } => run_play(config, delay_ms, show_scores),
        Command::BestMove {
            board,
            to_move,
            json,
        } => run_best_move(&board, to_move, json),
        Command::SelfPlay { games } => run_self_play(games),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: PlayConfig, delay_ms: Option<u64>, show_scores: bool) -> Result<()> {
    let mut config = config;
    if let Some(delay_ms) = delay_ms {
        config = config.with_ai_delay_ms(delay_ms);
    }
    if show_scores {
        config = config.with_show_scores(true);
    }
    info!(?config, "Starting interactive game");

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);
    session.run()
}

/// Print the best move for a position
#[instrument]
fn run_best_move(board: &str, to_move: Option<Player>, json: bool) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {board:?}"))?;
    let to_move = to_move.unwrap_or_else(|| infer_to_move(&board));

    let report = analyze(&board, to_move);
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", report.to_text())?;
    }
    Ok(())
}

/// Let the engine play itself
#[instrument]
fn run_self_play(games: u32) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for number in 1..=games {
        let game = self_play();
        let moves: Vec<String> = game.moves.iter().map(ToString::to_string).collect();
        writeln!(stdout, "Game {number}: {}", moves.join(", "))?;
        writeln!(stdout, "Result: {}", game.status)?;
    }
    Ok(())
}
