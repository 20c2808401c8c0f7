//! Line-oriented play loop.
//!
//! Reads one command per line and writes the board and status after every
//! change. Generic over reader and writer so games can be scripted.

use crate::config::PlayConfig;
use anyhow::Result;
use perfect_tictactoe::{ENGINE, Game, GameStatus, HUMAN, Position};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the human's mark on a cell (0-8).
    Cell(usize),
    /// Start a new game.
    Reset,
    /// Show the commands.
    Help,
    /// Leave.
    Quit,
}

impl Input {
    /// Parses a line: a cell number 1-9, a position label, or a command.
    pub fn parse(line: &str) -> Option<Input> {
        let line = line.trim();
        if let Ok(number) = line.parse::<usize>() {
            return (1..=9).contains(&number).then(|| Input::Cell(number - 1));
        }
        match line.to_ascii_lowercase().as_str() {
            "reset" | "new" | "restart" => Some(Input::Reset),
            "help" | "?" => Some(Input::Help),
            "quit" | "exit" | "q" => Some(Input::Quit),
            _ => Position::from_label(line).map(|position| Input::Cell(position.to_index())),
        }
    }
}

const HELP: &str = "Enter a cell number (1-9) or a position such as `center` or `top-left`.\n\
                    Commands: reset, help, quit.";

/// Interactive session: one human (X) against the engine (O).
pub struct Session<R, W> {
    input: R,
    output: W,
    config: PlayConfig,
    game: Game,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with a fresh game.
    pub fn new(input: R, output: W, config: PlayConfig) -> Self {
        Self {
            input,
            output,
            config,
            game: Game::new(),
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        writeln!(self.output, "You are {HUMAN}, the engine is {ENGINE}.")?;
        writeln!(self.output, "{HELP}\n")?;
        self.show_board()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            match Input::parse(&line) {
                Some(Input::Quit) => break,
                Some(Input::Help) => writeln!(self.output, "{HELP}")?,
                Some(Input::Reset) => {
                    self.game.reset();
                    writeln!(self.output, "New game.\n")?;
                    self.show_board()?;
                }
                Some(Input::Cell(index)) => self.human_turn(index)?,
                None => writeln!(self.output, "Unrecognized input: {}", line.trim())?,
            }
        }

        info!(moves = self.game.history().len(), "Session ended");
        Ok(())
    }

    fn human_turn(&mut self, index: usize) -> Result<()> {
        let status = match self.game.play(HUMAN, index) {
            Ok(status) => status,
            Err(error) => {
                writeln!(self.output, "Invalid move: {error}")?;
                return Ok(());
            }
        };
        self.show_board()?;
        if status.is_over() {
            return Ok(());
        }

        writeln!(self.output, "{ENGINE} is thinking...")?;
        self.output.flush()?;
        std::thread::sleep(self.config.ai_delay());

        let reply = self.game.ai_move()?;
        let position = Position::from_index(reply.index)
            .map_or_else(|| reply.index.to_string(), |p| p.to_string());
        if *self.config.show_scores() {
            writeln!(
                self.output,
                "{ENGINE} plays {position} (score {:+})",
                reply.score
            )?;
        } else {
            writeln!(self.output, "{ENGINE} plays {position}")?;
        }
        self.show_board()
    }

    fn show_board(&mut self) -> Result<()> {
        writeln!(self.output, "{}\n", self.game.board())?;
        match self.game.status() {
            GameStatus::InProgress => {
                writeln!(self.output, "It's {}'s turn", self.game.to_move())?
            }
            status => {
                writeln!(self.output, "{status}")?;
                writeln!(self.output, "Type `reset` to play again or `quit` to leave.")?;
            }
        }
        Ok(())
    }
}
