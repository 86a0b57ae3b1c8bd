//! Interactive game loop
//!
//! Line-based play over any reader/writer pair, so the same loop drives the
//! terminal and the tests.

use crate::board::render_board;
use crate::core::{Word, WordError};
use crate::engine::QuantumWordle;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Attempts allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub won: bool,
    /// Guesses submitted (invalid input does not count)
    pub attempts: usize,
}

/// A single game session
pub struct Game<R: Rng> {
    engine: QuantumWordle<R>,
    color: bool,
}

impl<R: Rng> Game<R> {
    #[must_use]
    pub const fn new(engine: QuantumWordle<R>, color: bool) -> Self {
        Self { engine, color }
    }

    /// The underlying engine
    #[must_use]
    pub const fn engine(&self) -> &QuantumWordle<R> {
        &self.engine
    }

    /// Play until a win, `MAX_ATTEMPTS` guesses, or end of input
    ///
    /// # Errors
    /// Returns an I/O error if reading input or writing output fails.
    pub fn play<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        out: &mut O,
    ) -> io::Result<GameOutcome> {
        let mut outcome = GameOutcome {
            won: false,
            attempts: 0,
        };

        while outcome.attempts < MAX_ATTEMPTS {
            writeln!(out, "{}", remaining_message(MAX_ATTEMPTS - outcome.attempts))?;

            let Some(guess) = read_guess(input, out)? else {
                log::info!("input closed after {} attempts", outcome.attempts);
                break;
            };

            outcome.attempts += 1;
            let won = self.engine.guess(&guess);
            write!(out, "{}", render_board(self.engine.history(), self.color))?;
            writeln!(out)?;

            if won {
                writeln!(out, "You won!")?;
                outcome.won = true;
                break;
            }
        }

        if !outcome.won {
            writeln!(out, "Game over!")?;
        }
        writeln!(out, "Hidden word was {}", self.engine.hidden_word())?;
        Ok(outcome)
    }
}

/// "1 guess remaining" / "n guesses remaining"
fn remaining_message(remaining: usize) -> String {
    if remaining == 1 {
        "1 guess remaining".to_string()
    } else {
        format!("{remaining} guesses remaining")
    }
}

/// Message shown when a guess is rejected
fn rejection_message(err: &WordError) -> &'static str {
    match err {
        WordError::InvalidLength(_) => "Guess must be 5 letters long!",
        WordError::NonAscii | WordError::InvalidCharacters => "Guess must contain only letters!",
    }
}

/// Prompt until a valid guess is entered; `None` at end of input
fn read_guess<I: BufRead, O: Write>(input: &mut I, out: &mut O) -> io::Result<Option<Word>> {
    loop {
        write!(out, "Enter guess: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }

        match Word::new(line.trim_end_matches(['\r', '\n'])) {
            Ok(word) => return Ok(Some(word)),
            Err(err) => {
                log::debug!("rejected guess {:?}: {err}", line.trim_end());
                writeln!(out, "{}", rejection_message(&err))?;
            }
        }
    }
}
