//! Feedback engine
//!
//! Turns a guess into a hint string. Each letter is classified by the
//! position search, the state table is biased toward it, and a single label
//! drawn for the letter's class decides which letter is shown.

pub mod classifier;
pub mod sampler;
pub mod state_table;

use crate::core::{Label, PositionCodeMap, WORD_LENGTH, Word, WordError};
use classifier::{Observations, classify};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sampler::{LetterClass, sample_label};
use state_table::StateTable;
use std::fmt;

/// Displayed feedback for one guess
///
/// Uppercase marks a letter shown in its correct position; everything else
/// is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    letters: [u8; WORD_LENGTH],
}

impl Hint {
    /// Hint characters as bytes
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Hint as a string
    ///
    /// # Panics
    /// Never panics. Hint letters are always ASCII.
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.letters).expect("hint letters are ASCII")
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// What happened to one guessed letter
#[derive(Debug, Clone)]
pub struct LetterReport {
    /// The guessed letter (uppercase)
    pub guessed: u8,
    /// Classification derived from the search
    pub class: LetterClass,
    /// Raw ranked search measurements
    pub observations: Observations,
    /// Label drawn by the sampler
    pub label: Label,
    /// Letter displayed, already cased
    pub shown: u8,
}

/// Full result of one guess
#[derive(Debug, Clone)]
pub struct GuessReport {
    pub letters: Vec<LetterReport>,
    pub hint: Hint,
    pub won: bool,
}

/// Quantum Wordle feedback engine for one game
///
/// Owns the hidden word, its position code map, the state table and the
/// random source. Independent games must use independent engines.
#[derive(Debug)]
pub struct QuantumWordle<R: Rng = StdRng> {
    hidden: Word,
    hidden_codes: PositionCodeMap,
    table: StateTable,
    history: Vec<Hint>,
    rng: R,
}

impl QuantumWordle<StdRng> {
    /// Create a game seeded from the operating system
    ///
    /// # Errors
    /// Returns `WordError` if the hidden word is not 5 ASCII letters.
    pub fn new(hidden: &str) -> Result<Self, WordError> {
        Self::with_rng(hidden, StdRng::from_os_rng())
    }

    /// Create a reproducible game from a seed
    ///
    /// # Errors
    /// Returns `WordError` if the hidden word is not 5 ASCII letters.
    pub fn with_seed(hidden: &str, seed: u64) -> Result<Self, WordError> {
        Self::with_rng(hidden, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuantumWordle<R> {
    /// Create a game drawing all randomness from `rng`
    ///
    /// # Errors
    /// Returns `WordError` if the hidden word is not 5 ASCII letters.
    pub fn with_rng(hidden: &str, mut rng: R) -> Result<Self, WordError> {
        let hidden = Word::new(hidden)?;
        let table = StateTable::new(&mut rng);
        Ok(Self {
            hidden_codes: PositionCodeMap::new(&hidden),
            hidden,
            table,
            history: Vec::new(),
            rng,
        })
    }

    /// Submit a guess, returning whether it matches the hidden word
    pub fn guess(&mut self, guess: &Word) -> bool {
        self.guess_report(guess).won
    }

    /// Submit a guess and return the per-letter details
    ///
    /// Letters are processed in order. Biasing for one letter stays in the
    /// table for the rest of the guess; the table is re-randomized once all
    /// five letters are done.
    pub fn guess_report(&mut self, guess: &Word) -> GuessReport {
        let guess_codes = PositionCodeMap::new(guess);
        let mut letters = Vec::with_capacity(WORD_LENGTH);
        let mut hint = [0u8; WORD_LENGTH];

        for (position, &letter) in guess.chars().iter().enumerate() {
            let observations = classify(letter, &self.hidden_codes, &mut self.rng);
            let class = classify_letter(letter, &observations, &guess_codes);

            if class.is_biased() {
                self.table.bias_toward(letter, &self.hidden, &mut self.rng);
            }

            let label = sample_label(class, &mut self.rng);
            let raw = self.table.letter_at(label);
            let shown = case_hint(letter, raw, self.hidden.char_at(position));

            debug!(
                "letter {} at {position}: {class} (theta={:.4}), label {label} -> {}",
                letter as char,
                class.theta(),
                shown as char
            );
            trace!("observations for {}: {:?}", letter as char, observations.ranked());

            hint[position] = shown;
            letters.push(LetterReport {
                guessed: letter,
                class,
                observations,
                label,
                shown,
            });
        }

        self.table.reset(&mut self.rng);

        let hint = Hint { letters: hint };
        self.history.push(hint);

        let won = *guess == self.hidden;
        debug!("guess {guess} -> {hint} (won: {won})");

        GuessReport { letters, hint, won }
    }

    /// Hints for every guess so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Hint] {
        &self.history
    }

    /// The hidden word
    #[must_use]
    pub const fn hidden_word(&self) -> &Word {
        &self.hidden
    }

    /// Position codes of the hidden word
    #[must_use]
    pub const fn hidden_codes(&self) -> &PositionCodeMap {
        &self.hidden_codes
    }

    /// Current state table
    #[must_use]
    pub const fn state_table(&self) -> &StateTable {
        &self.table
    }

    /// Re-randomize the state table
    pub fn reset(&mut self) {
        self.table.reset(&mut self.rng);
    }
}

/// Interpret search measurements for one guessed letter
///
/// An inconclusive search (several codes observed) counts as absent. A
/// single code is correct if it matches the letter's code in the guess.
fn classify_letter(
    letter: u8,
    observations: &Observations,
    guess_codes: &PositionCodeMap,
) -> LetterClass {
    if observations.is_ambiguous() {
        LetterClass::Absent
    } else if observations.top().is_some() && observations.top() == guess_codes.code_for(letter) {
        LetterClass::Correct
    } else {
        LetterClass::Misplaced
    }
}

/// Uppercase only when the guessed letter is right here and the hint shows it
const fn case_hint(guessed: u8, sampled: u8, hidden: u8) -> u8 {
    if guessed == hidden && sampled == guessed {
        sampled.to_ascii_uppercase()
    } else {
        sampled.to_ascii_lowercase()
    }
}
