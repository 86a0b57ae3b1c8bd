//! Batch simulation
//!
//! Plays many independent games in parallel and measures how often hints
//! reveal the guessed letter for each classification.

use crate::core::Word;
use crate::engine::QuantumWordle;
use crate::engine::sampler::LetterClass;
use crate::game::MAX_ATTEMPTS;
use crate::wordlists::loader::choose_random_word;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

/// Counts for one letter class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassTally {
    /// Letters processed with this class
    pub letters: usize,
    /// Hints that showed the guessed letter (any case)
    pub revealed: usize,
    /// Hints shown in uppercase
    pub uppercase: usize,
}

impl ClassTally {
    /// Fraction of letters whose hint showed the guessed letter
    #[must_use]
    pub fn reveal_rate(&self) -> f64 {
        ratio(self.revealed, self.letters)
    }

    /// Fraction of letters shown in uppercase
    #[must_use]
    pub fn uppercase_rate(&self) -> f64 {
        ratio(self.uppercase, self.letters)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            letters: self.letters + other.letters,
            revealed: self.revealed + other.revealed,
            uppercase: self.uppercase + other.uppercase,
        }
    }
}

/// Aggregate results of a simulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HintStats {
    pub games: usize,
    pub wins: usize,
    pub guesses: usize,
    correct: ClassTally,
    misplaced: ClassTally,
    absent: ClassTally,
}

impl HintStats {
    /// Tally for a class
    #[must_use]
    pub const fn class(&self, class: LetterClass) -> &ClassTally {
        match class {
            LetterClass::Correct => &self.correct,
            LetterClass::Misplaced => &self.misplaced,
            LetterClass::Absent => &self.absent,
        }
    }

    const fn class_mut(&mut self, class: LetterClass) -> &mut ClassTally {
        match class {
            LetterClass::Correct => &mut self.correct,
            LetterClass::Misplaced => &mut self.misplaced,
            LetterClass::Absent => &mut self.absent,
        }
    }

    /// Fraction of games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        ratio(self.wins, self.games)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            games: self.games + other.games,
            wins: self.wins + other.wins,
            guesses: self.guesses + other.guesses,
            correct: self.correct.merge(other.correct),
            misplaced: self.misplaced.merge(other.misplaced),
            absent: self.absent.merge(other.absent),
        }
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Play one game with random guesses drawn from `words`
fn simulate_game(words: &[Word], seed: u64) -> HintStats {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stats = HintStats {
        games: 1,
        ..HintStats::default()
    };

    let Some(hidden) = choose_random_word(words, &mut rng) else {
        return stats;
    };
    let engine_rng = StdRng::from_rng(&mut rng);
    let Ok(mut engine) = QuantumWordle::with_rng(hidden.text(), engine_rng) else {
        return stats;
    };

    for _ in 0..MAX_ATTEMPTS {
        let Some(guess) = choose_random_word(words, &mut rng) else {
            break;
        };
        let report = engine.guess_report(&guess);
        stats.guesses += 1;

        for letter in &report.letters {
            let tally = stats.class_mut(letter.class);
            tally.letters += 1;
            if letter.shown.to_ascii_uppercase() == letter.guessed {
                tally.revealed += 1;
            }
            if letter.shown.is_ascii_uppercase() {
                tally.uppercase += 1;
            }
        }

        if report.won {
            stats.wins += 1;
            break;
        }
    }
    stats
}

/// Simulate `games` independent games in parallel
///
/// Game `i` is seeded with `seed + i`, so results are reproducible for a
/// given seed regardless of thread scheduling.
#[must_use]
pub fn simulate(words: &[Word], games: usize, seed: u64, progress: bool) -> HintStats {
    let bar = if progress {
        let bar = ProgressBar::new(games as u64);
        let template = "{bar:40.cyan/blue} {pos}/{len} games ({eta})";
        if let Ok(style) = ProgressStyle::with_template(template) {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let stats = (0..games)
        .into_par_iter()
        .map(|i| {
            let stats = simulate_game(words, seed.wrapping_add(i as u64));
            bar.inc(1);
            stats
        })
        .reduce(HintStats::default, HintStats::merge);

    bar.finish_and_clear();
    log::info!(
        "simulated {} games, {} guesses, {} wins",
        stats.games,
        stats.guesses,
        stats.wins
    );
    stats
}
