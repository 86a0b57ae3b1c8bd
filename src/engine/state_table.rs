//! State table
//!
//! Binds each of the 32 state labels to a displayable letter.

use crate::core::{Label, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Letter assigned to each of the 32 labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTable {
    letters: [u8; Label::COUNT],
}

impl StateTable {
    /// Create a freshly randomized table
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut table = Self {
            letters: [b'A'; Label::COUNT],
        };
        table.reset(rng);
        table
    }

    /// Assign every label an independent uniform letter A-Z
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for slot in &mut self.letters {
            *slot = b'A' + rng.random_range(0..26u8);
        }
    }

    /// Bias the table toward a guessed letter and the hidden word
    ///
    /// Moves `letter` to `11111` (swapping with the label that already held
    /// it, if any), then fills each shoulder label with a hidden-word letter
    /// drawn with replacement.
    pub fn bias_toward<R: Rng + ?Sized>(&mut self, letter: u8, hidden: &Word, rng: &mut R) {
        let peak = Label::PEAK.index();
        let previous = self.letters[peak];
        if let Some(slot) = self.letters.iter().position(|&l| l == letter) {
            self.letters[slot] = previous;
        }
        self.letters[peak] = letter;

        for label in Label::SHOULDER {
            // Word is never empty, so choose always yields a letter
            if let Some(&pick) = hidden.chars().choose(rng) {
                self.letters[label.index()] = pick;
            }
        }
    }

    /// Letter currently bound to `label`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, label: Label) -> u8 {
        self.letters[label.index()]
    }

    /// Iterate (label, letter) pairs in label order
    pub fn iter(&self) -> impl Iterator<Item = (Label, u8)> + '_ {
        Label::all().zip(self.letters.iter().copied())
    }
}
