//! Hint label sampler
//!
//! Draws one of the 32 state labels from a distribution tuned by the bias
//! angle θ of the letter's classification.
//!
//! | class       | θ     | `11111` | shoulder (5 labels) | other 26 labels |
//! |-------------|-------|---------|---------------------|-----------------|
//! | `Absent`    | 0     | 1/32    | 5/32                | 26/32           |
//! | `Correct`   | π/2   | 0.5     | 0.5 (0.1 each)      | 0               |
//! | `Misplaced` | 2π/3  | 0.5     | 0.25 (0.05 each)    | 0.25            |

use crate::core::Label;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

/// Where a guessed letter stands relative to the hidden word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// Not in the word (or the search was inconclusive)
    Absent,
    /// In the word, at another position
    Misplaced,
    /// In the word at this position
    Correct,
}

impl LetterClass {
    /// All classes, in display order
    pub const ALL: [Self; 3] = [Self::Correct, Self::Misplaced, Self::Absent];

    /// Bias angle θ used when sampling the hint
    #[must_use]
    pub const fn theta(self) -> f64 {
        match self {
            Self::Absent => 0.0,
            Self::Misplaced => 2.0 * PI / 3.0,
            Self::Correct => FRAC_PI_2,
        }
    }

    /// Whether the state table is biased before sampling
    #[must_use]
    pub const fn is_biased(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

impl fmt::Display for LetterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Misplaced => "misplaced",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

/// Probability of each label for a class
#[must_use]
pub fn label_weights(class: LetterClass) -> [f64; Label::COUNT] {
    let (peak, shoulder, rest) = match class {
        LetterClass::Absent => {
            let uniform = 1.0 / Label::COUNT as f64;
            (uniform, uniform, uniform)
        }
        LetterClass::Correct => (0.5, 0.1, 0.0),
        LetterClass::Misplaced => (0.5, 0.05, 0.25 / 26.0),
    };

    let mut weights = [rest; Label::COUNT];
    weights[Label::PEAK.index()] = peak;
    for label in Label::SHOULDER {
        weights[label.index()] = shoulder;
    }
    weights
}

/// Draw a single label for `class`
///
/// # Panics
/// Never panics. Every class has positive total weight.
pub fn sample_label<R: Rng + ?Sized>(class: LetterClass, rng: &mut R) -> Label {
    let dist = WeightedIndex::new(label_weights(class)).expect("label weights are positive");
    Label::new(dist.sample(rng) as u8)
}
