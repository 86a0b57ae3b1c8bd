//! Position classifier
//!
//! Locates a guessed letter in the hidden word with a closed-form
//! amplitude-amplification search, then measures it by repeated sampling.
//!
//! ## Search space
//!
//! The search register is 2 bits wide (4 candidates); the ancilla bit is
//! raised only when the marked code is `111`, giving 8 observable outcomes.
//!
//! ## Rounds
//!
//! Each round applies:
//! 1. **Oracle**: negate the amplitude of the marked register index
//! 2. **Diffuser**: reflect every amplitude about the mean, `a' = 2·mean - a`
//!
//! For 4 candidates a single round moves all probability onto the marked
//! index. With no marked index the diffuser leaves the uniform state
//! unchanged, so measurements spread over four outcomes.

use crate::core::{PositionCode, PositionCodeMap};
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use std::f64::consts::FRAC_PI_4;

/// Number of measurement trials per classification
pub const CLASSIFIER_SHOTS: usize = 200;

/// Width of the search register in bits
const REGISTER_BITS: u32 = 2;

/// Number of candidates in the search register
const REGISTER_SIZE: usize = 1 << REGISTER_BITS;

/// Amplification rounds: ⌊(π/4)·√n⌋ with n the register width
#[must_use]
pub fn grover_iterations() -> usize {
    (FRAC_PI_4 * f64::from(REGISTER_BITS).sqrt()).floor() as usize
}

/// Measured position codes ranked by observation count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observations {
    ranked: Vec<(PositionCode, usize)>,
}

impl Observations {
    /// Rank raw measurements by count (descending), ties in order of first appearance
    #[must_use]
    pub fn from_measurements(measurements: &[PositionCode]) -> Self {
        let mut ranked: Vec<(PositionCode, usize)> = Vec::new();
        for &code in measurements {
            match ranked.iter_mut().find(|(c, _)| *c == code) {
                Some((_, count)) => *count += 1,
                None => ranked.push((code, 1)),
            }
        }
        // Stable sort keeps first-appearance order among equal counts
        ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
        Self { ranked }
    }

    /// Most frequently observed code
    #[must_use]
    pub fn top(&self) -> Option<PositionCode> {
        self.ranked.first().map(|&(code, _)| code)
    }

    /// More than one distinct code was observed
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.ranked.len() > 1
    }

    /// Number of distinct codes observed
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// No measurements were taken
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Codes with their counts, most frequent first
    #[must_use]
    pub fn ranked(&self) -> &[(PositionCode, usize)] {
        &self.ranked
    }
}

/// Outcome probabilities after amplifying `marked`
///
/// Returns one probability per 3-bit outcome.
#[must_use]
pub fn outcome_probabilities(marked: Option<PositionCode>) -> [f64; PositionCode::OUTCOMES] {
    let mut amplitudes = [1.0 / (REGISTER_SIZE as f64).sqrt(); REGISTER_SIZE];

    if let Some(code) = marked {
        let target = code.register() as usize;
        for _ in 0..grover_iterations() {
            amplitudes[target] = -amplitudes[target];

            let mean = amplitudes.iter().sum::<f64>() / REGISTER_SIZE as f64;
            for a in &mut amplitudes {
                *a = 2.0 * mean - *a;
            }
        }
    }

    let ancilla = marked.is_some_and(PositionCode::ancilla);
    let offset = if ancilla { REGISTER_SIZE } else { 0 };

    let mut probabilities = [0.0; PositionCode::OUTCOMES];
    for (i, a) in amplitudes.iter().enumerate() {
        probabilities[offset + i] = a * a;
    }
    probabilities
}

/// Classify where `letter` sits in the hidden word
///
/// Marks the letter's code in `hidden` (if present), amplifies it and
/// measures `CLASSIFIER_SHOTS` times.
///
/// # Panics
/// Never panics. The outcome distribution always has positive total weight.
pub fn classify<R: Rng + ?Sized>(
    letter: u8,
    hidden: &PositionCodeMap,
    rng: &mut R,
) -> Observations {
    let probabilities = outcome_probabilities(hidden.code_for(letter));
    let dist = WeightedIndex::new(probabilities).expect("amplitudes are normalized");

    let measurements: Vec<PositionCode> = (0..CLASSIFIER_SHOTS)
        .map(|_| PositionCode::from_bits(dist.sample(rng) as u8))
        .collect();

    Observations::from_measurements(&measurements)
}
