//! Position codes and state labels
//!
//! Two small bit-label spaces drive the engine:
//! - a 3-bit `PositionCode` per word position, searched by the classifier
//! - a 5-bit `Label` per state table slot, drawn by the sampler

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// 3-bit code for each of the five word positions
///
/// The first four positions use the 2-bit register values `00..11`; the last
/// position also raises the ancilla bit, giving `111`.
const POSITION_BITS: [u8; WORD_LENGTH] = [0b000, 0b001, 0b010, 0b011, 0b111];

/// A letter position encoded as one of five fixed 3-bit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionCode(u8);

impl PositionCode {
    /// Number of distinct 3-bit outcomes (`000..111`)
    pub const OUTCOMES: usize = 8;

    /// Code for a word position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub const fn from_position(position: usize) -> Self {
        Self(POSITION_BITS[position])
    }

    /// Build a code from raw bits, masked to 3 bits
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b111)
    }

    /// Raw 3-bit value
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// The 2-bit search register index (low bits)
    #[inline]
    #[must_use]
    pub const fn register(self) -> u8 {
        self.0 & 0b011
    }

    /// Whether the ancilla bit (high bit) is set
    #[inline]
    #[must_use]
    pub const fn ancilla(self) -> bool {
        self.0 & 0b100 != 0
    }
}

impl fmt::Display for PositionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03b}", self.0)
    }
}

/// Letter to position code mapping for one word
///
/// Holds exactly one entry per position. Looking a letter up returns the
/// code of its last occurrence, so a repeated letter is only ever reachable
/// at its final position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionCodeMap {
    entries: [(u8, PositionCode); WORD_LENGTH],
}

impl PositionCodeMap {
    /// Build the map for a word
    #[must_use]
    pub fn new(word: &Word) -> Self {
        let mut entries = [(0, PositionCode::from_position(0)); WORD_LENGTH];
        for (i, &letter) in word.chars().iter().enumerate() {
            entries[i] = (letter, PositionCode::from_position(i));
        }
        Self { entries }
    }

    /// Code assigned to `letter`, or `None` if the letter is not in the word
    #[must_use]
    pub fn code_for(&self, letter: u8) -> Option<PositionCode> {
        self.entries
            .iter()
            .rev()
            .find(|(l, _)| *l == letter)
            .map(|&(_, code)| code)
    }

    /// All (letter, code) entries in position order
    #[must_use]
    pub const fn entries(&self) -> &[(u8, PositionCode); WORD_LENGTH] {
        &self.entries
    }
}

/// A 5-bit state label (`00000..11111`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(u8);

impl Label {
    /// Number of labels
    pub const COUNT: usize = 32;

    /// `11111`, the label the guessed letter is moved to
    pub const PEAK: Self = Self(0b11111);

    /// The five labels filled with hidden-word letters when biasing
    pub const SHOULDER: [Self; 5] = [
        Self(0b11110),
        Self(0b11100),
        Self(0b11000),
        Self(0b10000),
        Self(0b00000),
    ];

    /// Build a label from an index, masked to 5 bits
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index & 0b1_1111)
    }

    /// Index into a 32-slot table
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All 32 labels in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }

    /// Whether this is one of the five shoulder labels
    #[must_use]
    pub fn is_shoulder(self) -> bool {
        Self::SHOULDER.contains(&self)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_codes_display_as_three_bits() {
        let codes: Vec<String> = (0..5)
            .map(|i| PositionCode::from_position(i).to_string())
            .collect();
        assert_eq!(codes, ["000", "001", "010", "011", "111"]);
    }

    #[test]
    fn position_code_register_and_ancilla() {
        let last = PositionCode::from_position(4);
        assert_eq!(last.register(), 0b11);
        assert!(last.ancilla());

        let fourth = PositionCode::from_position(3);
        assert_eq!(fourth.register(), 0b11);
        assert!(!fourth.ancilla());
    }

    #[test]
    fn code_map_has_five_entries_in_order() {
        let map = PositionCodeMap::new(&Word::new("crane").unwrap());
        let letters: Vec<u8> = map.entries().iter().map(|(l, _)| *l).collect();
        assert_eq!(letters, b"CRANE");

        let codes: Vec<u8> = map.entries().iter().map(|(_, c)| c.bits()).collect();
        assert_eq!(codes, [0b000, 0b001, 0b010, 0b011, 0b111]);
    }

    #[test]
    fn code_map_lookup() {
        let map = PositionCodeMap::new(&Word::new("crane").unwrap());
        assert_eq!(map.code_for(b'C'), Some(PositionCode::from_position(0)));
        assert_eq!(map.code_for(b'E'), Some(PositionCode::from_position(4)));
        assert_eq!(map.code_for(b'Z'), None);
    }

    #[test]
    fn code_map_repeated_letter_uses_last_occurrence() {
        let map = PositionCodeMap::new(&Word::new("speed").unwrap());
        // E appears at 2 and 3; only 3 is reachable
        assert_eq!(map.code_for(b'E'), Some(PositionCode::from_position(3)));
        assert_eq!(map.entries().len(), 5);
    }

    #[test]
    fn labels_display_as_five_bits() {
        assert_eq!(Label::PEAK.to_string(), "11111");
        let shoulder: Vec<String> = Label::SHOULDER.iter().map(ToString::to_string).collect();
        assert_eq!(shoulder, ["11110", "11100", "11000", "10000", "00000"]);
    }

    #[test]
    fn all_labels_cover_table() {
        let labels: Vec<Label> = Label::all().collect();
        assert_eq!(labels.len(), Label::COUNT);
        assert_eq!(labels[0].index(), 0);
        assert_eq!(labels[31], Label::PEAK);
        assert!(!Label::PEAK.is_shoulder());
        assert!(Label::new(0).is_shoulder());
    }
}
