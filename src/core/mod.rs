//! Core value types: validated words, position codes and state labels.

mod codes;
mod word;

pub use codes::{Label, PositionCode, PositionCodeMap};
pub use word::{WORD_LENGTH, Word, WordError};
