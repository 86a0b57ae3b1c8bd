//! Word lists for Quantum Wordle
//!
//! A default list is compiled into the binary; `loader` reads others from disk.

pub mod loader;

/// Built-in hidden-word list, one lowercase word per line
pub const EMBEDDED: &str = include_str!("../../data/words.txt");

/// The embedded list as individual words
pub fn embedded_words() -> impl Iterator<Item = &'static str> {
    EMBEDDED.lines().map(str::trim).filter(|line| !line.is_empty())
}
