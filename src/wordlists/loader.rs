//! Word list loading utilities
//!
//! Loads word lists from files or the embedded default and picks hidden words.

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank and invalid lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use quantum_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("valid-wordle-words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert lines of text to words, skipping blank and invalid entries
///
/// # Examples
/// ```
/// use quantum_wordle::wordlists::loader::words_from_lines;
/// use quantum_wordle::wordlists::embedded_words;
///
/// let words = words_from_lines(embedded_words());
/// assert_eq!(words.len(), embedded_words().count());
/// ```
#[must_use]
pub fn words_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Word> {
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Pick a hidden word uniformly at random
///
/// Returns `None` for an empty list.
pub fn choose_random_word<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Option<Word> {
    words.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn words_from_lines_converts_valid_words() {
        let words = words_from_lines(["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_lines_skips_invalid() {
        let words = words_from_lines(["crane", "toolong", "abc", "", "  ", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn load_from_file_basic() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "crane").unwrap();
        writeln!(temp_file, "slate").unwrap();
        writeln!(temp_file, "irate").unwrap();
        temp_file.flush().unwrap();

        let words = load_from_file(temp_file.path()).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn load_from_file_skips_blank_and_invalid() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "crane").unwrap();
        writeln!(temp_file, "toolongword").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "   ").unwrap();
        writeln!(temp_file, "  slate  ").unwrap();
        temp_file.flush().unwrap();

        let words = load_from_file(temp_file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn load_from_file_nonexistent_fails() {
        let result = load_from_file("/path/that/does/not/exist.txt");
        assert!(result.is_err());
    }

    #[test]
    fn choose_random_word_from_list() {
        let words = words_from_lines(["crane", "slate"]);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..10 {
            let pick = choose_random_word(&words, &mut rng).unwrap();
            assert!(words.contains(&pick));
        }
    }

    #[test]
    fn choose_random_word_empty_list() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(choose_random_word(&[], &mut rng), None);
    }
}
