//! Board rendering
//!
//! Draws the accumulated hints as a fixed 6-row grid.

use crate::engine::Hint;
use colored::Colorize;
use std::fmt::Write;

/// Rows on the board (one per allowed attempt)
pub const BOARD_ROWS: usize = 6;

const BORDER: &str = "+--+--+--+--+--+";

/// Render the board for the hints so far
///
/// Filled rows show each hint letter followed by a space; unused rows are
/// blank. With `color`, uppercase letters are green and lowercase yellow.
///
/// # Examples
/// ```
/// use quantum_wordle::board::render_board;
///
/// let board = render_board(&[], false);
/// assert_eq!(board.lines().count(), 13);
/// ```
#[must_use]
pub fn render_board(history: &[Hint], color: bool) -> String {
    let mut out = String::new();

    for row in 0..BOARD_ROWS {
        out.push_str(BORDER);
        out.push('\n');
        out.push('|');
        match history.get(row) {
            Some(hint) => {
                for &letter in hint.letters() {
                    let cell = format!("{} ", letter as char);
                    if color && letter.is_ascii_uppercase() {
                        let _ = write!(out, "{}", cell.green().bold());
                    } else if color {
                        let _ = write!(out, "{}", cell.yellow());
                    } else {
                        out.push_str(&cell);
                    }
                    out.push('|');
                }
            }
            None => {
                for _ in 0..5 {
                    out.push_str("  |");
                }
            }
        }
        out.push('\n');
    }
    out.push_str(BORDER);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::QuantumWordle;

    #[test]
    fn empty_board_has_six_blank_rows() {
        let board = render_board(&[], false);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], BORDER);
        assert_eq!(lines[1], "|  |  |  |  |  |");
        assert_eq!(lines[12], BORDER);
    }

    #[test]
    fn filled_rows_show_hints_in_order() {
        let mut game = QuantumWordle::with_seed("crane", 5).unwrap();
        game.guess(&Word::new("slate").unwrap());
        game.guess(&Word::new("zzzzz").unwrap());

        let board = render_board(game.history(), false);
        let lines: Vec<&str> = board.lines().collect();

        for (row, hint) in game.history().iter().enumerate() {
            let expected: String = hint
                .letters()
                .iter()
                .map(|&l| format!("{} |", l as char))
                .collect();
            assert_eq!(lines[row * 2 + 1], format!("|{expected}"));
        }
        assert_eq!(lines[5], "|  |  |  |  |  |");
    }
}
