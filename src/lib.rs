//! # Quantum Wordle
//!
//! Wordle where every hint letter is drawn from a simulated quantum search.
//!
//! Each guessed letter is located in the hidden word by a closed-form
//! amplitude-amplification search, then a 32-state table biased toward the
//! hidden word is sampled to pick the letter actually shown. Uppercase means
//! the right letter in the right place was revealed; anything lowercase is a
//! hint that may or may not be honest.
//!
//! ```
//! use quantum_wordle::core::Word;
//! use quantum_wordle::engine::QuantumWordle;
//!
//! let mut game = QuantumWordle::with_seed("crane", 42).unwrap();
//! assert!(!game.guess(&Word::new("zzzzz").unwrap()));
//! assert!(game.guess(&Word::new("crane").unwrap()));
//! assert_eq!(game.history().len(), 2);
//! ```

pub mod board;
pub mod core;
pub mod engine;
pub mod game;
pub mod stats;
pub mod wordlists;
