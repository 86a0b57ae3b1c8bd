use quantum_wordle::core::{Label, PositionCode, Word, WordError};
use quantum_wordle::engine::QuantumWordle;
use quantum_wordle::engine::classifier::{CLASSIFIER_SHOTS, classify};
use quantum_wordle::engine::sampler::LetterClass;
use quantum_wordle::engine::state_table::StateTable;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn test_crane_guessed_first_try() {
    let mut game = QuantumWordle::with_seed("CRANE", 2024).unwrap();
    assert!(game.guess(&word("CRANE")));
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_zzzzz_all_absent() {
    let mut game = QuantumWordle::with_seed("CRANE", 2024).unwrap();
    let report = game.guess_report(&word("ZZZZZ"));

    assert!(!report.won);
    for letter in &report.letters {
        assert_eq!(letter.class, LetterClass::Absent);
        assert!(letter.observations.is_ambiguous());
        assert!(letter.shown.is_ascii_lowercase());
    }
}

#[test]
fn test_rejects_invalid_hidden_words() {
    assert!(matches!(
        QuantumWordle::with_seed("CRANES", 1),
        Err(WordError::InvalidLength(6))
    ));
    assert!(matches!(
        QuantumWordle::with_seed("CR-NE", 1),
        Err(WordError::InvalidCharacters)
    ));
}

#[test]
fn test_every_valid_hidden_word_maps_all_codes() {
    for hidden in ["crane", "speed", "aaaaa", "zebra"] {
        let game = QuantumWordle::with_seed(hidden, 0).unwrap();
        let codes: Vec<PositionCode> = game
            .hidden_codes()
            .entries()
            .iter()
            .map(|(_, c)| *c)
            .collect();
        let expected: Vec<PositionCode> = (0..5).map(PositionCode::from_position).collect();
        assert_eq!(codes, expected);
    }
}

#[test]
fn test_repeated_letter_only_last_position_correct() {
    // E sits at positions 2 and 3 of SPEED; only position 3 is reachable
    let mut game = QuantumWordle::with_seed("speed", 5).unwrap();
    let report = game.guess_report(&word("xxexx"));
    assert_eq!(report.letters[2].class, LetterClass::Misplaced);

    let report = game.guess_report(&word("xxxex"));
    assert_eq!(report.letters[3].class, LetterClass::Correct);
}

#[test]
fn test_absent_letter_search_spreads() {
    let mut rng = StdRng::seed_from_u64(77);
    let game = QuantumWordle::with_seed("crane", 0).unwrap();

    let mut ambiguous = 0;
    for _ in 0..100 {
        let obs = classify(b'Q', game.hidden_codes(), &mut rng);
        assert_eq!(obs.ranked().iter().map(|(_, n)| n).sum::<usize>(), CLASSIFIER_SHOTS);
        if obs.is_ambiguous() {
            ambiguous += 1;
        }
    }
    assert!(ambiguous > 0);
}

#[test]
fn test_misplaced_letter_peak_near_half() {
    let mut game = QuantumWordle::with_seed("crane", 31).unwrap();
    let guess = word("nacre");

    let mut peak = 0usize;
    let mut shoulder = 0usize;
    let mut total = 0usize;
    for _ in 0..1000 {
        for letter in game.guess_report(&guess).letters {
            if letter.class != LetterClass::Misplaced {
                continue;
            }
            total += 1;
            if letter.label == Label::PEAK {
                peak += 1;
            } else if letter.label.is_shoulder() {
                shoulder += 1;
            }
        }
    }

    let peak = peak as f64 / total as f64;
    let shoulder = shoulder as f64 / total as f64;
    assert!((peak - 0.5).abs() < 0.04, "peak {peak}");
    assert!((shoulder - 0.25).abs() < 0.04, "shoulder {shoulder}");
}

#[test]
fn test_state_table_reset_twice() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut table = StateTable::new(&mut rng);

    table.reset(&mut rng);
    assert!(table.iter().all(|(_, l)| l.is_ascii_uppercase()));
    table.reset(&mut rng);
    assert_eq!(table.iter().count(), Label::COUNT);
    assert!(table.iter().all(|(_, l)| l.is_ascii_uppercase()));
}

#[test]
fn test_independent_games_do_not_share_state() {
    let mut a = QuantumWordle::with_seed("crane", 1).unwrap();
    let b = QuantumWordle::with_seed("crane", 1).unwrap();

    a.guess(&word("slate"));
    assert_eq!(a.history().len(), 1);
    assert!(b.history().is_empty());
}
