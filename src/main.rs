//! Quantum Wordle CLI

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use quantum_wordle::core::Word;
use quantum_wordle::engine::QuantumWordle;
use quantum_wordle::engine::sampler::LetterClass;
use quantum_wordle::game::Game;
use quantum_wordle::stats::{HintStats, simulate};
use quantum_wordle::wordlists::embedded_words;
use quantum_wordle::wordlists::loader::{choose_random_word, load_from_file, words_from_lines};
use rand::rngs::StdRng;
use rand::{SeedableRng, random};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quantum-wordle", version, about = "Wordle with quantum-search hints")]
struct Args {
    /// Word list to draw the hidden word from (one word per line)
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Play against a fixed hidden word
    #[arg(long, conflicts_with = "simulate")]
    word: Option<String>,

    /// Seed for reproducible games
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable colored board output
    #[arg(long)]
    no_color: bool,

    /// Simulate N games with random guesses and report hint statistics
    #[arg(long, value_name = "N")]
    simulate: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    let words = match &args.words {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Error: The file '{}' was not found.", path.display()))?,
        None => words_from_lines(embedded_words()),
    };
    log::debug!("loaded {} words", words.len());

    let seed = args.seed.unwrap_or_else(random);

    if let Some(games) = args.simulate {
        let stats = simulate(&words, games, seed, true);
        print_stats(&stats);
        return Ok(());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let hidden = match &args.word {
        Some(text) => Word::new(text).context("Invalid hidden word")?,
        None => match choose_random_word(&words, &mut rng) {
            Some(word) => word,
            None => bail!("No valid words to choose a hidden word from"),
        },
    };

    let engine = QuantumWordle::with_rng(hidden.text(), rng)?;
    let mut game = Game::new(engine, !args.no_color);

    let stdin = io::stdin();
    let outcome = game.play(&mut stdin.lock(), &mut io::stdout())?;
    log::info!("game finished: {outcome:?}");

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn print_stats(stats: &HintStats) {
    println!("{}", "Hint statistics".bold());
    println!(
        "  {} games, {} guesses, win rate {:.1}%",
        stats.games,
        stats.guesses,
        stats.win_rate() * 100.0
    );
    println!();
    println!("  {:<10} {:>8} {:>10} {:>10}", "class", "letters", "revealed", "uppercase");
    for class in LetterClass::ALL {
        let tally = stats.class(class);
        println!(
            "  {:<10} {:>8} {:>9.1}% {:>9.1}%",
            class.to_string(),
            tally.letters,
            tally.reveal_rate() * 100.0,
            tally.uppercase_rate() * 100.0
        );
    }
}
