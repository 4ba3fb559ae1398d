//! Speedle - CLI
//!
//! Timed word guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use speedle::{
    commands::{run_simple, score_guess},
    game::{DEFAULT_TIME_LIMIT, GameConfig, GameController},
    interactive::{App, run_tui},
    output::print_score_result,
    wordlists::{EmbeddedWords, FileWords, WORDS_COUNT, WordSource},
};
use std::io;

#[derive(Parser)]
#[command(
    name = "speedle",
    about = "Guess the five-letter word in six tries, optionally against the clock",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hard mode: a countdown runs and fast wins go on the leaderboard
    #[arg(long, global = true)]
    hard: bool,

    /// Hard mode time limit in seconds
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_TIME_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    time: u32,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for target selection, for reproducible rounds
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a known target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG takes precedence over the -v flags
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Pick the word source from the -w flag
fn load_word_source(wordlist: &str) -> Result<Box<dyn WordSource>> {
    match wordlist {
        "embedded" => {
            info!("Using embedded word list ({WORDS_COUNT} words)");
            Ok(Box::new(EmbeddedWords))
        }
        path => {
            let words = FileWords::open(path)
                .with_context(|| format!("failed to open word list '{path}'"))?;
            info!("Using word list from {}", words.path().display());
            Ok(Box::new(words))
        }
    }
}

fn game_config(cli: &Cli) -> GameConfig {
    let config = if cli.hard {
        GameConfig::hard(cli.time)
    } else {
        GameConfig::standard()
    };
    match cli.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    match &cli.command {
        None | Some(Commands::Play) => run_play_command(&cli),
        Some(Commands::Simple) => run_simple_command(&cli),
        Some(Commands::Score { guess, target }) => run_score_command(guess, target),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let source = load_word_source(&cli.wordlist)?;
    let game = GameController::new(source, game_config(cli))?;
    run_tui(App::new(game))
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let source = load_word_source(&cli.wordlist)?;
    let mut game = GameController::new(source, game_config(cli))?;
    run_simple(&mut game, io::stdin().lock(), &mut io::stdout())
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_guess(guess, target)?;
    print_score_result(&result);
    Ok(())
}
