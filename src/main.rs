//! Hangman - CLI
//!
//! Terminal hangman with TUI and line-based modes, plus a self-play simulator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_simple, run_simulation},
    core::WordList,
    output::print_simulation_result,
    wordlists::loader::{embedded_word_list, load_from_file},
};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time before your five lives run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible word selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Let the letter advisor play every word in the list
    Simulate {
        /// Limit number of words to play
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the word list selected by the -w flag
fn load_word_list(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "embedded" => Ok(embedded_word_list()?),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list from {path}"))?;
            WordList::new(words).with_context(|| format!("No usable words in {path}"))
        }
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Using fixed seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let words = load_word_list(&cli.wordlist)?;
    info!("Loaded {} words", words.len());

    let rng = build_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, rng),
        Commands::Simple => run_simple_command(&words, rng),
        Commands::Simulate { limit } => run_simulate_command(&words, limit),
    }
}

fn run_play_command(words: &WordList, rng: StdRng) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(words, rng);
    run_tui(app)
}

fn run_simple_command(words: &WordList, mut rng: StdRng) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    run_simple(words, &mut rng, &mut input, &mut output)?;
    Ok(())
}

fn run_simulate_command(words: &WordList, limit: Option<usize>) -> Result<()> {
    let result = run_simulation(words, limit, true)?;
    print_simulation_result(&result);
    Ok(())
}
