//! Sentence Anagrams - CLI
//!
//! Descrambles letters into single words and multi-word sentences, with TUI
//! and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sentence_anagrams::{
    commands::{
        BenchmarkConfig, DescrambleConfig, descramble, find_words, run_benchmark, run_simple,
    },
    dictionary::{DictionaryIndex, loader},
    output::{print_benchmark_result, print_descramble_result, print_word_result},
    search::SearchConfig,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "sentence_anagrams",
    about = "Find single-word and multi-word anagrams of a scrambled string",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word list with one word per line
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Stop a search once a level holds more factor combinations than this (0 = no ceiling)
    #[arg(short = 'm', long, global = true, default_value_t = 2_000_000)]
    max_combinations: usize,

    /// Skip the sentence search for inputs longer than this (0 = no maximum)
    #[arg(long, global = true, default_value_t = 12)]
    max_letters: usize,

    /// Run the search on a single thread
    #[arg(long, global = true)]
    sequential: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based prompt without TUI)
    Simple,

    /// List the dictionary words that use exactly these letters
    Word {
        /// Letters to descramble
        letters: String,
    },

    /// Find every sentence anagram of these letters
    Sentences {
        /// Letters to descramble
        letters: String,

        /// Show at most this many sentences
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show factor combinations and search statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Time sentence searches on scrambled dictionary words
    Benchmark {
        /// Number of scrambled inputs
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Letters per input
        #[arg(short, long, default_value = "8")]
        letters: usize,

        /// Searches per input
        #[arg(short, long, default_value = "1")]
        repeats: usize,

        /// Seed for reproducible inputs
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_parallel(!self.sequential)
            .with_max_combinations((self.max_combinations > 0).then_some(self.max_combinations))
    }

    fn descramble_config(&self) -> DescrambleConfig {
        DescrambleConfig::new(
            self.search_config(),
            (self.max_letters > 0).then_some(self.max_letters),
        )
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(source: &str) -> Result<DictionaryIndex> {
    match source {
        "embedded" => loader::embedded_index().context("embedded word list is malformed"),
        path => loader::load_from_file(path),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let index = load_dictionary(&cli.dictionary)?;

    let search = cli.search_config();
    let config = cli.descramble_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&index, config),
        Commands::Simple => run_simple(&index, &config),
        Commands::Word { letters } => run_word_command(&letters, &index),
        Commands::Sentences {
            letters,
            limit,
            verbose,
        } => run_sentences_command(&letters, limit, verbose, search, &index),
        Commands::Benchmark {
            count,
            letters,
            repeats,
            seed,
        } => {
            let config = BenchmarkConfig {
                count,
                letters,
                repeats,
                seed,
                search,
                show_progress: true,
            };
            run_benchmark_command(&config, &index)
        }
    }
}

fn run_word_command(letters: &str, index: &DictionaryIndex) -> Result<()> {
    let input = letters.trim().to_ascii_lowercase();
    let words = find_words(&input, index)?;
    print_word_result(&input, words);
    Ok(())
}

fn run_sentences_command(
    letters: &str,
    limit: Option<usize>,
    verbose: bool,
    search: SearchConfig,
    index: &DictionaryIndex,
) -> Result<()> {
    // An explicit request searches regardless of --max-letters
    let config = DescrambleConfig::new(search, None);
    let result = descramble(letters, &config, index)?;
    print_descramble_result(&result, limit, verbose);
    Ok(())
}

fn run_benchmark_command(config: &BenchmarkConfig, index: &DictionaryIndex) -> Result<()> {
    println!(
        "Running benchmark on {} scrambled inputs of {} letters...",
        config.count, config.letters
    );
    let result = run_benchmark(index, config)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(index: &DictionaryIndex, config: DescrambleConfig) -> Result<()> {
    use sentence_anagrams::interactive::{App, run_tui};

    let app = App::new(index, config);
    run_tui(app)
}
