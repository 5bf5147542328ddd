//! Benchmark command
//!
//! Times sentence searches on scrambled dictionary words.

use crate::core::AnagramError;
use crate::dictionary::DictionaryIndex;
use crate::search::{SearchConfig, SentenceSearch};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tracing::debug;

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Number of scrambled inputs
    pub count: usize,
    /// Letters per input
    pub letters: usize,
    /// Searches per input
    pub repeats: usize,
    /// Seed for reproducible inputs
    pub seed: Option<u64>,
    pub search: SearchConfig,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 20,
            letters: 8,
            repeats: 1,
            seed: None,
            search: SearchConfig::default(),
            show_progress: true,
        }
    }
}

/// Timing of one benchmark input
#[derive(Debug, Clone)]
pub struct BenchmarkSample {
    pub input: String,
    /// Average time of one search
    pub per_run: Duration,
    pub sentences: usize,
    pub combinations: usize,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub samples: Vec<BenchmarkSample>,
    pub repeats: usize,
    pub average: Duration,
    pub fastest: Duration,
    pub slowest: Duration,
    pub total_time: Duration,
    pub combinations_per_second: f64,
}

/// Measure how long it takes to call `f` `n` times
pub fn time_function<F, R>(mut f: F, n: usize) -> Duration
where
    F: FnMut() -> R,
{
    let start = Instant::now();
    for _ in 0..n {
        std::hint::black_box(f());
    }
    start.elapsed()
}

/// Clamp a requested repeat count to what a [`Duration`] can be divided by
fn runs_per_input(requested: usize) -> u32 {
    u32::try_from(requested).unwrap_or(u32::MAX).max(1)
}

/// Build `count` scrambled inputs of exactly `letters` letters
///
/// Random dictionary words are concatenated until the input is long enough,
/// cut to length, and shuffled. Returns an empty list if the dictionary is
/// empty.
pub fn scrambled_inputs<R: Rng>(
    index: &DictionaryIndex,
    count: usize,
    letters: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut words: Vec<&str> = index.words().collect();
    words.sort_unstable();

    if words.is_empty() || letters == 0 {
        return Vec::new();
    }

    (0..count)
        .map(|_| {
            let mut pool: Vec<char> = Vec::with_capacity(letters + 16);
            while pool.len() < letters {
                if let Some(word) = words.choose(rng) {
                    pool.extend(word.chars());
                }
            }
            pool.truncate(letters);
            pool.shuffle(rng);
            pool.into_iter().collect()
        })
        .collect()
}

/// Run the benchmark
///
/// # Errors
///
/// Returns an error if a search exceeds the configured combination ceiling.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_benchmark(
    index: &DictionaryIndex,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, AnagramError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let inputs = scrambled_inputs(index, config.count, config.letters, &mut rng);
    let repeats = runs_per_input(config.repeats);
    let search = SentenceSearch::new(index, config.search);

    let pb = if config.show_progress {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut samples = Vec::with_capacity(inputs.len());
    let mut combinations = 0usize;

    for input in inputs {
        pb.set_message(input.clone());

        let outcome = search.run(&input)?;
        let mut failure = None;
        let elapsed = time_function(
            || {
                if let Err(err) = search.run(&input) {
                    failure = Some(err);
                }
            },
            repeats as usize,
        );
        if let Some(err) = failure {
            return Err(err);
        }

        let per_run = elapsed / repeats;
        debug!(input = %input, per_run_us = per_run.as_micros(), "benchmarked input");

        combinations += outcome.stats.combinations_examined * repeats as usize;
        samples.push(BenchmarkSample {
            input,
            per_run,
            sentences: outcome.sentences.len(),
            combinations: outcome.stats.combinations_examined,
        });
        pb.inc(1);
    }

    pb.finish_with_message("done");
    let total_time = start.elapsed();

    let timed: Duration = samples.iter().map(|s| s.per_run).sum();
    let average = if samples.is_empty() {
        Duration::ZERO
    } else {
        timed / samples.len() as u32
    };
    let fastest = samples.iter().map(|s| s.per_run).min().unwrap_or_default();
    let slowest = samples.iter().map(|s| s.per_run).max().unwrap_or_default();
    let search_secs = timed.as_secs_f64() * f64::from(repeats);
    let combinations_per_second = if search_secs > 0.0 {
        combinations as f64 / search_secs
    } else {
        0.0
    };

    Ok(BenchmarkResult {
        samples,
        repeats: repeats as usize,
        average,
        fastest,
        slowest,
        total_time,
        combinations_per_second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::index_from_slice;

    fn sample() -> DictionaryIndex {
        index_from_slice(&["a", "bear", "bare", "ate", "eta", "tea", "me", "meat"]).unwrap()
    }

    fn quiet(count: usize, letters: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            letters,
            repeats: 2,
            seed: Some(7),
            search: SearchConfig::sequential(),
            show_progress: false,
        }
    }

    #[test]
    fn scrambled_inputs_have_requested_length() {
        let index = sample();
        let mut rng = StdRng::seed_from_u64(1);
        let inputs = scrambled_inputs(&index, 5, 6, &mut rng);

        assert_eq!(inputs.len(), 5);
        assert!(inputs.iter().all(|s| s.chars().count() == 6));
        assert!(inputs.iter().all(|s| s.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn scrambled_inputs_are_reproducible() {
        let index = sample();
        let first = scrambled_inputs(&index, 4, 5, &mut StdRng::seed_from_u64(42));
        let second = scrambled_inputs(&index, 4, 5, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn scrambled_inputs_empty_dictionary() {
        let index = index_from_slice(&[]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(scrambled_inputs(&index, 3, 4, &mut rng).is_empty());
    }

    #[test]
    fn benchmark_runs() {
        let index = sample();
        let result = run_benchmark(&index, &quiet(4, 5)).unwrap();

        assert_eq!(result.samples.len(), 4);
        assert_eq!(result.repeats, 2);
        assert!(result.fastest <= result.average);
        assert!(result.average <= result.slowest);
        assert!(result.samples.iter().all(|s| s.combinations > 0));
    }

    #[test]
    fn benchmark_empty_run() {
        let index = sample();
        let result = run_benchmark(&index, &quiet(0, 5)).unwrap();

        assert!(result.samples.is_empty());
        assert_eq!(result.average, Duration::ZERO);
        assert!(result.combinations_per_second.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_respects_ceiling() {
        let index = sample();
        let mut config = quiet(1, 8);
        config.search = SearchConfig::sequential().with_max_combinations(Some(1));
        assert!(matches!(
            run_benchmark(&index, &config),
            Err(AnagramError::SearchLimitExceeded { .. })
        ));
    }

    #[test]
    fn runs_per_input_stays_in_range() {
        assert_eq!(runs_per_input(0), 1);
        assert_eq!(runs_per_input(3), 3);
        assert_eq!(runs_per_input(usize::MAX), u32::MAX);
        assert_eq!(runs_per_input(1 << 32), u32::MAX);
        assert!(Duration::from_secs(1).checked_div(runs_per_input(1 << 32)).is_some());
    }

    #[test]
    fn time_function_calls_n_times() {
        let mut calls = 0;
        let _ = time_function(|| calls += 1, 3);
        assert_eq!(calls, 3);
    }
}
