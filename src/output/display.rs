//! Display functions for command results

use super::formatters::{create_progress_bar, format_class, format_duration, format_sentence};
use crate::commands::{BenchmarkResult, DescrambleResult};
use colored::Colorize;

/// Print the single-word anagrams of an input
pub fn print_word_result(input: &str, words: &[String]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Descrambling: {}", input.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if words.is_empty() {
        println!("{}", "No words were found!".red());
    } else {
        println!(
            "Possible words: {}",
            format_class(words).bright_green().bold()
        );
    }
}

/// Print the words and sentences found for an input
///
/// At most `limit` sentences are listed. With `verbose`, each sentence also
/// shows the factor combination behind it and the search statistics are
/// expanded.
pub fn print_descramble_result(result: &DescrambleResult<'_>, limit: Option<usize>, verbose: bool) {
    print_word_result(&result.input, result.words);

    if result.sentences_skipped {
        println!(
            "\n{}",
            format!(
                "Sentence search skipped: {} letters is above the configured maximum",
                result.stats.letters
            )
            .yellow()
        );
        return;
    }

    println!("\n📝 {}", "Sentences:".bright_cyan().bold());
    if result.sentences.is_empty() {
        println!("   {}", "No sentences were found!".red());
    }

    let shown = limit.unwrap_or(result.sentences.len());
    for (i, sentence) in result.sentences.iter().take(shown).enumerate() {
        let line = format!(
            "   {:>4}. {}",
            (i + 1).to_string().bright_black(),
            format_sentence(sentence)
        );
        if verbose {
            println!("{line}  {}", sentence.combination().to_string().bright_black());
        } else {
            println!("{line}");
        }
    }
    if result.sentences.len() > shown {
        println!(
            "   {}",
            format!("... and {} more", result.sentences.len() - shown).bright_black()
        );
    }

    let stats = &result.stats;
    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   Sentences found:  {}", result.sentences.len());
    println!(
        "   Time elapsed:     {}",
        format_duration(stats.elapsed).bright_yellow()
    );
    if verbose {
        println!("   Letters:          {}", stats.letters);
        println!("   Levels searched:  {}", stats.levels_visited);
        println!("   Reductions:       {}", stats.reductions);
        println!("   Combinations:     {}", stats.combinations_examined);
        println!("   Largest level:    {}", stats.peak_level_size);
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Inputs tested:    {}", result.samples.len());
    println!("   Runs per input:   {}", result.repeats);
    println!(
        "   Average search:   {}",
        format_duration(result.average).bright_yellow().bold()
    );
    println!(
        "   Fastest:          {}",
        format_duration(result.fastest).green()
    );
    println!(
        "   Slowest:          {}",
        format_duration(result.slowest).yellow()
    );
    println!(
        "   Total time:       {:.2}s",
        result.total_time.as_secs_f64()
    );
    println!(
        "   Combinations/sec: {:.0}",
        result.combinations_per_second
    );

    println!("\n📈 {}", "Slowest inputs:".bright_cyan().bold());
    let slowest = result.slowest.as_secs_f64();
    let mut samples: Vec<_> = result.samples.iter().collect();
    samples.sort_by(|a, b| b.per_run.cmp(&a.per_run));
    for sample in samples.iter().take(10) {
        let bar = create_progress_bar(sample.per_run.as_secs_f64(), slowest, 30);
        println!(
            "   {:<14} {} {:>9} {:>5} sentences",
            sample.input,
            bar.green(),
            format_duration(sample.per_run),
            sample.sentences
        );
    }
}
