//! Simple interactive CLI mode
//!
//! Line-based prompt without TUI: read a string, print its words and
//! sentences, repeat.

use super::descramble::{DescrambleConfig, descramble};
use crate::core::AnagramError;
use crate::dictionary::DictionaryIndex;
use crate::output::formatters::{format_class, format_duration, format_sentence};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// output.
pub fn run_simple(index: &DictionaryIndex, config: &DescrambleConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(index, config, stdin.lock(), stdout.lock())
}

/// Run the prompt loop on any reader and writer
///
/// Ends on `quit`, `q`, `exit` or end of input.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    index: &DictionaryIndex,
    config: &DescrambleConfig,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║             Sentence Anagrams - Interactive Mode             ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Dictionary: {} words in {} anagram classes",
        index.word_count(),
        index.len()
    )?;
    writeln!(out, "Commands: 'quit' to exit\n")?;

    let mut line = String::new();
    loop {
        write!(out, "Enter a string to descramble: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let text = line.trim();
        match text.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            _ => {}
        }

        match descramble(text, config, index) {
            Ok(result) => {
                if result.words.is_empty() {
                    writeln!(out, "{}", "No words were found!".red())?;
                } else {
                    writeln!(
                        out,
                        "Here is a list of possible words your string could be: {}",
                        format_class(result.words).bright_green().bold()
                    )?;
                }

                if result.sentences_skipped {
                    writeln!(
                        out,
                        "{}\n",
                        "Too many letters to search sentences.".yellow()
                    )?;
                    continue;
                }

                writeln!(out, "Sentences found:")?;
                for sentence in &result.sentences {
                    writeln!(out, "  {}", format_sentence(sentence))?;
                }
                writeln!(
                    out,
                    "Time elapsed: {}\n",
                    format_duration(result.stats.elapsed).bright_yellow()
                )?;
            }
            Err(err) if err.is_invalid_letter() => {
                writeln!(
                    out,
                    "{}\n",
                    "Please make sure to only use letters a-z in your string!".red()
                )?;
            }
            Err(
                err @ (AnagramError::SearchLimitExceeded { .. }
                | AnagramError::KeyOverflow { .. }),
            ) => {
                writeln!(out, "{}\n", err.to_string().yellow())?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(out, "👋 Goodbye!")?;
    Ok(())
}
