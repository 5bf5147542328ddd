//! Formatting utilities for terminal output

use crate::search::Sentence;
use std::time::Duration;

/// Format an anagram class as `bear|bare`
#[must_use]
pub fn format_class(words: &[String]) -> String {
    words.join("|")
}

/// Format a sentence as its classes separated by two spaces
#[must_use]
pub fn format_sentence(sentence: &Sentence<'_>) -> String {
    sentence
        .slots()
        .iter()
        .map(|slot| format_class(slot))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format a duration with a unit suited to its size
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.2}s")
    } else if secs >= 0.001 {
        format!("{:.1}ms", secs * 1_000.0)
    } else {
        format!("{}µs", duration.as_micros())
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
