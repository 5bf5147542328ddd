//! TUI application state and logic

use crate::commands::{DescrambleConfig, DescrambleResult, descramble};
use crate::dictionary::DictionaryIndex;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Searches kept in the history panel
const HISTORY_LIMIT: usize = 10;

/// Application state
pub struct App<'a> {
    pub index: &'a DictionaryIndex,
    pub config: DescrambleConfig,
    pub input_buffer: String,
    pub current: Option<DescrambleResult<'a>>,
    pub history: Vec<HistoryEntry>,
    pub searches: usize,
    pub messages: Vec<Message>,
    pub scroll: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub input: String,
    pub words: usize,
    pub sentences: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(index: &'a DictionaryIndex, config: DescrambleConfig) -> Self {
        Self {
            index,
            config,
            input_buffer: String::new(),
            current: None,
            history: Vec::new(),
            searches: 0,
            messages: vec![
                Message {
                    text: format!(
                        "Loaded {} words in {} anagram classes.",
                        index.word_count(),
                        index.len()
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type some letters and press Enter to descramble them.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            scroll: 0,
            should_quit: false,
        }
    }

    /// Descramble the input buffer and store the result
    pub fn submit(&mut self) {
        let input = self.input_buffer.trim().to_string();
        if input.is_empty() {
            return;
        }

        match descramble(&input, &self.config, self.index) {
            Ok(result) => {
                let summary = if result.sentences_skipped {
                    format!(
                        "{}: {} words; too many letters for sentences",
                        result.input,
                        result.words.len()
                    )
                } else {
                    format!(
                        "{}: {} words, {} sentences",
                        result.input,
                        result.words.len(),
                        result.sentences.len()
                    )
                };
                let style = if result.is_empty() {
                    MessageStyle::Error
                } else {
                    MessageStyle::Success
                };
                self.add_message(&summary, style);

                self.history.push(HistoryEntry {
                    input: result.input.clone(),
                    words: result.words.len(),
                    sentences: result.sentences.len(),
                    elapsed: result.stats.elapsed,
                });
                if self.history.len() > HISTORY_LIMIT {
                    self.history.remove(0);
                }
                self.searches += 1;
                self.current = Some(result);
                self.scroll = 0;
                self.input_buffer.clear();
            }
            Err(err) if err.is_invalid_letter() => {
                self.add_message(
                    "Please make sure to only use letters a-z!",
                    MessageStyle::Error,
                );
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Number of sentences in the current result
    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.current.as_ref().map_or(0, |r| r.sentences.len())
    }

    pub fn scroll_down(&mut self, amount: usize) {
        let max = self.sentence_count().saturating_sub(1);
        self.scroll = (self.scroll + amount).min(max);
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => {
                    app.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    app.submit();
                }
                KeyCode::Down => app.scroll_down(1),
                KeyCode::Up => app.scroll_up(1),
                KeyCode::PageDown => app.scroll_down(10),
                KeyCode::PageUp => app.scroll_up(10),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::index_from_slice;
    use crate::search::SearchConfig;

    fn sample() -> DictionaryIndex {
        index_from_slice(&["a", "bear", "bare", "ate", "eta", "tea", "me"]).unwrap()
    }

    fn config() -> DescrambleConfig {
        DescrambleConfig::new(SearchConfig::sequential(), Some(10))
    }

    #[test]
    fn submit_stores_result_and_history() {
        let index = sample();
        let mut app = App::new(&index, config());
        app.input_buffer = "teame".to_string();
        app.submit();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.sentence_count(), 1);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].input, "teame");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn submit_invalid_keeps_input() {
        let index = sample();
        let mut app = App::new(&index, config());
        app.input_buffer = "te4".to_string();
        app.submit();

        assert_eq!(app.input_buffer, "te4");
        assert!(app.current.is_none());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn submit_empty_is_ignored() {
        let index = sample();
        let mut app = App::new(&index, config());
        app.input_buffer = "   ".to_string();
        app.submit();
        assert!(app.history.is_empty());
        assert_eq!(app.messages.len(), 2);
    }

    #[test]
    fn scroll_is_clamped() {
        let index = sample();
        let mut app = App::new(&index, config());
        app.scroll_down(5);
        assert_eq!(app.scroll, 0);

        app.input_buffer = "teame".to_string();
        app.submit();
        app.scroll_down(5);
        assert_eq!(app.scroll, 0);
        app.scroll_up(3);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn history_is_capped() {
        let index = sample();
        let mut app = App::new(&index, config());
        for _ in 0..15 {
            app.input_buffer = "teame".to_string();
            app.submit();
        }
        assert_eq!(app.history.len(), HISTORY_LIMIT);
        assert_eq!(app.searches, 15);
    }

    #[test]
    fn messages_are_capped() {
        let index = sample();
        let mut app = App::new(&index, config());
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
