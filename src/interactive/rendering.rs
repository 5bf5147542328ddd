//! TUI rendering with ratatui
//!
//! Panels for words, sentences, search statistics and history.

use super::app::{App, MessageStyle};
use crate::output::formatters::{format_class, format_duration, format_sentence};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Results
            Constraint::Percentage(40), // Info
        ])
        .split(chunks[1]);

    render_results(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 SENTENCE ANAGRAMS - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Single words
            Constraint::Min(5),    // Sentences
        ])
        .split(area);

    render_words(f, app, chunks[0]);
    render_sentences(f, app, chunks[1]);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.current {
        None => vec![Line::from("Nothing searched yet")],
        Some(result) if result.words.is_empty() => vec![
            Line::from(vec![
                Span::raw("Input: "),
                Span::styled(
                    result.input.to_uppercase(),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::styled("No words were found!", Style::default().fg(Color::Red)),
        ],
        Some(result) => vec![
            Line::from(vec![
                Span::raw("Input: "),
                Span::styled(
                    result.input.to_uppercase(),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(Span::styled(
                format_class(result.words),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
        ],
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Single Words ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_sentences(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = match &app.current {
        Some(result) if result.sentences_skipped => vec![ListItem::new(
            "Too many letters for a sentence search",
        )
        .style(Style::default().fg(Color::Yellow))],
        Some(result) if result.sentences.is_empty() => {
            vec![ListItem::new("No sentences were found!").style(Style::default().fg(Color::Red))]
        }
        Some(result) => result
            .sentences
            .iter()
            .enumerate()
            .skip(app.scroll)
            .map(|(i, sentence)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>4}. ", i + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(format_sentence(sentence)),
                ]))
            })
            .collect(),
        None => Vec::new(),
    };

    let title = format!(" Sentences ({}) ", app.sentence_count());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search space gauge
            Constraint::Length(7),      // Statistics
            Constraint::Percentage(50), // History
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_search_space(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_search_space(f: &mut Frame, app: &App, area: Rect) {
    let peak = app.current.as_ref().map_or(0, |r| r.stats.peak_level_size);
    let (percent, label) = match app.config.search.max_combinations {
        Some(limit) if limit > 0 => {
            let pct = ((peak as f64 / limit as f64) * 100.0).min(100.0) as u16;
            (pct, format!("largest level {peak} / ceiling {limit}"))
        }
        _ => (0, format!("largest level {peak} / no ceiling")),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(result) = &app.current {
        let stats = &result.stats;
        vec![
            Line::from(format!("Letters:       {}", stats.letters)),
            Line::from(format!("Levels:        {}", stats.levels_visited)),
            Line::from(format!("Combinations:  {}", stats.combinations_examined)),
            Line::from(format!("Reductions:    {}", stats.reductions)),
            Line::from(format!("Elapsed:       {}", format_duration(stats.elapsed))),
        ]
    } else {
        vec![Line::from("No search yet")]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .enumerate()
        .map(|(i, entry)| {
            let content = format!(
                "{}: {} → {} words, {} sentences [{}]",
                app.searches - i,
                entry.input.to_uppercase(),
                entry.words,
                entry.sentences,
                format_duration(entry.elapsed)
            );
            ListItem::new(content)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Letters to descramble | Enter: search ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let dictionary_text = format!(
        "Dictionary: {} words | Searches: {}",
        app.index.word_count(),
        app.searches
    );
    let dictionary = Paragraph::new(dictionary_text).alignment(Alignment::Center);
    f.render_widget(dictionary, chunks[0]);

    let help = Paragraph::new("Esc: Quit | Enter: Search | ↑/↓ PgUp/PgDn: Scroll")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
