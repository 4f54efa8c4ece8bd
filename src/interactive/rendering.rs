//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::STARTING_LIVES;
use crate::output::formatters::{gallows, letter_list, progress_line};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input hint
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Word and messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_round_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
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

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let lives = app.round.lives_remaining();
    let color = match lives {
        0 | 1 => Color::Red,
        2 | 3 => Color::Yellow,
        _ => Color::White,
    };

    let content: Vec<Line> = gallows(lives).lines().map(Line::from).collect();
    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_round_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Length(3), // Lives
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_lives(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    // Reveal the full word once the round is over
    let word = if app.input_mode == InputMode::RoundOver {
        let letters: Vec<char> = app
            .round
            .secret()
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .collect();
        progress_line(&letters)
    } else {
        progress_line(&app.round.progress())
    };

    let mut hint_spans = vec![
        Span::raw("Wrong: "),
        Span::styled(
            letter_list(app.round.wrong_letters()),
            Style::default().fg(Color::Red),
        ),
    ];
    if let Some(hint) = app.hint {
        hint_spans.push(Span::raw("   Hint: "));
        hint_spans.push(Span::styled(
            hint.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let content = vec![
        Line::from(Span::styled(
            word,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(hint_spans),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_lives(f: &mut Frame, app: &App, area: Rect) {
    let lives = app.round.lives_remaining();
    let percent = u16::from(lives) * 100 / u16::from(STARTING_LIVES);

    let gauge = Gauge::default()
        .block(Block::default().title(" Lives ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Red))
        .percent(percent)
        .label(format!("{lives}/{STARTING_LIVES}"));

    f.render_widget(gauge, area);
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
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
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
    let (title, color) = match app.input_mode {
        InputMode::RoundOver => (" Round over | 'n' new round | 'q' quit ", Color::Green),
        InputMode::Guessing => (" Type a letter | TAB hint | ESC quit ", Color::Yellow),
    };

    let input = Paragraph::new("").block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let rounds = Paragraph::new(format!(
        "Rounds: {} | Won: {}",
        app.stats.rounds_played, app.stats.rounds_won
    ))
    .alignment(Alignment::Center);
    f.render_widget(rounds, chunks[0]);

    let rate = Paragraph::new(format!("Win Rate: {:.0}%", app.stats.win_rate()))
        .alignment(Alignment::Center);
    f.render_widget(rate, chunks[1]);

    let score = Paragraph::new(format!(
        "Score: {} | Best: {}",
        app.stats.total_score, app.stats.best_score
    ))
    .alignment(Alignment::Center);
    f.render_widget(score, chunks[2]);

    let words = Paragraph::new(format!("Words: {}", app.words.len()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(words, chunks[3]);
}
