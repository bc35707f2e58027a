//! TUI rendering with ratatui
//!
//! Layout for the word game: root word, input field, accepted words and score.

use super::app::{Alert, App, MessageStyle};
use crate::output::formatters::{length_badge, score_percent, spaced_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input field
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Accepted words
            Constraint::Percentage(45), // Score and messages
        ])
        .split(chunks[2]);

    render_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, chunks[3]);

    if let Some(alert) = &app.alert {
        render_alert(f, alert);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(spaced_letters(app.session.root_word()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🔤 WORD SCRAMBLE ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
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
                .title(" Enter your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);

    // Cursor after the typed text, inside the border
    if app.alert.is_none() {
        let typed = u16::try_from(app.input_buffer.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(typed);
        f.set_cursor_position((
            x.min(area.right().saturating_sub(2)),
            area.y.saturating_add(1),
        ));
    }
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.session.used_words().is_empty() {
        vec![ListItem::new("No words yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        app.session
            .used_words()
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        length_badge(word.chars().count()),
                        Style::default().fg(Color::Red),
                    ),
                    Span::raw(" "),
                    Span::raw(word.clone()),
                ]))
            })
            .collect()
    };

    let title = format!(" Your Words ({}) ", app.session.used_words().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let score = app.session.score();
    let percent = score_percent(score, app.best_possible);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .percent(percent as u16)
        .label(format!("{score} / {} points", app.best_possible));

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
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Enter: Submit | Ctrl+N/F2: New word | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert(f: &mut Frame, alert: &Alert) {
    let area = centered_rect(50, 7, f.area());

    let content = vec![
        Line::from(""),
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of `percent_x` width and fixed `height`, centered in `r`
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
