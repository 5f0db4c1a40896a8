//! UI rendering for the card carousel demo
//!
//! Layout from top to bottom: header, current card, indicator row, status bar
//! and footer, with dialogs and messages drawn on top.

mod help;

use card_indicator::widget::IndicatorRow;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

/// Render the application UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(5),    // Card
        Constraint::Length(1), // Indicators
        Constraint::Length(1), // Status bar
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_header(frame, layout[0]);
    render_card(frame, app, layout[1]);
    render_indicators(frame, app, layout[2]);
    render_status_bar(frame, app, layout[3]);
    render_footer(frame, app, layout[4]);

    match &app.mode {
        Mode::JumpTo { input } => {
            render_jump_bar(frame, input, layout[3]);
        }
        Mode::ConfirmRemove => {
            let title = app
                .current_card()
                .map(|card| card.title.as_str())
                .unwrap_or("card");
            help::render_confirm_remove(frame, title);
        }
        Mode::Help => {
            help::render_help(frame);
        }
        Mode::Normal => {}
    }

    // Render error/message overlay
    if let Some(ref error) = app.error {
        help::render_message(frame, error, Color::Red);
    } else if let Some(ref message) = app.message {
        help::render_message(frame, message, Color::Green);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = format!(
        "─ card-indicator {:─>width$}",
        "",
        width = (area.width as usize).saturating_sub(17)
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(header, area);
}

fn render_card(frame: &mut Frame, app: &App, area: Rect) {
    let Some(card) = app.current_card() else {
        let paragraph = Paragraph::new("No cards. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    };

    // Keep the card narrower than the screen so it reads as a card
    let width = (area.width * 3 / 4).max(card.title.width() as u16 + 4);
    let card_area = help::centered_rect(width, area.height, area);

    let block = Block::default()
        .title(format!(" {} ", card.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let body = vec![
        Line::raw(""),
        Line::raw(card.body.as_str()),
        Line::raw(""),
        Line::styled(
            format!("{} of {}", card.number, app.carousel.pages().len()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(body)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, card_area);
    frame.render_widget(paragraph, card_area);
}

fn render_indicators(frame: &mut Frame, app: &App, area: Rect) {
    let row = IndicatorRow::new(app.indicators.slots(), app.indicators.config());
    frame.render_widget(row, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.carousel.pages().len();
    let mut parts = vec![if count == 0 {
        "0 cards".to_string()
    } else {
        format!("page {}/{}", app.current_page() + 1, count)
    }];

    if let Some(range) = app.indicators.range() {
        parts.push(format!("window {}", range));
    }
    parts.push(format!("cap {}", app.indicators.cap()));
    parts.push(format!("jumps {}", app.indicators.config().jump_policy));

    let text = format!("  {}", parts.join(" │ "));
    let bar = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(bar, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer = Paragraph::new(app.mode.hints()).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(footer, area);
}

fn render_jump_bar(frame: &mut Frame, input: &str, area: Rect) {
    frame.render_widget(Clear, area);
    let text = format!("  : {}", input);
    let bar = Paragraph::new(text).style(Style::default().fg(Color::Yellow));
    frame.render_widget(bar, area);
}
