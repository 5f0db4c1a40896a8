//! Help screen, dialogs and message overlays

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 22, frame.area());

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let help_text = vec![
        Line::from(Span::styled(
            "Swiping",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw("  l / →       Next card"),
        Line::raw("  h / ←       Previous card"),
        Line::raw("  g / G       First / last card"),
        Line::raw("  :           Jump to card number"),
        Line::raw(""),
        Line::from(Span::styled(
            "Cards",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw("  a           Add card"),
        Line::raw("  x           Remove current card"),
        Line::raw(""),
        Line::from(Span::styled(
            "Indicators",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw("  + / -       Show more / fewer dots"),
        Line::raw("  u           Toggle unlimited"),
        Line::raw("  p           Toggle jump policy"),
        Line::raw(""),
        Line::from(Span::styled(
            "Other",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw("  ?           Show this help"),
        Line::raw("  q / Esc     Quit"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

pub fn render_confirm_remove(frame: &mut Frame, title: &str) {
    let area = centered_rect(44, 5, frame.area());

    let block = Block::default()
        .title(" Remove card ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let text = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("  Remove "),
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("? (y/n)"),
        ]),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

pub fn render_message(frame: &mut Frame, message: &str, color: Color) {
    let area = frame.area();

    let height = message_height(message, area.width);

    let msg_area = Rect {
        x: 2,
        y: area.height.saturating_sub(2 + height),
        width: area.width.saturating_sub(4),
        height,
    };

    let paragraph = Paragraph::new(format!(" {} ", message))
        .style(Style::default().fg(Color::White).bg(color))
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, msg_area);
    frame.render_widget(paragraph, msg_area);
}

/// Create a centered rectangle of the given size within the parent area
pub fn centered_rect(width: u16, height: u16, parent: Rect) -> Rect {
    let x = parent.x + (parent.width.saturating_sub(width)) / 2;
    let y = parent.y + (parent.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width: width.min(parent.width),
        height: height.min(parent.height),
    }
}

/// Rows needed for `message` in a frame `area_width` wide: at least 1, up to 3.
fn message_height(message: &str, area_width: u16) -> u16 {
    let max_width = area_width.saturating_sub(6) as usize;
    if max_width == 0 {
        return 1;
    }
    (message.width() / max_width + 1).min(3) as u16
}
