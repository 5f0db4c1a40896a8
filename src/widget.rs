//! Terminal rendering of an indicator row.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::IndicatorConfig;
use crate::indicator::IndicatorSlot;

/// Widest gap drawn after a dot; no terminal row is wider.
const MAX_MARGIN: f32 = u16::MAX as f32;

/// A row of dots, one per visible indicator slot.
pub struct IndicatorRow<'a> {
    slots: &'a [IndicatorSlot],
    config: &'a IndicatorConfig,
    alignment: Alignment,
}

impl<'a> IndicatorRow<'a> {
    pub fn new(slots: &'a [IndicatorSlot], config: &'a IndicatorConfig) -> Self {
        Self {
            slots,
            config,
            alignment: Alignment::Center,
        }
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Build the styled line without rendering it.
    pub fn line(&self) -> Line<'a> {
        let config: &'a IndicatorConfig = self.config;
        let spacing = config.spacing();
        let mut spans = Vec::with_capacity(self.slots.len() * 2);

        for slot in self.slots.iter() {
            let appearance = slot.appearance(spacing);
            if !appearance.visible {
                continue;
            }

            let visual = config.visual(slot.selected);
            let symbol = if slot.state.is_shrunk() {
                visual.shrunk_symbol.as_str()
            } else {
                visual.symbol.as_str()
            };
            let mut style = Style::default().fg(visual.color);
            if slot.selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(symbol, style));

            let margin = appearance.margin_end.round().clamp(0.0, MAX_MARGIN) as usize;
            if margin > 0 {
                spans.push(Span::raw(" ".repeat(margin)));
            }
        }

        Line::from(spans)
    }
}

impl Widget for IndicatorRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let alignment = self.alignment;
        Paragraph::new(self.line())
            .alignment(alignment)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::{IndicatorCap, IndicatorController};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn controller(cap: i32, total_count: usize) -> IndicatorController {
        let config = IndicatorConfig::default().with_cap(IndicatorCap::try_from(cap).unwrap());
        let mut controller = IndicatorController::new(config);
        controller.reset(total_count);
        controller
    }

    #[test]
    fn test_initial_window_row() {
        let controller = controller(3, 10);
        let row = IndicatorRow::new(controller.slots(), controller.config());
        // Selected, normal, then a shrunken edge dot with no trailing space
        assert_eq!(text(&row.line()), "● ○ ·");
    }

    #[test]
    fn test_middle_window_row() {
        let mut controller = controller(3, 10);
        controller.on_page_selected(1).unwrap();
        controller.on_page_selected(2).unwrap();
        let row = IndicatorRow::new(controller.slots(), controller.config());
        assert_eq!(text(&row.line()), "· ● ·");
    }

    #[test]
    fn test_last_page_row() {
        let mut controller = controller(3, 5);
        for position in 1..5 {
            controller.on_page_selected(position).unwrap();
        }
        let row = IndicatorRow::new(controller.slots(), controller.config());
        assert_eq!(text(&row.line()), "· ○ ●");
    }

    #[test]
    fn test_unlimited_row_shows_every_dot() {
        let controller = controller(-1, 4);
        let row = IndicatorRow::new(controller.slots(), controller.config());
        assert_eq!(text(&row.line()), "● ○ ○ ○ ");
    }

    #[test]
    fn test_selected_dot_is_bold() {
        let controller = controller(-1, 2);
        let row = IndicatorRow::new(controller.slots(), controller.config());
        let line = row.line();
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(!line.spans[2].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_huge_spacing_is_clamped() {
        let config = IndicatorConfig {
            indicator_spacing: Some(1e30),
            ..IndicatorConfig::default()
        };
        let mut controller: IndicatorController = IndicatorController::new(config);
        controller.reset(3);

        let row = IndicatorRow::new(controller.slots(), controller.config());
        let line = row.line();
        assert_eq!(line.spans.len(), 5);
        assert_eq!(line.spans[1].content.len(), u16::MAX as usize);
        assert_eq!(line.spans[3].content.len(), u16::MAX as usize);
    }

    #[test]
    fn test_negative_spacing_draws_no_gap() {
        let config = IndicatorConfig {
            indicator_spacing: Some(-4.0),
            ..IndicatorConfig::default()
        };
        let mut controller: IndicatorController = IndicatorController::new(config);
        controller.reset(3);

        let row = IndicatorRow::new(controller.slots(), controller.config());
        assert_eq!(text(&row.line()), "●○○");
    }

    #[test]
    fn test_render_left_aligned() {
        let controller = controller(3, 10);
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        IndicatorRow::new(controller.slots(), controller.config())
            .alignment(Alignment::Left)
            .render(area, &mut buf);

        let rendered: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert_eq!(rendered, "● ○ ·   ");
    }
}
