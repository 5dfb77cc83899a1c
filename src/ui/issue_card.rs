//! Display unit for a single issue: its title and two fixed labels.

use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Rows taken by one card, borders included.
pub const CARD_HEIGHT: u16 = 4;

pub const TITLE_PREFIX: &str = "Issue Title: ";
pub const OPENED_LABEL: &str = "Opened: yesterday";
pub const PRIORITY_LABEL: &str = "Priority: medium";

pub fn card_lines(title: &str) -> Vec<Line<'_>> {
    vec![
        Line::from(vec![
            Span::styled(TITLE_PREFIX, Theme::card_title()),
            Span::styled(title, Theme::card_title()),
        ]),
        Line::from(vec![
            Span::styled(OPENED_LABEL, Theme::card_label()),
            Span::raw("    "),
            Span::styled(PRIORITY_LABEL, Theme::card_label()),
        ]),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, title: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    let paragraph = Paragraph::new(card_lines(title)).block(block);
    frame.render_widget(paragraph, area);
}
