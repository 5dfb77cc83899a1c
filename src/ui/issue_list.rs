use crate::app::state::*;
use crate::ui::issue_card::{self, CARD_HEIGHT};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Number of whole cards that fit in `height` rows.
pub fn capacity(height: u16) -> usize {
    (height / CARD_HEIGHT) as usize
}

/// Largest useful scroll offset: the one that shows the last page full.
pub fn max_offset(len: usize, height: u16) -> usize {
    len.saturating_sub(capacity(height).max(1))
}

/// Range of issue indices that fit in a list area of `height` rows.
pub fn visible_range(len: usize, scroll_offset: usize, height: u16) -> std::ops::Range<usize> {
    let capacity = capacity(height);
    let start = scroll_offset.min(max_offset(len, height));
    let end = (start + capacity).min(len);
    start..end.max(start)
}

pub fn render_heading(frame: &mut Frame, area: Rect, state: &AppState, list_area: Rect) {
    let style = if state.focus == FocusPanel::Issues {
        Theme::heading_focused()
    } else {
        Theme::heading()
    };
    let issues = state.issues();
    let range = visible_range(issues.len(), state.scroll_offset, list_area.height);

    let mut spans = vec![Span::styled("Opened issue", style)];
    if range.is_empty() && !issues.is_empty() {
        spans.push(Span::styled(
            format!("  ({} hidden)", issues.len()),
            Theme::muted(),
        ));
    } else if range.len() < issues.len() {
        spans.push(Span::styled(
            format!("  ({}-{} of {})", range.start + 1, range.end, issues.len()),
            Theme::muted(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let issues = state.issues();
    if issues.is_empty() {
        let placeholder = Paragraph::new(Span::styled(" No open issues", Theme::muted()));
        frame.render_widget(placeholder, area);
        return;
    }

    let range = visible_range(issues.len(), state.scroll_offset, area.height);
    for (slot, title) in issues[range].iter().enumerate() {
        let card_area = Rect {
            x: area.x,
            y: area.y + slot as u16 * CARD_HEIGHT,
            width: area.width,
            height: CARD_HEIGHT,
        };
        issue_card::render(frame, card_area, title);
    }
}
