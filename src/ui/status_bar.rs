use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const HINTS: &str = "Tab focus · Enter submit · Ctrl+C quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let status_style = if state.notice.is_some() {
        Theme::status_notice()
    } else {
        Theme::status_bar()
    };

    let mut parts: Vec<Span> = vec![Span::styled(
        format!(" {} ", state.status_line()),
        status_style,
    )];

    let focus = format!(" [{}] ", state.focus.label());
    let hints = format!(" {} ", HINTS);

    // Pad to fill remaining space; hints are dropped first on narrow terminals
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let total = area.width as usize;
    let show_hints = used + focus.width() + hints.width() <= total;
    let right = focus.width() + if show_hints { hints.width() } else { 0 };
    parts.push(Span::styled(
        " ".repeat(total.saturating_sub(used + right)),
        Theme::status_bar(),
    ));
    if show_hints {
        parts.push(Span::styled(hints, Theme::status_bar()));
    }
    parts.push(Span::styled(focus, Theme::status_focus()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
