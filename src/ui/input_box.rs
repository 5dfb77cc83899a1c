use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Title;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" Title ")
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_text = &state.input.text;
    if !focused {
        let paragraph = Paragraph::new(input_text.as_str()).style(Theme::input_text());
        frame.render_widget(paragraph, inner);
        return;
    }

    // Prompt chevron + input text, scrolled so the cursor stays visible
    let prompt_offset = 2u16;
    let avail = inner.width.saturating_sub(prompt_offset + 1) as usize;
    let cursor_col = input_text[..state.input.cursor].width();
    let h_scroll = cursor_col.saturating_sub(avail);

    let prompt = Paragraph::new(Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)));
    frame.render_widget(prompt, inner);

    let text_area = Rect {
        x: inner.x + prompt_offset,
        width: inner.width.saturating_sub(prompt_offset),
        ..inner
    };
    let paragraph = Paragraph::new(input_text.as_str())
        .style(Theme::input_text())
        .scroll((0, h_scroll as u16));
    frame.render_widget(paragraph, text_area);

    if inner.width > 0 && inner.height > 0 {
        let cursor_x = text_area.x + (cursor_col - h_scroll) as u16;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}
