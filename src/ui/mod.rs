mod input_box;
pub mod issue_card;
pub mod issue_list;
pub mod layout;
mod status_bar;
mod submit_button;
mod theme;

use crate::app::state::*;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    let header = Paragraph::new(Span::styled("Project Issue Tracker", Theme::page_title()))
        .alignment(Alignment::Center);
    frame.render_widget(header, app_layout.header);

    let form_style = if matches!(state.focus, FocusPanel::Title | FocusPanel::Submit) {
        Theme::heading_focused()
    } else {
        Theme::heading()
    };
    frame.render_widget(
        Paragraph::new(Span::styled("Add new issue", form_style)),
        app_layout.form_heading,
    );
    input_box::render(frame, app_layout.input_box, state);
    submit_button::render(frame, app_layout.submit_button, state);

    issue_list::render_heading(frame, app_layout.list_heading, state, app_layout.issue_list);
    issue_list::render(frame, app_layout.issue_list, state);

    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::IssueAction;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> Vec<String> {
        draw_sized(state, 80, 30)
    }

    fn draw_sized(state: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buf = terminal.backend().buffer();
        buf.content
            .chunks(buf.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    fn row_of(rows: &[String], needle: &str) -> Option<usize> {
        rows.iter().position(|r| r.contains(needle))
    }

    fn count(rows: &[String], needle: &str) -> usize {
        rows.iter().filter(|r| r.contains(needle)).count()
    }

    fn with_issues(titles: &[&str]) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        for t in titles {
            state.store.dispatch(IssueAction::AddIssue(t.to_string()));
        }
        state
    }

    #[test]
    fn test_empty_page() {
        let rows = draw(&with_issues(&[]));
        assert!(row_of(&rows, "Project Issue Tracker").is_some());
        assert!(row_of(&rows, "Add new issue").is_some());
        assert!(row_of(&rows, " Title ").is_some());
        assert!(row_of(&rows, "Submit").is_some());
        assert!(row_of(&rows, "Opened issue").is_some());
        assert!(row_of(&rows, "No open issues").is_some());
        assert_eq!(count(&rows, "Issue Title:"), 0);
        assert!(row_of(&rows, "0 open issues").is_some());
    }

    #[test]
    fn test_one_card_per_issue_in_order() {
        let rows = draw(&with_issues(&["A", "B"]));
        assert_eq!(count(&rows, "Issue Title:"), 2);
        assert_eq!(count(&rows, "Opened: yesterday"), 2);
        assert_eq!(count(&rows, "Priority: medium"), 2);
        let a = row_of(&rows, "Issue Title: A").unwrap();
        let b = row_of(&rows, "Issue Title: B").unwrap();
        assert!(a < b);
        assert!(row_of(&rows, "No open issues").is_none());
    }

    #[test]
    fn test_empty_title_still_gets_a_card() {
        let rows = draw(&with_issues(&[""]));
        assert_eq!(count(&rows, "Issue Title:"), 1);
        assert_eq!(count(&rows, "Opened: yesterday"), 1);
    }

    #[test]
    fn test_duplicate_titles_render_separately() {
        let rows = draw(&with_issues(&["same", "same"]));
        assert_eq!(count(&rows, "Issue Title: same"), 2);
    }

    #[test]
    fn test_input_text_is_shown() {
        let mut state = with_issues(&[]);
        state.input.set_text("Bug: Issue 1".into());
        let rows = draw(&state);
        let input_row = row_of(&rows, "Bug: Issue 1").unwrap();
        assert!(input_row < row_of(&rows, "Opened issue").unwrap());
    }

    #[test]
    fn test_short_terminal_keeps_title_text() {
        let mut state = with_issues(&["A", "B", "C"]);
        state.input.set_text("Bug 42".into());
        let rows = draw_sized(&state, 40, 12);
        let title_row = row_of(&rows, " Title ").unwrap();
        assert_eq!(row_of(&rows, "Bug 42"), Some(title_row + 1));
        assert!(row_of(&rows, "(3 hidden)").is_some());
        assert_eq!(count(&rows, "Issue Title:"), 0);
    }

    #[test]
    fn test_overflow_shows_window_and_range() {
        let titles: Vec<String> = (1..=12).map(|i| format!("Issue {:02}", i)).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut state = with_issues(&refs);
        state.scroll_offset = 3;
        let rows = draw(&state);
        assert!(row_of(&rows, "Issue Title: Issue 03").is_none());
        assert!(row_of(&rows, "Issue Title: Issue 04").is_some());
        assert!(row_of(&rows, "(4-8 of 12)").is_some());
        assert!(row_of(&rows, "Issue Title: Issue 12").is_none());
    }

    #[test]
    fn test_rerender_does_not_change_store() {
        let state = with_issues(&["A", "B"]);
        let before = state.store.state().clone();
        let revision = state.store.revision();
        let first = draw(&state);
        let second = draw(&state);
        assert_eq!(first, second);
        assert_eq!(state.store.state(), &before);
        assert_eq!(state.store.revision(), revision);
    }
}
