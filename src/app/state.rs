use crate::config::AppConfig;
use crate::store::{select_project_issues, Store};
use crate::ui::{issue_list, layout};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Transient text of the Title field. `cursor` is a byte index that always
/// sits on a char boundary.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text verbatim and put the cursor at the end.
    pub fn set_text(&mut self, value: String) {
        self.text = value;
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        // Multi-byte chars never contain b' ', so pos is still a boundary.
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Clear the field and hand back what it held. Empty text is returned
    /// like any other value.
    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Title,
    Submit,
    Issues,
}

impl FocusPanel {
    pub fn label(self) -> &'static str {
        match self {
            FocusPanel::Title => "TITLE",
            FocusPanel::Submit => "SUBMIT",
            FocusPanel::Issues => "ISSUES",
        }
    }
}

#[derive(Debug)]
pub struct Notice {
    pub text: String,
    pub shown_at: Instant,
}

pub struct AppState {
    pub config: AppConfig,
    pub store: Store,
    pub input: InputState,
    pub focus: FocusPanel,
    /// Index of the first card shown in the issue list.
    pub scroll_offset: usize,
    /// Last known terminal area, used for mouse hit testing.
    pub viewport: Rect,
    pub notice: Option<Notice>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: Store::new(),
            input: InputState::new(),
            focus: FocusPanel::Title,
            scroll_offset: 0,
            viewport: Rect::default(),
            notice: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn issues(&self) -> &[String] {
        select_project_issues(self.store.state())
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Title => FocusPanel::Submit,
            FocusPanel::Submit => FocusPanel::Issues,
            FocusPanel::Issues => FocusPanel::Title,
        };
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Title => FocusPanel::Issues,
            FocusPanel::Submit => FocusPanel::Title,
            FocusPanel::Issues => FocusPanel::Submit,
        };
        self.dirty = true;
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(n);
        self.dirty = true;
    }

    fn max_scroll(&self) -> usize {
        let list_height = layout::compute_layout(self.viewport).issue_list.height;
        issue_list::max_offset(self.issues().len(), list_height)
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll_offset = (self.scroll_offset + n).min(self.max_scroll());
        self.dirty = true;
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_offset = self.max_scroll();
        self.dirty = true;
    }

    pub fn set_notice(&mut self, text: String) {
        self.notice = Some(Notice {
            text,
            shown_at: Instant::now(),
        });
        self.dirty = true;
    }

    /// Drop the notice once it has been visible for `ui.notice_secs`.
    pub fn expire_notice(&mut self, now: Instant) {
        let ttl = Duration::from_secs(self.config.ui.notice_secs);
        if let Some(ref notice) = self.notice {
            if now.saturating_duration_since(notice.shown_at) >= ttl {
                self.notice = None;
                self.dirty = true;
            }
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref notice) = self.notice {
            return notice.text.clone();
        }
        match self.issues().len() {
            1 => "1 open issue".to_string(),
            n => format!("{} open issues", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IssueAction;

    #[test]
    fn test_input_editing() {
        let mut input = InputState::new();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text, "héllo");
        assert_eq!(input.cursor, input.text.len());

        input.move_left();
        input.move_left();
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "éllo");
        assert_eq!(input.cursor, 0);

        input.delete_forward();
        assert_eq!(input.text, "llo");

        input.move_end();
        input.insert_str(" world");
        assert_eq!(input.text, "llo world");
        input.delete_word_back();
        assert_eq!(input.text, "llo ");
    }

    #[test]
    fn test_set_text_is_verbatim() {
        let mut input = InputState::new();
        input.set_text("  Bug:  spaced  ".to_string());
        assert_eq!(input.text, "  Bug:  spaced  ");
        assert_eq!(input.cursor, input.text.len());
    }

    #[test]
    fn test_take_text_clears() {
        let mut input = InputState::new();
        input.set_text("Bug: Issue 1".to_string());
        assert_eq!(input.take_text(), "Bug: Issue 1");
        assert!(input.text.is_empty());
        assert_eq!(input.cursor, 0);
        assert_eq!(input.take_text(), "");
    }

    #[test]
    fn test_focus_cycle_round_trips() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.focus, FocusPanel::Title);
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::Submit);
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::Issues);
        state.cycle_focus_back();
        assert_eq!(state.focus, FocusPanel::Submit);
    }

    #[test]
    fn test_scroll_is_clamped_to_list() {
        let mut state = AppState::new(AppConfig::default());
        state.scroll_down(5);
        assert_eq!(state.scroll_offset, 0);
        for t in ["A", "B", "C"] {
            state.store.dispatch(IssueAction::AddIssue(t.into()));
        }
        state.scroll_down(10);
        assert_eq!(state.scroll_offset, 2);
        state.scroll_up(1);
        assert_eq!(state.scroll_offset, 1);
        state.scroll_up(10);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_to_end_keeps_last_page_full() {
        let mut state = AppState::new(AppConfig::default());
        // 80x30 leaves room for five cards
        state.viewport = Rect::new(0, 0, 80, 30);
        for t in ["A", "B", "C"] {
            state.store.dispatch(IssueAction::AddIssue(t.into()));
        }
        state.scroll_to_end();
        assert_eq!(state.scroll_offset, 0);
        state.scroll_down(3);
        assert_eq!(state.scroll_offset, 0);

        for t in ["D", "E", "F", "G", "H"] {
            state.store.dispatch(IssueAction::AddIssue(t.into()));
        }
        state.scroll_to_end();
        assert_eq!(state.scroll_offset, 3);
        state.scroll_down(1);
        assert_eq!(state.scroll_offset, 3);
    }

    #[test]
    fn test_notice_expires() {
        let mut state = AppState::new(AppConfig::default());
        state.set_notice("Added issue #1".into());
        let shown_at = state.notice.as_ref().unwrap().shown_at;
        assert_eq!(state.status_line(), "Added issue #1");

        state.expire_notice(shown_at + Duration::from_secs(1));
        assert!(state.notice.is_some());

        state.expire_notice(shown_at + Duration::from_secs(3));
        assert!(state.notice.is_none());
        assert_eq!(state.status_line(), "0 open issues");
    }
}
