use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::store::{IssueAction, StoreAction};
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

const PAGE_SCROLL: usize = 5;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.expire_notice(Instant::now());
            vec![]
        }
    }
}

/// Apply an action produced by the handler. The store is only ever
/// mutated from here.
pub fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::Dispatch(action) => {
            match &action {
                StoreAction::Issue(IssueAction::AddIssue(title)) => {
                    tracing::debug!(title = %title, "adding issue");
                }
            }
            state.store.dispatch(action);
            let count = state.issues().len();
            tracing::info!(count, revision = state.store.revision(), "issue added");
            state.set_notice(format!("Added issue #{}", count));
        }
        Action::Quit => {
            tracing::info!("quit requested");
            state.should_quit = true;
        }
    }
    state.dirty = true;
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Paste(text) => {
            if state.focus == FocusPanel::Title {
                // Single-line field: line breaks are dropped, everything else kept
                let line: String = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
                state.input.insert_str(&line);
                state.dirty = true;
            }
            vec![]
        }
        CEvent::Mouse(mouse) if state.config.ui.mouse => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Title => handle_title_key(state, key),
        FocusPanel::Submit => handle_submit_key(state, key),
        FocusPanel::Issues => handle_issues_key(state, key),
    }
}

fn handle_title_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => submit(state),
        KeyCode::Char('w') if ctrl => {
            state.input.delete_word_back();
            vec![]
        }
        KeyCode::Char('u') if ctrl => {
            state.input.set_text(String::new());
            vec![]
        }
        KeyCode::Char('a') if ctrl => {
            state.input.move_home();
            vec![]
        }
        KeyCode::Char('e') if ctrl => {
            state.input.move_end();
            vec![]
        }
        KeyCode::Char(c) if !ctrl => {
            state.input.insert_char(c);
            vec![]
        }
        KeyCode::Backspace => {
            state.input.delete_back();
            vec![]
        }
        KeyCode::Delete => {
            state.input.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.input.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.input.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.input.move_home();
            vec![]
        }
        KeyCode::End => {
            state.input.move_end();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_submit_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => submit(state),
        _ => vec![],
    }
}

fn handle_issues_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => state.scroll_down(1),
        KeyCode::PageUp => state.scroll_up(PAGE_SCROLL),
        KeyCode::PageDown => state.scroll_down(PAGE_SCROLL),
        KeyCode::Home => state.scroll_offset = 0,
        KeyCode::End => state.scroll_to_end(),
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    let app_layout = layout::compute_layout(state.viewport);
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app_layout.input_box.contains(pos) {
                state.focus = FocusPanel::Title;
                state.dirty = true;
            } else if app_layout.submit_button.contains(pos) {
                state.focus = FocusPanel::Submit;
                return submit(state);
            } else if app_layout.issue_list.contains(pos) {
                state.focus = FocusPanel::Issues;
                state.dirty = true;
            }
            vec![]
        }
        MouseEventKind::ScrollUp if app_layout.issue_list.contains(pos) => {
            state.scroll_up(1);
            vec![]
        }
        MouseEventKind::ScrollDown if app_layout.issue_list.contains(pos) => {
            state.scroll_down(1);
            vec![]
        }
        _ => vec![],
    }
}

/// Clear the Title field, then dispatch the text it held.
fn submit(state: &mut AppState) -> Vec<Action> {
    let title = state.input.take_text();
    state.dirty = true;
    vec![Action::Dispatch(IssueAction::AddIssue(title).into())]
}
