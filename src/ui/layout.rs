use ratatui::layout::{Constraint, Direction, Layout, Rect};

const SUBMIT_WIDTH: u16 = 12;

pub struct AppLayout {
    pub header: Rect,
    pub form_heading: Rect,
    pub input_box: Rect,
    pub submit_button: Rect,
    pub list_heading: Rect,
    pub issue_list: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .constraints([
            Constraint::Length(1),           // Page title
            Constraint::Length(1),           // Gap
            Constraint::Length(1),           // "Add new issue"
            Constraint::Length(3),           // Title input + Submit
            Constraint::Length(1),           // Gap
            Constraint::Length(1),           // "Opened issue"
            Constraint::Min(0),              // Cards, first to shrink
        ])
        .split(content);

    let header = v_chunks[0];
    let form_heading = v_chunks[2];
    let form_row = v_chunks[3];
    let list_heading = v_chunks[5];
    let issue_list = v_chunks[6];

    // Form row: input | gap | button
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(SUBMIT_WIDTH),
        ])
        .split(form_row);

    AppLayout {
        header,
        form_heading,
        input_box: h_chunks[0],
        submit_button: h_chunks[1],
        list_heading,
        issue_list,
        status_bar,
    }
}
