//! The `issue` slice: the ordered list of submitted issue titles.

/// Slice state. Titles are kept in submission order; duplicates and empty
/// strings are stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueState {
    pub project_issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueAction {
    AddIssue(String),
}

/// Produce the next slice state. The previous list is carried over
/// unchanged with the new title appended at the end.
pub fn reduce(mut state: IssueState, action: IssueAction) -> IssueState {
    match action {
        IssueAction::AddIssue(title) => {
            state.project_issues.push(title);
        }
    }
    state
}
