//! Application store: a root state built from slices, updated only through
//! `Store::dispatch`.

pub mod issue;

pub use issue::{IssueAction, IssueState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootState {
    pub issue: IssueState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    Issue(IssueAction),
}

impl From<IssueAction> for StoreAction {
    fn from(action: IssueAction) -> Self {
        StoreAction::Issue(action)
    }
}

/// Process-wide state container.
///
/// `revision` increases by one per dispatched action so the view can tell
/// whether anything changed since it last looked.
#[derive(Debug, Default)]
pub struct Store {
    state: RootState,
    revision: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RootState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn dispatch(&mut self, action: impl Into<StoreAction>) {
        match action.into() {
            StoreAction::Issue(action) => {
                let prev = std::mem::take(&mut self.state.issue);
                self.state.issue = issue::reduce(prev, action);
            }
        }
        self.revision += 1;
        tracing::debug!(
            revision = self.revision,
            issues = self.state.issue.project_issues.len(),
            "store updated"
        );
    }
}

/// Selector for the list of open issue titles.
pub fn select_project_issues(state: &RootState) -> &[String] {
    &state.issue.project_issues
}
