use super::{AskRequest, TaskListRef};

/// Immutable snapshot of the chat session state the UI reads. The session
/// owner (transport layer) builds a fresh snapshot on every change and hands
/// it to the components; nothing here is looked up ambiently.
#[derive(Debug, Clone, Default)]
pub struct SessionSnapshot {
    /// True while the backend is working; action buttons are disabled.
    pub loading: bool,

    /// Pending ask request, if any.
    pub ask: Option<AskRequest>,

    /// Task list handles in creation order. The panel follows the latest.
    pub tasklists: Vec<TaskListRef>,
}

impl SessionSnapshot {
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_ask(mut self, ask: AskRequest) -> Self {
        self.ask = Some(ask);
        self
    }

    pub fn with_tasklists(mut self, tasklists: Vec<TaskListRef>) -> Self {
        self.tasklists = tasklists;
        self
    }

    /// The most recently created task list, if any.
    pub fn latest_tasklist(&self) -> Option<&TaskListRef> {
        self.tasklists.last()
    }
}
