use chrono::{DateTime, Utc};

use crate::core::models::{BoardConfig, ColumnDef, Status, Task, TaskDraft};

/// What the editor modal is currently doing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorSession {
    #[default]
    Closed,
    /// Creating a task that will land in `status`.
    Creating { status: Status },
    /// Editing a copy of an existing task.
    Editing { task: Task },
}

impl EditorSession {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditorSession::Closed)
    }

    pub fn is_new_task(&self) -> bool {
        matches!(self, EditorSession::Creating { .. })
    }

    pub fn editing_item(&self) -> Option<&Task> {
        match self {
            EditorSession::Editing { task } => Some(task),
            _ => None,
        }
    }

    pub fn pending_status(&self) -> Option<Status> {
        match self {
            EditorSession::Creating { status } => Some(*status),
            _ => None,
        }
    }

    /// Initial form contents for the session.
    pub fn draft(&self) -> Option<TaskDraft> {
        match self {
            EditorSession::Closed => None,
            EditorSession::Creating { .. } => Some(TaskDraft::default()),
            EditorSession::Editing { task } => Some(TaskDraft::from_task(task)),
        }
    }
}

/// A successful mutation of the collection, carrying the affected entity.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardChange {
    Added(Task),
    Edited(Task),
    Deleted(String),
    Moved { id: String, from: Status, to: Status },
}

/// Authoritative task collection of a board plus its editor session.
///
/// Every mutation swaps in a freshly built `Vec` instead of editing elements
/// in place, and operations on unknown ids are silent no-ops returning `None`.
#[derive(Debug, Clone)]
pub struct BoardState {
    tasks: Vec<Task>,
    config: BoardConfig,
    session: EditorSession,
}

impl BoardState {
    pub fn new(tasks: Vec<Task>, config: BoardConfig) -> Self {
        Self {
            tasks,
            config,
            session: EditorSession::Closed,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn columns(&self) -> &[ColumnDef] {
        self.config.columns()
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks rendered by the column for `status`, in collection order.
    pub fn tasks_with_status(&self, status: Status) -> Vec<Task> {
        self.tasks.iter().filter(|task| task.status == status).cloned().collect()
    }

    /// One bucket per configured column, in column order.
    pub fn partition(&self) -> Vec<(ColumnDef, Vec<Task>)> {
        self.columns()
            .iter()
            .map(|column| (column.clone(), self.tasks_with_status(column.status)))
            .collect()
    }

    /// Tasks whose status has no column. They stay in the collection but nothing renders them.
    pub fn unreachable_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.config.column_for(task.status).is_none())
            .collect()
    }

    pub fn can_add_to(&self, status: Status) -> bool {
        let count = self.tasks.iter().filter(|task| task.status == status).count();
        self.config
            .column_for(status)
            .map_or(true, |column| column.can_accept_new(count))
    }

    /// Opens the editor for a new task in `status`. Refused when that column is full.
    pub fn request_add(&mut self, status: Status) -> bool {
        if !self.can_add_to(status) {
            return false;
        }
        self.session = EditorSession::Creating { status };
        true
    }

    /// Opens the editor bound to task `id`. Unknown ids are ignored.
    pub fn request_edit(&mut self, id: &str) -> bool {
        match self.find(id).cloned() {
            Some(task) => {
                self.session = EditorSession::Editing { task };
                true
            }
            None => false,
        }
    }

    pub fn close_editor(&mut self) {
        self.session = EditorSession::Closed;
    }

    /// Applies the editor's draft and closes the editor.
    ///
    /// Creating: appends a task with a fresh id, `created_at = now` and the
    /// remembered status. Editing: replaces the bound task in place, keeping
    /// its id, status and creation time.
    pub fn save(&mut self, draft: TaskDraft, now: DateTime<Utc>) -> Option<BoardChange> {
        let session = std::mem::take(&mut self.session);
        match session {
            EditorSession::Closed => None,
            EditorSession::Creating { status } => {
                let task = Task::from_draft(draft, status, now);
                self.tasks = self.tasks.iter().cloned().chain(std::iter::once(task.clone())).collect();
                Some(BoardChange::Added(task))
            }
            EditorSession::Editing { task: bound } => {
                let id = bound.id;
                let mut edited = self.find(&id)?.clone();
                edited.apply_draft(draft);
                self.tasks = self
                    .tasks
                    .iter()
                    .map(|task| if task.id == id { edited.clone() } else { task.clone() })
                    .collect();
                Some(BoardChange::Edited(edited))
            }
        }
    }

    /// Removes task `id`. Absent ids leave the collection untouched.
    pub fn delete(&mut self, id: &str) -> Option<BoardChange> {
        self.find(id)?;
        self.tasks = self.tasks.iter().filter(|task| task.id != id).cloned().collect();
        Some(BoardChange::Deleted(id.to_string()))
    }

    /// Moves task `id` to `status`. Column capacity is not consulted here.
    pub fn drop_task(&mut self, id: &str, status: Status) -> Option<BoardChange> {
        let from = self.find(id)?.status;
        if from == status {
            return None;
        }
        self.tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    Task { status, ..task.clone() }
                } else {
                    task.clone()
                }
            })
            .collect();
        Some(BoardChange::Moved { id: id.to_string(), from, to: status })
    }
}
