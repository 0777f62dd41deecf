use leptos::prelude::*;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::JsValue;

use crate::core::models::Task;
use crate::core::services::BoardChange;

/// Callbacks the embedding application may hand to a board. Each one is only
/// invoked when supplied.
#[derive(Clone, Copy, Default)]
pub struct BoardCallbacks {
    pub on_items_change: Option<Callback<Vec<Task>>>,
    pub on_add_item: Option<Callback<Task>>,
    pub on_edit_item: Option<Callback<Task>>,
    pub on_delete_item: Option<Callback<String>>,
}

impl BoardCallbacks {
    /// Reports the full collection, then the single affected entity.
    /// Moves only report the collection.
    pub fn dispatch(&self, tasks: Vec<Task>, change: BoardChange) {
        if let Some(on_items_change) = self.on_items_change {
            on_items_change.run(tasks);
        }
        match change {
            BoardChange::Added(task) => {
                if let Some(on_add_item) = self.on_add_item {
                    on_add_item.run(task);
                }
            }
            BoardChange::Edited(task) => {
                if let Some(on_edit_item) = self.on_edit_item {
                    on_edit_item.run(task);
                }
            }
            BoardChange::Deleted(id) => {
                if let Some(on_delete_item) = self.on_delete_item {
                    on_delete_item.run(id);
                }
            }
            BoardChange::Moved { .. } => {}
        }
    }
}

/// Asks the user before a card is removed. A missing window counts as "no".
pub fn confirm_delete() -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message("Are you sure you want to delete this card?").unwrap_or(false))
        .unwrap_or(false)
}

/// Logs `label` followed by `value` as a structured console object.
pub fn log_value<T: Serialize>(label: &str, value: &T) {
    match to_value(value) {
        Ok(js) => web_sys::console::log_2(&JsValue::from_str(label), &js),
        Err(e) => web_sys::console::error_1(&format!("Failed to serialize value for log: {}", e).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{BoardConfig, Priority, Status, TaskDraft};
    use crate::core::services::BoardState;
    use chrono::{TimeZone, Utc};
    use std::sync::{Arc, Mutex};

    fn task(id: &str, status: Status) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: String::new(),
            status,
            priority: Priority::Low,
            due_date: None,
            created_at: Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
            assignee: None,
            tags: Vec::new(),
        }
    }

    fn recording() -> (BoardCallbacks, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let items = log.clone();
        let added = log.clone();
        let edited = log.clone();
        let deleted = log.clone();
        let callbacks = BoardCallbacks {
            on_items_change: Some(Callback::new(move |tasks: Vec<Task>| {
                items.lock().unwrap().push(format!("items:{}", tasks.len()))
            })),
            on_add_item: Some(Callback::new(move |task: Task| {
                added.lock().unwrap().push(format!("add:{}", task.status.as_str()))
            })),
            on_edit_item: Some(Callback::new(move |task: Task| {
                edited.lock().unwrap().push(format!("edit:{}:{}", task.id, task.title))
            })),
            on_delete_item: Some(Callback::new(move |id: String| {
                deleted.lock().unwrap().push(format!("delete:{}", id))
            })),
        };
        (callbacks, log)
    }

    fn apply(state: &BoardState, callbacks: &BoardCallbacks, change: Option<BoardChange>) {
        if let Some(change) = change {
            callbacks.dispatch(state.tasks().to_vec(), change);
        }
    }

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 10, 9, 30, 0).unwrap()
    }

    #[test]
    fn add_reports_collection_then_new_task() {
        let (callbacks, log) = recording();
        let mut state = BoardState::new(Vec::new(), BoardConfig::default());
        state.request_add(Status::Ongoing);
        let draft = TaskDraft { title: "Write docs".to_string(), ..TaskDraft::default() };
        let change = state.save(draft, now());

        apply(&state, &callbacks, change);

        assert_eq!(*log.lock().unwrap(), vec!["items:1", "add:ongoing"]);
    }

    #[test]
    fn edit_reports_collection_then_edited_task() {
        let (callbacks, log) = recording();
        let mut state = BoardState::new(vec![task("1", Status::Todo), task("2", Status::Done)], BoardConfig::default());
        state.request_edit("2");
        let mut draft = state.session().draft().unwrap();
        draft.title = "Ship it".to_string();
        let change = state.save(draft, now());

        apply(&state, &callbacks, change);

        assert_eq!(*log.lock().unwrap(), vec!["items:2", "edit:2:Ship it"]);
    }

    #[test]
    fn delete_reports_collection_then_id() {
        let (callbacks, log) = recording();
        let mut state = BoardState::new(vec![task("1", Status::Todo), task("2", Status::Done)], BoardConfig::default());
        let change = state.delete("1");

        apply(&state, &callbacks, change);

        assert_eq!(*log.lock().unwrap(), vec!["items:1", "delete:1"]);
    }

    #[test]
    fn delete_of_absent_id_reports_nothing() {
        let (callbacks, log) = recording();
        let mut state = BoardState::new(vec![task("1", Status::Todo)], BoardConfig::default());
        let change = state.delete("missing");

        apply(&state, &callbacks, change);

        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn move_reports_only_the_collection() {
        let (callbacks, log) = recording();
        let mut state = BoardState::new(vec![task("1", Status::Todo)], BoardConfig::default());
        let change = state.drop_task("1", Status::Done);

        apply(&state, &callbacks, change);

        assert_eq!(*log.lock().unwrap(), vec!["items:1"]);
    }

    #[test]
    fn unsupplied_callbacks_are_skipped() {
        let (full, log) = recording();
        let only_items = BoardCallbacks { on_items_change: full.on_items_change, ..BoardCallbacks::default() };

        only_items.dispatch(vec![task("1", Status::Todo)], BoardChange::Deleted("2".to_string()));
        BoardCallbacks::default().dispatch(Vec::new(), BoardChange::Added(task("3", Status::Todo)));

        assert_eq!(*log.lock().unwrap(), vec!["items:1"]);
    }
}
