use chrono::Utc;
use leptos::prelude::*;

use crate::core::models::{BoardConfig, Status, Task, TaskDraft};
use crate::core::services::{BoardChange, BoardState, EditorSession};
use crate::features::kanban::services::{confirm_delete, BoardCallbacks};

pub struct BoardHook {
    pub state: ReadSignal<BoardState>,
    pub session: Memo<EditorSession>,
    pub request_add: Callback<Status>,
    pub request_edit: Callback<String>,
    pub request_delete: Callback<String>,
    pub card_click: Callback<String>,
    pub drop_card: Callback<(String, Status)>,
    pub save: Callback<TaskDraft>,
    pub close: Callback<()>,
}

/// Owns the board's collection from here on. `initial_items` is only a seed.
pub fn use_board(initial_items: Vec<Task>, config: BoardConfig, callbacks: BoardCallbacks) -> BoardHook {
    let initial = BoardState::new(initial_items, config);
    for task in initial.unreachable_tasks() {
        web_sys::console::warn_1(
            &format!("Task {} has status '{}' with no column and will not be shown", task.id, task.status.as_str())
                .into(),
        );
    }

    let state = RwSignal::new(initial);
    let session = Memo::new(move |_| state.with(|board| board.session().clone()));

    // Notifies outside of the update so callbacks are free to read the board.
    let commit = move |change: Option<BoardChange>| {
        if let Some(change) = change {
            if let BoardChange::Moved { id, from, to } = &change {
                web_sys::console::log_1(
                    &format!("Moved card {} from {} to {}", id, from.as_str(), to.as_str()).into(),
                );
            }
            let tasks = state.with_untracked(|board| board.tasks().to_vec());
            callbacks.dispatch(tasks, change);
        }
    };

    let request_add = Callback::new(move |status: Status| {
        let opened = state.try_update(|board| board.request_add(status)).unwrap_or(false);
        if !opened {
            web_sys::console::warn_1(&format!("Column '{}' is full", status.as_str()).into());
        }
    });

    let request_edit = Callback::new(move |id: String| {
        if state.try_update(|board| board.request_edit(&id)).unwrap_or(false) {
            web_sys::console::log_1(&format!("Card edit requested: {}", id).into());
        }
    });

    let request_delete = Callback::new(move |id: String| {
        if confirm_delete() {
            commit(state.try_update(|board| board.delete(&id)).flatten());
        }
    });

    let card_click = Callback::new(move |id: String| {
        web_sys::console::log_1(&format!("Card clicked: {}", id).into());
    });

    let drop_card = Callback::new(move |(id, status): (String, Status)| {
        let change = state.try_update(|board| board.drop_task(&id, status)).flatten();
        if change.is_none() {
            web_sys::console::log_1(&format!("Drop of {} onto '{}' ignored", id, status.as_str()).into());
        }
        commit(change);
    });

    let save = Callback::new(move |draft: TaskDraft| {
        commit(state.try_update(|board| board.save(draft, Utc::now())).flatten());
    });

    let close = Callback::new(move |_: ()| {
        state.update(|board| board.close_editor());
    });

    BoardHook {
        state: state.read_only(),
        session,
        request_add,
        request_edit,
        request_delete,
        card_click,
        drop_card,
        save,
        close,
    }
}
