use leptos::prelude::*;

use crate::core::models::{BoardConfig, ColumnDef, Task};
use crate::features::kanban::hooks::use_board;
use crate::features::kanban::services::BoardCallbacks;
use super::{KanbanColumn, TaskEditor};

/// Resolves the column layout, falling back to the defaults when the supplied
/// set is inconsistent.
fn resolve_config(columns: Option<Vec<ColumnDef>>) -> BoardConfig {
    match columns {
        Some(columns) => BoardConfig::new(columns).unwrap_or_else(|e| {
            web_sys::console::error_1(&format!("Invalid column configuration, using defaults: {}", e).into());
            BoardConfig::default()
        }),
        None => BoardConfig::default(),
    }
}

#[component]
pub fn KanbanBoard(
    #[prop(optional)] initial_items: Vec<Task>,
    #[prop(optional)] columns: Option<Vec<ColumnDef>>,
    #[prop(optional, into)] on_items_change: Option<Callback<Vec<Task>>>,
    #[prop(optional, into)] on_add_item: Option<Callback<Task>>,
    #[prop(optional, into)] on_edit_item: Option<Callback<Task>>,
    #[prop(optional, into)] on_delete_item: Option<Callback<String>>,
) -> impl IntoView {
    let board = use_board(
        initial_items,
        resolve_config(columns),
        BoardCallbacks {
            on_items_change,
            on_add_item,
            on_edit_item,
            on_delete_item,
        },
    );
    let state = board.state;
    let session = board.session;

    let columns_view = state
        .with_untracked(|s| s.columns().to_vec())
        .into_iter()
        .map(|column| {
            let status = column.status;
            let tasks = Signal::derive(move || state.with(|s| s.tasks_with_status(status)));
            view! {
                <KanbanColumn
                    column=column
                    tasks=tasks
                    on_add_card=board.request_add
                    on_card_click=board.card_click
                    on_card_edit=board.request_edit
                    on_card_delete=board.request_delete
                    on_card_drop=board.drop_card
                />
            }
        })
        .collect::<Vec<_>>();

    let save = board.save;
    let close = board.close;

    view! {
        <div class="kanban-board">{columns_view}</div>
        {move || {
            session.with(|session| {
                session.draft().map(|draft| {
                    view! {
                        <TaskEditor draft=draft is_new=session.is_new_task() on_save=save on_cancel=close />
                    }
                })
            })
        }}
    }
}
