use leptos::prelude::*;
use web_sys::DragEvent;

use crate::core::models::{ColumnDef, Status, Task};
use crate::core::services::{DragPayload, DRAG_MIME};
use super::TaskCard;

#[component]
pub fn KanbanColumn(
    column: ColumnDef,
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(default = true)] allow_add_new: bool,
    #[prop(optional, into)] on_add_card: Option<Callback<Status>>,
    #[prop(optional, into)] on_card_click: Option<Callback<String>>,
    #[prop(optional, into)] on_card_edit: Option<Callback<String>>,
    #[prop(optional, into)] on_card_delete: Option<Callback<String>>,
    #[prop(optional, into)] on_card_drop: Option<Callback<(String, Status)>>,
) -> impl IntoView {
    let status = column.status;
    let column_class = format!("kanban-column {}", status.css_class());
    let max_items = column.limit();
    let can_add_more = {
        let column = column.clone();
        Memo::new(move |_| tasks.with(|tasks| column.can_accept_new(tasks.len())))
    };

    // Any drag may hover; the payload is only checked on drop.
    let handle_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
    };

    let handle_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let raw = ev
            .data_transfer()
            .and_then(|data_transfer| data_transfer.get_data(DRAG_MIME).ok())
            .unwrap_or_default();
        match DragPayload::decode(&raw) {
            Ok(payload) => {
                if let Some(cb) = on_card_drop {
                    cb.run((payload.task_id().to_string(), status));
                }
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("Ignoring drop on '{}': {}", status.as_str(), e).into());
            }
        }
    };

    view! {
        <div class=column_class on:dragover=handle_drag_over on:drop=handle_drop>
            <div class="kanban-column-header">
                <span>{column.title.clone()}</span>
                <div class="column-counts">
                    <span class="task-count">{move || tasks.with(|tasks| tasks.len())}</span>
                    {max_items.map(|max| view! { <span class="task-max">{format!("/ {}", max)}</span> })}
                </div>
            </div>
            <div class="column-content">
                {move || {
                    tasks.with(|tasks| {
                        tasks.iter()
                            .cloned()
                            .map(|task| view! {
                                <TaskCard
                                    task=task
                                    on_card_click=on_card_click
                                    on_card_edit=on_card_edit
                                    on_card_delete=on_card_delete
                                />
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
            {move || (allow_add_new && can_add_more.get()).then(|| view! {
                <button class="kanban-add-card" on:click=move |_| {
                    if let Some(cb) = on_add_card {
                        cb.run(status);
                    }
                }>"+ Add new card"</button>
            })}
            {move || match max_items {
                Some(max) if !can_add_more.get() => Some(view! {
                    <div class="column-limit">{format!("Maximum {} items reached", max)}</div>
                }),
                _ => None,
            }}
        </div>
    }
}
