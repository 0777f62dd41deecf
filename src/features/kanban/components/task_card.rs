use chrono::Utc;
use leptos::prelude::*;
use web_sys::DragEvent;

use crate::core::models::{format_short_date, Task};
use crate::core::services::{DragPayload, DRAG_MIME};

// Renders one task and reports intents by id; holds no state of its own.
#[component]
pub fn TaskCard(
    task: Task,
    #[prop(optional_no_strip)] on_card_click: Option<Callback<String>>,
    #[prop(optional_no_strip)] on_card_edit: Option<Callback<String>>,
    #[prop(optional_no_strip)] on_card_delete: Option<Callback<String>>,
) -> impl IntoView {
    let now = Utc::now();
    let is_overdue = task.is_overdue(now);
    let card_class = format!(
        "kanban-card {}{}",
        task.priority.css_class(),
        if is_overdue { " overdue" } else { "" }
    );

    let handle_drag_start = {
        let id = task.id.clone();
        move |ev: DragEvent| {
            let Some(data_transfer) = ev.data_transfer() else {
                return;
            };
            match DragPayload::task(id.clone()).encode() {
                Ok(raw) => {
                    if data_transfer.set_data(DRAG_MIME, &raw).is_err() {
                        web_sys::console::error_1(&format!("Failed to attach drag payload for card {}", id).into());
                    }
                    data_transfer.set_effect_allowed("move");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to encode drag payload: {}", e).into());
                }
            }
        }
    };

    let handle_click = {
        let id = task.id.clone();
        move |_| {
            if let Some(cb) = on_card_click {
                cb.run(id.clone());
            }
        }
    };

    let handle_edit = {
        let id = task.id.clone();
        move |e: leptos::ev::MouseEvent| {
            e.stop_propagation();
            if let Some(cb) = on_card_edit {
                cb.run(id.clone());
            }
        }
    };

    let handle_delete = {
        let id = task.id.clone();
        move |e: leptos::ev::MouseEvent| {
            e.stop_propagation();
            if let Some(cb) = on_card_delete {
                cb.run(id.clone());
            }
        }
    };

    let badge_class = format!("status-badge {}", task.status.css_class());
    let priority_title = format!("{} priority", task.priority.as_str());
    let created_label = format!("Created: {}", format_short_date(task.created_at.date_naive(), now));

    let description = (!task.description.is_empty())
        .then(|| view! { <p class="kanban-card-description">{task.description.clone()}</p> });

    let tags = (!task.tags.is_empty()).then(|| {
        view! {
            <div class="kanban-card-tags">
                {task.tags.iter().map(|tag| view! { <span class="tag-chip">{tag.clone()}</span> }).collect::<Vec<_>>()}
            </div>
        }
    });

    let assignee = task
        .assignee
        .clone()
        .map(|assignee| view! { <span class="kanban-card-assignee">{format!("👤 {}", assignee)}</span> });

    let due = task.due_date.map(|due_date| {
        let due_class = if is_overdue { "kanban-card-due overdue" } else { "kanban-card-due" };
        view! {
            <div class=due_class>
                {if is_overdue { "⚠️ " } else { "📅 " }}
                {format_short_date(due_date, now)}
                {is_overdue.then_some(" (Overdue)")}
            </div>
        }
    });

    view! {
        <div class=card_class draggable="true" on:dragstart=handle_drag_start on:click=handle_click>
            <div class="kanban-card-header">
                <h4 class="kanban-card-title">{task.title.clone()}</h4>
                <span class=badge_class>{task.status.label()}</span>
                <div class="kanban-card-actions">
                    <button class="card-action-btn edit-btn" title="Edit" on:click=handle_edit>"✏️"</button>
                    <button class="card-action-btn delete-btn" title="Delete" on:click=handle_delete>"🗑️"</button>
                </div>
            </div>
            {description}
            {tags}
            <div class="kanban-card-meta">
                <div class="kanban-card-meta-left">
                    <span class=task.priority.dot_class() title=priority_title></span>
                    {assignee}
                </div>
                <div class="kanban-card-meta-right">
                    {due}
                    <div class="kanban-card-created">{created_label}</div>
                </div>
            </div>
        </div>
    }
}
