use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::core::models::{Priority, TaskDraft};

/// Form session for one task. Holds its own copy of the fields and only hands
/// a draft back through `on_save`; cancelling discards it.
#[component]
pub fn TaskEditor(
    draft: TaskDraft,
    is_new: bool,
    on_save: Callback<TaskDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();

    let (title, set_title) = signal(draft.title.clone());
    let (description, set_description) = signal(draft.description.clone());
    let (priority, set_priority) = signal(draft.priority);
    let (due_date, set_due_date) = signal(draft.due_date_input());
    let (assignee, set_assignee) = signal(draft.assignee.clone().unwrap_or_default());
    let (tags, set_tags) = signal(draft.tags_input());

    // The editor is mounted only while a session is open, so show it right away.
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if !dialog.open() {
                let _ = dialog.show_modal();
            }
        }
    });

    let draft_id = draft.id.clone();
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_save.run(TaskDraft {
            id: draft_id.clone(),
            title: title.get_untracked(),
            description: description.get_untracked(),
            priority: priority.get_untracked(),
            due_date: TaskDraft::parse_due_date(&due_date.get_untracked()),
            assignee: TaskDraft::parse_assignee(&assignee.get_untracked()),
            tags: TaskDraft::parse_tags(&tags.get_untracked()),
        });
    };

    let close_modal = move |_| on_cancel.run(());

    // Escape: let the board drop the session instead of the browser closing the dialog.
    let handle_cancel = move |ev: web_sys::Event| {
        ev.prevent_default();
        on_cancel.run(());
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal" on:cancel=handle_cancel>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{if is_new { "CREATE TASK" } else { "EDIT TASK" }}</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"TITLE"</label>
                        <input
                            type="text"
                            placeholder="New Task"
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                        />
                    </div>
                    <div class="form-group">
                        <label>"DESCRIPTION"</label>
                        <textarea
                            placeholder="Task description..."
                            rows="4"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"PRIORITY"</label>
                            <select
                                on:change=move |ev| set_priority.set(Priority::parse(&event_target_value(&ev)))
                                prop:value=move || priority.get().as_str()
                            >
                                {Priority::all().into_iter().map(|p| view! {
                                    <option value=p.as_str() selected=move || priority.get() == p>{p.as_str()}</option>
                                }).collect::<Vec<_>>()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"DUE DATE"</label>
                            <input
                                type="date"
                                on:input=move |ev| set_due_date.set(event_target_value(&ev))
                                prop:value=move || due_date.get()
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label>"ASSIGNEE"</label>
                        <input
                            type="text"
                            placeholder="Unassigned"
                            on:input=move |ev| set_assignee.set(event_target_value(&ev))
                            prop:value=move || assignee.get()
                        />
                    </div>
                    <div class="form-group">
                        <label>"TAGS"</label>
                        <input
                            type="text"
                            placeholder="design, ui"
                            on:input=move |ev| set_tags.set(event_target_value(&ev))
                            prop:value=move || tags.get()
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary">{if is_new { "CREATE" } else { "SAVE CHANGES" }}</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
