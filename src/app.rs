use leptos::prelude::*;

use crate::components::Navbar;
use crate::core::models::{AppView, Task};
use crate::core::services::{default_nav, sample_tasks, APP_TITLE};
use crate::features::kanban::services::log_value;
use crate::features::kanban::KanbanBoard;
use crate::pages::PlaceholderView;

#[component]
pub fn App() -> impl IntoView {
    // Seed for the board whenever it mounts. The mounted board owns the live
    // collection and only reports back; nothing here writes into it.
    let board_seed = StoredValue::new(sample_tasks());
    let nav = RwSignal::new(default_nav(board_seed.with_value(|tasks| tasks.len())));
    let current_view = Memo::new(move |_| nav.with(|nav| nav.current()));
    let nav_items = Signal::derive(move || nav.with(|nav| nav.items().to_vec()));

    let select_view = Callback::new(move |view: AppView| {
        let label = nav.try_update(|nav| nav.select(view).map(|item| item.label.clone())).flatten();
        match label {
            Some(label) => web_sys::console::log_1(&format!("Navigated to: {}", label).into()),
            None => web_sys::console::warn_1(&format!("No navigation entry for '{}'", view.as_str()).into()),
        }
    });

    let items_changed = Callback::new(move |tasks: Vec<Task>| {
        nav.update(|nav| nav.set_badge(AppView::Board, Some(tasks.len().to_string())));
        board_seed.set_value(tasks);
    });

    let item_added = Callback::new(move |task: Task| log_value("Added item:", &task));
    let item_edited = Callback::new(move |task: Task| log_value("Edit item:", &task));
    let item_deleted = Callback::new(move |id: String| {
        web_sys::console::log_1(&format!("Deleted item: {}", id).into());
    });

    view! {
        <div class="app">
            <Navbar title=APP_TITLE nav_items=nav_items on_item_click=select_view />
            <main class="container">
                {move || match current_view.get() {
                    AppView::Board => view! {
                        <KanbanBoard
                            initial_items=board_seed.get_value()
                            on_items_change=items_changed
                            on_add_item=item_added
                            on_edit_item=item_edited
                            on_delete_item=item_deleted
                        />
                    }.into_any(),
                    other => view! { <PlaceholderView current=other /> }.into_any(),
                }}
            </main>
        </div>
    }
}
