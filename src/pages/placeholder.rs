use leptos::prelude::*;
use crate::core::models::AppView;

fn heading_and_blurb(current: AppView) -> (&'static str, &'static str) {
    match current {
        AppView::List => ("List View", "Your todo list will appear here..."),
        AppView::Calendar => ("Calendar View", "Your calendar view will appear here..."),
        AppView::Settings => ("Settings", "App settings will appear here..."),
        AppView::Board => ("Kanban Board", "Your board will appear here..."),
    }
}

// Static content for the views that have no implementation yet.
#[component]
pub fn PlaceholderView(current: AppView) -> impl IntoView {
    let (heading, blurb) = heading_and_blurb(current);

    view! {
        <div class="placeholder-page">
            <h2>"Welcome to your Todo Tracker"</h2>
            <p class="placeholder-current">
                "Current view: " <span class="font-semibold">{current.as_str()}</span>
            </p>
            <div class="placeholder-card">
                <h3>{heading}</h3>
                <p>{blurb}</p>
            </div>
        </div>
    }
}
