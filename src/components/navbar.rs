use leptos::prelude::*;

use crate::core::models::{AppView, NavItem};

#[component]
pub fn Navbar(
    #[prop(into)] title: String,
    #[prop(into)] nav_items: Signal<Vec<NavItem>>,
    on_item_click: Callback<AppView>,
) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <div class="navbar-brand">
                    <div class="navbar-logo">"📝"</div>
                    <h1>{title}</h1>
                </div>
                <div class="navbar-items">
                    {move || {
                        nav_items.with(|items| {
                            items.iter()
                                .cloned()
                                .map(|item| {
                                    let view_id = item.id;
                                    let item_class = if item.active { "nav-item active" } else { "nav-item" };
                                    view! {
                                        <button
                                            class=item_class
                                            on:click=move |_| on_item_click.run(view_id)
                                        >
                                            <span class="nav-icon">{item.icon}</span>
                                            <span>{item.label}</span>
                                            {item.badge.map(|badge| view! { <span class="nav-badge">{badge}</span> })}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                    }}
                </div>
                // Mobile menu toggle, not wired to anything yet
                <div class="navbar-mobile">
                    <button class="navbar-menu-btn">"☰"</button>
                </div>
            </div>
        </nav>
    }
}
