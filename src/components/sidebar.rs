//! Sidebar Navigation

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Nav entries: (path, icon, label)
const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("/dashboard", "🏠", "Dashboard"),
    ("/create-goal", "🎯", "Create Goal"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <h2>"🚀 Goal Pilot AI"</h2>
            </div>
            <nav class="sidebar-nav">
                {NAV_ITEMS.iter().map(|(path, icon, label)| {
                    let navigate = use_navigate();
                    let is_active = move || location.pathname.get() == *path;
                    view! {
                        <button
                            class=move || if is_active() { "nav-item nav-item-active" } else { "nav-item" }
                            on:click=move |_| navigate(path, Default::default())
                        >
                            <span class="nav-icon">{*icon}</span>
                            <span class="nav-label">{*label}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}
