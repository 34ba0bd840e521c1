//! Header Component
//!
//! Page title, search box, theme toggle, notification bell, and logout.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::models::Notification;
use crate::session::{self, use_session, THEME_KEY};

fn page_title(path: &str) -> &'static str {
    match path {
        "/dashboard" | "/" => "Dashboard",
        "/create-goal" => "Create Goal",
        _ => "Goal Pilot AI",
    }
}

/// Mirror the theme onto the document root so the stylesheet can react
fn apply_theme(theme: &str) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme);
    }
}

#[component]
pub fn Header(
    notifications: ReadSignal<Vec<Notification>>,
    set_notifications: WriteSignal<Vec<Notification>>,
) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let location = use_location();

    let (theme, set_theme) = signal(String::from("light"));
    let (search_term, set_search_term) = signal(String::new());
    let (show_notifications, set_show_notifications) = signal(false);

    // Restore the saved theme on mount
    Effect::new(move |_| {
        let saved = session::storage_get(THEME_KEY).unwrap_or_else(|| "light".to_string());
        apply_theme(&saved);
        set_theme.set(saved);
    });

    let toggle_theme = move |_| {
        let new_theme = if theme.get() == "light" { "dark" } else { "light" };
        apply_theme(new_theme);
        session::storage_set(THEME_KEY, new_theme);
        set_theme.set(new_theme.to_string());
    };

    let unread_count = move || notifications.get().iter().filter(|n| !n.is_read).count();

    let mark_read = move |id: u32| {
        set_notifications.update(|list| {
            if let Some(notification) = list.iter_mut().find(|n| n.id == id) {
                notification.is_read = true;
            }
        });
    };

    let logout = move |_| {
        session.logout();
        navigate("/login", Default::default());
    };

    view! {
        <header class="header">
            <div class="header-content">
                <div class="header-title">
                    <h2>{move || page_title(&location.pathname.get())}</h2>
                </div>
                <div class="header-search">
                    <input
                        type="text"
                        placeholder="Search goals, resources..."
                        prop:value=move || search_term.get()
                        on:input=move |ev| set_search_term.set(event_target_value(&ev))
                        class="search-input"
                    />
                </div>
                <div class="header-actions">
                    <button class="theme-toggle" on:click=toggle_theme>
                        {move || if theme.get() == "light" { "🌙" } else { "☀️" }}
                    </button>
                    <div
                        class="notifications-bell"
                        on:click=move |_| set_show_notifications.update(|v| *v = !*v)
                    >
                        "🔔"
                        {move || {
                            let count = unread_count();
                            (count > 0).then(|| view! {
                                <span class="notification-count">{count}</span>
                            })
                        }}
                    </div>
                    <Show when=move || show_notifications.get()>
                        <div class="notifications-dropdown">
                            <For
                                each=move || notifications.get()
                                key=|n| (n.id, n.is_read)
                                children=move |n| {
                                    let id = n.id;
                                    view! {
                                        <div
                                            class=if n.is_read { "notification-item read" } else { "notification-item" }
                                            on:click=move |_| mark_read(id)
                                        >
                                            <span class="notification-message">{n.message.clone()}</span>
                                            <span class="notification-time">{n.created_at.clone()}</span>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                    <div class="avatar">"U"</div>
                    <button on:click=logout class="btn-secondary">
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}
