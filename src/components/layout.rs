//! Application Layout
//!
//! Collapsible sidebar, header, and the routed content region.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::{Header, Sidebar};
use crate::models::Notification;

const MOBILE_BREAKPOINT: f64 = 768.0;

fn viewport_is_mobile() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|width| width <= MOBILE_BREAKPOINT)
        .unwrap_or(false)
}

/// Mock notifications until the backend notifications endpoint is wired up
fn mock_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            message: "New goal created: Learn React".to_string(),
            created_at: "2025-10-17T10:00:00Z".to_string(),
            is_read: false,
        },
        Notification {
            id: 2,
            message: "Task due today: SQL JOINs".to_string(),
            created_at: "2025-10-17T12:00:00Z".to_string(),
            is_read: true,
        },
        Notification {
            id: 3,
            message: "Progress updated: 35%".to_string(),
            created_at: "2025-10-17T14:00:00Z".to_string(),
            is_read: false,
        },
    ]
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);
    let (is_mobile, set_is_mobile) = signal(false);
    let (notifications, set_notifications) = signal(mock_notifications());

    // Collapse the sidebar on narrow viewports, and keep tracking resizes
    Effect::new(move |_| {
        let check = move || {
            let mobile = viewport_is_mobile();
            set_is_mobile.set(mobile);
            if mobile {
                set_collapsed.set(true);
            }
        };
        check();
        if let Some(window) = web_sys::window() {
            let closure = Closure::<dyn FnMut()>::new(check);
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let toggle_sidebar = move |_| set_collapsed.update(|c| *c = !*c);
    let close_on_mobile = move |_| {
        if is_mobile.get() {
            set_collapsed.set(true);
        }
    };

    view! {
        <div class="layout">
            <div class=move || {
                if collapsed.get() { "sidebar-container collapsed" } else { "sidebar-container" }
            }>
                <Sidebar/>
                <button class="sidebar-toggle" on:click=toggle_sidebar>
                    {move || if collapsed.get() { "➡️" } else { "⬅️" }}
                </button>
            </div>

            <Show when=move || !collapsed.get() && is_mobile.get()>
                <div class="sidebar-overlay" on:click=close_on_mobile></div>
            </Show>

            <div class=move || {
                if collapsed.get() { "main-content expanded" } else { "main-content" }
            }>
                <Header notifications=notifications set_notifications=set_notifications/>
                <main class="content" on:click=close_on_mobile>
                    {children()}
                </main>
            </div>
        </div>
    }
}
