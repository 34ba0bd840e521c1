//! Google OAuth Landing Page
//!
//! The backend redirects here with `token`, `email`, and `name` in the
//! query string. Both email and token present means the login succeeded.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::session::use_session;

#[component]
pub fn GoogleSuccess() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let query = use_query_map();

    Effect::new(move |_| {
        let params = query.get();
        let email = params.get("email");
        let name = params.get("name");
        let token = params.get("token");

        match (email, token) {
            (Some(email), Some(token)) => {
                session.login(token, Some(email), name);
                navigate("/dashboard", Default::default());
            }
            _ => {
                web_sys::console::error_1(
                    &"[GoogleSuccess] Missing email or token in redirect".into(),
                );
                navigate("/login", Default::default());
            }
        }
    });

    view! { <div>"Logging you in..."</div> }
}
