//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::session::use_session;

#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Editing either field clears a previous error
    let clear_error = move || {
        if !error.get_untracked().is_empty() {
            set_error.set(String::new());
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());
        set_submitting.set(true);
        let email_value = email.get();
        let password_value = password.get();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(token) => {
                    session.login(token, None, None);
                    navigate("/dashboard", Default::default());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[Login] {}", err).into());
                    set_error.set(err.message());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-container glass-card">
                <h1>"🚀 Goal Pilot AI"</h1>
                <p>"Your intelligent learning companion"</p>

                <form on:submit=submit class="login-form">
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            set_email.set(event_target_value(&ev));
                            clear_error();
                        }
                        required
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            set_password.set(event_target_value(&ev));
                            clear_error();
                        }
                        required
                    />
                    <button type="submit" class="btn-primary btn-large" disabled=move || submitting.get()>
                        "Login"
                    </button>
                    <Show when=move || !error.get().is_empty()>
                        <div class="error-message">{move || error.get()}</div>
                    </Show>
                </form>

                <p class="signup-link">
                    "Don't have an account? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
