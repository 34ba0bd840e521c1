//! Goal Pilot App
//!
//! Router plus the session guard. The session context is created once here;
//! every page and the header read it through context instead of going back
//! to local storage.

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use crate::components::Layout;
use crate::pages::{CreateGoal, Dashboard, GoogleSuccess, Login};
use crate::session::{self, use_session, RouteDecision};

#[component]
pub fn App() -> impl IntoView {
    session::provide_session();

    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route
                    path=path!("/")
                    view=|| view! { <Redirect path="/login"/> }
                />
                <Route
                    path=path!("/login")
                    view=|| view! { <PublicOnly><Login/></PublicOnly> }
                />
                <Route
                    path=path!("/google-success")
                    view=|| view! { <GoogleSuccess/> }
                />
                <Route
                    path=path!("/dashboard")
                    view=|| view! {
                        <Protected>
                            <Layout>
                                <Dashboard/>
                            </Layout>
                        </Protected>
                    }
                />
                <Route
                    path=path!("/create-goal")
                    view=|| view! {
                        <Protected>
                            <Layout>
                                <CreateGoal/>
                            </Layout>
                        </Protected>
                    }
                />
            </Routes>
        </Router>
    }
}

/// Renders its children only for an authenticated session, and bounces
/// everyone else to the login page. Re-evaluated when the session changes.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    move || match session::protected_route(session.is_authenticated()) {
        RouteDecision::Render => children().into_any(),
        _ => view! { <Redirect path="/login"/> }.into_any(),
    }
}

/// The inverse guard for the login page: an existing session goes straight
/// to the dashboard.
#[component]
fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    move || match session::login_route(session.is_authenticated()) {
        RouteDecision::Render => children().into_any(),
        _ => view! { <Redirect path="/dashboard"/> }.into_any(),
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="not-found">"404 - Page Not Found"</div> }
}
