//! Session Context
//!
//! One source of truth for the login session. The token lives in browser
//! local storage; every component reads it through the context provided at
//! the app root instead of re-deriving it from storage.

use leptos::prelude::*;

pub const TOKEN_KEY: &str = "token";
pub const EMAIL_KEY: &str = "email";
pub const NAME_KEY: &str = "name";
pub const USER_ID_KEY: &str = "user_id";
pub const THEME_KEY: &str = "theme";

/// Session signals provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    token: RwSignal<Option<String>>,
    email: RwSignal<Option<String>>,
    name: RwSignal<Option<String>>,
}

impl SessionContext {
    /// Build the context from whatever local storage currently holds
    fn init() -> Self {
        Self {
            token: RwSignal::new(storage_get(TOKEN_KEY)),
            email: RwSignal::new(storage_get(EMAIL_KEY)),
            name: RwSignal::new(storage_get(NAME_KEY)),
        }
    }

    /// Presence of a token means logged in; the token itself is opaque
    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn email(&self) -> Option<String> {
        self.email.get()
    }

    pub fn name(&self) -> Option<String> {
        self.name.get()
    }

    /// Persist the session and update the signals
    pub fn login(&self, token: String, email: Option<String>, name: Option<String>) {
        storage_set(TOKEN_KEY, &token);
        if let Some(email) = &email {
            storage_set(EMAIL_KEY, email);
        }
        if let Some(name) = &name {
            storage_set(NAME_KEY, name);
        }
        self.token.set(Some(token));
        self.email.set(email);
        self.name.set(name);
    }

    /// Drop the stored session and clear the signals
    pub fn logout(&self) {
        storage_remove(TOKEN_KEY);
        storage_remove(USER_ID_KEY);
        self.token.set(None);
        self.email.set(None);
        self.name.set(None);
    }
}

/// Create the session context and provide it to all children
pub fn provide_session() -> SessionContext {
    let session = SessionContext::init();
    provide_context(session);
    session
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

// ========================
// Local Storage Helpers
// ========================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn storage_get(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn storage_remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

// ========================
// Route Guard Decisions
// ========================

/// What the router should do for a given route class and auth state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    ToLogin,
    ToDashboard,
}

/// Protected pages render only for authenticated sessions
pub fn protected_route(authenticated: bool) -> RouteDecision {
    if authenticated {
        RouteDecision::Render
    } else {
        RouteDecision::ToLogin
    }
}

/// The login page redirects away once a session exists
pub fn login_route(authenticated: bool) -> RouteDecision {
    if authenticated {
        RouteDecision::ToDashboard
    } else {
        RouteDecision::Render
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_route_redirects_without_token() {
        assert_eq!(protected_route(false), RouteDecision::ToLogin);
        assert_eq!(protected_route(true), RouteDecision::Render);
    }

    #[test]
    fn test_login_route_redirects_with_token() {
        assert_eq!(login_route(true), RouteDecision::ToDashboard);
        assert_eq!(login_route(false), RouteDecision::Render);
    }
}
