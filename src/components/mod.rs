//! UI Components
//!
//! Reusable Leptos components for the app shell.

mod header;
mod layout;
mod sidebar;

pub use header::Header;
pub use layout::Layout;
pub use sidebar::Sidebar;
