#![allow(warnings)]
//! Goal Pilot Frontend Entry Point

mod api;
mod app;
mod components;
mod models;
mod pages;
mod plan;
mod session;
mod tasks;
mod wizard;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
