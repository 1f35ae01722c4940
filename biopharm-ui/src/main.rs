//! BioPharm Dashboard
//!
//! Browser front-end built with Leptos (WASM). The session lives in
//! `localStorage`; all login, visibility and layout decisions come from the
//! `biopharm` controller, which writes into the signals the components
//! render from.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
