//! # client
//!
//! Leptos + WASM frontend for the shot spinner.
//!
//! This crate renders the wheel, the completed-shots list, and the spin/reset
//! controls from the state owned by `spinner::GameController`, and owns the
//! one settlement timer per spin. All selection and geometry math lives in
//! the `spinner` crate; components here only turn its values into markup.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
