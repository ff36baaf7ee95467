//! # mantel-client
//!
//! Leptos + WASM frontend for the Mantel account screens.
//!
//! This crate contains the route-level pages (splash, authorization,
//! not-found), the form and button components they compose, the small pieces
//! of UI state behind them, and the health-check call made on mount. The
//! `server` crate links it with the `ssr` feature; the browser bundle is built
//! with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
///
/// Boot settings chosen by the server are read back from the `<html>`
/// attributes so the hydrated tree matches the rendered one.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let boot = util::boot::read_from_document();
    leptos::mount::hydrate_body(move || view! { <App boot/> });
}
