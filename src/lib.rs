//! # minishop-client
//!
//! Leptos + WASM single-page storefront and administration client for the
//! MiniShop catalog service. End users browse the public catalog; admins
//! manage products (create, edit, soft/hard delete, visibility and
//! promotion toggles) after logging in.
//!
//! The crate is split into a pure core — state slices, the async operation
//! runtime, the HTTP gateway bindings and the update-payload normalizer —
//! and a presentational layer of pages and components over it. Everything
//! that needs a browser is gated behind the `csr` feature so the core is
//! testable with a plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up logging and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("MiniShop client starting");

    leptos::mount::mount_to_body(crate::app::App);
}
