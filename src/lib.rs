//! Customer Voice: a live wall of WhatsApp product reviews.
//!
//! The page polls the review service on a fixed cadence and renders each
//! review as a card. Server-side rendering, hydration and client-only builds
//! are selected with the `ssr`, `hydrate` and `csr` features.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod poller;
pub mod state;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
