//! Waitroom - landing site for a team dependency tracker
//!
//! A server-rendered Leptos application: an animated loader hands over to a
//! marketing page with a live waiting-room visualization.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
