//! # session-gate
//!
//! Leptos + WASM client shell for the chat application. Gates the login,
//! registration, and chat views behind a token marker kept in browser
//! storage and redirects between them.
//!
//! The crate owns the session status, the route guard, and the marker store
//! abstraction. Token exchange and chat messaging belong to the host and are
//! reached only through the `CredentialHandler` and `SessionHandle` seams.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// Id of the optional `<script type="application/json">` element carrying a
/// [`config::GateConfig`] override.
pub const CONFIG_ELEMENT_ID: &str = "session-gate-config";

/// Browser entry point: install console logging and mount [`app::App`] on
/// `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        // A logger is already installed (e.g. by the host page); keep it.
        log::warn!("console logging not installed: {e}");
    }

    let config = config::GateConfig::from_embedded(embedded_config().as_deref());
    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}

#[cfg(feature = "csr")]
fn embedded_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}
