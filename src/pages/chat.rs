//! Chat page shell.
//!
//! Message exchange is owned by the host application; this page only renders
//! the frame and the sign-out control. Signing out flips the session status,
//! and the route guard then redirects to `/login`.

use leptos::prelude::*;

use crate::config::GateConfig;
use crate::state::session::SessionHandle;

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let title = use_context::<GateConfig>().unwrap_or_default().app_title;

    let on_sign_out = move |_| {
        if let Err(e) = session.sign_out() {
            log::warn!("session: signed out but marker not cleared: {e}");
        }
    };

    view! {
        <div class="chat-page">
            <header class="chat-header">
                <h1>{title}</h1>
                <button class="chat-sign-out" on:click=on_sign_out>"Sign out"</button>
            </header>
            <main class="chat-body"></main>
        </div>
    }
}
