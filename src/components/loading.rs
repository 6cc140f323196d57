//! Full-screen spinner shown while the session is bootstrapping.

use leptos::prelude::*;

use crate::config::GateConfig;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    let label = use_context::<GateConfig>().unwrap_or_default().loading_label;

    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-spinner"></div>
            <span class="loading-label">{label}</span>
        </div>
    }
}
