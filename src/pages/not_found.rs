//! Fallback for paths outside the four gated routes.

use leptos::prelude::*;
use leptos_router::components::{A, Redirect};
use leptos_router::hooks::use_location;

use crate::util::auth::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;

    move || {
        let path = pathname.get();
        match Route::from_path(&path) {
            // Non-canonical spelling of a known route, e.g. `/chat/`.
            Some(route) => {
                log::debug!("routing: {path} -> {}", route.path());
                view! { <Redirect path=route.path()/> }.into_any()
            }
            None => view! {
                <div class="not-found">
                    <h1>"Page not found."</h1>
                    <A href=Route::Root.path()>"Go home"</A>
                </div>
            }
            .into_any(),
        }
    }
}
