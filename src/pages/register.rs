//! Registration page: name + email + password form.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use super::login::dispatch;
use crate::state::credentials::{CredentialHandler, CredentialRequest};
use crate::util::auth::Route;

/// Trim name and email and require every field to be non-blank. The
/// password is passed through untouched.
///
/// # Errors
///
/// Returns the message to show when a field is blank.
pub fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<CredentialRequest, &'static str> {
    let (name, email) = (name.trim(), email.trim());
    if name.is_empty() || email.is_empty() || password.trim().is_empty() {
        return Err("All fields are required");
    }
    Ok(CredentialRequest::Register {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let handler = use_context::<CredentialHandler>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_register_input(&name.get(), &email.get(), &password.get()) {
            Ok(request) => info.set(dispatch(handler, request).to_owned()),
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit">"Register"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-switch">
                    "Already registered? "
                    <A href=Route::Login.path()>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
