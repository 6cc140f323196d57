//! Login page: email + password form.
//!
//! The form only validates input; the token exchange happens in the host's
//! `CredentialHandler`, which signs the session in on success.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::credentials::{CredentialHandler, CredentialRequest};
use crate::util::auth::Route;

pub(crate) const SIGN_IN_UNAVAILABLE: &str = "Sign-in is not available right now.";

/// Trim the email and require both fields to be non-blank. The password is
/// passed through untouched.
///
/// # Errors
///
/// Returns the message to show when a field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<CredentialRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err("Email and password are required");
    }
    Ok(CredentialRequest::Login {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Forward a validated request, returning the status line to show.
pub(crate) fn dispatch(handler: Option<CredentialHandler>, request: CredentialRequest) -> &'static str {
    match handler {
        Some(handler) => {
            handler.submit(request);
            "Signing in..."
        }
        None => {
            log::warn!("credentials: no handler installed");
            SIGN_IN_UNAVAILABLE
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let handler = use_context::<CredentialHandler>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => info.set(dispatch(handler, request).to_owned()),
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
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
                    <button class="auth-button" type="submit">"Sign in"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-switch">
                    "No account? "
                    <A href=Route::Register.path()>"Register"</A>
                </p>
            </div>
        </div>
    }
}
