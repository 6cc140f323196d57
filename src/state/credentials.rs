//! Credential hand-off between the auth forms and the host application.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exchanging credentials for a token is the host's job. The login and
//! register pages validate their input, then pass a [`CredentialRequest`] to
//! the [`CredentialHandler`] found in context. The handler finishes the flow
//! by calling `SessionHandle::sign_in` with the issued token.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::fmt;

use leptos::prelude::*;

/// Validated form submission.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialRequest {
    Login {
        email: String,
        password: String,
    },
    Register {
        name: String,
        email: String,
        password: String,
    },
}

impl CredentialRequest {
    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Login { email, .. } | Self::Register { email, .. } => email,
        }
    }
}

// Passwords stay out of logs.
impl fmt::Debug for CredentialRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login { email, .. } => f
                .debug_struct("Login")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            Self::Register { name, email, .. } => f
                .debug_struct("Register")
                .field("name", name)
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// Host-supplied callback receiving validated submissions.
#[derive(Clone, Copy)]
pub struct CredentialHandler(pub Callback<CredentialRequest>);

impl CredentialHandler {
    pub fn new(f: impl Fn(CredentialRequest) + Send + Sync + 'static) -> Self {
        Self(Callback::new(f))
    }

    pub fn submit(&self, request: CredentialRequest) {
        log::debug!("credentials: submitting for {}", request.email());
        self.0.run(request);
    }
}
