//! Session status for the current browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell owns one [`SessionGate`] inside an `RwSignal` and hands a
//! [`SessionHandle`] to the login, register, and chat views through context.
//! Views never touch the status directly; they call back through the handle.
//!
//! DESIGN
//! ======
//! The gate starts in `Bootstrapping` and leaves it exactly once, either via
//! [`SessionGate::initialize`] or an explicit [`SessionGate::set_authenticated`].
//! The marker's presence, not its validity, decides the initial status.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::util::auth::{Decision, Route, decide};
use crate::util::storage::{MarkerStore, StoreError};

/// Authentication state of this client instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// The persisted marker has not been read yet.
    #[default]
    Bootstrapping,
    Unauthenticated,
    Authenticated,
}

impl SessionStatus {
    fn from_authenticated(value: bool) -> Self {
        if value { Self::Authenticated } else { Self::Unauthenticated }
    }

    #[must_use]
    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }

    /// `true` once the initial marker read has completed.
    #[must_use]
    pub fn is_ready(self) -> bool {
        self != Self::Bootstrapping
    }
}

/// Error returned by [`SessionHandle::sign_in`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot sign in with an empty token")]
    EmptyToken,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Holder of the session status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionGate {
    status: SessionStatus,
}

impl SessionGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Read the marker under `key` and leave `Bootstrapping`.
    ///
    /// A read error or an empty value counts as "no session". Once the gate
    /// has left `Bootstrapping` this is a no-op returning the current status.
    pub fn initialize(&mut self, store: &dyn MarkerStore, key: &str) -> SessionStatus {
        if self.status.is_ready() {
            return self.status;
        }

        let present = match store.get(key) {
            Ok(Some(marker)) => !marker.is_empty(),
            Ok(None) => false,
            Err(e) => {
                log::warn!("session: marker read failed, treating as signed out: {e}");
                false
            }
        };
        self.status = SessionStatus::from_authenticated(present);
        log::info!(
            "session: initialized (authenticated: {})",
            self.status.is_authenticated()
        );
        self.status
    }

    /// Overwrite the status. Bypasses `Bootstrapping`; last write wins.
    pub fn set_authenticated(&mut self, value: bool) {
        let next = SessionStatus::from_authenticated(value);
        if next != self.status {
            log::debug!("session: {:?} -> {next:?}", self.status);
        }
        self.status = next;
    }

    /// Navigation decision for `route` under the current status.
    #[must_use]
    pub fn decide(&self, route: Route) -> Decision {
        decide(route, self.status)
    }
}

/// Callback interface handed to collaborator views.
///
/// Cheap to clone; every clone drives the same gate signal and store.
#[derive(Clone)]
pub struct SessionHandle {
    gate: RwSignal<SessionGate>,
    store: Arc<dyn MarkerStore>,
    marker_key: Arc<str>,
}

impl SessionHandle {
    pub fn new(
        gate: RwSignal<SessionGate>,
        store: Arc<dyn MarkerStore>,
        marker_key: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            gate,
            store,
            marker_key: marker_key.into(),
        }
    }

    /// Current status (tracked when read inside a reactive scope).
    pub fn status(&self) -> SessionStatus {
        self.gate.with(SessionGate::status)
    }

    /// Current status without subscribing the caller.
    pub fn status_untracked(&self) -> SessionStatus {
        self.gate.with_untracked(SessionGate::status)
    }

    /// Navigation decision for `route` (tracked).
    pub fn decide(&self, route: Route) -> Decision {
        self.gate.with(|gate| gate.decide(route))
    }

    /// Run the one-shot marker read. Once the gate is ready this returns the
    /// current status without writing the signal.
    pub fn initialize(&self) -> SessionStatus {
        let current = self.status_untracked();
        if current.is_ready() {
            return current;
        }
        let mut status = SessionStatus::Bootstrapping;
        self.gate
            .update(|gate| status = gate.initialize(self.store.as_ref(), &self.marker_key));
        status
    }

    pub fn set_authenticated(&self, value: bool) {
        self.gate.update(|gate| gate.set_authenticated(value));
    }

    /// Persist `token` as the marker and mark the session authenticated.
    ///
    /// The status flips even when persisting fails; the error is returned so
    /// the caller can warn that the session will not survive a reload.
    ///
    /// # Errors
    ///
    /// [`SessionError::EmptyToken`] for an empty token (status unchanged), or
    /// [`SessionError::Store`] when the marker could not be written.
    pub fn sign_in(&self, token: &str) -> Result<(), SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        let stored = self.store.set(&self.marker_key, token);
        self.set_authenticated(true);
        stored.map_err(SessionError::from)
    }

    /// Clear the marker and mark the session unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the marker could not be removed; the
    /// status is still flipped.
    pub fn sign_out(&self) -> Result<(), StoreError> {
        let removed = self.store.remove(&self.marker_key);
        self.set_authenticated(false);
        removed
    }
}
