//! Route guard shared by every gated path.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell maps each requested path through [`decide`] so all routes
//! apply identical authenticated/unauthenticated redirect behavior. The
//! decision is a pure function of the path and the session status; it is
//! recomputed whenever either changes and never stored.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::SessionStatus;

/// The closed set of paths the gate recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/` landing path. Always redirects.
    Root,
    Login,
    Register,
    Chat,
}

impl Route {
    /// Every recognized route.
    pub const ALL: [Route; 4] = [Route::Root, Route::Login, Route::Register, Route::Chat];

    /// Canonical path for this route.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Chat => "/chat",
        }
    }

    /// Router segment for this route (the path without its leading slash).
    #[must_use]
    pub fn segment(self) -> &'static str {
        &self.path()[1..]
    }

    /// Parse a requested path. A single trailing slash is ignored; anything
    /// outside the four routes is `None` and left to the not-found fallback.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

/// A view the gate can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Shown while the session marker has not been read yet.
    Loading,
    Login,
    Register,
    Chat,
}

/// Outcome of reconciling a route against the session status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Render(Screen),
    Redirect(Route),
}

/// Decide what to show for `route` under `status`.
#[must_use]
pub fn decide(route: Route, status: SessionStatus) -> Decision {
    let authenticated = match status {
        SessionStatus::Bootstrapping => return Decision::Render(Screen::Loading),
        SessionStatus::Unauthenticated => false,
        SessionStatus::Authenticated => true,
    };

    match (route, authenticated) {
        (Route::Login, false) => Decision::Render(Screen::Login),
        (Route::Register, false) => Decision::Render(Screen::Register),
        (Route::Login | Route::Register | Route::Root, true) => Decision::Redirect(Route::Chat),
        (Route::Chat, true) => Decision::Render(Screen::Chat),
        (Route::Chat | Route::Root, false) => Decision::Redirect(Route::Login),
    }
}
