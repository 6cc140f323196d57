//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the gate itself; `credentials` is the boundary the login
//! and register forms hand their validated input across. Form field state
//! stays inside the individual pages.

pub mod credentials;
pub mod session;
