//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages render only after the route guard has allowed them. Each receives
//! the session through context and never reads the marker store itself.

pub mod chat;
pub mod login;
pub mod not_found;
pub mod register;
