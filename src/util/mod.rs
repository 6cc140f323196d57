//! Route guard and marker storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` maps a requested path and session status to a render or redirect
//! decision. `storage` reads and writes the token marker, backed by
//! `localStorage` in the browser and an in-memory map elsewhere.

pub mod auth;
pub mod storage;
