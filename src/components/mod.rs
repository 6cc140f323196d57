//! Reusable UI components shared by the app shell and pages.

pub mod loading;
