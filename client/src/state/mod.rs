//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `stepper`, `ui`, etc.) so individual
//! components can depend on small focused models. Every module here is plain
//! data plus transitions; signals and browser effects live in components.

pub mod auth;
pub mod chat;
pub mod composer;
pub mod onboarding;
pub mod stepper;
pub mod tutorial;
pub mod ui;
