//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod auth;
pub mod get_started;
pub mod home;
pub mod listings;
pub mod not_found;
pub mod profile;
pub mod share;
