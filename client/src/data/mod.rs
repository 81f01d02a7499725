//! Static sample content rendered by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every table here is a literal `&'static` slice with no lifecycle. Pages
//! read them directly; nothing mutates them at runtime.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

pub mod community;
pub mod landing;
pub mod listings;
pub mod onboarding;
pub mod share;
