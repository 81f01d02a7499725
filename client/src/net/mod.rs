//! Networking modules for the assistant function endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `assistant` performs the HTTP call and `types` defines the wire schema.

pub mod assistant;
pub mod types;
