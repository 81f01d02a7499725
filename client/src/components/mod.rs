//! Reusable view components shared across pages.
//!
//! DESIGN
//! ======
//! Components read session state from context (`RwSignal<UiState>`,
//! `RwSignal<ChatState>`) and keep walk-local state in their own signals.
//! Static tables come from `crate::data`.

pub mod cards;
pub mod chat_widget;
pub mod footer;
pub mod get_started;
pub mod landing;
pub mod navigation;
pub mod tutorial_popup;
