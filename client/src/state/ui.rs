//! Local UI chrome state (panels, popups, tabs).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`chat`,
//! `stepper`) so chrome controls can evolve independently. One instance is
//! created per session in `App` and provided through context.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the chat widget, onboarding modal, navigation menu, and profile tabs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub chat_open: bool,
    pub onboarding_open: bool,
    pub mobile_menu_open: bool,
    pub profile_tab: ProfileTab,
}

impl UiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }
}

/// Tabs available on the profile page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Posts,
    Favorites,
    Events,
}

impl ProfileTab {
    pub const ALL: [Self; 3] = [Self::Posts, Self::Favorites, Self::Events];

    pub fn label(self) -> &'static str {
        match self {
            Self::Posts => "Posts",
            Self::Favorites => "Favorites",
            Self::Events => "Events",
        }
    }

    /// Placeholder copy for tabs that have no content yet.
    pub fn empty_text(self) -> Option<&'static str> {
        match self {
            Self::Posts => None,
            Self::Favorites => Some("No favorites yet"),
            Self::Events => Some("No upcoming events"),
        }
    }
}
