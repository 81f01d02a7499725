//! Share-page categories and the simulated upload image.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { id: "general", label: "General", emoji: "💬" },
    Category { id: "question", label: "Question", emoji: "❓" },
    Category { id: "lost", label: "Lost Pet", emoji: "🔍" },
    Category { id: "found", label: "Found Pet", emoji: "✅" },
    Category { id: "adoption", label: "Adoption", emoji: "🏠" },
    Category { id: "event", label: "Event", emoji: "📅" },
];

pub const DEFAULT_CATEGORY: &str = "general";

pub const DEMO_UPLOAD_IMAGE: &str = "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=200&h=200&fit=crop";

/// How long a share notice stays on screen.
pub const NOTICE_DISMISS_MILLIS: u32 = 4_000;
