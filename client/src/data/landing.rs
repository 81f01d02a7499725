//! Landing-page and chrome content: quick actions, stats, features,
//! navigation and footer links.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[Link] = &[
    Link { label: "Community", href: "/community" },
    Link { label: "Adoption", href: "/adoption" },
    Link { label: "Events", href: "/events" },
    Link { label: "Services", href: "/services" },
];

/// Whether the nav link for `href` should be highlighted at `pathname`.
pub fn is_active(href: &str, pathname: &str) -> bool {
    pathname.trim_end_matches('/') == href.trim_end_matches('/')
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub icon: &'static str,
    pub label: &'static str,
    pub desc: &'static str,
    pub href: &'static str,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction { icon: "🐾", label: "Create Post", desc: "Share with community", href: "/share" },
    QuickAction { icon: "🔎", label: "Find Playmate", desc: "Match with nearby pets", href: "/community" },
    QuickAction { icon: "📅", label: "Browse Events", desc: "Local pet meetups", href: "/events" },
    QuickAction { icon: "❤️", label: "Adopt a Pet", desc: "Find your new friend", href: "/adoption" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "2,400+", label: "Pet Parents" },
    Stat { value: "850+", label: "Pets Reunited" },
    Stat { value: "120+", label: "Weekly Events" },
    Stat { value: "50+", label: "Neighborhoods" },
];

/// The first three stats double as the hero banner figures.
pub fn hero_stats() -> &'static [Stat] {
    &STATS[..3]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "💬",
        title: "Community Posts",
        description: "Share updates, ask questions, and connect with pet parents in your neighborhood.",
    },
    Feature {
        icon: "📍",
        title: "Lost & Found",
        description: "Quickly alert your community when a pet goes missing or is found nearby.",
    },
    Feature {
        icon: "🔔",
        title: "Smart Alerts",
        description: "Get notified about relevant posts, events, and pet sightings in your area.",
    },
    Feature {
        icon: "🛡️",
        title: "Verified Community",
        description: "Trust your network with verified pet parent profiles and reviews.",
    },
    Feature {
        icon: "👥",
        title: "Playdate Matching",
        description: "Find the perfect playmates for your pets based on size, energy, and location.",
    },
    Feature {
        icon: "📅",
        title: "Local Events",
        description: "Discover and join pet meetups, adoption drives, and training sessions nearby.",
    },
];

/// Footer column: heading plus links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [Link],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn { heading: "Explore", links: NAV_LINKS },
    FooterColumn {
        heading: "Resources",
        links: &[
            Link { label: "Pet Care Tips", href: "#" },
            Link { label: "Find a Vet", href: "#" },
            Link { label: "Lost & Found", href: "#" },
            Link { label: "Blog", href: "#" },
        ],
    },
    FooterColumn {
        heading: "Support",
        links: &[
            Link { label: "Help Center", href: "#" },
            Link { label: "Contact Us", href: "#" },
            Link { label: "Privacy Policy", href: "#" },
            Link { label: "Terms of Service", href: "#" },
        ],
    },
];
