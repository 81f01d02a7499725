//! Step tables for the onboarding and tutorial flows.

/// One onboarding screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OnboardingStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tip: &'static str,
    pub features: [&'static str; 4],
}

pub const ONBOARDING_STEPS: &[OnboardingStep] = &[
    OnboardingStep {
        icon: "🐾",
        title: "Welcome to PawSquare! 🐾",
        description: "Your friendly pet care companion. We're here to help you take the best care of your furry friends with AI-powered guidance and a supportive community.",
        tip: "PawSquare combines artificial intelligence with real pet care knowledge to give you instant, helpful advice.",
        features: ["AI-Powered Advice", "Community Support", "Local Events", "Pet Adoption"],
    },
    OnboardingStep {
        icon: "💬",
        title: "Ask PawBot Anything",
        description: "Have a question about your pet? Just share what's happening and PawBot will provide friendly, helpful guidance tailored to your situation.",
        tip: "Describe your pet's behavior, symptoms, or any concerns - more details, better advice you'll receive!",
        features: ["24/7 Availability", "Expert Knowledge", "Personalized Responses", "Free to Use"],
    },
    OnboardingStep {
        icon: "👥",
        title: "Join the Community",
        description: "Connect with other pet parents! See what others are asking, share your experiences, and learn from the community's collective wisdom.",
        tip: "Browse community posts to find answers to common questions or share your own success stories.",
        features: ["Local Pet Parents", "Share Experiences", "Get Advice", "Make Friends"],
    },
    OnboardingStep {
        icon: "❤️",
        title: "Find Your Perfect Match",
        description: "Looking to adopt? Browse adorable pets in your area, save your favorites, and connect with local shelters and foster families.",
        tip: "Use filters to find pets that match your lifestyle, living situation, and experience level.",
        features: ["Browse Available Pets", "Save Favorites", "Contact Shelters", "Success Stories"],
    },
    OnboardingStep {
        icon: "✨",
        title: "You're All Set! 🎉",
        description: "You're ready to start your PawSquare journey! Remember, we're always here to help with any pet care questions you may have.",
        tip: "Pro tip: Bookmark PawSquare so you can quickly get help whenever you need it!",
        features: ["Ready to Explore", "Get Help Anytime", "Join Events", "Connect with Others"],
    },
];

/// One tutorial popup screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TutorialStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

pub const TUTORIAL_STEPS: &[TutorialStep] = &[
    TutorialStep {
        icon: "✨",
        title: "Welcome to PawSquare! 🐾",
        description: "Let's take a quick tour of your new favorite pet community platform.",
        tips: &[
            "Click the bell icon to see notifications",
            "Use the search bar to find pets",
            "Join events to meet other pet parents",
        ],
    },
    TutorialStep {
        icon: "👥",
        title: "Connect & Share",
        description: "Share your pet experiences and connect with other pet lovers in your area.",
        tips: &["Like posts to show appreciation", "Comment on posts to help others", "Share your own pet photos"],
    },
    TutorialStep {
        icon: "💬",
        title: "Get Expert Help",
        description: "Our AI-powered PawBot is here to help with all your pet questions.",
        tips: &["Ask about health issues", "Get training advice", "Learn about nutrition", "24/7 availability"],
    },
    TutorialStep {
        icon: "❤️",
        title: "Find Your Match",
        description: "Browse adorable pets looking for their forever homes.",
        tips: &["Filter by breed and age", "Save your favorites", "Contact shelters directly"],
    },
];

/// How long the tutorial's demo animation plays.
pub const TUTORIAL_DEMO_MILLIS: u32 = 3_000;
