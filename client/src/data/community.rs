//! Community feed posts and the sample member profile.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Author {
    pub name: &'static str,
    pub avatar: &'static str,
    pub location: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    pub author: Author,
    pub content: &'static str,
    pub image: Option<&'static str>,
    pub likes: u32,
    pub comments: u32,
    pub time: &'static str,
}

pub const POSTS: &[Post] = &[
    Post {
        id: 1,
        author: Author {
            name: "Sarah Johnson",
            avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop",
            location: "Brooklyn, NY",
        },
        content: "Just had the most amazing playdate at Prospect Park! Luna made so many new friends today. 🐕💕",
        image: Some("https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=600&h=400&fit=crop"),
        likes: 24,
        comments: 8,
        time: "2 hours ago",
    },
    Post {
        id: 2,
        author: Author {
            name: "Mike Chen",
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop",
            location: "Manhattan, NY",
        },
        content: "Looking for recommendations for a good vet in the Upper East Side. Oliver needs his annual checkup! 🐱",
        image: None,
        likes: 12,
        comments: 15,
        time: "4 hours ago",
    },
    Post {
        id: 3,
        author: Author {
            name: "Emily Davis",
            avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop",
            location: "Queens, NY",
        },
        content: "Max just learned his first trick! So proud of my little corgi. 🎉",
        image: Some("https://images.unsplash.com/photo-1612536057832-2ff7ead58194?w=600&h=400&fit=crop"),
        likes: 45,
        comments: 12,
        time: "6 hours ago",
    },
];

/// The signed-in member shown on the profile page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub location: &'static str,
    pub bio: &'static str,
    pub posts: u32,
    pub followers: u32,
    pub following: u32,
}

pub const PROFILE: Profile = Profile {
    name: "Sarah Johnson",
    location: "Brooklyn, NY",
    bio: "Proud pet parent of 2 furry friends 🐕🐱 | Dog lover | Cat whisperer | Always looking for playdate buddies!",
    posts: 24,
    followers: 156,
    following: 89,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OwnedPet {
    pub name: &'static str,
    pub breed: &'static str,
    pub age: &'static str,
    pub image: &'static str,
}

pub const PROFILE_PETS: &[OwnedPet] = &[
    OwnedPet {
        name: "Luna",
        breed: "Golden Retriever",
        age: "2 years",
        image: "https://images.unsplash.com/photo-1552053831-71594a27632d?w=200&h=200&fit=crop",
    },
    OwnedPet {
        name: "Whiskers",
        breed: "Tabby Cat",
        age: "3 years",
        image: "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=200&h=200&fit=crop",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfilePost {
    pub id: u32,
    pub content: &'static str,
    pub likes: u32,
    pub comments: u32,
    pub time: &'static str,
}

pub const PROFILE_POSTS: &[ProfilePost] = &[
    ProfilePost {
        id: 1,
        content: "Just had the most amazing playdate at the park! 🐕",
        likes: 24,
        comments: 8,
        time: "2 hours ago",
    },
    ProfilePost {
        id: 2,
        content: "Luna learned a new trick today! So proud of my girl 🎉",
        likes: 45,
        comments: 12,
        time: "1 day ago",
    },
];
