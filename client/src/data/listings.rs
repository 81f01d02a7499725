//! Adoptable pets, local events, and service providers.

/// A pet looking for a home.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pet {
    pub id: u32,
    pub name: &'static str,
    pub breed: &'static str,
    pub age: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub personality: &'static str,
    pub gender: &'static str,
}

pub const PETS: &[Pet] = &[
    Pet {
        id: 1,
        name: "Luna",
        breed: "Golden Retriever",
        age: "2 years",
        location: "Brooklyn, NY",
        image: "https://images.unsplash.com/photo-1552053831-71594a27632d?w=400&h=400&fit=crop",
        personality: "Playful & Loving",
        gender: "Female",
    },
    Pet {
        id: 2,
        name: "Oliver",
        breed: "Tabby Cat",
        age: "1 year",
        location: "Manhattan, NY",
        image: "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=400&h=400&fit=crop",
        personality: "Curious & Cuddly",
        gender: "Male",
    },
    Pet {
        id: 3,
        name: "Max",
        breed: "Corgi",
        age: "3 years",
        location: "Queens, NY",
        image: "https://images.unsplash.com/photo-1612536057832-2ff7ead58194?w=400&h=400&fit=crop",
        personality: "Energetic & Smart",
        gender: "Male",
    },
    Pet {
        id: 4,
        name: "Bella",
        breed: "Maine Coon",
        age: "4 years",
        location: "Bronx, NY",
        image: "https://images.unsplash.com/photo-1574158622682-e40e69881006?w=400&h=400&fit=crop",
        personality: "Gentle Giant",
        gender: "Female",
    },
    Pet {
        id: 5,
        name: "Charlie",
        breed: "Labrador",
        age: "1.5 years",
        location: "Staten Island, NY",
        image: "https://images.unsplash.com/photo-1579213838058-85a4a2d7d1bc?w=400&h=400&fit=crop",
        personality: "Friendly & Loyal",
        gender: "Male",
    },
    Pet {
        id: 6,
        name: "Milo",
        breed: "Persian Cat",
        age: "2 years",
        location: "Brooklyn, NY",
        image: "https://images.unsplash.com/photo-1495360010541-f48722b34f7d?w=400&h=400&fit=crop",
        personality: "Calm & Elegant",
        gender: "Male",
    },
];

/// Number of pets shown in the landing page's featured strip.
pub const FEATURED_PET_COUNT: usize = 4;

pub fn featured_pets() -> &'static [Pet] {
    &PETS[..FEATURED_PET_COUNT.min(PETS.len())]
}

/// A community meetup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub attendees: u32,
    pub image: &'static str,
    pub category: &'static str,
}

pub const EVENTS: &[Event] = &[
    Event {
        id: 1,
        title: "Puppy Playdate at Central Park",
        date: "Jan 20, 2026",
        time: "10:00 AM - 12:00 PM",
        location: "Central Park, NYC",
        attendees: 24,
        image: "https://images.unsplash.com/photo-1601758228041-f3b2795255f1?w=600&h=400&fit=crop",
        category: "Playdate",
    },
    Event {
        id: 2,
        title: "Cat Café Social Hour",
        date: "Jan 22, 2026",
        time: "3:00 PM - 5:00 PM",
        location: "Meow Parlour, Manhattan",
        attendees: 15,
        image: "https://images.unsplash.com/photo-1574158622682-e40e69881006?w=600&h=400&fit=crop",
        category: "Social",
    },
    Event {
        id: 3,
        title: "Dog Training Workshop",
        date: "Jan 25, 2026",
        time: "9:00 AM - 11:00 AM",
        location: "Brooklyn Dog Training Center",
        attendees: 18,
        image: "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=600&h=400&fit=crop",
        category: "Workshop",
    },
    Event {
        id: 4,
        title: "Pet Adoption Fair",
        date: "Jan 28, 2026",
        time: "11:00 AM - 4:00 PM",
        location: "Union Square, NYC",
        attendees: 56,
        image: "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?w=600&h=400&fit=crop",
        category: "Adoption",
    },
];

/// A local pet business.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub location: &'static str,
    pub image: &'static str,
    pub hours: &'static str,
    pub price: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: 1,
        name: "Pawsome Grooming",
        category: "Grooming",
        rating: 4.9,
        reviews: 128,
        location: "Brooklyn, NY",
        image: "https://images.unsplash.com/photo-1516734212186-a967f81ad0d7?w=400&h=300&fit=crop",
        hours: "9 AM - 6 PM",
        price: "$$",
    },
    Service {
        id: 2,
        name: "Happy Tails Vet Clinic",
        category: "Veterinary",
        rating: 4.8,
        reviews: 256,
        location: "Manhattan, NY",
        image: "https://images.unsplash.com/photo-1628009368231-7bb7cfcb0def?w=400&h=300&fit=crop",
        hours: "8 AM - 8 PM",
        price: "$$$",
    },
    Service {
        id: 3,
        name: "Furry Friends Daycare",
        category: "Pet Sitting",
        rating: 4.7,
        reviews: 89,
        location: "Queens, NY",
        image: "https://images.unsplash.com/photo-1601758124510-52d02ddb7cbd?w=400&h=300&fit=crop",
        hours: "7 AM - 7 PM",
        price: "$$",
    },
    Service {
        id: 4,
        name: "Bark Academy",
        category: "Training",
        rating: 4.9,
        reviews: 167,
        location: "Bronx, NY",
        image: "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=400&h=300&fit=crop",
        hours: "10 AM - 5 PM",
        price: "$$",
    },
    Service {
        id: 5,
        name: "Pet Paradise Store",
        category: "Pet Store",
        rating: 4.6,
        reviews: 203,
        location: "Staten Island, NY",
        image: "https://images.unsplash.com/photo-1583511655857-d19b40a7a54e?w=400&h=300&fit=crop",
        hours: "9 AM - 9 PM",
        price: "$",
    },
    Service {
        id: 6,
        name: "Whiskers & Wags Spa",
        category: "Grooming",
        rating: 4.8,
        reviews: 94,
        location: "Brooklyn, NY",
        image: "https://images.unsplash.com/photo-1591946614720-90a587da4a36?w=400&h=300&fit=crop",
        hours: "10 AM - 7 PM",
        price: "$$$",
    },
];
