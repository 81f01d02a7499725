//! Listing pages: community feed, adoption, events and services.

use leptos::prelude::*;

use crate::components::cards::{EventCard, PetCard, PostCard, ServiceCard};
use crate::components::footer::Footer;
use crate::components::navigation::Navigation;
use crate::data::community::POSTS;
use crate::data::listings::{EVENTS, PETS, SERVICES};

/// Title block shared by the listing pages.
#[component]
fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="page__header">
            <h1>{title}</h1>
            <p>{subtitle}</p>
        </div>
    }
}

#[component]
pub fn CommunityPage() -> impl IntoView {
    view! {
        <div class="page">
            <Navigation/>
            <main class="page__main page__main--narrow">
                <PageHeader
                    title="Pet Parent Community"
                    subtitle="Share moments, ask questions, and connect with fellow pet lovers in your neighborhood."
                />
                <div class="card composer-teaser">
                    <input type="text" placeholder="Share something with the community..."/>
                    <a href="/share" class="btn btn--primary">"Post"</a>
                </div>
                <div class="feed">
                    {POSTS.iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
                </div>
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn AdoptionPage() -> impl IntoView {
    view! {
        <div class="page">
            <Navigation/>
            <main class="page__main">
                <PageHeader
                    title="Find Your Perfect Match"
                    subtitle="These adorable pets are looking for their forever homes. Could you be their perfect match?"
                />
                <div class="search-bar">
                    <input type="search" placeholder="Search by breed, name, or location..."/>
                    <button class="btn btn--outline">"Filters"</button>
                </div>
                <div class="card-grid">
                    {PETS.iter().map(|pet| view! { <PetCard pet=pet/> }).collect_view()}
                </div>
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <div class="page">
            <Navigation/>
            <main class="page__main">
                <PageHeader
                    title="Pet Events"
                    subtitle="Join local pet meetups, training sessions, and adoption events in your area."
                />
                <div class="card-grid card-grid--wide">
                    {EVENTS.iter().map(|event| view! { <EventCard event=event/> }).collect_view()}
                </div>
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="page">
            <Navigation/>
            <main class="page__main">
                <PageHeader
                    title="Local Pet Services"
                    subtitle="Find trusted groomers, vets, trainers, and pet stores in your neighborhood."
                />
                <div class="card-grid">
                    {SERVICES.iter().map(|service| view! { <ServiceCard service=service/> }).collect_view()}
                </div>
            </main>
            <Footer/>
        </div>
    }
}
