//! Listing cards for pets, events, services and community posts.

use leptos::prelude::*;

use crate::data::community::Post;
use crate::data::listings::{Event, Pet, Service};

#[component]
pub fn PetCard(pet: &'static Pet) -> impl IntoView {
    view! {
        <article class="card pet-card">
            <div class="pet-card__media">
                <img src=pet.image alt=pet.name loading="lazy"/>
                <button class="pet-card__favorite" title="Save to favorites">"♡"</button>
            </div>
            <div class="card__body">
                <div class="pet-card__title-row">
                    <h3>{pet.name}</h3>
                    <span class="badge">{pet.gender}</span>
                </div>
                <p class="card__muted">{pet.breed} " • " {pet.age}</p>
                <p class="card__muted">"📍 " {pet.location}</p>
                <p class="pet-card__personality">{pet.personality}</p>
                <a href="/adoption" class="btn btn--primary btn--block">"Meet " {pet.name}</a>
            </div>
        </article>
    }
}

#[component]
pub fn EventCard(event: &'static Event) -> impl IntoView {
    view! {
        <article class="card event-card">
            <div class="event-card__media">
                <img src=event.image alt=event.title loading="lazy"/>
                <span class="badge event-card__category">{event.category}</span>
            </div>
            <div class="card__body">
                <h3>{event.title}</h3>
                <ul class="event-card__facts">
                    <li>"📅 " {event.date}</li>
                    <li>"🕒 " {event.time}</li>
                    <li>"📍 " {event.location}</li>
                    <li>"👥 " {event.attendees} " attending"</li>
                </ul>
                <button class="btn btn--primary btn--block">"Join Event"</button>
            </div>
        </article>
    }
}

#[component]
pub fn ServiceCard(service: &'static Service) -> impl IntoView {
    view! {
        <article class="card service-card">
            <img class="service-card__image" src=service.image alt=service.name loading="lazy"/>
            <div class="card__body">
                <div class="service-card__title-row">
                    <h3>{service.name}</h3>
                    <span class="badge">{service.category}</span>
                </div>
                <p class="service-card__rating">
                    "⭐ " {format!("{:.1}", service.rating)} " (" {service.reviews} " reviews)"
                </p>
                <p class="card__muted">"📍 " {service.location}</p>
                <p class="card__muted">"🕒 " {service.hours}</p>
                <div class="service-card__footer">
                    <span class="service-card__price">{service.price}</span>
                    <button class="btn btn--primary">"Book Now"</button>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn PostCard(post: &'static Post) -> impl IntoView {
    view! {
        <article class="card post-card">
            <header class="post-card__header">
                <img class="avatar" src=post.author.avatar alt=post.author.name/>
                <div>
                    <h4>{post.author.name}</h4>
                    <p class="card__muted">{post.author.location} " • " {post.time}</p>
                </div>
            </header>
            <p class="post-card__content">{post.content}</p>
            {post.image.map(|src| view! { <img class="post-card__image" src=src alt="Post"/> })}
            <footer class="post-card__actions">
                <button class="btn btn--ghost">"♡ " {post.likes}</button>
                <button class="btn btn--ghost">"💬 " {post.comments}</button>
                <button class="btn btn--ghost">"↗ Share"</button>
            </footer>
        </article>
    }
}
