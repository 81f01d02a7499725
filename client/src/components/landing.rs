//! Landing-page sections below the hero.

use leptos::prelude::*;

use crate::components::cards::PetCard;
use crate::data::landing::{FEATURES, QUICK_ACTIONS, STATS};
use crate::data::listings::featured_pets;

#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <section class="section quick-actions">
            <div class="quick-actions__grid">
                {QUICK_ACTIONS
                    .iter()
                    .map(|action| {
                        view! {
                            <a href=action.href class="quick-actions__item">
                                <span class="quick-actions__icon">{action.icon}</span>
                                <div>
                                    <h3>{action.label}</h3>
                                    <p>{action.desc}</p>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="section stats">
            <div class="stats__grid">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stats__item">
                                <div class="stats__value">{stat.value}</div>
                                <div class="stats__label">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn FeaturedPets() -> impl IntoView {
    view! {
        <section class="section featured-pets">
            <div class="section__header">
                <span class="pill">"Looking for a home"</span>
                <h2>"Meet Our " <span class="text-accent">"Featured Pets"</span></h2>
                <p>
                    "These adorable friends are waiting for their forever families. Could you be their perfect match?"
                </p>
            </div>
            <div class="card-grid">
                {featured_pets().iter().map(|pet| view! { <PetCard pet=pet/> }).collect_view()}
            </div>
            <div class="section__footer">
                <a href="/adoption" class="btn btn--outline">"View All Pets"</a>
            </div>
        </section>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="section features">
            <div class="section__header">
                <h2>"Everything Your " <span class="text-accent">"Pet Needs"</span></h2>
                <p>"From finding playmates to emergency alerts, we've got your pet community covered."</p>
            </div>
            <div class="features__grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="features__item">
                                <span class="features__icon">{feature.icon}</span>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section class="section cta">
            <div class="cta__panel">
                <h2>"Ready to Join the Pack?"</h2>
                <p>
                    "Connect with pet lovers in your neighborhood. Share moments, find playmates, and be part of a caring community."
                </p>
                <div class="cta__actions">
                    <a href="/auth" class="btn btn--light">"Get Started Free"</a>
                    <a href="/community" class="btn btn--outline-light">"Explore Community"</a>
                </div>
            </div>
        </section>
    }
}
