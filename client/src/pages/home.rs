//! Landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! First-time visitors get the onboarding walkthrough as a modal. The
//! completion flag lives in `localStorage`, so the check runs once from a
//! client-side effect after hydration; SSR always renders the page closed.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::footer::Footer;
use crate::components::get_started::GetStarted;
use crate::components::landing::{Cta, FeaturedPets, Features, QuickActions, Stats};
use crate::components::navigation::Navigation;
use crate::components::tutorial_popup::TutorialPopup;
use crate::data::landing::hero_stats;
use crate::data::onboarding::TUTORIAL_STEPS;
use crate::state::onboarding::should_show_onboarding;
use crate::state::tutorial::TutorialState;
use crate::state::ui::UiState;
use crate::util::storage::LocalStorageFlags;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?w=1600&h=900&fit=crop";

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tutorial = RwSignal::new(TutorialState::new(TUTORIAL_STEPS.len()));

    Effect::new(move || {
        if should_show_onboarding(&LocalStorageFlags) {
            ui.update(|u| u.onboarding_open = true);
        }
    });

    let on_onboarding_complete = Callback::new(move |()| ui.update(|u| u.onboarding_open = false));

    view! {
        <div class="page">
            <Navigation/>

            <Show when=move || ui.with(|u| u.onboarding_open)>
                <div class="modal__backdrop">
                    <div class="modal">
                        <GetStarted modal=true on_complete=on_onboarding_complete/>
                    </div>
                </div>
            </Show>

            <TutorialPopup tutorial=tutorial/>

            <main>
                <section class="hero">
                    <img class="hero__image" src=HERO_IMAGE alt="Happy pets and families"/>
                    <div class="hero__content">
                        <span class="pill">"📍 Your neighborhood pet community"</span>
                        <h1>"Where Pet Parents " <span class="text-accent">"Come Together"</span></h1>
                        <p>
                            "Join your local pet community. Find playdates, share recommendations, reunite lost pets, and connect with fellow pet lovers in your neighborhood."
                        </p>
                        <div class="hero__actions">
                            <a href="/auth" class="btn btn--primary btn--lg">"🐕 Join the Pack"</a>
                            <a href="/community" class="btn btn--outline btn--lg">"👥 Explore Community"</a>
                            <button
                                class="btn btn--ghost btn--lg"
                                on:click=move |_| tutorial.update(TutorialState::open)
                            >
                                "▶ Quick Tour"
                            </button>
                        </div>
                        <div class="hero__stats">
                            {hero_stats()
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="hero__stat">
                                            <div class="hero__stat-value">{stat.value}</div>
                                            <div class="hero__stat-label">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </section>

                <QuickActions/>
                <Stats/>
                <FeaturedPets/>
                <Features/>
                <Cta/>
            </main>

            <Footer/>
            <ChatWidget/>
        </div>
    }
}
