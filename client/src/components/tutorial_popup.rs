//! Quick tutorial popup: a four-step tour reusing the stepper walk.
//!
//! The host page owns the `TutorialState` signal and opens it; this component
//! only renders it. Closing and the reset-on-open rule live in the state, so
//! unrelated UI writes never move the tour.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::data::onboarding::TUTORIAL_DEMO_MILLIS;
use crate::data::onboarding::TUTORIAL_STEPS;
use crate::state::tutorial::TutorialState;

#[component]
pub fn TutorialPopup(tutorial: RwSignal<TutorialState>) -> impl IntoView {
    let playing = RwSignal::new(false);
    let current = move || tutorial.with(|t| t.stepper().current());

    let close = move || tutorial.update(TutorialState::close);
    let on_next = move |_| {
        tutorial.update(|t| {
            t.go_next();
        });
    };
    let on_previous = move |_| {
        tutorial.update(|t| {
            t.go_previous();
        });
    };
    let on_play = move |_| {
        if playing.get_untracked() {
            return;
        }
        playing.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TUTORIAL_DEMO_MILLIS).await;
            playing.set(false);
        });
    };

    let is_last = move || tutorial.with(|t| t.stepper().is_last());

    view! {
        <Show when=move || tutorial.with(TutorialState::is_open)>
            <div class="tutorial__backdrop">
                <div class="tutorial">
                    <div class="tutorial__header">
                        <h2>"Quick Tutorial"</h2>
                        <button class="tutorial__close" title="Close tutorial" on:click=move |_| close()>
                            "✕"
                        </button>
                    </div>

                    <div class="tutorial__dots">
                        {(0..TUTORIAL_STEPS.len())
                            .map(|index| {
                                view! {
                                    <div
                                        class="tutorial__dot"
                                        class:tutorial__dot--current=move || {
                                            current() == index
                                        }
                                    ></div>
                                }
                            })
                            .collect_view()}
                    </div>

                    {move || {
                        let step = &TUTORIAL_STEPS[current()];
                        view! {
                            <div class="tutorial__icon" class:tutorial__icon--playing=move || playing.get()>
                                {step.icon}
                            </div>
                            <h3 class="tutorial__title">{step.title}</h3>
                            <p class="tutorial__description">{step.description}</p>
                            <div class="tutorial__tips">
                                <h4>"💡 Pro Tips:"</h4>
                                <ul>
                                    {step.tips.iter().map(|tip| view! { <li>"▸ " {*tip}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    }}

                    <div class="tutorial__demo">
                        <button class="btn btn--secondary" disabled=move || playing.get() on:click=on_play>
                            {move || if playing.get() { "Playing Demo..." } else { "▶ Try Interactive Demo" }}
                        </button>
                    </div>

                    <div class="tutorial__nav">
                        <button
                            class="btn btn--ghost"
                            disabled=move || tutorial.with(|t| t.stepper().is_first())
                            on:click=on_previous
                        >
                            "‹ Previous"
                        </button>
                        <span class="tutorial__position">
                            {move || tutorial.with(|t| t.stepper().position_label())}
                        </span>
                        <button class="btn btn--primary" on:click=on_next>
                            {move || if is_last() { "Get Started" } else { "Next ›" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
