//! Onboarding walkthrough card, rendered inline on `/get-started` or as a
//! first-visit modal on the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The component owns a `StepperState` signal for as long as it is mounted.
//! Every navigation result goes through `onboarding::settle`, which writes the
//! completion flag to `localStorage` and then runs `on_complete`. The parent
//! decides what completion means (close the modal, navigate home).
//!
//! Arrow keys drive the walk through a window listener that is removed on
//! unmount, so the keyboard path is only live while the card is visible.

use leptos::prelude::*;

use crate::data::onboarding::ONBOARDING_STEPS;
use crate::state::onboarding::settle;
use crate::state::stepper::{Indicator, KeyContext, Nav, StepperState, key_command};
use crate::util::storage::LocalStorageFlags;

fn indicator_class(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Current => "stepper__dot stepper__dot--current",
        Indicator::Visited => "stepper__dot stepper__dot--visited",
        Indicator::Skipped => "stepper__dot stepper__dot--skipped",
        Indicator::Upcoming => "stepper__dot",
    }
}

/// Five-step onboarding card.
#[component]
pub fn GetStarted(
    on_complete: Callback<()>,
    /// Show the dismiss control and let `Escape` finish the walk.
    #[prop(optional)]
    modal: bool,
) -> impl IntoView {
    let stepper = RwSignal::new(StepperState::new(ONBOARDING_STEPS.len()));

    let navigate = move |nav: Nav| {
        let Some(transition) = stepper.try_update(|s| s.apply(nav)) else {
            return;
        };
        settle(transition, &LocalStorageFlags, || on_complete.run(()));
    };

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        let ctx = stepper.with_untracked(|s| KeyContext::for_state(s, modal));
        if let Some(nav) = key_command(&ev.key(), ctx) {
            ev.prevent_default();
            navigate(nav);
        }
    });
    on_cleanup(move || handle.remove());

    let progress = move || format!("{}%", stepper.with(StepperState::progress_percent));
    let is_first = move || stepper.with(StepperState::is_first);
    let is_last = move || stepper.with(StepperState::is_last);

    let step_body = move || {
        let step = &ONBOARDING_STEPS[stepper.with(StepperState::current)];
        view! {
            <div class="stepper__icon">{step.icon}</div>
            <div class="stepper__heading">
                <h2>{step.title}</h2>
                <p>{step.description}</p>
            </div>
            <ul class="stepper__features">
                {step
                    .features
                    .iter()
                    .map(|feature| view! { <li class="stepper__feature">"⭐ " {*feature}</li> })
                    .collect_view()}
            </ul>
            <p class="stepper__tip">"💡 " <strong>"Tip:"</strong> " " {step.tip}</p>
        }
    };

    view! {
        <div class="stepper" class:stepper--modal=modal>
            <div class="stepper__progress">
                <div class="stepper__progress-fill" style:width=progress></div>
            </div>

            {modal
                .then(|| {
                    view! {
                        <button
                            class="stepper__dismiss"
                            title="Dismiss"
                            on:click=move |_| navigate(Nav::Complete)
                        >
                            "✕"
                        </button>
                    }
                })}

            <div class="stepper__dots">
                {(0..ONBOARDING_STEPS.len())
                    .map(|index| {
                        view! {
                            <button
                                class=move || indicator_class(stepper.with(|s| s.indicator(index)))
                                title=format!("Step {}", index + 1)
                                on:click=move |_| navigate(Nav::JumpTo(index))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="stepper__body">{step_body}</div>

            {(!modal).then(|| view! { <p class="stepper__hint">"Use arrow keys to navigate"</p> })}

            <div class="stepper__nav">
                <button
                    class="btn btn--ghost"
                    disabled=is_first
                    on:click=move |_| navigate(Nav::Previous)
                >
                    "‹ Previous"
                </button>
                <div class="stepper__nav-right">
                    <Show when=move || !is_last()>
                        <button class="btn btn--ghost" on:click=move |_| navigate(Nav::Skip)>
                            "Skip"
                        </button>
                    </Show>
                    <button class="btn btn--primary" on:click=move |_| navigate(Nav::Next)>
                        {move || if is_last() { "✓ Get Started" } else { "Next ›" }}
                    </button>
                </div>
                <span class="stepper__position">
                    {move || stepper.with(StepperState::position_label)}
                </span>
            </div>
        </div>
    }
}
