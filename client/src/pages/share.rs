//! Post composer page.
//!
//! Validation and reset live in `ShareDraft`; this page only binds inputs and
//! shows the resulting notice, which dismisses itself after a few seconds.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navigation::Navigation;
use crate::data::share::CATEGORIES;
#[cfg(feature = "hydrate")]
use crate::data::share::NOTICE_DISMISS_MILLIS;
use crate::state::composer::{NoticeSlot, ShareDraft};

#[component]
pub fn SharePage() -> impl IntoView {
    let draft = RwSignal::new(ShareDraft::default());
    let notice = RwSignal::new(NoticeSlot::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(result) = draft.try_update(ShareDraft::submit) else {
            return;
        };
        let Some(token) = notice.try_update(|slot| slot.show(result)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_DISMISS_MILLIS).await;
            notice.try_update(|slot| slot.dismiss(token));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    let images = move || {
        draft.with(|d| {
            d.images
                .iter()
                .enumerate()
                .map(|(index, src)| {
                    view! {
                        <div class="share__thumb">
                            <img src=*src alt=format!("Upload {}", index + 1)/>
                            <button
                                type="button"
                                class="share__thumb-remove"
                                title="Remove photo"
                                on:click=move |_| draft.update(|d| d.remove_image(index))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="page">
            <Navigation/>
            <main class="page__main page__main--narrow">
                <div class="page__header">
                    <h1>"Share with Community"</h1>
                    <p>"Share updates, ask questions, or alert the community"</p>
                </div>

                {move || {
                    notice
                        .with(|slot| slot.current().cloned())
                        .map(|n| {
                            view! {
                                <div class="toast" class:toast--error=n.error>
                                    <strong>{n.title}</strong>
                                    <p>{n.description}</p>
                                </div>
                            }
                        })
                }}

                <form class="card share__form" on:submit=on_submit>
                    <div class="field">
                        <span>"Category"</span>
                        <div class="share__categories">
                            {CATEGORIES
                                .iter()
                                .map(|category| {
                                    view! {
                                        <button
                                            type="button"
                                            class="chip"
                                            class:chip--selected=move || {
                                                draft.with(|d| d.category == category.id)
                                            }
                                            on:click=move |_| draft.update(|d| d.category = category.id)
                                        >
                                            {category.emoji} " " {category.label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <label class="field">
                        <span>"What's on your mind?"</span>
                        <textarea
                            rows="5"
                            placeholder="Share your thoughts, ask a question, or post about your pet..."
                            prop:value=move || draft.with(|d| d.content.clone())
                            on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
                        ></textarea>
                    </label>

                    <label class="field">
                        <span>"Location (optional)"</span>
                        <input
                            type="text"
                            placeholder="e.g., Brooklyn, NY"
                            prop:value=move || draft.with(|d| d.location.clone())
                            on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                        />
                    </label>

                    <div class="field">
                        <span>"Photos (optional)"</span>
                        <div class="share__thumbs">{images}</div>
                        <button
                            type="button"
                            class="btn btn--outline"
                            on:click=move |_| draft.update(ShareDraft::add_demo_image)
                        >
                            "📷 Add Photo"
                        </button>
                    </div>

                    <label class="field">
                        <span>"Tags (optional)"</span>
                        <input
                            type="text"
                            placeholder="e.g., #puppy #training #advice"
                            prop:value=move || draft.with(|d| d.tags.clone())
                            on:input=move |ev| draft.update(|d| d.tags = event_target_value(&ev))
                        />
                    </label>

                    <button type="submit" class="btn btn--primary btn--block">"Share Post"</button>
                </form>
            </main>
            <Footer/>
        </div>
    }
}
