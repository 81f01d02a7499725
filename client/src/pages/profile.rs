//! Profile page for the sample user.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navigation::Navigation;
use crate::data::community::{PROFILE, PROFILE_PETS, PROFILE_POSTS};
use crate::state::ui::{ProfileTab, UiState};

const AVATAR: &str = "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200&h=200&fit=crop";

fn posts_list() -> impl IntoView {
    PROFILE_POSTS
        .iter()
        .map(|post| {
            view! {
                <article class="card profile__post">
                    <p>{post.content}</p>
                    <div class="card__muted profile__post-meta">
                        <span>"♡ " {post.likes}</span>
                        <span>"💬 " {post.comments}</span>
                        <span>{post.time}</span>
                    </div>
                </article>
            }
        })
        .collect_view()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active_tab = move || ui.with(|u| u.profile_tab);

    let tab_body = move || match active_tab().empty_text() {
        Some(text) => view! { <p class="profile__empty">{text}</p> }.into_any(),
        None => posts_list().into_any(),
    };

    view! {
        <div class="page">
            <Navigation/>
            <main class="page__main page__main--narrow">
                <section class="card profile__header">
                    <img class="avatar avatar--lg" src=AVATAR alt=PROFILE.name/>
                    <div class="profile__info">
                        <h1>{PROFILE.name}</h1>
                        <p class="card__muted">"📍 " {PROFILE.location}</p>
                        <p>{PROFILE.bio}</p>
                        <div class="profile__stats">
                            <div><strong>{PROFILE.posts}</strong> " Posts"</div>
                            <div><strong>{PROFILE.followers}</strong> " Followers"</div>
                            <div><strong>{PROFILE.following}</strong> " Following"</div>
                        </div>
                    </div>
                    <button class="btn btn--outline">"⚙ Edit Profile"</button>
                </section>

                <section class="profile__pets">
                    <h2>"My Pets"</h2>
                    <div class="profile__pet-row">
                        {PROFILE_PETS
                            .iter()
                            .map(|pet| {
                                view! {
                                    <div class="card profile__pet">
                                        <img class="avatar" src=pet.image alt=pet.name/>
                                        <div>
                                            <h3>{pet.name}</h3>
                                            <p class="card__muted">{pet.breed} " • " {pet.age}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <button class="profile__add-pet" title="Add a pet">"+"</button>
                    </div>
                </section>

                <section class="profile__tabs">
                    <div class="tabs">
                        {ProfileTab::ALL
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        class="tabs__trigger"
                                        class:tabs__trigger--active=move || active_tab() == tab
                                        on:click=move |_| ui.update(|u| u.profile_tab = tab)
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="tabs__content">{tab_body}</div>
                </section>
            </main>
            <Footer/>
        </div>
    }
}
