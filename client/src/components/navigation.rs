//! Top navigation bar with a collapsible mobile menu.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::data::landing::{NAV_LINKS, is_active};
use crate::state::ui::UiState;

#[component]
pub fn Navigation() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let menu_open = move || ui.with(|u| u.mobile_menu_open);
    let close_menu = move |_| ui.update(|u| u.mobile_menu_open = false);

    let links = move |mobile: bool| {
        NAV_LINKS
            .iter()
            .map(|link| {
                let active = move || pathname.with(|p| is_active(link.href, p));
                view! {
                    <a
                        href=link.href
                        class=if mobile { "nav__mobile-link" } else { "nav__link" }
                        class:nav__link--active=active
                        on:click=close_menu
                    >
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="nav">
            <nav class="nav__bar">
                <a href="/" class="nav__brand">
                    <span class="nav__logo">"🐾"</span>
                    <span class="nav__wordmark">"Paw" <span class="nav__wordmark-accent">"Square"</span></span>
                </a>

                <div class="nav__links">{links(false)}</div>

                <div class="nav__auth">
                    <a href="/auth" class="btn btn--ghost">"Sign In"</a>
                    <a href="/auth" class="btn btn--primary">"Join the Pack"</a>
                </div>

                <button
                    class="nav__menu-toggle"
                    title="Menu"
                    on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </nav>

            <Show when=menu_open>
                <div class="nav__mobile">
                    {links(true)}
                    <div class="nav__mobile-auth">
                        <a href="/auth" class="btn btn--outline" on:click=close_menu>"Sign In"</a>
                        <a href="/auth" class="btn btn--primary" on:click=close_menu>"Join the Pack"</a>
                    </div>
                </div>
            </Show>
        </header>
    }
}
