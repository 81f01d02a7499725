//! Site footer with brand blurb and link columns.

use leptos::prelude::*;

use crate::data::landing::FOOTER_COLUMNS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <a href="/" class="nav__brand">
                        <span class="nav__logo">"🐾"</span>
                        <span class="nav__wordmark">"PawSquare"</span>
                    </a>
                    <p>
                        "Your neighborhood pet community. Connect, share, and care for our furry friends together."
                    </p>
                </div>
                {FOOTER_COLUMNS
                    .iter()
                    .map(|column| {
                        view! {
                            <div class="footer__column">
                                <h4>{column.heading}</h4>
                                <ul>
                                    {column
                                        .links
                                        .iter()
                                        .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="footer__bottom">
                <p>"© 2026 PawSquare. All rights reserved."</p>
                <p>"Made with ❤️ for pets everywhere"</p>
            </div>
        </footer>
    }
}
