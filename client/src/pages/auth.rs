//! Sign-in / sign-up screen. Presentational only; nothing is submitted.

use leptos::prelude::*;

use crate::state::auth::AuthForm;

#[component]
pub fn AuthPage() -> impl IntoView {
    let form = RwSignal::new(AuthForm::default());
    let is_sign_in = move || form.with(AuthForm::is_sign_in);

    view! {
        <div class="auth">
            <div class="auth__form-side">
                <a href="/" class="nav__brand">
                    <span class="nav__logo">"🐾"</span>
                    <span class="nav__wordmark">"PawSquare"</span>
                </a>

                <div class="auth__heading">
                    <h1>{move || form.with(AuthForm::heading)}</h1>
                    <p>{move || form.with(AuthForm::subheading)}</p>
                </div>

                <form class="auth__form" on:submit=|ev| ev.prevent_default()>
                    <Show when=move || !is_sign_in()>
                        <label class="field">
                            <span>"Full Name"</span>
                            <input type="text" placeholder="John Doe"/>
                        </label>
                    </Show>
                    <label class="field">
                        <span>"Email"</span>
                        <input type="email" placeholder="hello@example.com"/>
                    </label>
                    <label class="field">
                        <span>"Password"</span>
                        <div class="field__password">
                            <input
                                type=move || form.with(AuthForm::password_input_type)
                                placeholder="••••••••"
                            />
                            <button
                                type="button"
                                class="field__reveal"
                                title="Toggle password visibility"
                                on:click=move |_| form.update(AuthForm::toggle_password)
                            >
                                {move || if form.with(|f| f.show_password) { "🙈" } else { "👁" }}
                            </button>
                        </div>
                    </label>
                    <Show when=is_sign_in>
                        <div class="auth__forgot">
                            <a href="#">"Forgot password?"</a>
                        </div>
                    </Show>
                    <button type="submit" class="btn btn--primary btn--block">
                        {move || form.with(AuthForm::submit_label)}
                    </button>
                </form>

                <p class="auth__switch">
                    {move || form.with(|f| f.switch_prompt().0)}
                    " "
                    <button class="link-button" on:click=move |_| form.update(AuthForm::toggle_mode)>
                        {move || form.with(|f| f.switch_prompt().1)}
                    </button>
                </p>
            </div>

            <div class="auth__art-side">
                <div class="auth__art">
                    <div class="auth__art-icon">"🐾"</div>
                    <h2>"Your Pet Community Awaits"</h2>
                    <p>
                        "Connect with thousands of pet lovers in your neighborhood. Share moments, find playdates, and be part of something special."
                    </p>
                </div>
            </div>
        </div>
    }
}
