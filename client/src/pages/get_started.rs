//! Standalone onboarding route. Finishing the walk returns to the landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::get_started::GetStarted;
use crate::components::navigation::Navigation;

#[component]
pub fn GetStartedPage() -> impl IntoView {
    let navigate = use_navigate();
    let finished = RwSignal::new(false);

    Effect::new(move || {
        if finished.get() {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_complete = Callback::new(move |()| finished.set(true));

    view! {
        <div class="page">
            <Navigation/>
            <main class="page__main page__main--centered">
                <GetStarted on_complete=on_complete/>
            </main>
            <Footer/>
        </div>
    }
}
