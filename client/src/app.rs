//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    auth::AuthPage,
    get_started::GetStartedPage,
    home::HomePage,
    listings::{AdoptionPage, CommunityPage, EventsPage, ServicesPage},
    not_found::NotFoundPage,
    profile::ProfilePage,
    share::SharePage,
};
use crate::state::{chat::ChatState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides per-session state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(ui);
    provide_context(chat);

    view! {
        <Stylesheet id="leptos" href="/pkg/pawsquare.css"/>
        <Title text="PawSquare"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("community") view=CommunityPage/>
                <Route path=StaticSegment("adoption") view=AdoptionPage/>
                <Route path=StaticSegment("events") view=EventsPage/>
                <Route path=StaticSegment("services") view=ServicesPage/>
                <Route path=StaticSegment("share") view=SharePage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("get-started") view=GetStartedPage/>
            </Routes>
        </Router>
    }
}
