//! Root application component with routing and shared state.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::consts::{LEAFLET_CSS, LEAFLET_JS};
use crate::pages::{community::CommunityPage, map::MapPage};
use crate::state::spots::SpotsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=LEAFLET_CSS/>
                <script src=LEAFLET_JS></script>
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
/// Builds the one [`SpotsState`] for the session and hands it to every page
/// and component that needs it as a prop.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let spots = SpotsState::new();

    view! {
        <Stylesheet id="leptos" href="/pkg/shutterspot.css"/>
        <Title text="ShutterSpot"/>

        <Router>
            <div class="app-shell">
                <Navbar spots=spots/>
                <main class="app-shell__body">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=move || view! { <MapPage spots=spots/> }/>
                        <Route path=StaticSegment("community") view=CommunityPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
