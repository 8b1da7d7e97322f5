//! Top navigation bar with the shared search box.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::spots::SpotsState;

/// Brand, search, route links and the "Share Spot" shortcut.
///
/// The search box edits the same query as the sidebar search.
#[component]
pub fn Navbar(spots: SpotsState) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let on_map = move || location.pathname.get() == "/";
    let on_community = move || location.pathname.get() == "/community";

    let on_share = move |_| {
        navigate("/", NavigateOptions::default());
        spots.open_composer(spots.map_center.get_untracked());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                <span class="navbar__logo" aria-hidden="true">"📷"</span>
                <span class="navbar__title">"ShutterSpot"</span>
            </a>

            <div class="navbar__search">
                <input
                    class="navbar__search-input"
                    type="search"
                    placeholder="Search locations..."
                    prop:value=move || spots.search.with(|s| s.query().to_owned())
                    on:input=move |ev| spots.set_query(event_target_value(&ev))
                />
            </div>

            <div class="navbar__links">
                <a class="navbar__link" class:navbar__link--active=on_map href="/">
                    "Map"
                </a>
                <a class="navbar__link" class:navbar__link--active=on_community href="/community">
                    "Community"
                </a>
                <button class="btn btn--primary navbar__share" on:click=on_share>
                    "Share Spot"
                </button>
            </div>
        </nav>
    }
}
