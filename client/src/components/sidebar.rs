//! Browse panel: search box and the filtered location cards.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use spots::record::LocationRecord;
use spots::store::LocationStore;

use crate::components::location_card::LocationCard;
use crate::state::spots::SpotsState;

/// Sidebar listing every location that matches the current query.
#[component]
pub fn Sidebar(spots: SpotsState) -> impl IntoView {
    let has_results = move || spots.filtered.with(|records| !records.is_empty());
    let empty_text = move || {
        let total = spots.store.with(LocationStore::len);
        let query = spots.search.with(|s| s.query().to_owned());
        empty_message(total, &query)
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__search">
                <input
                    class="sidebar__search-input"
                    type="text"
                    placeholder="Search locations..."
                    prop:value=move || spots.search.with(|s| s.query().to_owned())
                    on:input=move |ev| spots.set_query(event_target_value(&ev))
                />
            </div>

            <div class="sidebar__body">
                <h2 class="sidebar__heading">"Featured Locations"</h2>
                <Show
                    when=has_results
                    fallback=move || view! { <p class="sidebar__empty">{empty_text}</p> }
                >
                    <div class="sidebar__cards">
                        <For
                            each=move || spots.filtered.get()
                            key=LocationRecord::id
                            children=move |record: LocationRecord| {
                                view! { <LocationCard record=record spots=spots/> }
                            }
                        />
                    </div>
                </Show>
            </div>
        </aside>
    }
}

/// Placeholder text for an empty card list.
fn empty_message(total: usize, query: &str) -> &'static str {
    if total == 0 {
        "No locations yet. Click anywhere on the map to pin one."
    } else if query.is_empty() {
        "No locations to show."
    } else {
        "No locations match your search."
    }
}
