//! Map page: interactive map, browse sidebar and the entry form.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use leptos::prelude::*;

use crate::components::add_location_modal::AddLocationModal;
use crate::components::map_host::MapHost;
use crate::components::sidebar::Sidebar;
use crate::state::spots::SpotsState;

/// The `/` route. The entry form is shown while `spots.composer` holds a
/// position.
#[component]
pub fn MapPage(spots: SpotsState) -> impl IntoView {
    close_composer_on_unmount(spots);

    let composer = move || {
        spots
            .composer
            .get()
            .map(|position| view! { <AddLocationModal spots=spots position=position/> })
    };

    view! {
        <div class="map-page">
            <section class="map-page__map">
                <MapHost spots=spots/>
            </section>
            <Sidebar spots=spots/>
            {composer}
        </div>
    }
}

/// Leaving the page unmounts the form and releases its draft, so the
/// composer must not reopen it on return.
fn close_composer_on_unmount(spots: SpotsState) {
    on_cleanup(move || spots.close_composer());
}
