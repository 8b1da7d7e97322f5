//! Card for a single saved location in the sidebar.

use leptos::prelude::*;
use spots::record::LocationRecord;

use crate::state::spots::SpotsState;
use crate::util::geo::format_position;

/// Clickable summary of `record`. Clicking selects it; the corner button
/// deletes it without selecting.
#[component]
pub fn LocationCard(record: LocationRecord, spots: SpotsState) -> impl IntoView {
    let id = record.id();
    let selected = move || spots.store.with(|s| s.is_selected(id));
    let photo = record.photo().map(|p| p.src().to_owned());
    let alt = record.title().to_owned();
    let coordinates = format_position(record.position());
    let direction = format!("Direction: {}", record.direction());
    let tags = record.tags().iter().cloned().collect::<Vec<_>>();

    view! {
        <article
            class="location-card"
            class:location-card--selected=selected
            on:click=move |_| spots.select(Some(id))
        >
            <div class="location-card__media">
                {match photo {
                    Some(src) => view! { <img class="location-card__photo" src=src alt=alt/> }.into_any(),
                    None => view! { <div class="location-card__photo location-card__photo--empty">"No photo"</div> }.into_any(),
                }}
                <button
                    class="location-card__delete"
                    title="Delete location"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        spots.delete(id);
                    }
                >
                    "✕"
                </button>
            </div>
            <div class="location-card__body">
                <h3 class="location-card__title">{record.title().to_owned()}</h3>
                <p class="location-card__description">{record.description().to_owned()}</p>
                <div class="location-card__meta">
                    <span class="location-card__coords">{coordinates}</span>
                    <span class="location-card__direction">{direction}</span>
                </div>
                <div class="location-card__tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="tag-chip">{tag}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </article>
    }
}
