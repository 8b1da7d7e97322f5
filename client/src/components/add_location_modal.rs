//! "Add Photo Location" entry form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The modal owns a `DraftBuilder` for the position the map was clicked at.
//! Saving submits the draft into `SpotsState` and closes the form; any
//! validation error is shown inline and the form stays open.
//!
//! Photo uploads hold a browser object URL. Every path that drops a pending
//! upload (replace, remove, mode switch, cancel, unmount) releases it. A
//! saved upload is handed to the store, which releases it on delete.

#[cfg(test)]
#[path = "add_location_modal_test.rs"]
mod add_location_modal_test;

use leptos::prelude::*;
use spots::draft::{DraftBuilder, PhotoMode};
use spots::record::LatLng;

use crate::components::direction_preview::DirectionPreview;
use crate::state::spots::SpotsState;
use crate::util::clipboard::copy_text;
use crate::util::geo::{clipboard_text, format_position, google_maps_url};
use crate::util::photo::release;

/// Entry form anchored at `position`.
#[component]
pub fn AddLocationModal(spots: SpotsState, position: LatLng) -> impl IntoView {
    let draft = RwSignal::new(DraftBuilder::new(position));
    let tag_input = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let photo_error = RwSignal::new(None::<String>);
    let direction_error = RwSignal::new(None::<String>);
    let copied = RwSignal::new(false);

    let photo_mode = Memo::new(move |_| draft.with(DraftBuilder::photo_mode));
    let preview_url = Memo::new(move |_| draft.with(|d| d.pending_upload().map(|p| p.object_url.clone())));
    let tags = Memo::new(move |_| draft.with(|d| d.tags().as_slice().to_vec()));
    let direction = Signal::derive(move || draft.with(DraftBuilder::direction));

    let release_pending = move || {
        if let Some(photo) = draft.try_update(DraftBuilder::clear_upload).flatten() {
            release(&photo);
        }
    };
    on_cleanup(release_pending);

    let close = move || {
        release_pending();
        spots.close_composer();
    };

    let on_save = move || match draft.with_untracked(DraftBuilder::submit) {
        Ok(location) => {
            // Ownership of the upload moves to the saved record.
            draft.update(|d| {
                d.clear_upload();
            });
            spots.add(location);
            spots.close_composer();
        }
        Err(err) => form_error.set(Some(err.to_string())),
    };

    let switch_mode = move |mode: PhotoMode| {
        if let Some(photo) = draft.try_update(|d| d.set_photo_mode(mode)).flatten() {
            release(&photo);
        }
        photo_error.set(None);
    };

    let add_tag = move || {
        let raw = tag_input.get_untracked();
        if draft.try_update(|d| d.add_tag(&raw)).unwrap_or(false) {
            tag_input.set(String::new());
        }
    };

    let on_copy = move |_| {
        copy_text(clipboard_text(position), move |ok| {
            if !ok {
                return;
            }
            copied.set(true);
            #[cfg(feature = "hydrate")]
            gloo_timers::callback::Timeout::new(1_500, move || {
                let _ = copied.try_set(false);
            })
            .forget();
        });
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            match crate::util::photo::acquire(&file) {
                Ok(photo) => {
                    if let Some(replaced) = draft.try_update(|d| d.set_upload(photo)).flatten() {
                        release(&replaced);
                    }
                    photo_error.set(None);
                }
                Err(err) => photo_error.set(Some(err.to_string())),
            }
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let photo_panel = move || match photo_mode.get() {
        PhotoMode::Upload => view! {
            <Show
                when=move || preview_url.with(Option::is_some)
                fallback=move || view! {
                    <label class="photo-drop">
                        <span class="photo-drop__title">"Click to upload a photo"</span>
                        <span class="photo-drop__hint">"PNG, JPG or GIF up to 10MB"</span>
                        <input class="photo-drop__input" type="file" accept="image/*" on:change=on_file/>
                    </label>
                }
            >
                <div class="photo-preview">
                    <img class="photo-preview__image" src=move || preview_url.get().unwrap_or_default() alt="Selected photo"/>
                    <button class="photo-preview__remove" title="Remove photo" on:click=move |_| release_pending()>
                        "✕"
                    </button>
                </div>
            </Show>
        }
        .into_any(),
        PhotoMode::Url => view! {
            <input
                class="dialog__input"
                type="url"
                placeholder="https://example.com/photo.jpg"
                prop:value=move || draft.with(|d| d.photo_url().to_owned())
                on:input=move |ev| {
                    let url = event_target_value(&ev);
                    if let Some(photo) = draft.try_update(|d| d.set_photo_url(url)).flatten() {
                        release(&photo);
                    }
                }
            />
        }
        .into_any(),
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--location" on:keydown=on_keydown tabindex="0">
                <div class="dialog__header">
                    <h2>"Add Photo Location"</h2>
                    <button class="dialog__close" title="Close" on:click=move |_| close()>"✕"</button>
                </div>

                <form
                    class="dialog__form"
                    novalidate=true
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_save();
                    }
                >
                    <div class="coords-panel">
                        <div class="coords-panel__row">
                            <span class="coords-panel__label">"Selected Location"</span>
                            <div class="coords-panel__actions">
                                <button type="button" class="btn btn--small" on:click=on_copy>
                                    {move || if copied.get() { "Copied!" } else { "Copy" }}
                                </button>
                                <a
                                    class="btn btn--small"
                                    href=google_maps_url(position)
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "Open in Maps"
                                </a>
                            </div>
                        </div>
                        <code class="coords-panel__value">{format_position(position)}</code>
                    </div>

                    <label class="dialog__label">
                        "Location Title"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="e.g., Golden Gate Bridge Sunset Spot"
                            prop:value=move || draft.with(|d| d.title().to_owned())
                            on:input=move |ev| {
                                draft.update(|d| d.set_title(event_target_value(&ev)));
                                form_error.set(None);
                            }
                        />
                    </label>

                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input dialog__textarea"
                            rows="3"
                            placeholder="Describe what makes this spot special..."
                            prop:value=move || draft.with(|d| d.description().to_owned())
                            on:input=move |ev| {
                                draft.update(|d| d.set_description(event_target_value(&ev)));
                                form_error.set(None);
                            }
                        ></textarea>
                    </label>

                    <div class="dialog__field">
                        <span class="dialog__label">"Photo"</span>
                        <div class="segmented">
                            <button
                                type="button"
                                class="segmented__option"
                                class:segmented__option--active=move || photo_mode.get() == PhotoMode::Upload
                                on:click=move |_| switch_mode(PhotoMode::Upload)
                            >
                                "Upload Photo"
                            </button>
                            <button
                                type="button"
                                class="segmented__option"
                                class:segmented__option--active=move || photo_mode.get() == PhotoMode::Url
                                on:click=move |_| switch_mode(PhotoMode::Url)
                            >
                                "Photo URL"
                            </button>
                        </div>
                        {photo_panel}
                        <Show when=move || photo_error.with(Option::is_some)>
                            <p class="dialog__error">{move || photo_error.get().unwrap_or_default()}</p>
                        </Show>
                    </div>

                    <div class="dialog__field">
                        <label class="dialog__label">
                            {move || format!("Camera Direction ({})", direction.get())}
                            <input
                                class="dialog__input"
                                type="number"
                                min="0"
                                max="360"
                                step="1"
                                prop:value=move || direction.get().degrees().to_string()
                                on:input=move |ev| match parse_direction_input(&event_target_value(&ev)) {
                                    Some(degrees) => {
                                        let outcome = draft.try_update(|d| d.set_direction(degrees));
                                        direction_error.set(match outcome {
                                            Some(Err(err)) => Some(err.to_string()),
                                            _ => None,
                                        });
                                    }
                                    None => direction_error.set(Some("direction must be a number".to_owned())),
                                }
                            />
                        </label>
                        <Show when=move || direction_error.with(Option::is_some)>
                            <p class="dialog__error">{move || direction_error.get().unwrap_or_default()}</p>
                        </Show>
                        <DirectionPreview position=position direction=direction/>
                    </div>

                    <div class="dialog__field">
                        <span class="dialog__label">"Tags"</span>
                        <div class="tag-editor">
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="Add tags (press Enter)"
                                prop:value=move || tag_input.get()
                                on:input=move |ev| tag_input.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        add_tag();
                                    }
                                }
                            />
                            <button type="button" class="btn" on:click=move |_| add_tag()>"Add"</button>
                        </div>
                        <div class="tag-editor__chips">
                            <For
                                each=move || tags.get()
                                key=|tag| tag.clone()
                                children=move |tag: String| {
                                    let label = tag.clone();
                                    view! {
                                        <span class="tag-chip tag-chip--removable">
                                            {label}
                                            <button
                                                type="button"
                                                class="tag-chip__remove"
                                                title="Remove tag"
                                                on:click=move |_| {
                                                    draft.update(|d| {
                                                        d.remove_tag(&tag);
                                                    });
                                                }
                                            >
                                                "✕"
                                            </button>
                                        </span>
                                    }
                                }
                            />
                        </div>
                    </div>

                    <Show when=move || form_error.with(Option::is_some)>
                        <p class="dialog__error dialog__error--form">{move || form_error.get().unwrap_or_default()}</p>
                    </Show>

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| close()>"Cancel"</button>
                        <button type="submit" class="btn btn--primary">"Save Location"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Parse the direction field. Blank and non-numeric input yield `None`.
fn parse_direction_input(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
