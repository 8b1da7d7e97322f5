//! Interactive Leaflet map showing saved locations as camera pins.
//!
//! SYSTEM CONTEXT
//! ==============
//! `MapHost` renders an empty container on the server. After hydration it
//! mounts a Leaflet map into that container and keeps one marker per
//! filtered record, keyed by location id, so an open popup survives a
//! selection change. Leaflet objects and the JS closures they call are not
//! `Send`, so they live in a local `StoredValue` and are torn down on
//! cleanup.
//!
//! Clicking empty map opens the entry form at the clicked point. Clicking a
//! pin selects its record; selecting a record anywhere pans the map to it.

use leptos::prelude::*;

use crate::state::spots::SpotsState;

#[component]
pub fn MapHost(spots: SpotsState) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use spots::store::LocationStore;

        let session = StoredValue::new_local(None::<bridge::MapSession>);

        Effect::new(move || {
            let records = spots.filtered.get();
            let selected = spots.store.with(LocationStore::selected);
            let Some(container) = container_ref.get() else {
                return;
            };
            session.update_value(|slot| {
                if slot.is_none() {
                    match bridge::MapSession::mount(&container, spots) {
                        Ok(mounted) => *slot = Some(mounted),
                        Err(err) => {
                            log::error!("map: failed to mount leaflet: {err:?}");
                            return;
                        }
                    }
                }
                if let Some(mounted) = slot.as_mut() {
                    mounted.sync_pins(&records, selected, spots);
                }
            });
        });

        Effect::new(move || {
            let Some(position) = spots.focus.get() else {
                return;
            };
            session.with_value(|slot| {
                if let Some(mounted) = slot {
                    mounted.pan_to(position);
                }
            });
        });

        on_cleanup(move || {
            session.try_update_value(|slot| {
                if let Some(mounted) = slot.take() {
                    mounted.teardown();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = spots;
    }

    view! { <div class="map-host" node_ref=container_ref></div> }
}

#[cfg(feature = "hydrate")]
mod bridge {
    use std::collections::{HashMap, HashSet};

    use leptos::prelude::{GetUntracked, Set};
    use spots::record::{LatLng, LocationId, LocationRecord};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use crate::consts::DEFAULT_ZOOM;
    use crate::state::spots::SpotsState;
    use crate::util::leaflet;
    use crate::util::map_markup::{pin_icon_html, popup_body_html};

    type Handler = Closure<dyn FnMut(JsValue)>;

    /// A mounted Leaflet map plus the markers it currently shows.
    pub struct MapSession {
        map: leaflet::Map,
        pins: HashMap<LocationId, Pin>,
        _on_click: Handler,
        _on_move: Handler,
    }

    struct Pin {
        marker: leaflet::Marker,
        selected: bool,
        _on_select: Handler,
        _on_delete: Handler,
    }

    impl MapSession {
        pub fn mount(container: &web_sys::HtmlDivElement, spots: SpotsState) -> Result<Self, JsValue> {
            let map = leaflet::new_map(container, &leaflet::options(&[]))?;
            map.set_view(&leaflet::lat_lng(spots.map_center.get_untracked()), DEFAULT_ZOOM);
            leaflet::add_osm_tiles(&map);

            let on_click = Handler::new(move |event: JsValue| {
                if let Some(position) = leaflet::event_lat_lng(&event) {
                    spots.open_composer(position);
                }
            });
            map.on("click", on_click.as_ref().unchecked_ref());

            let moved = map.clone();
            let on_move = Handler::new(move |_event: JsValue| {
                if let Some(center) = leaflet::center_of(&moved) {
                    spots.map_center.set(center);
                }
            });
            map.on("moveend", on_move.as_ref().unchecked_ref());

            log::debug!("map: mounted");
            Ok(Self { map, pins: HashMap::new(), _on_click: on_click, _on_move: on_move })
        }

        /// Make the markers match `records`: drop missing ids, add new ones
        /// and swap icons where the selection changed.
        pub fn sync_pins(&mut self, records: &[LocationRecord], selected: Option<LocationId>, spots: SpotsState) {
            let visible: HashSet<LocationId> = records.iter().map(LocationRecord::id).collect();
            self.pins.retain(|id, pin| {
                let keep = visible.contains(id);
                if !keep {
                    pin.marker.remove();
                }
                keep
            });

            for record in records {
                let id = record.id();
                let is_selected = selected == Some(id);
                if let Some(pin) = self.pins.get_mut(&id) {
                    if pin.selected != is_selected {
                        pin.marker.set_icon(&pin_icon(is_selected));
                        pin.selected = is_selected;
                    }
                    continue;
                }
                match Pin::create(&self.map, record, is_selected, spots) {
                    Ok(pin) => {
                        self.pins.insert(id, pin);
                    }
                    Err(err) => log::warn!("map: failed to place pin {id}: {err:?}"),
                }
            }
        }

        pub fn pan_to(&self, position: LatLng) {
            self.map.pan_to(&leaflet::lat_lng(position));
        }

        pub fn teardown(self) {
            for pin in self.pins.values() {
                pin.marker.remove();
            }
            self.map.remove();
            log::debug!("map: removed");
        }
    }

    impl Pin {
        fn create(
            map: &leaflet::Map,
            record: &LocationRecord,
            selected: bool,
            spots: SpotsState,
        ) -> Result<Self, JsValue> {
            let id = record.id();
            let marker = leaflet::marker(
                &leaflet::lat_lng(record.position()),
                &leaflet::options(&[
                    ("icon", pin_icon(selected).into()),
                    ("title", JsValue::from_str(record.title())),
                ]),
            );

            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| JsValue::from_str("no document"))?;
            let popup = document
                .create_element("div")?
                .dyn_into::<web_sys::HtmlElement>()
                .map_err(JsValue::from)?;
            popup.set_class_name("spot-popup");
            popup.set_inner_html(&popup_body_html(record));

            let delete = document.create_element("button")?;
            delete.set_class_name("btn btn--danger spot-popup__delete");
            delete.set_text_content(Some("Delete"));
            let on_delete = Handler::new(move |_event: JsValue| spots.delete(id));
            delete.add_event_listener_with_callback("click", on_delete.as_ref().unchecked_ref())?;
            popup.append_child(&delete)?;
            marker.bind_popup(&popup);

            let on_select = Handler::new(move |_event: JsValue| spots.select(Some(id)));
            marker.on("click", on_select.as_ref().unchecked_ref());
            marker.add_to(map);

            Ok(Self { marker, selected, _on_select: on_select, _on_delete: on_delete })
        }
    }

    fn pin_icon(selected: bool) -> leaflet::DivIcon {
        leaflet::html_icon(&pin_icon_html(selected), "spot-pin-icon")
    }
}
