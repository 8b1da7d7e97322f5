//! Small non-interactive map showing the draft's heading as an arrow.

use leptos::prelude::*;
use spots::record::{Direction, LatLng};

/// Static map at `position` with an arrow rotated to `direction`.
#[component]
pub fn DirectionPreview(position: LatLng, direction: Signal<Direction>) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let session = StoredValue::new_local(None::<preview::PreviewSession>);

        Effect::new(move || {
            let heading = direction.get();
            let Some(container) = container_ref.get() else {
                return;
            };
            session.update_value(|slot| {
                if slot.is_none() {
                    match preview::PreviewSession::mount(&container, position, heading) {
                        Ok(mounted) => *slot = Some(mounted),
                        Err(err) => log::error!("direction preview: failed to mount leaflet: {err:?}"),
                    }
                    return;
                }
                if let Some(mounted) = slot.as_ref() {
                    mounted.point(heading);
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
        let _ = (position, direction);
    }

    view! { <div class="direction-preview" node_ref=container_ref></div> }
}

#[cfg(feature = "hydrate")]
mod preview {
    use spots::record::{Direction, LatLng};
    use wasm_bindgen::JsValue;

    use crate::consts::PREVIEW_ZOOM;
    use crate::util::leaflet;
    use crate::util::map_markup::direction_arrow_html;

    pub struct PreviewSession {
        map: leaflet::Map,
        arrow: leaflet::Marker,
    }

    impl PreviewSession {
        pub fn mount(
            container: &web_sys::HtmlDivElement,
            position: LatLng,
            heading: Direction,
        ) -> Result<Self, JsValue> {
            let locked = JsValue::FALSE;
            let map = leaflet::new_map(
                container,
                &leaflet::options(&[
                    ("zoomControl", locked.clone()),
                    ("dragging", locked.clone()),
                    ("scrollWheelZoom", locked.clone()),
                    ("doubleClickZoom", locked.clone()),
                    ("boxZoom", locked.clone()),
                    ("keyboard", locked.clone()),
                    ("touchZoom", locked),
                ]),
            )?;
            map.set_view(&leaflet::lat_lng(position), PREVIEW_ZOOM);
            leaflet::add_osm_tiles(&map);

            let arrow = leaflet::marker(
                &leaflet::lat_lng(position),
                &leaflet::options(&[
                    ("icon", arrow_icon(heading).into()),
                    ("interactive", JsValue::FALSE),
                ]),
            );
            arrow.add_to(&map);
            Ok(Self { map, arrow })
        }

        pub fn point(&self, heading: Direction) {
            self.arrow.set_icon(&arrow_icon(heading));
        }

        pub fn teardown(self) {
            self.map.remove();
        }
    }

    fn arrow_icon(heading: Direction) -> leaflet::DivIcon {
        leaflet::html_icon(&direction_arrow_html(heading), "direction-marker-icon")
    }
}
