//! Minimal `wasm-bindgen` bindings to the Leaflet global `L`.
//!
//! ARCHITECTURE
//! ============
//! Only the calls the map host and direction preview make are bound. Option
//! bags are plain JS objects assembled with `Reflect`; event payloads are
//! read the same way. Leaflet itself is loaded by a `<script>` tag in the
//! document shell, so these functions must not run before hydration.

use js_sys::{Array, Object, Reflect};
use spots::record::LatLng;
use wasm_bindgen::prelude::*;

use crate::consts::{MARKER_ICON_SIZE, TILE_ATTRIBUTION, TILE_URL};

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    #[derive(Clone, Debug)]
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    pub fn new_map(element: &web_sys::HtmlElement, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = panTo)]
    pub fn pan_to(this: &Map, center: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = getCenter)]
    pub fn get_center(this: &Map) -> JsValue;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &js_sys::Function) -> Map;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map) -> Map;

    /// `L.TileLayer`
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

    /// `L.Marker`
    #[derive(Clone, Debug)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(position: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &web_sys::HtmlElement) -> Marker;

    #[wasm_bindgen(method, js_name = setIcon)]
    pub fn set_icon(this: &Marker, icon: &DivIcon) -> Marker;

    #[wasm_bindgen(method)]
    pub fn on(this: &Marker, event: &str, handler: &js_sys::Function) -> Marker;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Marker) -> Marker;

    /// `L.DivIcon`
    pub type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    pub fn div_icon(options: &JsValue) -> DivIcon;
}

/// `[lat, lng]` array accepted wherever Leaflet takes a `LatLngExpression`.
pub fn lat_lng(position: LatLng) -> JsValue {
    Array::of2(&JsValue::from_f64(position.lat), &JsValue::from_f64(position.lng)).into()
}

/// Build a JS options object from key/value pairs.
pub fn options(entries: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in entries {
        if let Err(err) = Reflect::set(&object, &JsValue::from_str(key), value) {
            log::warn!("leaflet option {key} rejected: {err:?}");
        }
    }
    object.into()
}

/// Read `{ lat, lng }` from a Leaflet `LatLng` object.
pub fn read_lat_lng(value: &JsValue) -> Option<LatLng> {
    let lat = Reflect::get(value, &JsValue::from_str("lat")).ok()?.as_f64()?;
    let lng = Reflect::get(value, &JsValue::from_str("lng")).ok()?.as_f64()?;
    Some(LatLng::new(lat, lng))
}

/// Coordinate of a map mouse event (`event.latlng`).
pub fn event_lat_lng(event: &JsValue) -> Option<LatLng> {
    let latlng = Reflect::get(event, &JsValue::from_str("latlng")).ok()?;
    read_lat_lng(&latlng)
}

/// Current centre of `map`.
pub fn center_of(map: &Map) -> Option<LatLng> {
    read_lat_lng(&map.get_center())
}

/// Add the OpenStreetMap tile layer, with its required attribution, to `map`.
pub fn add_osm_tiles(map: &Map) {
    tile_layer(TILE_URL, &options(&[("attribution", JsValue::from_str(TILE_ATTRIBUTION))])).add_to(map);
}

/// A square `L.divIcon` anchored at its centre.
pub fn html_icon(html: &str, class_name: &str) -> DivIcon {
    let size = Array::of2(&JsValue::from_f64(MARKER_ICON_SIZE), &JsValue::from_f64(MARKER_ICON_SIZE));
    let half = MARKER_ICON_SIZE / 2.0;
    let anchor = Array::of2(&JsValue::from_f64(half), &JsValue::from_f64(half));
    div_icon(&options(&[
        ("html", JsValue::from_str(html)),
        ("className", JsValue::from_str(class_name)),
        ("iconSize", size.into()),
        ("iconAnchor", anchor.into()),
    ]))
}
