//! Coordinate formatting and external map links.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use spots::record::LatLng;

/// `"lat, lng"` fixed to six decimals, as shown on cards and in the form.
#[must_use]
pub fn format_position(position: LatLng) -> String {
    format!("{:.6}, {:.6}", position.lat, position.lng)
}

/// Unrounded `"lat, lng"` text written to the clipboard.
#[must_use]
pub fn clipboard_text(position: LatLng) -> String {
    format!("{}, {}", position.lat, position.lng)
}

/// Google Maps search link for `position`.
#[must_use]
pub fn google_maps_url(position: LatLng) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={},{}", position.lat, position.lng)
}
