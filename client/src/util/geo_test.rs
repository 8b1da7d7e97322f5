use super::*;

#[test]
fn format_position_uses_six_decimals() {
    assert_eq!(format_position(LatLng::new(37.8, -122.4)), "37.800000, -122.400000");
    assert_eq!(format_position(LatLng::new(37.819_929_4, -122.478_255_1)), "37.819929, -122.478255");
}

#[test]
fn clipboard_text_keeps_full_precision() {
    assert_eq!(clipboard_text(LatLng::new(37.8, -122.4)), "37.8, -122.4");
    assert_eq!(clipboard_text(LatLng::new(37.819_929_4, -122.478_255_1)), "37.8199294, -122.4782551");
}

#[test]
fn google_maps_url_embeds_query() {
    assert_eq!(
        google_maps_url(LatLng::new(37.8, -122.4)),
        "https://www.google.com/maps/search/?api=1&query=37.8,-122.4"
    );
}
