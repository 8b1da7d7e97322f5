//! Shared constants for the map surfaces and photo uploads.

#[cfg(test)]
#[path = "consts_test.rs"]
mod consts_test;

/// Initial map centre (San Francisco), latitude then longitude.
pub const DEFAULT_CENTER: (f64, f64) = (37.8, -122.4);

/// Zoom level of the main map on first render.
pub const DEFAULT_ZOOM: f64 = 14.0;

/// Zoom level of the direction preview inside the entry form.
pub const PREVIEW_ZOOM: f64 = 16.0;

/// OpenStreetMap raster tile template.
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution HTML required by the OpenStreetMap tile policy. Every map
/// that shows `TILE_URL` tiles must display it.
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Square size in pixels of pin and direction marker icons.
pub const MARKER_ICON_SIZE: f64 = 40.0;

/// Largest accepted photo upload (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Leaflet stylesheet loaded by the document shell.
pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

/// Leaflet script loaded by the document shell; exposes the global `L`.
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
