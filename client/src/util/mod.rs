//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and map-library concerns from page and
//! component logic. Pure helpers (`geo`, `map_markup`, upload validation in
//! `photo`) are unit-tested on the host; `leaflet` only exists in the
//! hydrate build.

pub mod clipboard;
pub mod geo;
#[cfg(feature = "hydrate")]
pub mod leaflet;
pub mod map_markup;
pub mod photo;
