//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive the session's `SpotsState` as a prop and write back
//! through its methods. The two map components bridge to Leaflet and only do
//! real work in the hydrate build.

pub mod add_location_modal;
pub mod direction_preview;
pub mod feed_post;
pub mod location_card;
pub mod map_host;
pub mod navbar;
pub mod sidebar;
