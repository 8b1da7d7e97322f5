//! Domain core for the ShutterSpot photo-location browser.
//!
//! This crate holds everything about saved locations that does not depend on
//! a browser: the record types, the session-scoped store with its selection,
//! the free-text search filter, and the draft builder that backs the entry
//! form. The `client` crate wraps these types in reactive signals and renders
//! them; nothing here knows about the DOM or the map library.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`record`] | Record, draft and value types (`LocationId`, `LatLng`, `Direction`, `TagSet`, `PhotoSource`) |
//! | [`store`] | [`store::LocationStore`]: ordered records plus the current selection |
//! | [`search`] | [`search::SearchState`]: query string and the derived filter |
//! | [`draft`] | [`draft::DraftBuilder`]: field accumulation and submit validation |
//! | [`error`] | Validation errors raised by the draft builder |

pub mod draft;
pub mod error;
pub mod record;
pub mod search;
pub mod store;
