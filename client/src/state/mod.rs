//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The location store and search query live in `spots`, wrapped in signals
//! so views re-render when they change. The community feed is static data
//! and needs no signals.

pub mod community;
pub mod spots;
