//! Route-level page components.

pub mod community;
pub mod map;
