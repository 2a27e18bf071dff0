//! Listings search state.

pub mod controller;
pub mod placeholder;

pub use controller::{SearchController, SearchRequest};
pub use placeholder::PlaceholderRotation;
