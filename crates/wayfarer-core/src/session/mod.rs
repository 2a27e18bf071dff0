//! Chat session state and persistence.

pub mod controller;
pub mod store;

pub use controller::{ChatRequest, ChatSessionController};
