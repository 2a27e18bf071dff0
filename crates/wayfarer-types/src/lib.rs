//! Shared domain types for Wayfarer.
//!
//! This crate contains the core domain and wire types used across the
//! Wayfarer client: chat messages, listings, search replies, configuration,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod listing;
pub mod message;
pub mod search;
