//! Infrastructure layer for Wayfarer.
//!
//! Contains implementations of the port traits defined in `wayfarer-core`:
//! the SQLite-backed durable local store and the reqwest-backed chat and
//! search backend clients, plus data-directory resolution and configuration
//! loading.

pub mod backend;
pub mod config;
pub mod paths;
pub mod sqlite;
