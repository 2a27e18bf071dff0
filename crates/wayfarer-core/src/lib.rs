//! Controllers and pure rendering logic for Wayfarer.
//!
//! This crate owns the two page-level controllers (chat session, listings
//! search), the pure display mappings (message renderer, listing card), and
//! the "port" traits the infrastructure layer implements (durable key-value
//! store, backend HTTP clients). It depends only on `wayfarer-types` --
//! never on `wayfarer-infra` or any database/network crate.
//!
//! Controllers are plain synchronous state machines: every transition
//! happens in response to user input, a timer tick, or a completed request
//! that the owning view feeds back in. All I/O is performed by the view as
//! explicit steps between transitions, which keeps the controllers fully
//! testable without a terminal or a backend in scope.

pub mod backend;
pub mod render;
pub mod search;
pub mod session;
pub mod storage;
