//! Domain types for the hook registry.
//!
//! Everything in this crate is pure: no storage, no I/O. The registry crate
//! assembles these views from database rows; the API crate serializes them.

pub mod conformance;
pub mod error;
pub mod hooks;
pub mod session;
pub mod types;
