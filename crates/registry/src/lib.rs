//! Read/assembly core of the hook registry.
//!
//! Raw rows from a [`hookreg_db::HookStore`] flow through the event catalog
//! builder and schema resolver into the hook and template assemblers; the
//! [`HookRegistry`] façade checks the caller and orchestrates them.

pub mod error;
pub mod event_catalog;
pub mod hook;
pub mod registry;
pub mod schema;
pub mod template;

pub use error::{RegistryError, RegistryResult};
pub use registry::HookRegistry;
