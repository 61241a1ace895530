//! Read interface the registry assembles hook views from.
//!
//! [`HookStore`] is object safe so the registry can hold an
//! `Arc<dyn HookStore>` and be backed by PostgreSQL in production or by
//! `MemoryHookStore` in tests (behind the `test-util` feature).

#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use hookreg_core::types::DbId;

use crate::models::hook::{HookConfigRow, HookEventRow, HookRow};
use crate::models::hook_template::{HookSchemaRow, HookTemplateRow};
use crate::models::permission::PermissionRow;

/// Row-oriented, read-only access to the hook registry tables.
///
/// Ordering is part of the contract: every implementation returns rows in
/// the order documented on each method.
#[async_trait]
pub trait HookStore: Send + Sync {
    /// All hook base rows, ordered by display name.
    async fn list_hooks(&self) -> Result<Vec<HookRow>, sqlx::Error>;

    /// The base row of one hook, if it exists.
    async fn find_hook(&self, id: DbId) -> Result<Option<HookRow>, sqlx::Error>;

    /// Event registrations of the given hooks, grouped by hook id.
    async fn list_registered_events(
        &self,
        hook_ids: &[DbId],
    ) -> Result<Vec<HookEventRow>, sqlx::Error>;

    /// Config values of the given hooks, ordered by hook id then field name.
    async fn list_config_fields(&self, hook_ids: &[DbId])
        -> Result<Vec<HookConfigRow>, sqlx::Error>;

    /// All templates, ordered by name.
    async fn list_templates(&self) -> Result<Vec<HookTemplateRow>, sqlx::Error>;

    /// Templates whose name matches exactly; possibly none, possibly several.
    async fn list_templates_by_name(&self, name: &str)
        -> Result<Vec<HookTemplateRow>, sqlx::Error>;

    /// Declared fields of the given templates, ordered by field name.
    async fn list_schema_fields(
        &self,
        template_ids: &[DbId],
    ) -> Result<Vec<HookSchemaRow>, sqlx::Error>;

    /// The full permission catalog, ordered by grouping then entity name.
    async fn list_permissions(&self) -> Result<Vec<PermissionRow>, sqlx::Error>;
}
