//! PostgreSQL-backed [`HookStore`].

use async_trait::async_trait;
use hookreg_core::types::DbId;

use crate::models::hook::{HookConfigRow, HookEventRow, HookRow};
use crate::models::hook_template::{HookSchemaRow, HookTemplateRow};
use crate::models::permission::PermissionRow;
use crate::repositories::{HookRepo, HookTemplateRepo, PermissionRepo};
use crate::store::HookStore;
use crate::DbPool;

/// Delegates every read to the repositories over a shared pool.
#[derive(Clone)]
pub struct PgHookStore {
    pool: DbPool,
}

impl PgHookStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HookStore for PgHookStore {
    async fn list_hooks(&self) -> Result<Vec<HookRow>, sqlx::Error> {
        HookRepo::list(&self.pool).await
    }

    async fn find_hook(&self, id: DbId) -> Result<Option<HookRow>, sqlx::Error> {
        HookRepo::find_by_id(&self.pool, id).await
    }

    async fn list_registered_events(
        &self,
        hook_ids: &[DbId],
    ) -> Result<Vec<HookEventRow>, sqlx::Error> {
        HookRepo::list_events_for_hooks(&self.pool, hook_ids).await
    }

    async fn list_config_fields(
        &self,
        hook_ids: &[DbId],
    ) -> Result<Vec<HookConfigRow>, sqlx::Error> {
        HookRepo::list_config_for_hooks(&self.pool, hook_ids).await
    }

    async fn list_templates(&self) -> Result<Vec<HookTemplateRow>, sqlx::Error> {
        HookTemplateRepo::list(&self.pool).await
    }

    async fn list_templates_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<HookTemplateRow>, sqlx::Error> {
        HookTemplateRepo::list_by_name(&self.pool, name).await
    }

    async fn list_schema_fields(
        &self,
        template_ids: &[DbId],
    ) -> Result<Vec<HookSchemaRow>, sqlx::Error> {
        HookTemplateRepo::list_schema_for_templates(&self.pool, template_ids).await
    }

    async fn list_permissions(&self) -> Result<Vec<PermissionRow>, sqlx::Error> {
        PermissionRepo::list(&self.pool).await
    }
}
