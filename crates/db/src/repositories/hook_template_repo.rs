//! Repository for the `hook_templates` and `hook_schema` tables.

use hookreg_core::types::DbId;
use sqlx::PgPool;

use crate::models::hook_template::{HookSchemaRow, HookTemplateRow};

/// Column list for `hook_schema` queries.
const SCHEMA_COLUMNS: &str = "hook_template_id, field_type, field_name, placeholder, optional";

/// Provides read access to hook templates and their declared fields.
pub struct HookTemplateRepo;

impl HookTemplateRepo {
    /// List every template, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<HookTemplateRow>, sqlx::Error> {
        sqlx::query_as::<_, HookTemplateRow>("SELECT id, name FROM hook_templates ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// List templates whose name matches exactly.
    ///
    /// Names are not constrained unique, so this may return several rows.
    pub async fn list_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Vec<HookTemplateRow>, sqlx::Error> {
        sqlx::query_as::<_, HookTemplateRow>(
            "SELECT id, name FROM hook_templates WHERE name = $1 ORDER BY name",
        )
        .bind(name)
        .fetch_all(pool)
        .await
    }

    /// Declared fields for a batch of templates, ordered by field name.
    pub async fn list_schema_for_templates(
        pool: &PgPool,
        template_ids: &[DbId],
    ) -> Result<Vec<HookSchemaRow>, sqlx::Error> {
        let query = format!(
            "SELECT {SCHEMA_COLUMNS} FROM hook_schema \
             WHERE hook_template_id = ANY($1) \
             ORDER BY field_name"
        );
        sqlx::query_as::<_, HookSchemaRow>(&query)
            .bind(template_ids)
            .fetch_all(pool)
            .await
    }
}
