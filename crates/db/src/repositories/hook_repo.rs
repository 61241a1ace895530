//! Repository for the `hooks`, `hook_registered_events`, and
//! `hook_configuration` tables.

use hookreg_core::types::DbId;
use sqlx::PgPool;

use crate::models::hook::{HookConfigRow, HookEventRow, HookRow};

/// Column list for hook base-row queries (requires the `h`/`t` aliases).
const COLUMNS: &str = "h.id, t.name AS template_name, h.name AS display_name, \
    h.is_active, h.created_at, h.updated_at";

/// Join producing the `h`/`t` aliases used by [`COLUMNS`].
const FROM_JOIN: &str = "FROM hooks h INNER JOIN hook_templates t ON h.template_id = t.id";

/// Provides read access to hooks and their sub-rows.
pub struct HookRepo;

impl HookRepo {
    /// List every hook, ordered by display name.
    pub async fn list(pool: &PgPool) -> Result<Vec<HookRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM_JOIN} ORDER BY h.name");
        sqlx::query_as::<_, HookRow>(&query).fetch_all(pool).await
    }

    /// Find a hook by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HookRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM_JOIN} WHERE h.id = $1");
        sqlx::query_as::<_, HookRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Registered events for a batch of hooks, in registration order per hook.
    pub async fn list_events_for_hooks(
        pool: &PgPool,
        hook_ids: &[DbId],
    ) -> Result<Vec<HookEventRow>, sqlx::Error> {
        sqlx::query_as::<_, HookEventRow>(
            "SELECT hook_id, action_name, entity_name FROM hook_registered_events \
             WHERE hook_id = ANY($1) \
             ORDER BY hook_id, id",
        )
        .bind(hook_ids)
        .fetch_all(pool)
        .await
    }

    /// Configuration values for a batch of hooks, ordered by field name per hook.
    pub async fn list_config_for_hooks(
        pool: &PgPool,
        hook_ids: &[DbId],
    ) -> Result<Vec<HookConfigRow>, sqlx::Error> {
        sqlx::query_as::<_, HookConfigRow>(
            "SELECT hook_id, field_name, field_value FROM hook_configuration \
             WHERE hook_id = ANY($1) \
             ORDER BY hook_id, field_name",
        )
        .bind(hook_ids)
        .fetch_all(pool)
        .await
    }
}
