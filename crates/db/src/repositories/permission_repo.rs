//! Repository for the `permissions` table.

use sqlx::PgPool;

use crate::models::permission::PermissionRow;

/// Provides read access to the system permission catalog.
pub struct PermissionRepo;

impl PermissionRepo {
    /// Every permission, ordered by grouping, entity name, then id.
    ///
    /// No filtering happens here; excluding non-subscribable actions is the
    /// event catalog builder's job.
    pub async fn list(pool: &PgPool) -> Result<Vec<PermissionRow>, sqlx::Error> {
        sqlx::query_as::<_, PermissionRow>(
            "SELECT \"grouping\", entity_name, action_name FROM permissions \
             ORDER BY \"grouping\", entity_name, id",
        )
        .fetch_all(pool)
        .await
    }
}
