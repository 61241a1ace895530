//! Permission catalog row model.

use serde::Serialize;
use sqlx::FromRow;

/// A `(grouping, entity, action)` triple from the `permissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PermissionRow {
    pub grouping: String,
    pub entity_name: String,
    pub action_name: String,
}
