//! Hook template and template schema row models.

use hookreg_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `hook_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HookTemplateRow {
    pub id: DbId,
    pub name: String,
}

/// A declared field from the `hook_schema` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HookSchemaRow {
    pub hook_template_id: DbId,
    pub field_type: String,
    pub field_name: String,
    pub placeholder: Option<String>,
    pub optional: bool,
}
