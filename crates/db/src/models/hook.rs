//! Hook row models.
//!
//! A hook spans three tables: the base `hooks` row (joined with its
//! template's name), its `hook_registered_events`, and its
//! `hook_configuration` values.

use hookreg_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A `hooks` row joined with `hook_templates.name`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HookRow {
    pub id: DbId,
    pub template_name: String,
    pub display_name: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Sub-rows
// ---------------------------------------------------------------------------

/// One event registration from `hook_registered_events`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HookEventRow {
    pub hook_id: DbId,
    pub action_name: String,
    pub entity_name: String,
}

/// One stored configuration value from `hook_configuration`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HookConfigRow {
    pub hook_id: DbId,
    pub field_name: String,
    pub field_value: String,
}
