//! Hook assembly.
//!
//! Base rows are fetched first, then registered events and config values
//! for all of them in one batched read each, and joined in memory by hook
//! id. Sub-reads are never issued when there are no base rows.

use std::collections::HashMap;

use hookreg_core::hooks::{ConfigField, Event, Hook};
use hookreg_core::types::DbId;
use hookreg_db::models::hook::HookRow;
use hookreg_db::HookStore;

use crate::error::{RegistryError, RegistryResult};

/// Assemble one hook, failing with [`RegistryError::HookNotFound`] when its
/// base row is absent.
pub async fn assemble_hook(store: &dyn HookStore, hook_id: DbId) -> RegistryResult<Hook> {
    let row = store
        .find_hook(hook_id)
        .await?
        .ok_or(RegistryError::HookNotFound(hook_id))?;

    join_sub_rows(store, vec![row])
        .await?
        .pop()
        .ok_or(RegistryError::HookNotFound(hook_id))
}

/// Assemble every hook, ordered by display name.
pub async fn assemble_all_hooks(store: &dyn HookStore) -> Result<Vec<Hook>, sqlx::Error> {
    let rows = store.list_hooks().await?;
    join_sub_rows(store, rows).await
}

/// Attach events and config to each base row, preserving row order.
///
/// A hook whose sub-rows vanished between reads gets empty collections.
async fn join_sub_rows(
    store: &dyn HookStore,
    rows: Vec<HookRow>,
) -> Result<Vec<Hook>, sqlx::Error> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();

    let mut events: HashMap<DbId, Vec<Event>> = HashMap::new();
    for row in store.list_registered_events(&ids).await? {
        events
            .entry(row.hook_id)
            .or_default()
            .push(Event::new(row.action_name, row.entity_name));
    }

    let mut config: HashMap<DbId, Vec<ConfigField>> = HashMap::new();
    for row in store.list_config_fields(&ids).await? {
        config
            .entry(row.hook_id)
            .or_default()
            .push(ConfigField::new(row.field_name, row.field_value));
    }

    tracing::debug!(hooks = rows.len(), "Assembled hook sub-rows");

    Ok(rows
        .into_iter()
        .map(|row| Hook {
            registered_events: events.remove(&row.id).unwrap_or_default(),
            config: config.remove(&row.id).unwrap_or_default(),
            id: row.id,
            template_name: row.template_name,
            display_name: row.display_name,
            is_active: row.is_active,
            created_at: row.created_at.date_naive(),
            updated_at: row.updated_at.date_naive(),
        })
        .collect())
}
