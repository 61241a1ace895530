//! Template assembly for the "create hook" form.
//!
//! Templates are resolved with their schema in one batched read; the event
//! catalog is built once per call and shared by every template.

use std::sync::Arc;

use hookreg_core::hooks::{EventCatalog, HookTemplate, NewHookTemplate};
use hookreg_core::types::DbId;
use hookreg_db::HookStore;

use crate::event_catalog::load_catalog;
use crate::schema::resolve_schemas;

/// Build the new-hook view.
///
/// With no name, every template is returned ordered by name. With a name,
/// only exact matches are returned; no match is an empty list, not an
/// error.
pub async fn assemble_template_view(
    store: &dyn HookStore,
    template_name: Option<&str>,
) -> Result<NewHookTemplate, sqlx::Error> {
    let rows = match template_name {
        None => store.list_templates().await?,
        Some(name) => store.list_templates_by_name(name).await?,
    };

    let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
    let mut schemas = resolve_schemas(store, &ids).await?;
    let event_catalog: EventCatalog = Arc::new(load_catalog(store).await?);

    let templates: Vec<HookTemplate> = rows
        .into_iter()
        .map(|row| HookTemplate {
            schema: schemas.remove(&row.id).unwrap_or_default(),
            event_catalog: Arc::clone(&event_catalog),
            id: row.id,
            name: row.name,
        })
        .collect();

    tracing::debug!(
        template_name = template_name.unwrap_or("*"),
        count = templates.len(),
        "Assembled hook templates"
    );

    Ok(NewHookTemplate {
        templates,
        event_catalog,
    })
}

/// The templates of [`assemble_template_view`] without the outer view.
pub async fn assemble_templates(
    store: &dyn HookStore,
    template_name: Option<&str>,
) -> Result<Vec<HookTemplate>, sqlx::Error> {
    Ok(assemble_template_view(store, template_name).await?.templates)
}
