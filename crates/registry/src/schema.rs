//! Template schema resolution.

use std::collections::HashMap;

use hookreg_core::hooks::SchemaField;
use hookreg_core::types::DbId;
use hookreg_db::models::hook_template::HookSchemaRow;
use hookreg_db::HookStore;

fn to_schema_field(row: HookSchemaRow) -> SchemaField {
    SchemaField {
        field_type: row.field_type,
        field_name: row.field_name,
        optional: row.optional,
        placeholder: row.placeholder,
    }
}

/// Declared fields of one template, ordered by field name.
pub async fn resolve_schema(
    store: &dyn HookStore,
    template_id: DbId,
) -> Result<Vec<SchemaField>, sqlx::Error> {
    let mut schemas = resolve_schemas(store, &[template_id]).await?;
    Ok(schemas.remove(&template_id).unwrap_or_default())
}

/// Declared fields of several templates in one read, keyed by template id.
///
/// Templates without declared fields are absent from the map. Each list
/// keeps the store's field-name order.
pub async fn resolve_schemas(
    store: &dyn HookStore,
    template_ids: &[DbId],
) -> Result<HashMap<DbId, Vec<SchemaField>>, sqlx::Error> {
    let mut by_template: HashMap<DbId, Vec<SchemaField>> = HashMap::new();
    if template_ids.is_empty() {
        return Ok(by_template);
    }

    for row in store.list_schema_fields(template_ids).await? {
        by_template
            .entry(row.hook_template_id)
            .or_default()
            .push(to_schema_field(row));
    }
    Ok(by_template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookreg_db::{MemoryHookStore, StoreRead};

    fn store() -> MemoryHookStore {
        MemoryHookStore::new()
            .with_template(1, "Web")
            .with_template(2, "SMS Bridge")
            .with_schema_field(1, "string", "Payload URL", false, None)
            .with_schema_field(1, "string", "Content Type", true, Some("json / form"))
            .with_schema_field(2, "string", "Phone Number", false, None)
    }

    #[tokio::test]
    async fn schema_is_ordered_by_field_name() {
        let schema = resolve_schema(&store(), 1).await.unwrap();

        assert_eq!(
            schema,
            vec![
                SchemaField {
                    field_type: "string".to_string(),
                    field_name: "Content Type".to_string(),
                    optional: true,
                    placeholder: Some("json / form".to_string()),
                },
                SchemaField {
                    field_type: "string".to_string(),
                    field_name: "Payload URL".to_string(),
                    optional: false,
                    placeholder: None,
                },
            ]
        );
    }

    #[tokio::test]
    async fn unknown_template_has_empty_schema() {
        assert!(resolve_schema(&store(), 99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn batch_resolution_issues_one_read() {
        let store = store();
        let schemas = resolve_schemas(&store, &[1, 2]).await.unwrap();

        assert_eq!(schemas[&1].len(), 2);
        assert_eq!(schemas[&2].len(), 1);
        assert_eq!(store.reads(), vec![StoreRead::SchemaFields(vec![1, 2])]);
    }

    #[tokio::test]
    async fn empty_batch_skips_the_read() {
        let store = store();
        assert!(resolve_schemas(&store, &[]).await.unwrap().is_empty());
        assert!(store.reads().is_empty());
    }
}
