//! Integration tests for the PostgreSQL hook store.
//!
//! Exercises the repository SQL against a real database:
//! - Joined base-row query and display-name ordering
//! - Batched sub-row reads keyed by hook id
//! - Template lookup by name and schema ordering
//! - Permission catalog ordering
//!
//! Run with `DATABASE_URL` set and `cargo test -- --ignored`.

use hookreg_db::{HookStore, PgHookStore};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn insert_hook(pool: &PgPool, template_id: i64, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO hooks (template_id, name, is_active) VALUES ($1, $2, true) RETURNING id",
    )
    .bind(template_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn insert_config(pool: &PgPool, hook_id: i64, name: &str, value: &str) {
    sqlx::query(
        "INSERT INTO hook_configuration (hook_id, field_name, field_value) VALUES ($1, $2, $3)",
    )
    .bind(hook_id)
    .bind(name)
    .bind(value)
    .execute(pool)
    .await
    .unwrap();
}

async fn insert_event(pool: &PgPool, hook_id: i64, action: &str, entity: &str) {
    sqlx::query(
        "INSERT INTO hook_registered_events (hook_id, action_name, entity_name) VALUES ($1, $2, $3)",
    )
    .bind(hook_id)
    .bind(action)
    .bind(entity)
    .execute(pool)
    .await
    .unwrap();
}

async fn insert_permission(pool: &PgPool, grouping: &str, code: &str, entity: &str, action: &str) {
    sqlx::query(
        "INSERT INTO permissions (\"grouping\", code, entity_name, action_name) VALUES ($1, $2, $3, $4)",
    )
    .bind(grouping)
    .bind(code)
    .bind(entity)
    .bind(action)
    .execute(pool)
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Test: hooks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_hook_rows_and_sub_rows(pool: PgPool) {
    let b = insert_hook(&pool, 1, "Beta").await;
    let a = insert_hook(&pool, 1, "Alpha").await;
    insert_config(&pool, a, "Payload URL", "https://a").await;
    insert_config(&pool, a, "Content Type", "json").await;
    insert_config(&pool, b, "Payload URL", "https://b").await;
    insert_event(&pool, a, "CREATE", "CLIENT").await;

    let store = PgHookStore::new(pool);

    let hooks = store.list_hooks().await.unwrap();
    let names: Vec<&str> = hooks.iter().map(|h| h.display_name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
    assert!(hooks.iter().all(|h| h.template_name == "Web"));

    let found = store.find_hook(a).await.unwrap().expect("hook should exist");
    assert_eq!(found.display_name, "Alpha");
    assert!(store.find_hook(a + b + 1000).await.unwrap().is_none());

    let config = store.list_config_fields(&[a]).await.unwrap();
    let fields: Vec<&str> = config.iter().map(|c| c.field_name.as_str()).collect();
    assert_eq!(fields, vec!["Content Type", "Payload URL"]);

    let events = store.list_registered_events(&[a, b]).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].hook_id, a);
}

// ---------------------------------------------------------------------------
// Test: templates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_seeded_templates_and_schema(pool: PgPool) {
    let store = PgHookStore::new(pool);

    let all = store.list_templates().await.unwrap();
    let names: Vec<&str> = all.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["SMS Bridge", "Web"]);

    let web = store.list_templates_by_name("Web").await.unwrap();
    assert_eq!(web.len(), 1);
    assert!(store.list_templates_by_name("Nope").await.unwrap().is_empty());

    let schema = store.list_schema_fields(&[web[0].id]).await.unwrap();
    let fields: Vec<&str> = schema.iter().map(|s| s.field_name.as_str()).collect();
    assert_eq!(fields, vec!["Content Type", "Payload URL"]);
    assert!(schema[0].optional);
    assert_eq!(schema[0].placeholder.as_deref(), Some("json / form"));
}

// ---------------------------------------------------------------------------
// Test: permissions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_permissions_ordered_by_grouping_then_entity(pool: PgPool) {
    insert_permission(&pool, "portfolio", "CREATE_LOAN", "LOAN", "CREATE").await;
    insert_permission(&pool, "authorisation", "CREATE_USER", "USER", "CREATE").await;
    insert_permission(&pool, "portfolio", "CREATE_CLIENT", "CLIENT", "CREATE").await;

    let rows = PgHookStore::new(pool).list_permissions().await.unwrap();
    let keys: Vec<(&str, &str)> = rows
        .iter()
        .map(|p| (p.grouping.as_str(), p.entity_name.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("authorisation", "USER"),
            ("portfolio", "CLIENT"),
            ("portfolio", "LOAN"),
        ]
    );
}
