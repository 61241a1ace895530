//! In-process [`HookStore`] seeded from row vectors.
//!
//! Returns rows in the same order the PostgreSQL queries do and records
//! every read it serves, so callers can assert which queries ran.

use std::sync::Mutex;

use async_trait::async_trait;
use hookreg_core::types::{DbId, Timestamp};

use crate::models::hook::{HookConfigRow, HookEventRow, HookRow};
use crate::models::hook_template::{HookSchemaRow, HookTemplateRow};
use crate::models::permission::PermissionRow;
use crate::store::HookStore;

/// One read served by a [`MemoryHookStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreRead {
    ListHooks,
    FindHook(DbId),
    RegisteredEvents(Vec<DbId>),
    ConfigFields(Vec<DbId>),
    ListTemplates,
    TemplatesByName(String),
    SchemaFields(Vec<DbId>),
    Permissions,
}

#[derive(Debug, Default)]
pub struct MemoryHookStore {
    hooks: Vec<HookRow>,
    events: Vec<HookEventRow>,
    config: Vec<HookConfigRow>,
    templates: Vec<HookTemplateRow>,
    schema: Vec<HookSchemaRow>,
    permissions: Vec<PermissionRow>,
    failing: bool,
    reads: Mutex<Vec<StoreRead>>,
}

impl MemoryHookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template row.
    pub fn with_template(mut self, id: DbId, name: &str) -> Self {
        self.templates.push(HookTemplateRow {
            id,
            name: name.to_string(),
        });
        self
    }

    /// Declare a field on a template.
    pub fn with_schema_field(
        mut self,
        template_id: DbId,
        field_type: &str,
        field_name: &str,
        optional: bool,
        placeholder: Option<&str>,
    ) -> Self {
        self.schema.push(HookSchemaRow {
            hook_template_id: template_id,
            field_type: field_type.to_string(),
            field_name: field_name.to_string(),
            placeholder: placeholder.map(str::to_string),
            optional,
        });
        self
    }

    /// Add a hook base row. The template name is stored denormalized, as
    /// the joined query returns it.
    pub fn with_hook(
        mut self,
        id: DbId,
        template_name: &str,
        display_name: &str,
        is_active: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        self.hooks.push(HookRow {
            id,
            template_name: template_name.to_string(),
            display_name: display_name.to_string(),
            is_active,
            created_at,
            updated_at,
        });
        self
    }

    /// Register a hook for an event.
    pub fn with_event(mut self, hook_id: DbId, action_name: &str, entity_name: &str) -> Self {
        self.events.push(HookEventRow {
            hook_id,
            action_name: action_name.to_string(),
            entity_name: entity_name.to_string(),
        });
        self
    }

    /// Store a config value for a hook.
    pub fn with_config(mut self, hook_id: DbId, field_name: &str, field_value: &str) -> Self {
        self.config.push(HookConfigRow {
            hook_id,
            field_name: field_name.to_string(),
            field_value: field_value.to_string(),
        });
        self
    }

    /// Add a permission catalog entry.
    pub fn with_permission(mut self, grouping: &str, entity_name: &str, action_name: &str) -> Self {
        self.permissions.push(PermissionRow {
            grouping: grouping.to_string(),
            entity_name: entity_name.to_string(),
            action_name: action_name.to_string(),
        });
        self
    }

    /// Make every subsequent read fail with [`sqlx::Error::PoolClosed`].
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Reads served so far, oldest first.
    pub fn reads(&self) -> Vec<StoreRead> {
        self.reads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, read: StoreRead) -> Result<(), sqlx::Error> {
        tracing::trace!(?read, "Memory store read");
        self.reads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(read);
        if self.failing {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(())
    }
}

#[async_trait]
impl HookStore for MemoryHookStore {
    async fn list_hooks(&self) -> Result<Vec<HookRow>, sqlx::Error> {
        self.record(StoreRead::ListHooks)?;
        let mut rows = self.hooks.clone();
        rows.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        Ok(rows)
    }

    async fn find_hook(&self, id: DbId) -> Result<Option<HookRow>, sqlx::Error> {
        self.record(StoreRead::FindHook(id))?;
        Ok(self.hooks.iter().find(|h| h.id == id).cloned())
    }

    async fn list_registered_events(
        &self,
        hook_ids: &[DbId],
    ) -> Result<Vec<HookEventRow>, sqlx::Error> {
        self.record(StoreRead::RegisteredEvents(hook_ids.to_vec()))?;
        let mut rows: Vec<HookEventRow> = self
            .events
            .iter()
            .filter(|e| hook_ids.contains(&e.hook_id))
            .cloned()
            .collect();
        rows.sort_by_key(|e| e.hook_id);
        Ok(rows)
    }

    async fn list_config_fields(
        &self,
        hook_ids: &[DbId],
    ) -> Result<Vec<HookConfigRow>, sqlx::Error> {
        self.record(StoreRead::ConfigFields(hook_ids.to_vec()))?;
        let mut rows: Vec<HookConfigRow> = self
            .config
            .iter()
            .filter(|c| hook_ids.contains(&c.hook_id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            a.hook_id
                .cmp(&b.hook_id)
                .then_with(|| a.field_name.cmp(&b.field_name))
        });
        Ok(rows)
    }

    async fn list_templates(&self) -> Result<Vec<HookTemplateRow>, sqlx::Error> {
        self.record(StoreRead::ListTemplates)?;
        let mut rows = self.templates.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn list_templates_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<HookTemplateRow>, sqlx::Error> {
        self.record(StoreRead::TemplatesByName(name.to_string()))?;
        Ok(self
            .templates
            .iter()
            .filter(|t| t.name == name)
            .cloned()
            .collect())
    }

    async fn list_schema_fields(
        &self,
        template_ids: &[DbId],
    ) -> Result<Vec<HookSchemaRow>, sqlx::Error> {
        self.record(StoreRead::SchemaFields(template_ids.to_vec()))?;
        let mut rows: Vec<HookSchemaRow> = self
            .schema
            .iter()
            .filter(|s| template_ids.contains(&s.hook_template_id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.field_name.cmp(&b.field_name));
        Ok(rows)
    }

    async fn list_permissions(&self) -> Result<Vec<PermissionRow>, sqlx::Error> {
        self.record(StoreRead::Permissions)?;
        let mut rows = self.permissions.clone();
        rows.sort_by(|a, b| {
            a.grouping
                .cmp(&b.grouping)
                .then_with(|| a.entity_name.cmp(&b.entity_name))
        });
        Ok(rows)
    }
}
