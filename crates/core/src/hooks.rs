//! Hook registry view types.
//!
//! These are read-only snapshots assembled fresh for every read. A hook's
//! shape is not fixed: its template declares the configuration slots
//! ([`SchemaField`]) and the hook carries the stored values
//! ([`ConfigField`]). The event catalog is system-wide and shared between
//! all templates of a single response.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::conformance::{check_conformance, ConformanceIssue};
use crate::types::{Date, DbId};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Action-name fragments that never qualify as hook trigger events.
///
/// Maker-checker approvals and read permissions are matched as
/// case-sensitive substrings, so `READ_PERMISSIONS` and `CHECKER_MAKE` are
/// both excluded.
pub const EXCLUDED_ACTION_FRAGMENTS: [&str; 2] = ["CHECKER", "READ"];

/// Whether a permission action can be subscribed to by a hook.
pub fn is_subscribable_action(action_name: &str) -> bool {
    !EXCLUDED_ACTION_FRAGMENTS
        .iter()
        .any(|fragment| action_name.contains(fragment))
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A system occurrence a hook can subscribe to, e.g. `CREATE` on `CLIENT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub action_name: String,
    pub entity_name: String,
}

impl Event {
    pub fn new(action_name: impl Into<String>, entity_name: impl Into<String>) -> Self {
        Self {
            action_name: action_name.into(),
            entity_name: entity_name.into(),
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.action_name, self.entity_name)
    }
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// A named bucket of related events (one functional area of the catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    pub name: String,
    pub events: Vec<Event>,
}

impl Grouping {
    pub fn contains(&self, event: &Event) -> bool {
        self.events.contains(event)
    }
}

/// The full catalog of subscribable events, shared by reference.
pub type EventCatalog = Arc<Vec<Grouping>>;

/// Whether any grouping of the catalog offers `event`.
pub fn catalog_contains(catalog: &[Grouping], event: &Event) -> bool {
    catalog.iter().any(|g| g.contains(event))
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// A template's declaration of one configuration slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Opaque type tag interpreted by the client (e.g. `"string"`).
    pub field_type: String,
    pub field_name: String,
    pub optional: bool,
    pub placeholder: Option<String>,
}

/// A hook's stored value for one configuration slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigField {
    pub field_name: String,
    pub field_value: String,
}

impl ConfigField {
    pub fn new(field_name: impl Into<String>, field_value: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            field_value: field_value.into(),
        }
    }
}

/// Either side of the declared-vs-actual field pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Field {
    Schema(SchemaField),
    Config(ConfigField),
}

impl Field {
    /// The slot name shared by both variants.
    pub fn field_name(&self) -> &str {
        match self {
            Self::Schema(f) => &f.field_name,
            Self::Config(f) => &f.field_name,
        }
    }
}

impl From<SchemaField> for Field {
    fn from(field: SchemaField) -> Self {
        Self::Schema(field)
    }
}

impl From<ConfigField> for Field {
    fn from(field: ConfigField) -> Self {
        Self::Config(field)
    }
}

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// A reusable declaration of the configuration a class of hooks requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookTemplate {
    pub id: DbId,
    pub name: String,
    /// Ordered by field name ascending.
    pub schema: Vec<SchemaField>,
    pub event_catalog: EventCatalog,
}

/// The "create hook" form view: candidate templates plus the event catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHookTemplate {
    pub templates: Vec<HookTemplate>,
    pub event_catalog: EventCatalog,
}

// ---------------------------------------------------------------------------
// Hook
// ---------------------------------------------------------------------------

/// A configured webhook instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    pub id: DbId,
    pub template_name: String,
    pub display_name: String,
    pub is_active: bool,
    pub created_at: Date,
    pub updated_at: Date,
    pub registered_events: Vec<Event>,
    /// Ordered by field name ascending.
    pub config: Vec<ConfigField>,
}

impl Hook {
    /// Compare this hook's stored config against `template`'s schema.
    pub fn conformance(&self, template: &HookTemplate) -> Vec<ConformanceIssue> {
        check_conformance(&template.schema, &self.config)
    }

    /// Registered events that the catalog no longer offers.
    pub fn unknown_events<'a>(&'a self, catalog: &[Grouping]) -> Vec<&'a Event> {
        self.registered_events
            .iter()
            .filter(|e| !catalog_contains(catalog, e))
            .collect()
    }
}
