//! Schema conformance between a template's declared fields and a hook's
//! stored configuration.
//!
//! The read path never rejects a non-conformant hook; these checks let
//! consumers (form renderers, the write path) compare both views.

use serde::Serialize;

use crate::error::CoreError;
use crate::hooks::{ConfigField, Field, SchemaField};

/// A single mismatch between schema and config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ConformanceIssue {
    /// A stored value whose name the template does not declare.
    UndeclaredField { field: Field },
    /// A required slot with no stored value.
    MissingRequired { field: Field },
}

impl std::fmt::Display for ConformanceIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndeclaredField { field } => {
                write!(f, "field '{}' is not declared by the template", field.field_name())
            }
            Self::MissingRequired { field } => {
                write!(f, "required field '{}' has no value", field.field_name())
            }
        }
    }
}

/// Report every undeclared config field, then every missing required field.
///
/// Issues keep the order of their source list. An empty result means the
/// config conforms.
pub fn check_conformance(schema: &[SchemaField], config: &[ConfigField]) -> Vec<ConformanceIssue> {
    let undeclared = config
        .iter()
        .filter(|c| !schema.iter().any(|s| s.field_name == c.field_name))
        .map(|c| ConformanceIssue::UndeclaredField {
            field: Field::Config(c.clone()),
        });

    let missing = schema
        .iter()
        .filter(|s| !s.optional)
        .filter(|s| !config.iter().any(|c| c.field_name == s.field_name))
        .map(|s| ConformanceIssue::MissingRequired {
            field: Field::Schema(s.clone()),
        });

    undeclared.chain(missing).collect()
}

/// Like [`check_conformance`] but fails with a single validation error.
pub fn ensure_conformant(schema: &[SchemaField], config: &[ConfigField]) -> Result<(), CoreError> {
    let issues = check_conformance(schema, config);
    if issues.is_empty() {
        return Ok(());
    }
    let message = issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(CoreError::Validation(message))
}
