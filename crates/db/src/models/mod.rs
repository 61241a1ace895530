//! Row structs for the hook registry tables.
//!
//! Each struct is a `FromRow` projection of one query shape; joined columns
//! are aliased in the repository SQL to match the field names here.

pub mod hook;
pub mod hook_template;
pub mod permission;
