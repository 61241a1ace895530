//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod hook_repo;
pub mod hook_template_repo;
pub mod permission_repo;

pub use hook_repo::HookRepo;
pub use hook_template_repo::HookTemplateRepo;
pub use permission_repo::PermissionRepo;
