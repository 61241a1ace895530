//! The registry façade used by external callers.
//!
//! Every operation checks the caller once, before any read, then delegates
//! to the assemblers.

use std::sync::Arc;

use hookreg_core::hooks::{Hook, NewHookTemplate};
use hookreg_core::session::{CallerContext, Session};
use hookreg_core::types::DbId;
use hookreg_db::HookStore;

use crate::error::RegistryResult;
use crate::hook::{assemble_all_hooks, assemble_hook};
use crate::template::assemble_template_view;

/// Read-only access to hooks and hook templates.
///
/// Holds no state besides the store handle; cheap to clone and safe to
/// share across concurrent requests.
#[derive(Clone)]
pub struct HookRegistry {
    store: Arc<dyn HookStore>,
}

impl HookRegistry {
    pub fn new(store: impl HookStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Build a registry over a store the caller keeps a handle to.
    pub fn from_shared(store: Arc<dyn HookStore>) -> Self {
        Self { store }
    }

    fn authenticate(caller: &dyn CallerContext) -> RegistryResult<Session> {
        let session = caller.current_caller().map_err(|err| {
            tracing::debug!(error = %err, "Rejected unauthenticated registry call");
            err
        })?;
        Ok(session)
    }

    /// All hooks, ordered by display name.
    pub async fn list_hooks(&self, caller: &dyn CallerContext) -> RegistryResult<Vec<Hook>> {
        let session = Self::authenticate(caller)?;
        let hooks = assemble_all_hooks(self.store.as_ref()).await?;

        tracing::debug!(user_id = session.user_id, count = hooks.len(), "Listed hooks");
        Ok(hooks)
    }

    /// One hook by id, or [`RegistryError::HookNotFound`](crate::RegistryError::HookNotFound).
    pub async fn get_hook(
        &self,
        caller: &dyn CallerContext,
        hook_id: DbId,
    ) -> RegistryResult<Hook> {
        let session = Self::authenticate(caller)?;
        let hook = assemble_hook(self.store.as_ref(), hook_id).await?;

        tracing::debug!(user_id = session.user_id, hook_id, "Fetched hook");
        Ok(hook)
    }

    /// Templates for the "create hook" form, each with the shared catalog.
    ///
    /// An unmatched `template_name` yields an empty template list.
    pub async fn get_new_hook_template(
        &self,
        caller: &dyn CallerContext,
        template_name: Option<&str>,
    ) -> RegistryResult<NewHookTemplate> {
        let session = Self::authenticate(caller)?;
        let view = assemble_template_view(self.store.as_ref(), template_name).await?;

        tracing::debug!(
            user_id = session.user_id,
            templates = view.templates.len(),
            groupings = view.event_catalog.len(),
            "Fetched new hook template"
        );
        Ok(view)
    }
}
