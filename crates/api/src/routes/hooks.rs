//! Route definitions for the hook registry.
//!
//! ```text
//! GET    /                 list_hooks
//! GET    /template         get_new_hook_template (?template_name)
//! GET    /{id}             get_hook
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::hooks;
use crate::state::AppState;

/// Hook routes -- mounted at `/hooks`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hooks::list_hooks))
        .route("/template", get(hooks::get_new_hook_template))
        .route("/{id}", get(hooks::get_hook))
}
