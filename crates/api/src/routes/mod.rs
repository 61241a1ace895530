pub mod health;
pub mod hooks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /hooks                                           list
/// /hooks/template                                  new-hook view (?template_name)
/// /hooks/{id}                                      get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/hooks", hooks::router())
}
