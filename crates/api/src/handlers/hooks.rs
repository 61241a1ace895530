//! Handlers for the hook registry read surface.
//!
//! Every handler requires an authenticated caller and delegates to the
//! registry façade, which re-checks the caller before reading.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use hookreg_core::types::DbId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// Optional template filter for the new-hook view.
#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    pub template_name: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /hooks
// ---------------------------------------------------------------------------

/// List all hooks ordered by display name.
pub async fn list_hooks(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<impl IntoResponse> {
    let hooks = state.registry.list_hooks(&auth).await?;
    Ok(Json(DataResponse { data: hooks }))
}

// ---------------------------------------------------------------------------
// GET /hooks/{id}
// ---------------------------------------------------------------------------

/// Get a single hook by ID.
pub async fn get_hook(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let hook = state.registry.get_hook(&auth, id).await?;
    Ok(Json(DataResponse { data: hook }))
}

// ---------------------------------------------------------------------------
// GET /hooks/template
// ---------------------------------------------------------------------------

/// Templates and event catalog for rendering a "create hook" form.
pub async fn get_new_hook_template(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<TemplateQuery>,
) -> AppResult<impl IntoResponse> {
    let view = state
        .registry
        .get_new_hook_template(&auth, query.template_name.as_deref())
        .await?;

    tracing::debug!(
        user_id = auth.user_id,
        template_name = query.template_name.as_deref().unwrap_or("*"),
        count = view.templates.len(),
        "Served new hook template"
    );

    Ok(Json(DataResponse { data: view }))
}
