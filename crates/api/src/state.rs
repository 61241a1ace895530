use std::sync::Arc;

use hookreg_registry::HookRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the registry holds its store behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Read façade over the hook store.
    pub registry: HookRegistry,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
}
