use std::sync::Arc;

use campusease_core::room::RoomCatalog;
use campusease_core::tips::TipSource;

use crate::config::ServerConfig;
use crate::sessions::SessionRegistry;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Static room catalog.
    pub catalog: Arc<RoomCatalog>,
    /// Live client sessions.
    pub sessions: Arc<SessionRegistry>,
    /// Study-tip provider (HTTP-backed or unconfigured).
    pub tips: Arc<dyn TipSource>,
}
