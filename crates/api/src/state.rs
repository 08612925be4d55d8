use std::sync::Arc;

use deckforge_planner::AssetCatalog;
use deckforge_slides::service::SlidesService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The remote
/// service is held as a trait object so tests can substitute a fake.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Remote slides service client.
    pub slides: Arc<dyn SlidesService>,
    /// Static template asset loader.
    pub assets: Arc<AssetCatalog>,
}
