use std::sync::Arc;

use boothplan_core::spatial::BoothIndex;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and everything else sits
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: boothplan_db::DbPool,
    /// Server configuration (token secret for the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Booth layout and its lookup tables, built once at start-up.
    pub booths: Arc<BoothIndex>,
}
