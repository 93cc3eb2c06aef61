//! Route definitions for the booth layout.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::layout;
use crate::state::AppState;

/// Layout routes mounted at `/layout`. No authentication required.
///
/// ```text
/// GET    /          -> get_layout
/// GET    /locate    -> locate
/// POST   /suggest   -> suggest
/// GET    /group     -> group_around
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(layout::get_layout))
        .route("/locate", get(layout::locate))
        .route("/suggest", post(layout::suggest))
        .route("/group", get(layout::group_around))
}
