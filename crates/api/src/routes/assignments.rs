//! Route definitions for booth assignments.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::assignments;
use crate::state::AppState;

/// Assignment routes mounted at `/assignments`.
///
/// ```text
/// POST   /      -> create_assignment
/// PUT    /{id}  -> update_assignment
/// DELETE /{id}  -> delete_assignment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(assignments::create_assignment))
        .route(
            "/{id}",
            put(assignments::update_assignment).delete(assignments::delete_assignment),
        )
}
