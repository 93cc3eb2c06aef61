//! Route definitions for individual companies.

use axum::routing::put;
use axum::Router;

use crate::handlers::companies;
use crate::state::AppState;

/// Company routes mounted at `/companies`.
///
/// ```text
/// PUT    /{id}  -> update_company
/// DELETE /{id}  -> delete_company
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(companies::update_company).delete(companies::delete_company),
    )
}
