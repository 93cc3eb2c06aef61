//! Route definitions for drafts and their nested resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{companies, drafts};
use crate::state::AppState;

/// Draft routes mounted at `/drafts`.
///
/// ```text
/// GET    /                    -> list_drafts
/// POST   /                    -> create_draft
/// GET    /{id}                -> get_draft
/// PUT    /{id}                -> update_draft
/// DELETE /{id}                -> delete_draft
/// POST   /{id}/duplicate      -> duplicate_draft
/// GET    /{id}/companies      -> list_companies
/// POST   /{id}/companies      -> create_company
/// POST   /{id}/import         -> import_companies
/// GET    /{id}/export         -> export_draft
/// GET    /{id}/occupancy      -> draft_occupancy
/// POST   /{id}/conflicts      -> check_conflicts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(drafts::list_drafts).post(drafts::create_draft))
        .route(
            "/{id}",
            get(drafts::get_draft)
                .put(drafts::update_draft)
                .delete(drafts::delete_draft),
        )
        .route("/{id}/duplicate", post(drafts::duplicate_draft))
        .route(
            "/{id}/companies",
            get(companies::list_companies).post(companies::create_company),
        )
        .route("/{id}/import", post(companies::import_companies))
        .route("/{id}/export", get(drafts::export_draft))
        .route("/{id}/occupancy", get(drafts::draft_occupancy))
        .route("/{id}/conflicts", post(drafts::check_conflicts))
}
