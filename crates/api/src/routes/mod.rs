pub mod assignments;
pub mod companies;
pub mod drafts;
pub mod health;
pub mod layout;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /layout                                  booths + canvas size (public)
/// /layout/locate                           row/segment under a point (public)
/// /layout/suggest                          best free run (public)
/// /layout/group                            run centred on a booth (public)
///
/// /drafts                                  list, create
/// /drafts/{id}                             get, rename, delete
/// /drafts/{id}/duplicate                   copy with companies + assignments
/// /drafts/{id}/companies                   list, create
/// /drafts/{id}/import                      import registration rows
/// /drafts/{id}/export                      assignment sheet rows
/// /drafts/{id}/occupancy                   booths taken on a day
/// /drafts/{id}/conflicts                   pre-flight conflict check
///
/// /companies/{id}                          update, delete
///
/// /assignments                             create or replace (checked)
/// /assignments/{id}                        move / change day (checked), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/layout", layout::router())
        .nest("/drafts", drafts::router())
        .nest("/companies", companies::router())
        .nest("/assignments", assignments::router())
}
