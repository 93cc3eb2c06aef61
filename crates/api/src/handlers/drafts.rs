//! Handlers for drafts and the draft-wide views (export, occupancy,
//! pre-flight conflict check).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use boothplan_core::booth_id::sort_booth_ids;
use boothplan_core::duplication::DEFAULT_DRAFT_NAME;
use boothplan_core::error::CoreError;
use boothplan_core::export::{build_export_rows, ExportEntry};
use boothplan_core::occupancy::{find_conflict, occupied_booth_ids, Day, DayScope, Occupant};
use boothplan_core::types::DbId;
use boothplan_db::models::draft::{CreateDraft, Draft, DraftDetail, UpdateDraft};
use boothplan_db::repositories::{AssignmentRepo, CompanyRepo, DraftRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Optional day filter for exports.
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub day: Option<Day>,
}

/// Query for `GET /drafts/{id}/occupancy`.
#[derive(Debug, Deserialize)]
pub struct OccupancyParams {
    pub day: Day,
    /// Assignment to leave out, typically the one being dragged.
    pub exclude: Option<DbId>,
}

/// Request body for the pre-flight conflict check.
#[derive(Debug, Deserialize)]
pub struct ConflictCheck {
    pub booth_ids: Vec<String>,
    #[serde(default)]
    pub day: DayScope,
    pub exclude_assignment_id: Option<DbId>,
}

/// Load a draft owned by `owner_id`, answering 404 for missing and foreign
/// drafts alike.
pub(crate) async fn load_owned_draft(
    state: &AppState,
    draft_id: DbId,
    owner_id: DbId,
) -> AppResult<Draft> {
    DraftRepo::find_for_owner(&state.pool, draft_id, owner_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Draft",
            id: draft_id,
        }))
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/drafts
///
/// The caller's drafts with company and assignment counts, newest first.
pub async fn list_drafts(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let drafts = DraftRepo::list_for_owner(&state.pool, user.user_id).await?;

    Ok(Json(DataResponse { data: drafts }))
}

/// POST /api/v1/drafts
pub async fn create_draft(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateDraft>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let name = input
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_DRAFT_NAME);
    let draft = DraftRepo::create(&state.pool, user.user_id, name).await?;

    tracing::info!(draft_id = draft.id, user_id = user.user_id, "Draft created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: draft })))
}

/// GET /api/v1/drafts/{id}
///
/// The draft with its companies and assignments.
pub async fn get_draft(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(draft_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let draft = load_owned_draft(&state, draft_id, user.user_id).await?;
    let companies = CompanyRepo::list_for_draft(&state.pool, draft_id).await?;
    let assignments = AssignmentRepo::list_for_draft(&state.pool, draft_id, None).await?;

    Ok(Json(DataResponse {
        data: DraftDetail {
            draft,
            companies,
            assignments,
        },
    }))
}

/// PUT /api/v1/drafts/{id}
pub async fn update_draft(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(draft_id): Path<DbId>,
    Json(input): Json<UpdateDraft>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Draft name must not be blank".into(),
        )));
    }

    let draft = DraftRepo::rename(&state.pool, draft_id, user.user_id, name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Draft",
            id: draft_id,
        }))?;

    tracing::info!(draft_id, user_id = user.user_id, "Draft renamed");

    Ok(Json(DataResponse { data: draft }))
}

/// DELETE /api/v1/drafts/{id}
///
/// Deletes the draft with its companies and assignments.
pub async fn delete_draft(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(draft_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DraftRepo::delete(&state.pool, draft_id, user.user_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Draft",
            id: draft_id,
        }));
    }

    tracing::info!(draft_id, user_id = user.user_id, "Draft deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/drafts/{id}/duplicate
pub async fn duplicate_draft(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(draft_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let original = load_owned_draft(&state, draft_id, user.user_id).await?;
    let copy = DraftRepo::duplicate(&state.pool, &original).await?;

    tracing::info!(
        draft_id,
        copy_id = copy.id,
        user_id = user.user_id,
        "Draft duplicated",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: copy })))
}

// ---------------------------------------------------------------------------
// Draft-wide views
// ---------------------------------------------------------------------------

/// GET /api/v1/drafts/{id}/export?day=
///
/// Assignment sheet rows ordered by first booth.
pub async fn export_draft(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(draft_id): Path<DbId>,
    Query(params): Query<ExportParams>,
) -> AppResult<impl IntoResponse> {
    load_owned_draft(&state, draft_id, user.user_id).await?;

    let assignments = AssignmentRepo::list_with_companies(&state.pool, draft_id).await?;
    let entries: Vec<ExportEntry> = assignments
        .into_iter()
        .map(|a| ExportEntry {
            day: a.scope(),
            company_name: a.company_name,
            booth_ids: a.booth_ids,
        })
        .collect();

    Ok(Json(DataResponse {
        data: build_export_rows(&entries, params.day),
    }))
}

/// GET /api/v1/drafts/{id}/occupancy?day=&exclude=
///
/// Booth ids taken on `day`, in display order.
pub async fn draft_occupancy(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(draft_id): Path<DbId>,
    Query(params): Query<OccupancyParams>,
) -> AppResult<impl IntoResponse> {
    load_owned_draft(&state, draft_id, user.user_id).await?;

    let assignments = AssignmentRepo::list_for_draft(&state.pool, draft_id, params.exclude).await?;
    let mut occupied: Vec<String> = occupied_booth_ids(&assignments, params.day)
        .into_iter()
        .collect();
    sort_booth_ids(&mut occupied);

    Ok(Json(DataResponse { data: occupied }))
}

/// POST /api/v1/drafts/{id}/conflicts
///
/// Pre-flight check for a placement. Returns the first clash or `null`.
/// Writes re-run the same check inside their transaction.
pub async fn check_conflicts(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(draft_id): Path<DbId>,
    Json(input): Json<ConflictCheck>,
) -> AppResult<impl IntoResponse> {
    load_owned_draft(&state, draft_id, user.user_id).await?;

    let existing = AssignmentRepo::list_with_companies(&state.pool, draft_id).await?;
    let conflict = find_conflict(
        &input.booth_ids,
        input.day,
        &existing,
        input.exclude_assignment_id,
    );

    Ok(Json(DataResponse { data: conflict }))
}
