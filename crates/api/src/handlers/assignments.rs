//! Handlers for booth assignments.
//!
//! Every write that claims booths validates the request against the layout
//! and the company's tier, then hands off to the repository's checked write,
//! which re-runs the conflict rule under a per-draft lock.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use boothplan_core::error::CoreError;
use boothplan_core::sponsorship::{placement_scope, validate_booth_selection, validate_scope};
use boothplan_core::types::DbId;
use boothplan_db::models::assignment::{
    BoothAssignment, CreateAssignment, PlaceOutcome, UpdateAssignment,
};
use boothplan_db::models::company::Company;
use boothplan_db::repositories::{AssignmentRepo, CompanyRepo};
use validator::Validate;

use super::drafts::load_owned_draft;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

fn assignment_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "BoothAssignment",
        id,
    })
}

async fn load_company(state: &AppState, company_id: DbId, draft_id: DbId) -> AppResult<Company> {
    CompanyRepo::find_in_draft(&state.pool, company_id, draft_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id: company_id,
        }))
}

/// Turn a checked-write outcome into the stored row or a 409.
fn placed(outcome: PlaceOutcome) -> AppResult<BoothAssignment> {
    match outcome {
        PlaceOutcome::Placed(assignment) => Ok(assignment),
        PlaceOutcome::Conflict(conflict) => {
            Err(AppError::Core(CoreError::Conflict(conflict.message())))
        }
        PlaceOutcome::Rejected(err) => Err(AppError::Core(err)),
    }
}

/// POST /api/v1/assignments
///
/// Place a company, replacing its current assignment in the draft.
pub async fn create_assignment(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateAssignment>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    load_owned_draft(&state, input.draft_id, user.user_id).await?;
    let company = load_company(&state, input.company_id, input.draft_id).await?;

    let days = company.eligible_days();
    let scope = placement_scope(&days, input.day, input.active_day);
    validate_booth_selection(&state.booths, company.tier()?, &input.booth_ids)?;
    validate_scope(&days, scope)?;

    let outcome = AssignmentRepo::place(
        &state.pool,
        input.draft_id,
        input.company_id,
        &input.booth_ids,
        scope,
    )
    .await?;
    let assignment = placed(outcome)?;

    tracing::info!(
        assignment_id = assignment.id,
        company_id = assignment.company_id,
        draft_id = assignment.draft_id,
        "Booths assigned",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: assignment })))
}

/// PUT /api/v1/assignments/{id}
///
/// Move an assignment and/or change its day. Omitted fields keep their
/// current value, read under the draft lock.
pub async fn update_assignment(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(assignment_id): Path<DbId>,
    Json(input): Json<UpdateAssignment>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let current = AssignmentRepo::find_for_owner(&state.pool, assignment_id, user.user_id)
        .await?
        .ok_or_else(|| assignment_not_found(assignment_id))?;
    let company = load_company(&state, current.company_id, current.draft_id).await?;
    let tier = company.tier()?;
    let days = company.eligible_days();

    let outcome = AssignmentRepo::update_checked(
        &state.pool,
        assignment_id,
        current.draft_id,
        &input,
        |booth_ids, scope| {
            validate_booth_selection(&state.booths, tier, booth_ids)?;
            validate_scope(&days, scope)
        },
    )
    .await?
    .ok_or_else(|| assignment_not_found(assignment_id))?;
    let assignment = placed(outcome)?;

    tracing::info!(assignment_id, user_id = user.user_id, "Assignment moved");

    Ok(Json(DataResponse { data: assignment }))
}

/// DELETE /api/v1/assignments/{id}
///
/// Unassign. No conflict check is needed to free booths.
pub async fn delete_assignment(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(assignment_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    AssignmentRepo::find_for_owner(&state.pool, assignment_id, user.user_id)
        .await?
        .ok_or_else(|| assignment_not_found(assignment_id))?;

    if !AssignmentRepo::delete(&state.pool, assignment_id).await? {
        return Err(assignment_not_found(assignment_id));
    }

    tracing::info!(assignment_id, user_id = user.user_id, "Assignment deleted");

    Ok(StatusCode::NO_CONTENT)
}
