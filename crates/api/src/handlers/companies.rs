//! Handlers for companies registered in a draft, including sheet import.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use boothplan_core::error::CoreError;
use boothplan_core::import::plan_import;
use boothplan_core::sponsorship::{normalize_company_name, validate_company_days};
use boothplan_core::types::DbId;
use boothplan_db::models::company::{CreateCompany, UpdateCompany};
use boothplan_db::repositories::CompanyRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::drafts::load_owned_draft;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /drafts/{id}/import`: sheet rows as cell text.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub rows: Vec<Vec<String>>,
}

/// Summary of an import.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub created: u32,
    pub updated: u32,
    pub errors: Vec<String>,
    /// Companies parsed from the sheet.
    pub total: usize,
}

fn company_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Company",
        id,
    })
}

/// GET /api/v1/drafts/{id}/companies
pub async fn list_companies(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(draft_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    load_owned_draft(&state, draft_id, user.user_id).await?;
    let companies = CompanyRepo::list_for_draft(&state.pool, draft_id).await?;

    Ok(Json(DataResponse { data: companies }))
}

/// POST /api/v1/drafts/{id}/companies
pub async fn create_company(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(draft_id): Path<DbId>,
    Json(mut input): Json<CreateCompany>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    input.name = normalize_company_name(&input.name)?.to_string();
    validate_company_days(&input.days)?;
    load_owned_draft(&state, draft_id, user.user_id).await?;

    let company = CompanyRepo::create(&state.pool, draft_id, &input).await?;

    tracing::info!(
        company_id = company.id,
        draft_id,
        sponsorship = %company.sponsorship,
        "Company created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: company })))
}

/// PUT /api/v1/companies/{id}
///
/// Partial update. The company's current assignment is left untouched.
pub async fn update_company(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
    Json(mut input): Json<UpdateCompany>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    input.name = input
        .name
        .as_deref()
        .map(normalize_company_name)
        .transpose()?
        .map(str::to_string);
    if let Some(days) = &input.days {
        validate_company_days(days)?;
    }

    CompanyRepo::find_for_owner(&state.pool, company_id, user.user_id)
        .await?
        .ok_or_else(|| company_not_found(company_id))?;

    let company = CompanyRepo::update(&state.pool, company_id, &input)
        .await?
        .ok_or_else(|| company_not_found(company_id))?;

    tracing::info!(company_id, user_id = user.user_id, "Company updated");

    Ok(Json(DataResponse { data: company }))
}

/// DELETE /api/v1/companies/{id}
///
/// Also removes the company's booth assignment.
pub async fn delete_company(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    CompanyRepo::find_for_owner(&state.pool, company_id, user.user_id)
        .await?
        .ok_or_else(|| company_not_found(company_id))?;

    if !CompanyRepo::delete(&state.pool, company_id).await? {
        return Err(company_not_found(company_id));
    }

    tracing::info!(company_id, user_id = user.user_id, "Company deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/drafts/{id}/import
///
/// Upserts companies by name from registration sheet rows. Rows that cannot
/// be parsed are reported, not fatal.
pub async fn import_companies(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(draft_id): Path<DbId>,
    Json(input): Json<ImportRequest>,
) -> AppResult<impl IntoResponse> {
    load_owned_draft(&state, draft_id, user.user_id).await?;

    let plan = plan_import(&input.rows);
    if plan.companies.is_empty() && !plan.errors.is_empty() {
        return Err(AppError::BadRequest(format!(
            "No companies could be imported: {}",
            plan.errors.join("; ")
        )));
    }

    let counts = CompanyRepo::import(&state.pool, draft_id, &plan.companies).await?;

    tracing::info!(
        draft_id,
        created = counts.created,
        updated = counts.updated,
        errors = plan.errors.len(),
        "Companies imported",
    );

    Ok(Json(DataResponse {
        data: ImportResponse {
            created: counts.created,
            updated: counts.updated,
            errors: plan.errors,
            total: plan.companies.len(),
        },
    }))
}
