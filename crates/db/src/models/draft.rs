//! Draft entity model and DTOs.

use boothplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::assignment::BoothAssignment;
use super::company::Company;

/// A row from the `drafts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Draft {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A draft with the number of companies and assignments it holds.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DraftSummary {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub company_count: i64,
    pub assignment_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A draft with everything it owns, as loaded by the editor.
#[derive(Debug, Clone, Serialize)]
pub struct DraftDetail {
    #[serde(flatten)]
    pub draft: Draft,
    pub companies: Vec<Company>,
    pub assignments: Vec<BoothAssignment>,
}

/// DTO for creating a draft. A missing or blank name falls back to the default.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateDraft {
    #[validate(length(max = 200))]
    pub name: Option<String>,
}

/// DTO for renaming a draft.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDraft {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}
