//! Company entity model and DTOs.

use boothplan_core::error::CoreError;
use boothplan_core::occupancy::Day;
use boothplan_core::sponsorship::Sponsorship;
use boothplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `companies` table.
///
/// `days` and `sponsorship` hold the upper-case wire names; the table's check
/// constraints keep them valid.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: DbId,
    pub draft_id: DbId,
    pub name: String,
    pub days: Vec<String>,
    pub sponsorship: String,
    pub has_queue: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Company {
    pub fn tier(&self) -> Result<Sponsorship, CoreError> {
        Sponsorship::parse(&self.sponsorship).ok_or_else(|| {
            CoreError::Internal(format!(
                "Company {} has unknown sponsorship '{}'",
                self.id, self.sponsorship
            ))
        })
    }

    /// Days the company registered for. Unknown values are skipped.
    pub fn eligible_days(&self) -> Vec<Day> {
        self.days.iter().filter_map(|d| Day::parse(d)).collect()
    }
}

/// Wire names for a list of days, as stored in `companies.days`.
pub fn day_names(days: &[Day]) -> Vec<String> {
    days.iter().map(|d| d.as_str().to_string()).collect()
}

/// DTO for creating a company in a draft.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCompany {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 2))]
    pub days: Vec<Day>,
    pub sponsorship: Sponsorship,
    pub has_queue: Option<bool>,
}

/// DTO for updating a company. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCompany {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 2))]
    pub days: Option<Vec<Day>>,
    pub sponsorship: Option<Sponsorship>,
    pub has_queue: Option<bool>,
}

/// Outcome of importing a company sheet into a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportCounts {
    pub created: u32,
    pub updated: u32,
}
