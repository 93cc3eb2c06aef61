//! Booth assignment entity model and DTOs.

use boothplan_core::error::CoreError;
use boothplan_core::occupancy::{BoothConflict, Day, DayScope, Occupant};
use boothplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `booth_assignments` table. `day` is `NULL` for both days.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BoothAssignment {
    pub id: DbId,
    pub company_id: DbId,
    pub draft_id: DbId,
    pub booth_ids: Vec<String>,
    pub day: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Parse a stored day column into a scope.
fn scope_of(day: Option<&str>) -> DayScope {
    DayScope::from(day.and_then(Day::parse))
}

/// Stored form of a scope.
pub fn day_column(scope: DayScope) -> Option<String> {
    scope.as_option().map(|d| d.as_str().to_string())
}

impl Occupant for BoothAssignment {
    fn assignment_id(&self) -> DbId {
        self.id
    }

    fn company_id(&self) -> DbId {
        self.company_id
    }

    fn scope(&self) -> DayScope {
        scope_of(self.day.as_deref())
    }

    fn booth_ids(&self) -> &[String] {
        &self.booth_ids
    }
}

/// An assignment joined with its company's name, used for conflict messages
/// and exports.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssignmentWithCompany {
    pub id: DbId,
    pub company_id: DbId,
    pub draft_id: DbId,
    pub booth_ids: Vec<String>,
    pub day: Option<String>,
    pub company_name: String,
}

impl Occupant for AssignmentWithCompany {
    fn assignment_id(&self) -> DbId {
        self.id
    }

    fn company_id(&self) -> DbId {
        self.company_id
    }

    fn scope(&self) -> DayScope {
        scope_of(self.day.as_deref())
    }

    fn booth_ids(&self) -> &[String] {
        &self.booth_ids
    }

    fn company_name(&self) -> Option<&str> {
        Some(&self.company_name)
    }
}

/// Deserialize a field that may be present as `null`, keeping `null` distinct
/// from an absent field (absent -> `None` via `#[serde(default)]`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// DTO for placing a company. Replaces the company's existing assignment in
/// the draft, if any.
///
/// `"day": null` places for both days. When `day` is omitted the scope is
/// derived from the company's registration and `active_day`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAssignment {
    pub company_id: DbId,
    pub draft_id: DbId,
    #[validate(length(min = 1, max = 4))]
    pub booth_ids: Vec<String>,
    #[serde(default, deserialize_with = "present")]
    pub day: Option<DayScope>,
    /// Day shown in the editor when the company was dropped.
    pub active_day: Option<Day>,
}

/// DTO for moving an assignment and/or changing its day.
///
/// `"day": null` switches to both days; omitting `day` keeps the current one.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAssignment {
    #[validate(length(min = 1, max = 4))]
    pub booth_ids: Option<Vec<String>>,
    #[serde(default, deserialize_with = "present")]
    pub day: Option<DayScope>,
}

/// Result of a checked write.
#[derive(Debug)]
pub enum PlaceOutcome {
    Placed(BoothAssignment),
    Conflict(BoothConflict),
    /// The merged move failed the caller's validation; nothing was written.
    Rejected(CoreError),
}
