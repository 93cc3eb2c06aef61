//! Day scopes, per-day occupancy, and the booth conflict rule.
//!
//! [`find_conflict`] is the single conflict predicate. The pre-flight endpoint
//! and the write transaction both call it, so a placement the UI shows as free
//! is judged by exactly the same rule on the server.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::booth_id::display_booth_id;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Days
// ---------------------------------------------------------------------------

/// Exhibition day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Day {
    Wednesday,
    Thursday,
}

impl Day {
    pub const ALL: [Day; 2] = [Day::Wednesday, Day::Thursday];

    /// Database / wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Wednesday => "WEDNESDAY",
            Day::Thursday => "THURSDAY",
        }
    }

    /// Human-readable name used in exported sheets.
    pub fn label(self) -> &'static str {
        match self {
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
        }
    }

    /// Parse the wire representation (case-insensitive).
    pub fn parse(value: &str) -> Option<Day> {
        match value.trim().to_ascii_uppercase().as_str() {
            "WEDNESDAY" => Some(Day::Wednesday),
            "THURSDAY" => Some(Day::Thursday),
            _ => None,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The days an assignment applies to.
///
/// On the wire and in the database `Both` is `null`; everywhere else it is an
/// explicit variant so the overlap rule stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayScope {
    Specific(Day),
    #[default]
    Both,
}

impl DayScope {
    /// Whether two scopes share at least one day.
    pub fn overlaps(self, other: DayScope) -> bool {
        match (self, other) {
            (DayScope::Both, _) | (_, DayScope::Both) => true,
            (DayScope::Specific(a), DayScope::Specific(b)) => a == b,
        }
    }

    pub fn includes(self, day: Day) -> bool {
        self.overlaps(DayScope::Specific(day))
    }

    /// Days covered by this scope.
    pub fn days(self) -> Vec<Day> {
        match self {
            DayScope::Specific(day) => vec![day],
            DayScope::Both => Day::ALL.to_vec(),
        }
    }

    pub fn as_option(self) -> Option<Day> {
        match self {
            DayScope::Specific(day) => Some(day),
            DayScope::Both => None,
        }
    }
}

impl From<Option<Day>> for DayScope {
    fn from(day: Option<Day>) -> Self {
        day.map_or(DayScope::Both, DayScope::Specific)
    }
}

impl From<DayScope> for Option<Day> {
    fn from(scope: DayScope) -> Self {
        scope.as_option()
    }
}

impl Serialize for DayScope {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DayScope {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<Day>::deserialize(deserializer).map(DayScope::from)
    }
}

// ---------------------------------------------------------------------------
// Occupants
// ---------------------------------------------------------------------------

/// Anything that holds booths for a day scope: persisted assignments,
/// in-memory drafts, test fixtures.
pub trait Occupant {
    fn assignment_id(&self) -> DbId;
    fn company_id(&self) -> DbId;
    fn scope(&self) -> DayScope;
    fn booth_ids(&self) -> &[String];

    /// Name of the owning company, when the caller loaded it.
    fn company_name(&self) -> Option<&str> {
        None
    }
}

/// First booth found to clash with a requested placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoothConflict {
    pub booth_id: String,
    pub assignment_id: DbId,
    pub company_id: DbId,
    pub company_name: Option<String>,
}

impl BoothConflict {
    /// User-facing message, e.g. `"Booth conflict: G15 is assigned to Acme"`.
    pub fn message(&self) -> String {
        let booth = display_booth_id(&self.booth_id);
        match &self.company_name {
            Some(name) => format!("Booth conflict: {booth} is assigned to {name}"),
            None => format!("Booth conflict: {booth} is already assigned"),
        }
    }
}

/// Booth ids held on `day` by any occupant whose scope includes it.
pub fn occupied_booth_ids<O: Occupant>(occupants: &[O], day: Day) -> HashSet<String> {
    occupants
        .iter()
        .filter(|o| o.scope().includes(day))
        .flat_map(|o| o.booth_ids().iter().cloned())
        .collect()
}

/// The occupant holding `booth_id` on `day`, if any.
pub fn booth_occupant<'a, O: Occupant>(
    occupants: &'a [O],
    booth_id: &str,
    day: Day,
) -> Option<&'a O> {
    occupants
        .iter()
        .find(|o| o.scope().includes(day) && o.booth_ids().iter().any(|b| b == booth_id))
}

/// Check a requested placement against existing occupants.
///
/// Occupants are scanned in order; `exclude` skips one assignment (the one
/// being moved). The first occupant whose scope overlaps `scope` and whose
/// booths intersect `candidate` is reported, along with its first clashing
/// booth.
pub fn find_conflict<O: Occupant>(
    candidate: &[String],
    scope: DayScope,
    existing: &[O],
    exclude: Option<DbId>,
) -> Option<BoothConflict> {
    existing
        .iter()
        .filter(|o| Some(o.assignment_id()) != exclude)
        .filter(|o| o.scope().overlaps(scope))
        .find_map(|o| {
            o.booth_ids()
                .iter()
                .find(|b| candidate.contains(b))
                .map(|booth_id| BoothConflict {
                    booth_id: booth_id.clone(),
                    assignment_id: o.assignment_id(),
                    company_id: o.company_id(),
                    company_name: o.company_name().map(str::to_string),
                })
        })
}

// ---------------------------------------------------------------------------
// In-memory occupant
// ---------------------------------------------------------------------------

/// A plain occupant value, used by callers that only have ids at hand
/// (pre-flight checks, duplication, tests).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub assignment_id: DbId,
    pub company_id: DbId,
    #[serde(default)]
    pub company_name: Option<String>,
    pub booth_ids: Vec<String>,
    #[serde(default)]
    pub day: DayScope,
}

impl Occupant for Placement {
    fn assignment_id(&self) -> DbId {
        self.assignment_id
    }

    fn company_id(&self) -> DbId {
        self.company_id
    }

    fn scope(&self) -> DayScope {
        self.day
    }

    fn booth_ids(&self) -> &[String] {
        &self.booth_ids
    }

    fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }
}
