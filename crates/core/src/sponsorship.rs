//! Sponsorship tiers and the placement rules that depend on them.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::occupancy::{Day, DayScope};
use crate::spatial::BoothIndex;

/// Company package level. Each tier occupies a fixed number of contiguous booths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sponsorship {
    Maroon,
    Diamond,
    Gold,
    Silver,
    Basic,
}

impl Sponsorship {
    /// Tiers from highest to lowest.
    pub const ALL: [Sponsorship; 5] = [
        Sponsorship::Maroon,
        Sponsorship::Diamond,
        Sponsorship::Gold,
        Sponsorship::Silver,
        Sponsorship::Basic,
    ];

    pub fn booth_count(self) -> usize {
        match self {
            Sponsorship::Maroon => 4,
            Sponsorship::Diamond => 3,
            Sponsorship::Gold => 2,
            Sponsorship::Silver | Sponsorship::Basic => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sponsorship::Maroon => "MAROON",
            Sponsorship::Diamond => "DIAMOND",
            Sponsorship::Gold => "GOLD",
            Sponsorship::Silver => "SILVER",
            Sponsorship::Basic => "BASIC",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sponsorship::Maroon => "Maroon",
            Sponsorship::Diamond => "Diamond",
            Sponsorship::Gold => "Gold",
            Sponsorship::Silver => "Silver",
            Sponsorship::Basic => "Basic",
        }
    }

    /// Parse a tier name (case-insensitive).
    pub fn parse(value: &str) -> Option<Sponsorship> {
        let upper = value.trim().to_ascii_uppercase();
        Sponsorship::ALL.into_iter().find(|s| s.as_str() == upper)
    }
}

impl fmt::Display for Sponsorship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scope used when a company is dropped onto the map while `active_day` is shown.
///
/// Companies registered for both days are placed for both; everyone else only
/// for the day being edited.
pub fn default_scope(company_days: &[Day], active_day: Day) -> DayScope {
    let both = Day::ALL.iter().all(|d| company_days.contains(d));
    if both {
        DayScope::Both
    } else {
        DayScope::Specific(active_day)
    }
}

/// Scope for a new placement.
///
/// An explicit request wins. Otherwise the company's registration decides,
/// with `active_day` picking the day for one-day companies; without it a
/// one-day company is placed on its registered day.
pub fn placement_scope(
    company_days: &[Day],
    requested: Option<DayScope>,
    active_day: Option<Day>,
) -> DayScope {
    if let Some(scope) = requested {
        return scope;
    }
    match (active_day, company_days.first()) {
        (Some(active), _) => default_scope(company_days, active),
        (None, Some(&first)) => default_scope(company_days, first),
        (None, None) => DayScope::Both,
    }
}

/// Ensure an assignment scope only covers days the company registered for.
pub fn validate_scope(company_days: &[Day], scope: DayScope) -> Result<(), CoreError> {
    match scope.days().into_iter().find(|d| !company_days.contains(d)) {
        None => Ok(()),
        Some(missing) => Err(CoreError::Validation(format!(
            "Company is not registered for {}",
            missing.label()
        ))),
    }
}

/// Longest company name accepted, in characters.
pub const MAX_COMPANY_NAME_LEN: usize = 200;

/// Trim a company name and check it is non-blank and within
/// [`MAX_COMPANY_NAME_LEN`].
pub fn normalize_company_name(name: &str) -> Result<&str, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("Company name must not be blank".into()));
    }
    if name.chars().count() > MAX_COMPANY_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Company name must be at most {MAX_COMPANY_NAME_LEN} characters"
        )));
    }
    Ok(name)
}

/// Ensure a company's eligible days are a non-empty set.
pub fn validate_company_days(days: &[Day]) -> Result<(), CoreError> {
    if days.is_empty() {
        return Err(CoreError::Validation(
            "A company must be registered for at least one day".into(),
        ));
    }
    let unique: HashSet<&Day> = days.iter().collect();
    if unique.len() != days.len() {
        return Err(CoreError::Validation("Duplicate day in company days".into()));
    }
    Ok(())
}

/// Check a requested booth set against the layout and the company's tier.
pub fn validate_booth_selection(
    index: &BoothIndex,
    tier: Sponsorship,
    booth_ids: &[String],
) -> Result<(), CoreError> {
    if booth_ids.is_empty() {
        return Err(CoreError::Validation("At least one booth is required".into()));
    }

    let mut seen = HashSet::with_capacity(booth_ids.len());
    for id in booth_ids {
        if !index.contains(id) {
            return Err(CoreError::Validation(format!("Unknown booth '{id}'")));
        }
        if !seen.insert(id.as_str()) {
            return Err(CoreError::Validation(format!("Booth '{id}' listed twice")));
        }
    }

    let expected = tier.booth_count();
    if booth_ids.len() != expected {
        return Err(CoreError::Validation(format!(
            "{} sponsorship requires {expected} booth(s), got {}",
            tier.label(),
            booth_ids.len()
        )));
    }

    Ok(())
}
