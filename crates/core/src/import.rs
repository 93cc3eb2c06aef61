//! Company sheet import: parsing registration rows into companies.
//!
//! Sheets are positional: column A is the company name, column B the
//! registration text, e.g.
//!
//! ```text
//! Basic One-Day: Wednesday, January 28th [$1000.00]
//! Gold Two-Day [$5500.00]
//! ```
//!
//! A leading header row is detected and skipped. Reading the spreadsheet file
//! itself happens outside this module; callers pass rows of cell text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::occupancy::Day;
use crate::sponsorship::{Sponsorship, MAX_COMPANY_NAME_LEN};

static TIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\w+)\s+(One-Day|Two-Day)").expect("valid tier regex")
});

/// A company parsed from one sheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedCompany {
    pub name: String,
    pub sponsorship: Sponsorship,
    pub days: Vec<Day>,
}

/// Parsed sheet: the companies to upsert and per-row errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportPlan {
    pub companies: Vec<ImportedCompany>,
    pub errors: Vec<String>,
}

/// Parse a registration cell into a tier and the days it covers.
///
/// Two-Day registrations cover both days. One-Day registrations cover the
/// weekday named in the text, or both days when none is named.
pub fn parse_sponsorship_column(value: &str) -> Option<(Sponsorship, Vec<Day>)> {
    let value = value.trim();
    let captures = TIER_RE.captures(value)?;

    let sponsorship = Sponsorship::parse(&captures[1])?;
    if captures[2].eq_ignore_ascii_case("two-day") {
        return Some((sponsorship, Day::ALL.to_vec()));
    }

    let lower = value.to_ascii_lowercase();
    let days = if lower.contains("wednesday") {
        vec![Day::Wednesday]
    } else if lower.contains("thursday") {
        vec![Day::Thursday]
    } else {
        Day::ALL.to_vec()
    };
    Some((sponsorship, days))
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map_or("", |s| s.trim())
}

/// Turn sheet rows into an import plan.
///
/// Error messages use 1-based sheet row numbers.
pub fn plan_import(rows: &[Vec<String>]) -> ImportPlan {
    let mut plan = ImportPlan::default();

    let start = match rows.first() {
        Some(first) if parse_sponsorship_column(cell(first, 1)).is_none() => 1,
        _ => 0,
    };

    for (i, row) in rows.iter().enumerate().skip(start) {
        let row_num = i + 1;

        let name = cell(row, 0);
        if name.is_empty() {
            plan.errors.push(format!("Row {row_num}: missing company name"));
            continue;
        }
        if name.chars().count() > MAX_COMPANY_NAME_LEN {
            plan.errors.push(format!(
                "Row {row_num}: company name is longer than {MAX_COMPANY_NAME_LEN} characters"
            ));
            continue;
        }

        let raw = cell(row, 1);
        match parse_sponsorship_column(raw) {
            Some((sponsorship, days)) => plan.companies.push(ImportedCompany {
                name: name.to_string(),
                sponsorship,
                days,
            }),
            None => plan
                .errors
                .push(format!("Row {row_num}: could not parse sponsorship \"{raw}\"")),
        }
    }

    plan
}
