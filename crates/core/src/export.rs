//! Assignment sheet rows.
//!
//! Produces the three-column sheet handed to venue staff: company name, days
//! registered, and booth list. Writing the rows to a spreadsheet file is left
//! to the caller.

use serde::Serialize;

use crate::booth_id::{format_booth_ids, parse_booth_id, sort_booth_ids};
use crate::occupancy::{Day, DayScope};

/// One assignment to be exported.
#[derive(Debug, Clone)]
pub struct ExportEntry {
    pub company_name: String,
    pub booth_ids: Vec<String>,
    pub day: DayScope,
}

/// One row of the assignment sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub name: String,
    pub days_registered: String,
    pub assignment: String,
}

/// Day column text: `"Wednesday Thursday"` for both days.
pub fn format_days(scope: DayScope) -> String {
    scope
        .days()
        .into_iter()
        .map(Day::label)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sort key of an entry: its first booth in display order.
fn first_booth_key(booth_ids: &[String]) -> Option<(char, u32)> {
    let mut sorted: Vec<&str> = booth_ids.iter().map(String::as_str).collect();
    sort_booth_ids(&mut sorted);
    sorted.first().and_then(|id| parse_booth_id(id))
}

/// Build sheet rows ordered by each assignment's first booth (row letter, then
/// number). With `day` set, only assignments active on that day are kept.
pub fn build_export_rows(entries: &[ExportEntry], day: Option<Day>) -> Vec<ExportRow> {
    let mut keyed: Vec<(Option<(char, u32)>, ExportRow)> = entries
        .iter()
        .filter(|e| day.map_or(true, |d| e.day.includes(d)))
        .map(|e| {
            (
                first_booth_key(&e.booth_ids),
                ExportRow {
                    name: e.company_name.clone(),
                    days_registered: format_days(e.day),
                    assignment: format_booth_ids(e.booth_ids.as_slice()),
                },
            )
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    keyed.into_iter().map(|(_, row)| row).collect()
}
