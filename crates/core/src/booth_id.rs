//! Booth identifier helpers.
//!
//! Booths are identified internally as `"<Row>-<Number>"` (e.g. `"G-14"`) and
//! shown to people without the hyphen (`"G14"`). Display ordering is by row
//! letter, then by numeric booth number; exported sheets depend on it.

use std::cmp::Ordering;

/// Build the internal identifier for a booth.
pub fn booth_id(row: char, number: u8) -> String {
    format!("{row}-{number}")
}

/// Split an internal identifier into its row letter and booth number.
///
/// Returns `None` for anything not shaped like `"<letter>-<number>"`.
pub fn parse_booth_id(id: &str) -> Option<(char, u32)> {
    let (row, number) = id.split_once('-')?;
    let mut chars = row.chars();
    let letter = chars.next()?;
    if chars.next().is_some() || !letter.is_ascii_uppercase() {
        return None;
    }
    let number = number.parse().ok()?;
    Some((letter, number))
}

/// Display form of a booth identifier: the hyphen is stripped.
pub fn display_booth_id(id: &str) -> String {
    id.replacen('-', "", 1)
}

/// Order two booth identifiers by row letter, then booth number.
///
/// Identifiers that do not parse sort after well-formed ones, by raw text.
pub fn compare_booth_ids(a: &str, b: &str) -> Ordering {
    match (parse_booth_id(a), parse_booth_id(b)) {
        (Some((row_a, num_a)), Some((row_b, num_b))) => {
            row_a.cmp(&row_b).then(num_a.cmp(&num_b))
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Sort booth identifiers into display order.
pub fn sort_booth_ids<S: AsRef<str>>(ids: &mut [S]) {
    ids.sort_by(|a, b| compare_booth_ids(a.as_ref(), b.as_ref()));
}

/// Sorted, hyphen-stripped, comma-separated booth list, e.g. `"A1, A2, G14"`.
pub fn format_booth_ids<S: AsRef<str>>(ids: &[S]) -> String {
    let mut sorted: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
    sort_booth_ids(&mut sorted);
    sorted
        .into_iter()
        .map(display_booth_id)
        .collect::<Vec<_>>()
        .join(", ")
}
