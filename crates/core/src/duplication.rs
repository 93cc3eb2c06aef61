//! Draft duplication planning.
//!
//! A copied draft gets fresh company rows; assignments are carried over by
//! matching each original company to its copy by name.

use std::collections::HashMap;

use crate::occupancy::{DayScope, Occupant};
use crate::types::DbId;

pub const DEFAULT_DRAFT_NAME: &str = "Untitled Draft";

/// Name given to a duplicated draft.
pub fn duplicate_name(name: &str) -> String {
    format!("{name} (Copy)")
}

/// Map original company ids to the ids of their copies, matched by exact name.
///
/// Originals without a same-named copy are left out.
pub fn remap_company_ids(
    originals: &[(DbId, String)],
    copies: &[(DbId, String)],
) -> HashMap<DbId, DbId> {
    let by_name: HashMap<&str, DbId> = copies
        .iter()
        .map(|(id, name)| (name.as_str(), *id))
        .collect();

    originals
        .iter()
        .filter_map(|(old_id, name)| by_name.get(name.as_str()).map(|new_id| (*old_id, *new_id)))
        .collect()
}

/// An assignment to create in the copied draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedAssignment {
    pub company_id: DbId,
    pub booth_ids: Vec<String>,
    pub day: DayScope,
}

/// Re-target assignments at the copied companies.
///
/// Assignments whose company has no copy are dropped. Booths and day scope
/// are kept verbatim.
pub fn remap_assignments<O: Occupant>(
    assignments: &[O],
    company_map: &HashMap<DbId, DbId>,
) -> Vec<CopiedAssignment> {
    assignments
        .iter()
        .filter_map(|a| {
            company_map.get(&a.company_id()).map(|&company_id| CopiedAssignment {
                company_id,
                booth_ids: a.booth_ids().to_vec(),
                day: a.scope(),
            })
        })
        .collect()
}
