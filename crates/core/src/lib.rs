//! Booth planner domain logic.
//!
//! Pure functions and value types only; this crate has no database or HTTP
//! dependencies so the API, repositories, and tests can all share it.

pub mod booth_id;
pub mod duplication;
pub mod error;
pub mod export;
pub mod import;
pub mod layout;
pub mod occupancy;
pub mod placement;
pub mod spatial;
pub mod sponsorship;
pub mod types;
