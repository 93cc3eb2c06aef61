//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Writes guarded by the booth
//! conflict rule open their own transaction.

pub mod assignment_repo;
pub mod company_repo;
pub mod draft_repo;

pub use assignment_repo::AssignmentRepo;
pub use company_repo::CompanyRepo;
pub use draft_repo::DraftRepo;
