//! Authentication primitives.
//!
//! - [`jwt`] -- bearer token validation (and issuance for tests and operators).

pub mod jwt;
