//! Database row types and request DTOs.

pub mod assignment;
pub mod company;
pub mod draft;
