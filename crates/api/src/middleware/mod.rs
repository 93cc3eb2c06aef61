//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the owner identified by a JWT Bearer token.
//! - [`auth::RequireAuth`] -- marks a handler as requiring authentication.

pub mod auth;
