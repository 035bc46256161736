//! Application services sitting between routes and repositories.

pub mod auth;
pub mod orders;
