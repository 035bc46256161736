//! Shared types for Gigmarket.
//!
//! This crate holds the typed identifiers and small value types that are
//! shared between the web application and the CLI tooling. Keeping them in
//! one place means an `OrderId` can never be confused with a `UserId` at a
//! crate boundary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::email::{Email, EmailError};
pub use types::id::{CustomerId, ExecutorId, OrderId, ServiceId, UserId};
