//! Domain models for the marketplace.
//!
//! These are fixed-field typed records; handlers and services never work
//! with loosely typed rows.

pub mod customer;
pub mod executor;
pub mod order;
pub mod service;
pub mod session;
pub mod user;

pub use customer::{Customer, CustomerSummary};
pub use executor::Executor;
pub use order::{Order, OrderDraft, OrderSummary};
pub use service::Service;
pub use session::{CurrentUser, session_keys};
pub use user::User;
