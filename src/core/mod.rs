//! Core business logic - framework-agnostic employee operations.
//!
//! Every function takes a SeaORM connection (or transaction) and returns the
//! crate [`Result`](crate::errors::Result), so the same code backs the HTTP
//! handlers, startup seeding and the tests.

/// Active-only employee service (list, get, save, update, deactivate)
pub mod employee;
/// Status-filtered queries and insert-or-update persistence
pub mod store;
