//! Domain vocabulary shared across the runbook workspace.
//!
//! No database dependency lives here; the sqlx data layer is in
//! `runbook-db`.

pub mod error;
pub mod sorting;
pub mod types;

pub use error::CoreError;
